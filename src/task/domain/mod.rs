//! Domain model for task tracking.
//!
//! Tasks carry a free-form name, a plain status label, an optional owning
//! project reference, and a creation timestamp. Status transitions are
//! deliberately unconstrained: the status field is a label, not a workflow
//! engine.

mod error;
mod ids;
mod ordering;
mod task;
mod view;

pub use error::{ParseSortKeyError, ParseTaskStatusError};
pub use ids::{ParseTaskIdError, TaskId};
pub use ordering::{SortOrder, TaskSortKey};
pub use task::{Task, TaskChanges, TaskStatus};
pub use view::TaskView;
