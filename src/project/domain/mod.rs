//! Domain model for the project catalogue.

mod ids;
mod project;

pub use ids::{ParseProjectIdError, ProjectId};
pub use project::{Project, ProjectSummary};
