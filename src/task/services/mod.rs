//! Service layer for task querying and project association.

mod query;

pub use query::{
    CreateTaskRequest, TaskFilter, TaskQueryError, TaskQueryResult, TaskQueryService,
    UpdateTaskRequest,
};
