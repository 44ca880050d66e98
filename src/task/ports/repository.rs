//! Repository port for task persistence, filtered queries, and keyed
//! update/delete.

use crate::project::domain::ProjectId;
use crate::task::domain::{SortOrder, Task, TaskChanges, TaskId, TaskSortKey, TaskStatus};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Typed filter-and-sort predicate consumed by the store.
///
/// Built by the query service from validated filter input; the store never
/// sees untrusted strings. Absent fields impose no constraint, and the
/// timestamp bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskQuery {
    /// Exact status match, when present.
    pub status: Option<TaskStatus>,
    /// Exact owning-project match, when present.
    pub project_id: Option<ProjectId>,
    /// Inclusive lower bound on the creation timestamp.
    pub created_from: Option<DateTime<Utc>>,
    /// Inclusive upper bound on the creation timestamp.
    pub created_to: Option<DateTime<Utc>>,
    /// Sort key.
    pub sort_by: TaskSortKey,
    /// Sort direction.
    pub sort_order: SortOrder,
}

/// Task store contract.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID
    /// already exists.
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns the tasks matching the query, sorted as it specifies.
    async fn find_filtered(&self, query: &TaskQuery) -> TaskRepositoryResult<Vec<Task>>;

    /// Applies a partial update to the task with the given identifier.
    ///
    /// Returns the post-update record, or `None` when no such task exists.
    async fn update_by_id(
        &self,
        id: TaskId,
        changes: &TaskChanges,
    ) -> TaskRepositoryResult<Option<Task>>;

    /// Deletes the task with the given identifier.
    ///
    /// Returns the record as it existed immediately before deletion, or
    /// `None` when no such task exists.
    async fn delete_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
