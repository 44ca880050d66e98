//! In-memory task repository evaluating the filter-and-sort query natively.

use async_trait::async_trait;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::project::domain::ProjectId;
use crate::task::{
    domain::{SortOrder, Task, TaskChanges, TaskId, TaskSortKey},
    ports::{TaskQuery, TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<HashMap<TaskId, Task>>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches(task: &Task, query: &TaskQuery) -> bool {
    if let Some(status) = query.status {
        if task.status() != status {
            return false;
        }
    }
    if let Some(project_id) = query.project_id {
        if task.project_id() != Some(project_id) {
            return false;
        }
    }
    if let Some(from) = query.created_from {
        if task.created_at() < from {
            return false;
        }
    }
    if let Some(to) = query.created_to {
        if task.created_at() > to {
            return false;
        }
    }
    true
}

/// Orders two tasks under the query's sort key and direction.
///
/// Ties break on creation timestamp then identifier so results are
/// deterministic regardless of map iteration order. An absent project
/// reference sorts before any present one in ascending order.
fn compare(a: &Task, b: &Task, query: &TaskQuery) -> Ordering {
    let keyed = match query.sort_by {
        TaskSortKey::CreatedAt => a.created_at().cmp(&b.created_at()),
        TaskSortKey::Status => a.status().as_str().cmp(b.status().as_str()),
        TaskSortKey::ProjectId => a
            .project_id()
            .map(ProjectId::into_inner)
            .cmp(&b.project_id().map(ProjectId::into_inner)),
    };
    let directed = match query.sort_order {
        SortOrder::Asc => keyed,
        SortOrder::Desc => keyed.reverse(),
    };
    directed
        .then_with(|| a.created_at().cmp(&b.created_at()))
        .then_with(|| a.id().into_inner().cmp(&b.id().into_inner()))
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }
        state.insert(task.id(), task.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.get(&id).cloned())
    }

    async fn find_filtered(&self, query: &TaskQuery) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut tasks: Vec<Task> = state
            .values()
            .filter(|task| matches(task, query))
            .cloned()
            .collect();
        tasks.sort_by(|a, b| compare(a, b, query));
        Ok(tasks)
    }

    async fn update_by_id(
        &self,
        id: TaskId,
        changes: &TaskChanges,
    ) -> TaskRepositoryResult<Option<Task>> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.get_mut(&id).map(|task| {
            task.apply_changes(changes);
            task.clone()
        }))
    }

    async fn delete_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.remove(&id))
    }
}
