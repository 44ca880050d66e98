//! Read-time projection of a task with its resolved project summary.

use super::Task;
use crate::project::domain::ProjectSummary;
use serde::Serialize;

/// A task enriched with its owning project's summary.
///
/// Built at read time, never persisted. `project` serialises as `null` when
/// the task has no reference or the reference no longer resolves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskView {
    #[serde(flatten)]
    task: Task,
    project: Option<ProjectSummary>,
}

impl TaskView {
    /// Builds a view from a task and its resolved summary, if any.
    #[must_use]
    pub const fn new(task: Task, project: Option<ProjectSummary>) -> Self {
        Self { task, project }
    }

    /// Returns the underlying task record.
    #[must_use]
    pub const fn task(&self) -> &Task {
        &self.task
    }

    /// Returns the resolved project summary, if any.
    #[must_use]
    pub const fn project(&self) -> Option<&ProjectSummary> {
        self.project.as_ref()
    }
}
