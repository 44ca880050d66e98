//! Task record, status label, and partial-update value.

use super::{ParseTaskStatusError, TaskId};
use crate::project::domain::ProjectId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task status label.
///
/// Transitions are free in any direction and attach no side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Work has not started (the default for new tasks).
    #[default]
    Todo,
    /// Work is underway.
    InProgress,
    /// Work is finished.
    Done,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::Done => "done",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "todo" => Ok(Self::Todo),
            "in_progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// Persisted task record.
///
/// The owning project reference is either absent or was valid at the moment
/// it was written; it is not re-validated on read, so a later project
/// deletion may leave it dangling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    name: String,
    status: TaskStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    project_id: Option<ProjectId>,
    created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task record with a freshly assigned identifier.
    ///
    /// The caller has already resolved `project_id` against the project
    /// store; an invalid reference never reaches this constructor.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        status: TaskStatus,
        project_id: Option<ProjectId>,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: TaskId::new(),
            name: name.into(),
            status,
            project_id,
            created_at: clock.utc(),
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the status label.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the owning project reference, if any.
    #[must_use]
    pub const fn project_id(&self) -> Option<ProjectId> {
        self.project_id
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Applies a partial update in place.
    ///
    /// Identifier and creation timestamp are immutable; a tri-state
    /// project reference distinguishes "leave untouched" from "clear".
    pub fn apply_changes(&mut self, changes: &TaskChanges) {
        if let Some(name) = &changes.name {
            self.name = name.clone();
        }
        if let Some(status) = changes.status {
            self.status = status;
        }
        if let Some(project_ref) = changes.project_ref {
            self.project_id = project_ref;
        }
    }
}

/// Partial update over a task record.
///
/// Every field is optional; an absent field leaves the stored value
/// untouched. The project reference is doubly optional: `Some(None)` clears
/// it, `Some(Some(id))` replaces it with an already-validated reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskChanges {
    /// Replacement name, when present.
    pub name: Option<String>,
    /// Replacement status, when present.
    pub status: Option<TaskStatus>,
    /// Tri-state project reference: absent = unchanged, `Some(None)` =
    /// cleared, `Some(Some(id))` = replaced.
    pub project_ref: Option<Option<ProjectId>>,
}
