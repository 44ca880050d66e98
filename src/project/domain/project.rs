//! Project record and its read-time summary projection.

use super::ProjectId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::Serialize;

/// Persisted project record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    id: ProjectId,
    name: String,
    created_at: DateTime<Utc>,
}

impl Project {
    /// Creates a new project record with a freshly assigned identifier.
    #[must_use]
    pub fn new(name: impl Into<String>, clock: &impl Clock) -> Self {
        Self {
            id: ProjectId::new(),
            name: name.into(),
            created_at: clock.utc(),
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the project name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Denormalised `{id, name}` projection attached to task views at read
/// time. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    id: ProjectId,
    name: String,
}

impl ProjectSummary {
    /// Builds the summary of a project record.
    #[must_use]
    pub fn of(project: &Project) -> Self {
        Self {
            id: project.id(),
            name: project.name().to_owned(),
        }
    }

    /// Returns the summarised project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the summarised project name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
