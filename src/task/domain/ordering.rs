//! Sort vocabulary for task queries.

use super::ParseSortKeyError;
use serde::{Deserialize, Serialize};

/// Field a task query sorts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaskSortKey {
    /// Sort on the creation timestamp (the default).
    #[default]
    CreatedAt,
    /// Sort on the status label.
    Status,
    /// Sort on the owning project reference.
    ProjectId,
}

impl TaskSortKey {
    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreatedAt => "createdAt",
            Self::Status => "status",
            Self::ProjectId => "projectId",
        }
    }
}

impl TryFrom<&str> for TaskSortKey {
    type Error = ParseSortKeyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "createdAt" => Ok(Self::CreatedAt),
            "status" => Ok(Self::Status),
            "projectId" => Ok(Self::ProjectId),
            _ => Err(ParseSortKeyError(value.to_owned())),
        }
    }
}

/// Direction a task query sorts in.
///
/// Descending is the default: task listings show the newest records first
/// unless the caller asks otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending order.
    Asc,
    /// Descending order (the default).
    #[default]
    Desc,
}

impl SortOrder {
    /// Resolves an optional wire parameter: `"asc"` sorts ascending,
    /// anything else (including absence) descending.
    #[must_use]
    pub fn from_param(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("asc") => Self::Asc,
            _ => Self::Desc,
        }
    }
}
