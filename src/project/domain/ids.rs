//! Identifier types for the project domain.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier for a project record.
///
/// Syntactic validity of untrusted identifier strings is UUID
/// parseability; [`ProjectId::parse`] is the single place that check
/// happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(Uuid);

impl ProjectId {
    /// Creates a new random project identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a project identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parses an untrusted identifier string.
    ///
    /// # Errors
    ///
    /// Returns [`ParseProjectIdError`] when the value is not a valid UUID.
    pub fn parse(value: &str) -> Result<Self, ParseProjectIdError> {
        Uuid::parse_str(value.trim())
            .map(Self)
            .map_err(|_| ParseProjectIdError(value.to_owned()))
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for ProjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned while parsing project identifiers from untrusted input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid project identifier: {0}")]
pub struct ParseProjectIdError(pub String);
