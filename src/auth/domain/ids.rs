//! Identifier types for the identity domain.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier for a user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Creates a new random user identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a user identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parses an untrusted identifier string.
    ///
    /// # Errors
    ///
    /// Returns [`ParseUserIdError`] when the value is not a valid UUID.
    pub fn parse(value: &str) -> Result<Self, ParseUserIdError> {
        Uuid::parse_str(value.trim())
            .map(Self)
            .map_err(|_| ParseUserIdError(value.to_owned()))
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned while parsing user identifiers from untrusted input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid user identifier: {0}")]
pub struct ParseUserIdError(pub String);
