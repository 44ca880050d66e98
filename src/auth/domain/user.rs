//! User record for registration and credential verification.

use super::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::fmt;

/// Persisted user record.
///
/// The password hash is reachable only through [`User::password_hash`] for
/// credential verification; the record carries no serialisation support so
/// the hash can never leak into a response body, and the [`fmt::Debug`]
/// implementation redacts it.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    email: String,
    name: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user record with a freshly assigned identifier.
    ///
    /// The caller supplies an already-hashed password; plaintext never
    /// reaches the domain.
    #[must_use]
    pub fn new(
        email: impl Into<String>,
        name: impl Into<String>,
        password_hash: impl Into<String>,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: UserId::new(),
            email: email.into(),
            name: name.into(),
            password_hash: password_hash.into(),
            created_at: clock.utc(),
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the login email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the stored password hash.
    #[must_use]
    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("name", &self.name)
            .field("password_hash", &"<redacted>")
            .field("created_at", &self.created_at)
            .finish()
    }
}
