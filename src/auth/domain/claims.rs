//! Claims carried by signed session tokens.

use super::UserId;
use serde::{Deserialize, Serialize};

/// Wire-format claims embedded in a session token.
///
/// `sub` holds the user identifier, `iat` and `exp` are Unix timestamps in
/// seconds. Tokens are stateless: nothing here refers to server-side state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user identifier as a string.
    pub sub: String,
    /// Login email of the subject.
    pub email: String,
    /// Issued-at timestamp (Unix seconds).
    pub iat: i64,
    /// Expiry timestamp (Unix seconds).
    pub exp: i64,
}

/// Verified caller identity extracted from a valid session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatedUser {
    user_id: UserId,
    email: String,
}

impl AuthenticatedUser {
    /// Creates a verified identity.
    #[must_use]
    pub fn new(user_id: UserId, email: impl Into<String>) -> Self {
        Self {
            user_id,
            email: email.into(),
        }
    }

    /// Returns the caller's user identifier.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the caller's email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}
