//! Repository port for user persistence and email lookup.

use crate::auth::domain::User;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for user repository operations.
pub type UserRepositoryResult<T> = Result<T, UserRepositoryError>;

/// Identity store contract.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Stores a new user.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::DuplicateEmail`] when a user with the
    /// same email already exists. The service checks first; this constraint
    /// is the store-level backstop.
    async fn store(&self, user: &User) -> UserRepositoryResult<()>;

    /// Finds a user by login email (exact, case-sensitive match).
    ///
    /// Returns `None` when no user has that email.
    async fn find_by_email(&self, email: &str) -> UserRepositoryResult<Option<User>>;
}

/// Errors returned by user repository implementations.
#[derive(Debug, Clone, Error)]
pub enum UserRepositoryError {
    /// A user with the same email already exists.
    #[error("duplicate user email: {0}")]
    DuplicateEmail(String),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl UserRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
