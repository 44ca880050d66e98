//! Registration and login over the identity store.

use crate::auth::{
    domain::{User, UserId},
    ports::{UserRepository, UserRepositoryError},
    services::tokens::{TokenError, TokenSigner},
};
use mockable::Clock;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

/// Fixed bcrypt work factor for password hashing.
///
/// Asymmetric cost: expensive to compute, cheap to verify-compare, so an
/// exfiltrated store resists offline brute force.
const BCRYPT_COST: u32 = 10;

/// Request payload for registering a new user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterRequest {
    email: String,
    password: String,
    name: String,
}

impl RegisterRequest {
    /// Creates a registration request.
    #[must_use]
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            name: name.into(),
        }
    }
}

/// Request payload for logging in with email and password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRequest {
    email: String,
    password: String,
}

impl LoginRequest {
    /// Creates a login request.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Successful authentication outcome: the user's public fields plus a
/// freshly issued session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    id: UserId,
    email: String,
    name: String,
    token: String,
}

impl AuthSession {
    fn of(user: &User, token: String) -> Self {
        Self {
            id: user.id(),
            email: user.email().to_owned(),
            name: user.name().to_owned(),
            token,
        }
    }

    /// Returns the authenticated user's identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the authenticated user's email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the authenticated user's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the issued session token.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}

/// Service-level errors for credential operations.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// A user with the requested email already exists.
    #[error("User with this email already exists")]
    EmailTaken,

    /// Unknown email or wrong password.
    ///
    /// Deliberately a single variant: responses must not reveal which of
    /// the two failed (account enumeration).
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Password hashing or verification failed.
    #[error("password hashing failed")]
    Hashing(#[source] bcrypt::BcryptError),

    /// Token issuance failed.
    #[error(transparent)]
    Token(#[from] TokenError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] UserRepositoryError),
}

/// Result type for credential service operations.
pub type CredentialResult<T> = Result<T, CredentialError>;

/// Credential verification and session issuance service.
///
/// Owns no state beyond its injected collaborators; every operation is a
/// request-scoped transformation over the identity store.
#[derive(Clone)]
pub struct CredentialService<R, C>
where
    R: UserRepository,
    C: Clock + Send + Sync,
{
    users: Arc<R>,
    signer: Arc<TokenSigner>,
    clock: Arc<C>,
}

impl<R, C> CredentialService<R, C>
where
    R: UserRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new credential service.
    #[must_use]
    pub const fn new(users: Arc<R>, signer: Arc<TokenSigner>, clock: Arc<C>) -> Self {
        Self {
            users,
            signer,
            clock,
        }
    }

    /// Registers a new user and issues a session token.
    ///
    /// The plaintext password is hashed before storage and never persisted
    /// or logged.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::EmailTaken`] when the email is already
    /// registered (no state change), or a hashing/token/repository error.
    pub async fn register(&self, request: RegisterRequest) -> CredentialResult<AuthSession> {
        if self.users.find_by_email(&request.email).await?.is_some() {
            return Err(CredentialError::EmailTaken);
        }

        let password_hash =
            bcrypt::hash(&request.password, BCRYPT_COST).map_err(CredentialError::Hashing)?;
        let user = User::new(request.email, request.name, password_hash, &*self.clock);
        self.users.store(&user).await?;

        let token = self.signer.issue(user.id(), user.email(), self.clock.utc())?;
        Ok(AuthSession::of(&user, token))
    }

    /// Verifies login credentials and issues a session token.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::InvalidCredentials`] for an unknown email
    /// and for a wrong password alike, or a hashing/token/repository error.
    pub async fn login(&self, request: LoginRequest) -> CredentialResult<AuthSession> {
        let user = self
            .users
            .find_by_email(&request.email)
            .await?
            .ok_or(CredentialError::InvalidCredentials)?;

        let verified = bcrypt::verify(&request.password, user.password_hash())
            .map_err(CredentialError::Hashing)?;
        if !verified {
            return Err(CredentialError::InvalidCredentials);
        }

        let token = self.signer.issue(user.id(), user.email(), self.clock.utc())?;
        Ok(AuthSession::of(&user, token))
    }
}
