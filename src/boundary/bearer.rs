//! Bearer-token extraction in front of authenticated operations.
//!
//! Runs before any operation other than register/login; a missing or
//! invalid token short-circuits with Unauthorized without invoking the
//! core.

use crate::auth::domain::AuthenticatedUser;
use crate::auth::services::TokenSigner;
use crate::boundary::error::ApiError;

/// Extracts and verifies a bearer token from an `Authorization` header.
///
/// # Errors
///
/// Returns an Unauthorized [`ApiError`] when the header is absent, does
/// not use the `Bearer` scheme, or carries a token that fails
/// verification.
pub fn authenticate(
    header: Option<&str>,
    signer: &TokenSigner,
) -> Result<AuthenticatedUser, ApiError> {
    let token = header
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| ApiError::unauthorized("Unauthorized"))?;
    signer.verify(token).map_err(ApiError::from)
}
