//! Stateless session token issuance and verification.
//!
//! Tokens are HS256-signed JWTs carrying `(user identifier, email)` plus
//! issue and expiry timestamps. No server-side session record exists: a
//! token is valid exactly when its signature matches the service key and it
//! has not expired.

use crate::auth::domain::{AuthenticatedUser, Claims, UserId};
use crate::config::TokenConfig;
use chrono::{DateTime, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use thiserror::Error;

/// Errors raised while issuing or verifying session tokens.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The token signature or structure is invalid.
    #[error("invalid session token")]
    Invalid,

    /// The token expiry timestamp has passed.
    #[error("expired session token")]
    Expired,

    /// Token encoding failed.
    #[error("token encoding failed")]
    Encoding(#[source] jsonwebtoken::errors::Error),
}

/// Issues and verifies signed session tokens.
pub struct TokenSigner {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl_secs: i64,
}

impl TokenSigner {
    /// Creates a signer from explicit token configuration.
    #[must_use]
    pub fn new(config: &TokenConfig) -> Self {
        Self {
            encoding: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
            ttl_secs: config.ttl_secs,
        }
    }

    /// Issues a token asserting the given identity, valid from `now` for the
    /// configured lifetime.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Encoding`] when claim serialisation fails.
    pub fn issue(
        &self,
        user_id: UserId,
        email: &str,
        now: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let iat = now.timestamp();
        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_owned(),
            iat,
            exp: iat + self.ttl_secs,
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(TokenError::Encoding)
    }

    /// Verifies a token and extracts the embedded identity.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Expired`] for an expired token and
    /// [`TokenError::Invalid`] for any other verification failure,
    /// including an unparseable subject identifier.
    pub fn verify(&self, token: &str) -> Result<AuthenticatedUser, TokenError> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation).map_err(|err| {
            match err.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            }
        })?;
        let user_id = UserId::parse(&data.claims.sub).map_err(|_| TokenError::Invalid)?;
        Ok(AuthenticatedUser::new(user_id, data.claims.email))
    }
}
