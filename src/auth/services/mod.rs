//! Service layer for credential verification and session tokens.

mod credentials;
mod tokens;

pub use credentials::{
    AuthSession, CredentialError, CredentialResult, CredentialService, LoginRequest,
    RegisterRequest,
};
pub use tokens::{TokenError, TokenSigner};
