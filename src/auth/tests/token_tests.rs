//! Token issuance and verification tests.

use crate::auth::{
    domain::UserId,
    services::{TokenError, TokenSigner},
};
use crate::config::TokenConfig;
use chrono::{Duration, Utc};
use rstest::{fixture, rstest};

#[fixture]
fn signer() -> TokenSigner {
    TokenSigner::new(&TokenConfig::new("test-signing-secret"))
}

#[rstest]
fn issue_then_verify_round_trips_identity(signer: TokenSigner) {
    let user_id = UserId::new();
    let token = signer
        .issue(user_id, "user@example.com", Utc::now())
        .expect("token issuance should succeed");

    let identity = signer.verify(&token).expect("token should verify");

    assert_eq!(identity.user_id(), user_id);
    assert_eq!(identity.email(), "user@example.com");
}

#[rstest]
fn verify_rejects_token_signed_with_other_secret(signer: TokenSigner) {
    let other = TokenSigner::new(&TokenConfig::new("a-different-secret"));
    let token = other
        .issue(UserId::new(), "user@example.com", Utc::now())
        .expect("token issuance should succeed");

    assert!(matches!(signer.verify(&token), Err(TokenError::Invalid)));
}

#[rstest]
fn verify_rejects_expired_token(signer: TokenSigner) {
    // Issued two hours ago with a one-hour lifetime: expired even after the
    // verifier's default leeway.
    let issued_at = Utc::now() - Duration::hours(2);
    let token = signer
        .issue(UserId::new(), "user@example.com", issued_at)
        .expect("token issuance should succeed");

    assert!(matches!(signer.verify(&token), Err(TokenError::Expired)));
}

#[rstest]
fn verify_rejects_garbage(signer: TokenSigner) {
    assert!(matches!(
        signer.verify("not-a-token"),
        Err(TokenError::Invalid)
    ));
}
