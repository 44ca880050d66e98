//! Integration tests for the registration, login, and bearer-auth flow.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::{fixture, rstest};
use taskdeck::auth::{
    adapters::memory::InMemoryUserRepository,
    services::{CredentialService, TokenSigner},
};
use taskdeck::boundary::{
    bearer,
    error::{ApiError, ApiErrorKind, ErrorPresenter},
    validate::{LoginPayload, RegisterPayload},
};
use taskdeck::config::{Environment, TokenConfig};

type TestService = CredentialService<InMemoryUserRepository, DefaultClock>;

struct Harness {
    service: TestService,
    signer: Arc<TokenSigner>,
}

#[fixture]
fn harness() -> Harness {
    let signer = Arc::new(TokenSigner::new(&TokenConfig::new("integration-secret")));
    let service = CredentialService::new(
        Arc::new(InMemoryUserRepository::new()),
        Arc::clone(&signer),
        Arc::new(DefaultClock),
    );
    Harness { service, signer }
}

fn register_payload(email: &str) -> RegisterPayload {
    RegisterPayload {
        email: email.to_owned(),
        password: "hunter2-long-enough".to_owned(),
        name: "Test User".to_owned(),
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn register_then_login_issues_usable_bearer_tokens(harness: Harness) {
    let request = register_payload("user@example.com")
        .validate()
        .expect("payload should validate");
    let registered = harness
        .service
        .register(request)
        .await
        .expect("registration should succeed");
    assert_eq!(registered.email(), "user@example.com");
    assert_eq!(registered.name(), "Test User");

    let login = LoginPayload {
        email: "user@example.com".to_owned(),
        password: "hunter2-long-enough".to_owned(),
    }
    .validate()
    .expect("payload should validate");
    let session = harness
        .service
        .login(login)
        .await
        .expect("login should succeed");
    assert_eq!(session.id(), registered.id());

    let header = format!("Bearer {}", session.token());
    let caller = bearer::authenticate(Some(&header), &harness.signer)
        .expect("bearer authentication should succeed");
    assert_eq!(caller.user_id(), registered.id());
    assert_eq!(caller.email(), "user@example.com");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_registration_presents_as_conflict(harness: Harness) {
    let first = register_payload("user@example.com")
        .validate()
        .expect("payload should validate");
    harness
        .service
        .register(first)
        .await
        .expect("registration should succeed");

    let second = register_payload("user@example.com")
        .validate()
        .expect("payload should validate");
    let err = harness
        .service
        .register(second)
        .await
        .expect_err("duplicate registration should fail");

    let api_err = ApiError::from(err);
    assert_eq!(api_err.kind(), ApiErrorKind::Conflict);
    assert_eq!(api_err.message(), "User with this email already exists");

    let body = ErrorPresenter::new(Environment::Production).present(&api_err);
    assert_eq!(body.status_code, 409);
    assert!(body.trace.is_none());
}

#[rstest]
#[case::unknown_email("stranger@example.com", "hunter2-long-enough")]
#[case::wrong_password("user@example.com", "not-the-password")]
#[tokio::test(flavor = "multi_thread")]
async fn failed_logins_present_identically(
    harness: Harness,
    #[case] email: &str,
    #[case] password: &str,
) {
    let request = register_payload("user@example.com")
        .validate()
        .expect("payload should validate");
    harness
        .service
        .register(request)
        .await
        .expect("registration should succeed");

    let login = LoginPayload {
        email: email.to_owned(),
        password: password.to_owned(),
    }
    .validate()
    .expect("payload should validate");
    let err = harness
        .service
        .login(login)
        .await
        .expect_err("login should fail");

    let api_err = ApiError::from(err);
    assert_eq!(api_err.kind(), ApiErrorKind::Unauthorized);
    assert_eq!(api_err.message(), "Invalid credentials");
}

#[rstest]
#[case::missing_header(None)]
#[case::wrong_scheme(Some("Basic dXNlcjpwYXNz"))]
#[case::blank_token(Some("Bearer   "))]
#[case::garbage_token(Some("Bearer not.a.token"))]
#[tokio::test(flavor = "multi_thread")]
async fn bearer_rejections_present_as_unauthorized(harness: Harness, #[case] header: Option<&str>) {
    let err = bearer::authenticate(header, &harness.signer)
        .expect_err("authentication should fail");

    assert_eq!(err.kind(), ApiErrorKind::Unauthorized);
    assert_eq!(err.message(), "Unauthorized");
    assert_eq!(err.kind().status_code(), 401);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tokens_do_not_verify_against_another_deployment(harness: Harness) {
    let request = register_payload("user@example.com")
        .validate()
        .expect("payload should validate");
    let session = harness
        .service
        .register(request)
        .await
        .expect("registration should succeed");

    let other_signer = TokenSigner::new(&TokenConfig::new("a-different-secret"));
    let header = format!("Bearer {}", session.token());
    let err = bearer::authenticate(Some(&header), &other_signer)
        .expect_err("verification should fail");
    assert_eq!(err.kind(), ApiErrorKind::Unauthorized);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn session_serialises_without_password_material(harness: Harness) {
    let request = register_payload("user@example.com")
        .validate()
        .expect("payload should validate");
    let session = harness
        .service
        .register(request)
        .await
        .expect("registration should succeed");

    let value = serde_json::to_value(&session).expect("session should serialise");
    let object = value.as_object().expect("session serialises to an object");
    for key in ["id", "email", "name", "token"] {
        assert!(object.contains_key(key), "missing key {key}");
    }
    assert!(!object.contains_key("password"));
    assert!(!object.contains_key("passwordHash"));
}
