//! Error taxonomy and presentation.
//!
//! Five classes cover every fault the service can surface: Conflict
//! (duplicate unique key), Unauthorized (missing or invalid credentials),
//! NotFound (an identifier that does not resolve), BadRequest (malformed
//! input the core itself parses), and Internal (anything unanticipated).
//! Presentation maps a class to a status code and, in development mode
//! only, attaches a diagnostic trace.

use crate::auth::ports::UserRepositoryError;
use crate::auth::services::{CredentialError, TokenError};
use crate::config::Environment;
use crate::project::services::CatalogueError;
use crate::task::services::TaskQueryError;
use serde::Serialize;
use thiserror::Error;

/// Fault class, fixing the response status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// Malformed input (400).
    BadRequest,
    /// Missing or invalid credentials (401).
    Unauthorized,
    /// A referenced record does not resolve (404).
    NotFound,
    /// Duplicate unique key (409).
    Conflict,
    /// Unanticipated fault (500).
    Internal,
}

impl ApiErrorKind {
    /// Returns the HTTP status code for this class.
    #[must_use]
    pub const fn status_code(self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::Unauthorized => 401,
            Self::NotFound => 404,
            Self::Conflict => 409,
            Self::Internal => 500,
        }
    }
}

/// Boundary-level error: a fault class plus its caller-facing message.
///
/// `detail` carries the underlying error chain for unanticipated faults;
/// it is only ever exposed through a development-mode trace.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiError {
    kind: ApiErrorKind,
    message: String,
    detail: Option<String>,
}

impl ApiError {
    /// Creates a BadRequest error.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::BadRequest,
            message: message.into(),
            detail: None,
        }
    }

    /// Creates an Unauthorized error.
    #[must_use]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Unauthorized,
            message: message.into(),
            detail: None,
        }
    }

    /// Creates a NotFound error.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::NotFound,
            message: message.into(),
            detail: None,
        }
    }

    /// Creates a Conflict error.
    #[must_use]
    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Conflict,
            message: message.into(),
            detail: None,
        }
    }

    /// Creates an Internal error with a generic message and the underlying
    /// detail kept aside for development-mode traces.
    #[must_use]
    pub fn internal(detail: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Internal,
            message: "Internal server error".to_owned(),
            detail: Some(detail.into()),
        }
    }

    /// Returns the fault class.
    #[must_use]
    pub const fn kind(&self) -> ApiErrorKind {
        self.kind
    }

    /// Returns the caller-facing message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the suppressed detail, if any.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }
}

/// Renders the full source chain of an error for diagnostics.
fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        rendered.push_str(": ");
        rendered.push_str(&cause.to_string());
        source = cause.source();
    }
    rendered
}

impl From<CredentialError> for ApiError {
    fn from(err: CredentialError) -> Self {
        match err {
            CredentialError::EmailTaken => Self::conflict(err.to_string()),
            CredentialError::InvalidCredentials => Self::unauthorized(err.to_string()),
            CredentialError::Token(TokenError::Invalid | TokenError::Expired) => {
                Self::unauthorized("Unauthorized")
            }
            CredentialError::Hashing(_)
            | CredentialError::Token(TokenError::Encoding(_))
            | CredentialError::Repository(_) => Self::internal(error_chain(&err)),
        }
    }
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Invalid | TokenError::Expired => Self::unauthorized("Unauthorized"),
            TokenError::Encoding(_) => Self::internal(error_chain(&err)),
        }
    }
}

impl From<TaskQueryError> for ApiError {
    fn from(err: TaskQueryError) -> Self {
        match err {
            TaskQueryError::ProjectNotFound => Self::not_found(err.to_string()),
            TaskQueryError::InvalidDate { .. } => Self::bad_request(err.to_string()),
            TaskQueryError::Tasks(_) | TaskQueryError::Projects(_) => {
                Self::internal(error_chain(&err))
            }
        }
    }
}

impl From<CatalogueError> for ApiError {
    fn from(err: CatalogueError) -> Self {
        Self::internal(error_chain(&err))
    }
}

impl From<UserRepositoryError> for ApiError {
    fn from(err: UserRepositoryError) -> Self {
        Self::internal(error_chain(&err))
    }
}

/// Response body for a presented error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    /// HTTP status code of the fault class.
    pub status_code: u16,
    /// Caller-facing message.
    pub message: String,
    /// Diagnostic trace; present only in development mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,
}

/// Renders boundary errors according to the operating environment.
#[derive(Debug, Clone, Copy)]
pub struct ErrorPresenter {
    environment: Environment,
}

impl ErrorPresenter {
    /// Creates a presenter for the given environment.
    #[must_use]
    pub const fn new(environment: Environment) -> Self {
        Self { environment }
    }

    /// Renders an error into a response body.
    ///
    /// Development mode attaches the suppressed detail (falling back to the
    /// message) as a trace; production exposes the message alone.
    #[must_use]
    pub fn present(&self, error: &ApiError) -> ErrorBody {
        let trace = self.environment.exposes_traces().then(|| {
            error
                .detail()
                .map_or_else(|| error.message().to_owned(), str::to_owned)
        });
        ErrorBody {
            status_code: error.kind().status_code(),
            message: error.message().to_owned(),
            trace,
        }
    }
}
