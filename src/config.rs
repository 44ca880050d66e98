//! Explicit runtime configuration.
//!
//! Configuration is constructed once at startup and passed to the
//! collaborators that need it. There is no ambient registry: the operating
//! environment goes to the error presenter and the token settings go to the
//! token signer.

/// Operating mode of the service.
///
/// Controls only presentation concerns (diagnostic traces on unhandled
/// faults); no core behaviour branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Local development: error responses carry a diagnostic trace.
    #[default]
    Development,
    /// Production: diagnostic traces are suppressed.
    Production,
}

impl Environment {
    /// Resolves an environment from its conventional name.
    ///
    /// Anything other than `"production"` (case-insensitive) is treated as
    /// development, matching the permissive default of the deployment
    /// tooling this service runs under.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("production") {
            Self::Production
        } else {
            Self::Development
        }
    }

    /// Returns `true` when diagnostic traces should be exposed.
    #[must_use]
    pub const fn exposes_traces(self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Settings for session-token issuance and verification.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// Shared HMAC signing secret.
    pub secret: String,
    /// Token lifetime in seconds from the moment of issue.
    pub ttl_secs: i64,
}

impl TokenConfig {
    /// Default token lifetime: one hour.
    pub const DEFAULT_TTL_SECS: i64 = 3600;

    /// Creates a token configuration with the default lifetime.
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ttl_secs: Self::DEFAULT_TTL_SECS,
        }
    }

    /// Overrides the token lifetime.
    #[must_use]
    pub fn with_ttl_secs(mut self, ttl_secs: i64) -> Self {
        self.ttl_secs = ttl_secs;
        self
    }
}
