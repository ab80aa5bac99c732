//! Shared provider error kinds, error value helpers, and failure classification.
//!
//! ```rust
//! use fbprovider::{FailureClass, ProviderError, classify_failure};
//!
//! let limited = ProviderError::rate_limited("quota exceeded").with_status(429);
//! assert_eq!(classify_failure(&limited), FailureClass::Transient);
//!
//! let auth = ProviderError::authentication("bad key").with_status(401);
//! assert_eq!(classify_failure(&auth), FailureClass::Permanent);
//! ```

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderErrorKind {
    Configuration,
    Authentication,
    RateLimited,
    Unavailable,
    InvalidRequest,
    Timeout,
    Transport,
    EmptyResponse,
    Exhausted,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderError {
    pub kind: ProviderErrorKind,
    pub message: String,
    pub status: Option<u16>,
}

impl ProviderError {
    pub fn new(kind: ProviderErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Configuration, message)
    }

    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Authentication, message)
    }

    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::RateLimited, message)
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Unavailable, message)
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::InvalidRequest, message)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Timeout, message)
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Transport, message)
    }

    pub fn empty_response(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::EmptyResponse, message)
    }

    pub fn exhausted(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Exhausted, message)
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Other, message)
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn is_configuration(&self) -> bool {
        self.kind == ProviderErrorKind::Configuration
    }

    pub fn is_transient(&self) -> bool {
        classify_failure(self) == FailureClass::Transient
    }
}

impl Display for ProviderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.status {
            Some(status) => write!(f, "{:?} [status={}]: {}", self.kind, status, self.message),
            None => write!(f, "{:?}: {}", self.kind, self.message),
        }
    }
}

impl Error for ProviderError {}

/// Whether a failed attempt may be retried on another credential/model combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    Transient,
    Permanent,
}

const TRANSIENT_STATUS_CODES: [u16; 2] = [429, 503];

const RATE_LIMIT_PHRASES: [&str; 4] = [
    "rate limit",
    "resource exhausted",
    "resource_exhausted",
    "overloaded",
];

/// Classifies a provider failure as transient (rate limit or overload) or permanent.
///
/// This is the only place the matching rule lives; the rotation loop consults it
/// and nothing else.
pub fn classify_failure(error: &ProviderError) -> FailureClass {
    if error
        .status
        .is_some_and(|status| TRANSIENT_STATUS_CODES.contains(&status))
    {
        return FailureClass::Transient;
    }

    if matches!(
        error.kind,
        ProviderErrorKind::RateLimited | ProviderErrorKind::Unavailable
    ) {
        return FailureClass::Transient;
    }

    let message = error.message.to_lowercase();
    if RATE_LIMIT_PHRASES
        .iter()
        .any(|phrase| message.contains(phrase))
    {
        return FailureClass::Transient;
    }

    FailureClass::Permanent
}
