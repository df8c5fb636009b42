//! Errors reported by content providers.

use std::time::Duration;

use crate::traits::HttpError;

/// Why a content provider could not supply a payload.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProviderError {
    /// Transport-level failure (connection refused, DNS, TLS)
    #[error("network error: {0}")]
    Network(String),

    /// Non-success HTTP status other than 404
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The provider did not complete in time
    #[error("timed out after {0:?}")]
    Timeout(Duration),

    /// The provider has no content for the request
    #[error("no content for this view")]
    NotFound,

    #[error("I/O error: {0}")]
    Io(String),

    /// The provider cannot serve requests right now (e.g. not configured)
    #[error("provider unavailable: {0}")]
    Unavailable(String),

    /// The provider panicked while fetching
    #[error("provider panicked: {0}")]
    Panicked(String),
}

impl ProviderError {
    /// Check if this error is likely transient and can be retried.
    pub fn is_retryable(&self) -> bool {
        match self {
            ProviderError::Network(_) => true,
            ProviderError::Timeout(_) => true,
            ProviderError::Http { status, .. } => *status >= 500 || *status == 429 || *status == 408,
            ProviderError::Unavailable(_) => true,
            ProviderError::NotFound => false,
            ProviderError::Io(_) => false,
            ProviderError::Panicked(_) => false,
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ProviderError::Network(_) => "E_PROVIDER_NET",
            ProviderError::Http { .. } => "E_PROVIDER_HTTP",
            ProviderError::Timeout(_) => "E_PROVIDER_TIMEOUT",
            ProviderError::NotFound => "E_PROVIDER_NOT_FOUND",
            ProviderError::Io(_) => "E_PROVIDER_IO",
            ProviderError::Unavailable(_) => "E_PROVIDER_UNAVAILABLE",
            ProviderError::Panicked(_) => "E_PROVIDER_PANIC",
        }
    }
}

impl From<std::io::Error> for ProviderError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => ProviderError::NotFound,
            _ => ProviderError::Io(err.to_string()),
        }
    }
}

impl From<HttpError> for ProviderError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::Connect(msg) => ProviderError::Network(msg),
            HttpError::Timeout(msg) => ProviderError::Network(format!("request timeout: {}", msg)),
            HttpError::InvalidUrl(msg) => ProviderError::Unavailable(format!("invalid URL: {}", msg)),
            HttpError::Other(msg) => ProviderError::Network(msg),
        }
    }
}
