//! Error category classification for load failures.
//!
//! Categories let callers decide whether calling `load_view_model` again is
//! worthwhile without matching on every error variant.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Connectivity, timeouts, 5xx responses.
    /// Generally transient and retryable.
    Network,

    /// Content is missing or could not be turned into a view model.
    /// Not retryable until the content changes.
    Content,

    /// A provider, builder or observer misbehaved (panicked).
    /// Not retryable - indicates a programming error.
    Client,

    /// The load cycle was torn down before it finished.
    Cancelled,
}

impl ErrorCategory {
    /// Returns true if errors in this category are generally transient
    /// and the operation can be retried.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCategory::Network | ErrorCategory::Cancelled)
    }

    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Content => "content",
            ErrorCategory::Client => "client",
            ErrorCategory::Cancelled => "cancelled",
        }
    }

    /// Returns a user-friendly description of the category.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Network connectivity issue",
            ErrorCategory::Content => "Content problem",
            ErrorCategory::Client => "Application error",
            ErrorCategory::Cancelled => "Loading was interrupted",
        }
    }

    /// Returns suggested recovery actions for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Check your internet connection and try again",
            ErrorCategory::Content => "The content for this view is unavailable right now",
            ErrorCategory::Client => "This may be a bug. Please report this issue if it persists",
            ErrorCategory::Cancelled => "Try loading the view again",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
