//! The error delivered to a loader's delegate.
//!
//! A load cycle reports exactly one [`LoadError`] on failure. When several
//! providers were tried, the failures are kept in attempt order and the last
//! one is exposed as the error's `source()`.

use std::fmt;

use super::build::BuildError;
use super::category::ErrorCategory;
use super::provider::ProviderError;
use crate::models::{ConnectivityState, ContentSource};

/// Why a load cycle did not produce a view model.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadError {
    /// A content provider failed to supply content.
    ProviderFailure {
        origin: ContentSource,
        error: ProviderError,
    },

    /// Content arrived but could not be built into a view model.
    BuilderFailure {
        origin: ContentSource,
        error: BuildError,
    },

    /// Every applicable provider was exhausted without success.
    ///
    /// `attempts` is empty when the policy left nothing to try (for example a
    /// remote-only feature while offline).
    NoViewModelProduced {
        connectivity: ConnectivityState,
        attempts: Vec<LoadError>,
    },

    /// The load cycle was torn down before it could finish.
    Cancelled,
}

impl LoadError {
    pub fn provider(origin: ContentSource, error: ProviderError) -> Self {
        LoadError::ProviderFailure { origin, error }
    }

    pub fn builder(origin: ContentSource, error: BuildError) -> Self {
        LoadError::BuilderFailure { origin, error }
    }

    /// Combine the failures of one load attempt into a single error.
    ///
    /// A single failure is reported as-is; several are wrapped so that the
    /// last one becomes the cause.
    pub fn exhausted(connectivity: ConnectivityState, mut attempts: Vec<LoadError>) -> Self {
        if attempts.len() == 1 {
            if let Some(only) = attempts.pop() {
                return only;
            }
        }
        LoadError::NoViewModelProduced {
            connectivity,
            attempts,
        }
    }

    /// The provider role this error came from, if it came from one.
    pub fn origin(&self) -> Option<ContentSource> {
        match self {
            LoadError::ProviderFailure { origin, .. } | LoadError::BuilderFailure { origin, .. } => {
                Some(*origin)
            }
            LoadError::NoViewModelProduced { attempts, .. } => {
                attempts.last().and_then(LoadError::origin)
            }
            LoadError::Cancelled => None,
        }
    }

    /// The failure encountered last, following wrapped attempts.
    pub fn last_failure(&self) -> &LoadError {
        match self {
            LoadError::NoViewModelProduced { attempts, .. } => match attempts.last() {
                Some(last) => last.last_failure(),
                None => self,
            },
            _ => self,
        }
    }

    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            LoadError::ProviderFailure { error, .. } => match error {
                ProviderError::Panicked(_) => ErrorCategory::Client,
                ProviderError::NotFound | ProviderError::Io(_) => ErrorCategory::Content,
                ProviderError::Http { status, .. } if *status < 500 && *status != 429 && *status != 408 => {
                    ErrorCategory::Content
                }
                _ => ErrorCategory::Network,
            },
            LoadError::BuilderFailure { error, .. } => match error {
                BuildError::Panicked(_) => ErrorCategory::Client,
                _ => ErrorCategory::Content,
            },
            LoadError::NoViewModelProduced {
                connectivity,
                attempts,
            } => match attempts.last() {
                Some(last) => last.category(),
                None if !connectivity.is_online() => ErrorCategory::Network,
                None => ErrorCategory::Content,
            },
            LoadError::Cancelled => ErrorCategory::Cancelled,
        }
    }

    /// Check if calling `load_view_model` again may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            LoadError::ProviderFailure { error, .. } => error.is_retryable(),
            LoadError::BuilderFailure { .. } => false,
            LoadError::NoViewModelProduced { attempts, .. } => {
                attempts.is_empty() || attempts.iter().any(LoadError::is_retryable)
            }
            LoadError::Cancelled => true,
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            LoadError::ProviderFailure { error, .. } => error.error_code(),
            LoadError::BuilderFailure { error, .. } => error.error_code(),
            LoadError::NoViewModelProduced { .. } => "E_LOAD_EXHAUSTED",
            LoadError::Cancelled => "E_LOAD_CANCELLED",
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        let category = self.category();
        format!("{}. {}.", category.description(), category.recovery_hint())
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::ProviderFailure { origin, error } => {
                write!(f, "{} content provider failed: {}", origin, error)
            }
            LoadError::BuilderFailure { origin, error } => {
                write!(f, "could not build view model from {} content: {}", origin, error)
            }
            LoadError::NoViewModelProduced {
                connectivity,
                attempts,
            } => {
                if attempts.is_empty() {
                    write!(f, "no content provider applicable while {}", connectivity)
                } else {
                    write!(
                        f,
                        "no view model produced while {} after {} failed attempts",
                        connectivity,
                        attempts.len()
                    )
                }
            }
            LoadError::Cancelled => write!(f, "load cancelled before completion"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::ProviderFailure { error, .. } => Some(error),
            LoadError::BuilderFailure { error, .. } => Some(error),
            LoadError::NoViewModelProduced { attempts, .. } => {
                attempts.last().map(|e| e as &(dyn std::error::Error + 'static))
            }
            LoadError::Cancelled => None,
        }
    }
}
