//! Errors reported by view-model builders.

/// Why a payload could not be turned into a view model.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BuildError {
    #[error("payload is empty")]
    EmptyPayload,

    /// The payload is not in the expected format
    #[error("malformed payload: {0}")]
    Malformed(String),

    /// The payload parsed but describes an unusable view model
    #[error("invalid view model: {0}")]
    Invalid(String),

    #[error("builder panicked: {0}")]
    Panicked(String),
}

impl BuildError {
    pub fn error_code(&self) -> &'static str {
        match self {
            BuildError::EmptyPayload => "E_BUILD_EMPTY",
            BuildError::Malformed(_) => "E_BUILD_MALFORMED",
            BuildError::Invalid(_) => "E_BUILD_INVALID",
            BuildError::Panicked(_) => "E_BUILD_PANIC",
        }
    }
}

impl From<serde_json::Error> for BuildError {
    fn from(err: serde_json::Error) -> Self {
        BuildError::Malformed(err.to_string())
    }
}
