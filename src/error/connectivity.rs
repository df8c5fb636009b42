//! Connectivity resolution errors.

/// The resolver could not determine connectivity.
///
/// The loader never fails a load because of this; it treats the attempt as
/// offline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("connectivity unavailable: {0}")]
pub struct ConnectivityError(pub String);

impl ConnectivityError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}
