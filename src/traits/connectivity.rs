//! Connectivity resolver trait.

use crate::error::ConnectivityError;
use crate::models::ConnectivityState;

/// Oracle for current network reachability.
///
/// The loader calls [`resolve`](ConnectivityStateResolver::resolve) exactly
/// once per load attempt. Implementations must be cheap, synchronous and free
/// of side effects. An `Err` is never fatal: the loader treats it as offline.
pub trait ConnectivityStateResolver: Send + Sync {
    fn resolve(&self) -> Result<ConnectivityState, ConnectivityError>;
}

impl<F> ConnectivityStateResolver for F
where
    F: Fn() -> Result<ConnectivityState, ConnectivityError> + Send + Sync,
{
    fn resolve(&self) -> Result<ConnectivityState, ConnectivityError> {
        self()
    }
}
