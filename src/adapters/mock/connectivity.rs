//! Mock connectivity resolver for testing.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::error::ConnectivityError;
use crate::models::ConnectivityState;
use crate::traits::ConnectivityStateResolver;

/// Connectivity resolver whose answer tests can change at any time.
#[derive(Debug, Clone)]
pub struct MockConnectivity {
    state: Arc<Mutex<Result<ConnectivityState, ConnectivityError>>>,
    should_panic: Arc<AtomicBool>,
    resolves: Arc<AtomicUsize>,
}

impl MockConnectivity {
    pub fn new(state: ConnectivityState) -> Self {
        Self {
            state: Arc::new(Mutex::new(Ok(state))),
            should_panic: Arc::new(AtomicBool::new(false)),
            resolves: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn online() -> Self {
        Self::new(ConnectivityState::Online)
    }

    pub fn offline() -> Self {
        Self::new(ConnectivityState::Offline)
    }

    pub fn set_state(&self, state: ConnectivityState) {
        *self.state.lock().unwrap() = Ok(state);
    }

    /// Make resolution fail with `reason`.
    pub fn set_unavailable(&self, reason: &str) {
        *self.state.lock().unwrap() = Err(ConnectivityError::new(reason));
    }

    /// Configure whether resolution should panic.
    pub fn set_should_panic(&self, should_panic: bool) {
        self.should_panic.store(should_panic, Ordering::SeqCst);
    }

    /// Number of times the resolver was consulted.
    pub fn resolve_count(&self) -> usize {
        self.resolves.load(Ordering::SeqCst)
    }
}

impl ConnectivityStateResolver for MockConnectivity {
    fn resolve(&self) -> Result<ConnectivityState, ConnectivityError> {
        self.resolves.fetch_add(1, Ordering::SeqCst);
        if self.should_panic.load(Ordering::SeqCst) {
            panic!("mock connectivity panic");
        }
        self.state.lock().unwrap().clone()
    }
}
