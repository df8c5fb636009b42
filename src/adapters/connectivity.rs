//! Connectivity state resolvers.
//!
//! [`FixedConnectivity`] always reports the same state. [`WatchConnectivity`]
//! reads the latest value published through a [`ConnectivityPublisher`],
//! which [`spawn_connectivity_monitor`] keeps current by probing a URL.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::error::ConnectivityError;
use crate::models::ConnectivityState;
use crate::traits::{ConnectivityStateResolver, Headers, HttpClient};

/// Resolver that always reports one state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedConnectivity(pub ConnectivityState);

impl FixedConnectivity {
    pub fn online() -> Self {
        Self(ConnectivityState::Online)
    }

    pub fn offline() -> Self {
        Self(ConnectivityState::Offline)
    }
}

impl ConnectivityStateResolver for FixedConnectivity {
    fn resolve(&self) -> Result<ConnectivityState, ConnectivityError> {
        Ok(self.0)
    }
}

/// Create a connected publisher/resolver pair with no state yet.
///
/// Until the first publish the resolver returns an error, which the loader
/// treats as offline.
pub fn watch_connectivity() -> (ConnectivityPublisher, WatchConnectivity) {
    let (sender, receiver) = watch::channel(None);
    (
        ConnectivityPublisher {
            sender: Arc::new(sender),
        },
        WatchConnectivity { receiver },
    )
}

/// Publishes connectivity changes to every [`WatchConnectivity`].
#[derive(Debug, Clone)]
pub struct ConnectivityPublisher {
    sender: Arc<watch::Sender<Option<ConnectivityState>>>,
}

impl ConnectivityPublisher {
    /// Publish a state. Returns true if it differs from the previous one.
    pub fn publish(&self, state: ConnectivityState) -> bool {
        let previous = self.sender.send_replace(Some(state));
        let changed = previous != Some(state);
        if changed {
            tracing::info!(state = %state, "Connectivity changed");
        }
        changed
    }

    /// Forget the current state so resolvers report an error again.
    pub fn clear(&self) {
        self.sender.send_replace(None);
    }

    pub fn current(&self) -> Option<ConnectivityState> {
        *self.sender.borrow()
    }

    pub fn subscribe(&self) -> WatchConnectivity {
        WatchConnectivity {
            receiver: self.sender.subscribe(),
        }
    }
}

/// Resolver reading the latest published connectivity state.
#[derive(Debug, Clone)]
pub struct WatchConnectivity {
    receiver: watch::Receiver<Option<ConnectivityState>>,
}

impl WatchConnectivity {
    /// Wait until a state has been published.
    pub async fn wait_ready(&mut self) -> Result<ConnectivityState, ConnectivityError> {
        let state = match self.receiver.wait_for(Option::is_some).await {
            Ok(state) => *state,
            Err(_) => None,
        };
        state.ok_or_else(|| ConnectivityError::new("connectivity publisher dropped"))
    }
}

impl ConnectivityStateResolver for WatchConnectivity {
    fn resolve(&self) -> Result<ConnectivityState, ConnectivityError> {
        let state = *self.receiver.borrow();
        state.ok_or_else(|| ConnectivityError::new("connectivity not determined yet"))
    }
}

/// Probe `probe_url` every `interval` and publish the result.
///
/// Any HTTP response counts as online; transport errors count as offline.
/// The task runs until the returned handle is aborted.
pub fn spawn_connectivity_monitor<C>(
    client: C,
    probe_url: impl Into<String>,
    interval: Duration,
    publisher: ConnectivityPublisher,
) -> JoinHandle<()>
where
    C: HttpClient + 'static,
{
    let probe_url = probe_url.into();
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        let headers = Headers::new();

        loop {
            ticker.tick().await;
            let state = match client.get(&probe_url, &headers).await {
                Ok(_) => ConnectivityState::Online,
                Err(e) => {
                    tracing::debug!(url = %probe_url, error = %e, "Connectivity probe failed");
                    ConnectivityState::Offline
                }
            };
            publisher.publish(state);
        }
    })
}
