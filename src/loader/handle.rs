//! Handles returned by `load_view_model`.

use tokio::sync::watch;

use super::state::LoadOutcome;
use crate::error::LoadError;

/// Tracks one load cycle from the caller's side.
///
/// Every caller that triggered (or merged into) the same cycle holds a handle
/// resolving to the same outcome. Dropping a handle does not affect the load.
#[derive(Debug, Clone)]
pub struct LoadHandle {
    cycle: u64,
    merged: bool,
    receiver: watch::Receiver<Option<LoadOutcome>>,
}

impl LoadHandle {
    pub(crate) fn new(
        cycle: u64,
        merged: bool,
        receiver: watch::Receiver<Option<LoadOutcome>>,
    ) -> Self {
        Self {
            cycle,
            merged,
            receiver,
        }
    }

    /// Sequence number of the load cycle, starting at 1 per loader.
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    /// True when this call joined a load that was already in flight.
    pub fn is_merged(&self) -> bool {
        self.merged
    }

    /// The outcome, if the cycle has finished.
    pub fn try_outcome(&self) -> Option<LoadOutcome> {
        self.receiver.borrow().clone()
    }

    /// Wait for the cycle to finish.
    pub async fn outcome(mut self) -> LoadOutcome {
        let outcome = match self.receiver.wait_for(Option::is_some).await {
            Ok(outcome) => outcome.clone().unwrap_or(Err(LoadError::Cancelled)),
            Err(_) => Err(LoadError::Cancelled),
        };
        outcome
    }
}
