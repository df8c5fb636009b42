//! Provider selection by content policy and connectivity.

use crate::models::{ConnectivityState, ContentPolicy, ContentSource};

/// Provider roles to try, in order, for one load attempt.
///
/// The first successful provider wins; later entries are fallbacks.
pub fn provider_plan(policy: ContentPolicy, connectivity: ConnectivityState) -> Vec<ContentSource> {
    use ContentSource::{Local, Remote};

    match (policy, connectivity) {
        (ContentPolicy::PreferRemote, ConnectivityState::Online) => vec![Remote, Local],
        (ContentPolicy::PreferLocal, ConnectivityState::Online) => vec![Local, Remote],
        (ContentPolicy::RemoteOnly, ConnectivityState::Online) => vec![Remote],
        (ContentPolicy::RemoteOnly, ConnectivityState::Offline) => Vec::new(),
        (ContentPolicy::LocalOnly, _) => vec![Local],
        (ContentPolicy::PreferRemote | ContentPolicy::PreferLocal, ConnectivityState::Offline) => {
            vec![Local]
        }
    }
}
