//! One load attempt: resolve connectivity, walk the provider plan, build.

use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

use super::selection::provider_plan;
use super::state::LoadOutcome;
use crate::error::panic::panic_message;
use crate::error::{BuildError, LoadError, ProviderError};
use crate::models::{ConnectivityState, ContentRequest, ContentSource, FeatureConfig, RawPayload, ViewModel};
use crate::traits::{ConnectivityStateResolver, ContentProvider, ViewModelBuilder};

/// Collaborators needed to run a load attempt.
pub(crate) struct CycleSources<'a> {
    pub feature: &'a FeatureConfig,
    pub resolver: Option<&'a dyn ConnectivityStateResolver>,
    pub local: Option<&'a Arc<dyn ContentProvider>>,
    pub remote: Option<&'a Arc<dyn ContentProvider>>,
    pub builder: &'a dyn ViewModelBuilder,
    pub provider_timeout: Option<Duration>,
}

impl CycleSources<'_> {
    fn provider(&self, source: ContentSource) -> Option<&Arc<dyn ContentProvider>> {
        match source {
            ContentSource::Local => self.local,
            ContentSource::Remote => self.remote,
        }
    }
}

/// Run a single load attempt to its outcome.
pub(crate) async fn run(sources: CycleSources<'_>, cycle: u64) -> LoadOutcome {
    let connectivity = resolve_connectivity(sources.resolver);
    let plan = provider_plan(sources.feature.policy, connectivity);
    let request = ContentRequest::new(sources.feature, connectivity);

    tracing::debug!(
        cycle,
        feature = %sources.feature.identifier,
        connectivity = %connectivity,
        policy = %sources.feature.policy,
        plan = ?plan,
        "Starting view model load"
    );

    let mut failures = Vec::new();
    for source in plan {
        let Some(provider) = sources.provider(source) else {
            tracing::debug!(cycle, source = %source, "No provider configured, skipping");
            continue;
        };

        let payload = match fetch(provider.as_ref(), &request, sources.provider_timeout).await {
            Ok(payload) => payload,
            Err(error) => {
                tracing::warn!(
                    cycle,
                    source = %source,
                    provider = provider.name(),
                    error = %error,
                    "Content provider failed"
                );
                failures.push(LoadError::provider(source, error));
                continue;
            }
        };

        match build(sources.builder, &payload) {
            Ok(view_model) => {
                tracing::debug!(
                    cycle,
                    source = %source,
                    components = view_model.component_count(),
                    "Built view model"
                );
                return Ok(Arc::new(view_model));
            }
            Err(error) => {
                tracing::warn!(cycle, source = %source, error = %error, "View model build failed");
                failures.push(LoadError::builder(source, error));
            }
        }
    }

    Err(LoadError::exhausted(connectivity, failures))
}

/// Ask the resolver once; anything but a clean answer counts as offline.
fn resolve_connectivity(resolver: Option<&dyn ConnectivityStateResolver>) -> ConnectivityState {
    let Some(resolver) = resolver else {
        tracing::warn!("No connectivity resolver configured, assuming offline");
        return ConnectivityState::Offline;
    };

    match std::panic::catch_unwind(AssertUnwindSafe(|| resolver.resolve())) {
        Ok(Ok(state)) => state,
        Ok(Err(err)) => {
            tracing::warn!(error = %err, "Connectivity unavailable, assuming offline");
            ConnectivityState::Offline
        }
        Err(payload) => {
            tracing::error!(
                panic = %panic_message(payload.as_ref()),
                "Connectivity resolver panicked, assuming offline"
            );
            ConnectivityState::Offline
        }
    }
}

async fn fetch(
    provider: &dyn ContentProvider,
    request: &ContentRequest,
    timeout: Option<Duration>,
) -> Result<RawPayload, ProviderError> {
    let guarded = AssertUnwindSafe(provider.fetch(request)).catch_unwind();

    let caught = match timeout {
        Some(limit) => match tokio::time::timeout(limit, guarded).await {
            Ok(caught) => caught,
            Err(_) => return Err(ProviderError::Timeout(limit)),
        },
        None => guarded.await,
    };

    caught.unwrap_or_else(|payload| Err(ProviderError::Panicked(panic_message(payload.as_ref()))))
}

fn build(builder: &dyn ViewModelBuilder, payload: &RawPayload) -> Result<ViewModel, BuildError> {
    std::panic::catch_unwind(AssertUnwindSafe(|| builder.build(payload)))
        .unwrap_or_else(|payload| Err(BuildError::Panicked(panic_message(payload.as_ref()))))
}
