//! The view-model loader.

use std::panic::AssertUnwindSafe;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::runtime::Handle;
use tokio::sync::watch;

use super::config::LoaderConfig;
use super::cycle::{self, CycleSources};
use super::handle::LoadHandle;
use super::slot::DelegateSlot;
use super::state::{LoadOutcome, LoaderState};
use crate::adapters::JsonViewModelBuilder;
use crate::dispatch::{CallbackExecutor, ImmediateExecutor};
use crate::error::panic::panic_message;
use crate::error::LoadError;
use crate::models::{FeatureConfig, ViewModel};
use crate::traits::{
    ConnectivityStateResolver, ContentProvider, ViewModelBuilder, ViewModelLoaderDelegate,
};

/// Errors raised while assembling a loader.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoaderBuildError {
    /// No tokio runtime handle was given and none is current
    #[error("no tokio runtime available to run provider I/O")]
    NoRuntime,

    /// Neither a local nor a remote content provider was configured
    #[error("feature '{0}' has no content providers")]
    NoProviders(String),
}

/// Loads view models for one feature and reports each outcome to a delegate.
///
/// Cloning is cheap; clones share the same state and delegate slot.
///
/// # Example
///
/// ```ignore
/// use hubview::loader::ViewModelLoader;
///
/// let loader = ViewModelLoader::builder(FeatureConfig::new("browse", "hub:browse"))
///     .with_connectivity_resolver(resolver)
///     .with_remote_provider(remote)
///     .with_local_provider(local)
///     .build()?;
///
/// loader.set_delegate(&screen);
/// loader.load_view_model();
/// ```
#[derive(Clone)]
pub struct ViewModelLoader {
    inner: Arc<LoaderInner>,
}

struct LoaderInner {
    feature: FeatureConfig,
    resolver: Option<Arc<dyn ConnectivityStateResolver>>,
    local: Option<Arc<dyn ContentProvider>>,
    remote: Option<Arc<dyn ContentProvider>>,
    builder: Arc<dyn ViewModelBuilder>,
    executor: Arc<dyn CallbackExecutor>,
    runtime: Handle,
    config: LoaderConfig,
    delegate: DelegateSlot,
    shared: Mutex<Shared>,
}

#[derive(Default)]
struct Shared {
    state: LoaderState,
    last_cycle: u64,
    in_flight: Option<InFlight>,
}

struct InFlight {
    cycle: u64,
    outcome: watch::Sender<Option<LoadOutcome>>,
    merged: usize,
}

impl ViewModelLoader {
    /// Start configuring a loader for a feature.
    pub fn builder(feature: FeatureConfig) -> ViewModelLoaderBuilder {
        ViewModelLoaderBuilder::new(feature)
    }

    pub fn feature(&self) -> &FeatureConfig {
        &self.inner.feature
    }

    /// Attach a delegate. The loader only keeps a weak reference.
    pub fn set_delegate<D>(&self, delegate: &Arc<D>)
    where
        D: ViewModelLoaderDelegate + 'static,
    {
        self.inner.delegate.attach(delegate);
    }

    /// Detach the delegate. Pending results are dropped when they arrive.
    pub fn detach_delegate(&self) {
        self.inner.delegate.detach();
    }

    pub fn has_delegate(&self) -> bool {
        self.inner.delegate.is_attached()
    }

    /// Current state snapshot.
    pub fn state(&self) -> LoaderState {
        self.lock_shared().state.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.lock_shared().in_flight.is_some()
    }

    /// The view model produced by the most recent cycle, if it succeeded.
    pub fn last_view_model(&self) -> Option<Arc<ViewModel>> {
        self.lock_shared().state.view_model().cloned()
    }

    /// Load a view model.
    ///
    /// Returns immediately. If a load is already in flight the call merges
    /// into it: the returned handle resolves to that cycle's outcome and the
    /// delegate is still notified once.
    pub fn load_view_model(&self) -> LoadHandle {
        let mut shared = self.lock_shared();

        if let Some(in_flight) = shared.in_flight.as_mut() {
            in_flight.merged += 1;
            tracing::debug!(
                cycle = in_flight.cycle,
                merged = in_flight.merged,
                feature = %self.inner.feature.identifier,
                "Load already in flight, merging request"
            );
            return LoadHandle::new(in_flight.cycle, true, in_flight.outcome.subscribe());
        }

        shared.last_cycle += 1;
        let cycle = shared.last_cycle;
        let (outcome, receiver) = watch::channel(None);
        shared.in_flight = Some(InFlight {
            cycle,
            outcome,
            merged: 0,
        });
        shared.state = LoaderState::Loading { cycle };
        drop(shared);

        // Armed before spawning so a task dropped unpolled still settles.
        let guard = CycleGuard::new(self.clone(), cycle);
        let loader = self.clone();
        self.inner.runtime.spawn(async move {
            let inner = &loader.inner;
            let sources = CycleSources {
                feature: &inner.feature,
                resolver: inner.resolver.as_deref(),
                local: inner.local.as_ref(),
                remote: inner.remote.as_ref(),
                builder: inner.builder.as_ref(),
                provider_timeout: inner.config.provider_timeout,
            };
            let outcome = cycle::run(sources, cycle).await;
            guard.complete(outcome);
        });

        LoadHandle::new(cycle, false, receiver)
    }

    fn lock_shared(&self) -> MutexGuard<'_, Shared> {
        self.inner
            .shared
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Settle the cycle, then notify the delegate and every handle.
    fn finish(&self, cycle: u64, outcome: LoadOutcome) {
        let in_flight = {
            let mut shared = self.lock_shared();
            match shared.in_flight.take() {
                Some(in_flight) if in_flight.cycle == cycle => {
                    shared.state = LoaderState::from(&outcome);
                    in_flight
                }
                other => {
                    shared.in_flight = other;
                    tracing::error!(cycle, "Finished a load cycle that is not in flight");
                    return;
                }
            }
        };

        match &outcome {
            Ok(view_model) => tracing::info!(
                cycle,
                feature = %self.inner.feature.identifier,
                view_model = %view_model.id,
                merged = in_flight.merged,
                "View model loaded"
            ),
            Err(error) => tracing::warn!(
                cycle,
                feature = %self.inner.feature.identifier,
                code = error.error_code(),
                error = %error,
                merged = in_flight.merged,
                "View model load failed"
            ),
        }

        let loader = self.clone();
        let delegate_outcome = outcome.clone();
        self.inner
            .executor
            .execute(Box::new(move || loader.notify_delegate(cycle, delegate_outcome)));

        in_flight.outcome.send_replace(Some(outcome));
    }

    fn notify_delegate(&self, cycle: u64, outcome: LoadOutcome) {
        let Some(delegate) = self.inner.delegate.snapshot() else {
            tracing::debug!(cycle, "No delegate attached, dropping load result");
            return;
        };

        let notified = std::panic::catch_unwind(AssertUnwindSafe(|| match &outcome {
            Ok(view_model) => delegate.did_load_view_model(self, view_model.clone()),
            Err(error) => delegate.did_fail_loading(self, error),
        }));

        if let Err(payload) = notified {
            tracing::error!(
                cycle,
                panic = %panic_message(payload.as_ref()),
                "Loader delegate panicked"
            );
        }
    }
}

impl std::fmt::Debug for ViewModelLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewModelLoader")
            .field("feature", &self.inner.feature)
            .field("state", &self.state().as_str())
            .field("delegate", &self.inner.delegate)
            .finish()
    }
}

/// Settles a cycle as cancelled if its task is dropped before completing.
struct CycleGuard {
    loader: Option<ViewModelLoader>,
    cycle: u64,
}

impl CycleGuard {
    fn new(loader: ViewModelLoader, cycle: u64) -> Self {
        Self {
            loader: Some(loader),
            cycle,
        }
    }

    fn complete(mut self, outcome: LoadOutcome) {
        if let Some(loader) = self.loader.take() {
            loader.finish(self.cycle, outcome);
        }
    }
}

impl Drop for CycleGuard {
    fn drop(&mut self) {
        if let Some(loader) = self.loader.take() {
            tracing::warn!(cycle = self.cycle, "Load task dropped before completion");
            loader.finish(self.cycle, Err(LoadError::Cancelled));
        }
    }
}

/// Builder for [`ViewModelLoader`].
pub struct ViewModelLoaderBuilder {
    feature: FeatureConfig,
    resolver: Option<Arc<dyn ConnectivityStateResolver>>,
    local: Option<Arc<dyn ContentProvider>>,
    remote: Option<Arc<dyn ContentProvider>>,
    builder: Option<Arc<dyn ViewModelBuilder>>,
    executor: Option<Arc<dyn CallbackExecutor>>,
    runtime: Option<Handle>,
    config: LoaderConfig,
}

impl ViewModelLoaderBuilder {
    pub fn new(feature: FeatureConfig) -> Self {
        Self {
            feature,
            resolver: None,
            local: None,
            remote: None,
            builder: None,
            executor: None,
            runtime: None,
            config: LoaderConfig::default(),
        }
    }

    pub fn with_connectivity_resolver(mut self, resolver: Arc<dyn ConnectivityStateResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    pub fn with_local_provider(mut self, provider: Arc<dyn ContentProvider>) -> Self {
        self.local = Some(provider);
        self
    }

    pub fn with_remote_provider(mut self, provider: Arc<dyn ContentProvider>) -> Self {
        self.remote = Some(provider);
        self
    }

    /// Defaults to [`JsonViewModelBuilder`].
    pub fn with_view_model_builder(mut self, builder: Arc<dyn ViewModelBuilder>) -> Self {
        self.builder = Some(builder);
        self
    }

    /// Where delegate callbacks run. Defaults to [`ImmediateExecutor`].
    pub fn with_callback_executor(mut self, executor: Arc<dyn CallbackExecutor>) -> Self {
        self.executor = Some(executor);
        self
    }

    /// Runtime for provider I/O. Defaults to the current runtime.
    pub fn with_runtime(mut self, runtime: Handle) -> Self {
        self.runtime = Some(runtime);
        self
    }

    pub fn with_config(mut self, config: LoaderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Result<ViewModelLoader, LoaderBuildError> {
        if self.local.is_none() && self.remote.is_none() {
            return Err(LoaderBuildError::NoProviders(self.feature.identifier));
        }

        let runtime = match self.runtime {
            Some(runtime) => runtime,
            None => Handle::try_current().map_err(|_| LoaderBuildError::NoRuntime)?,
        };

        Ok(ViewModelLoader {
            inner: Arc::new(LoaderInner {
                feature: self.feature,
                resolver: self.resolver,
                local: self.local,
                remote: self.remote,
                builder: self
                    .builder
                    .unwrap_or_else(|| Arc::new(JsonViewModelBuilder::new())),
                executor: self.executor.unwrap_or_else(|| Arc::new(ImmediateExecutor)),
                runtime,
                config: self.config,
                delegate: DelegateSlot::new(),
                shared: Mutex::new(Shared::default()),
            }),
        })
    }
}
