//! Common test utilities for integration tests.
//!
//! This module provides reusable view documents, loader fixtures and helper
//! functions for integration testing the loader.
//!
//! # Example
//!
//! ```ignore
//! let fixture = LoaderFixture::new()
//!     .with_remote(MockContentProvider::remote(&view_json("remote")))
//!     .build();
//! ```

pub mod mocks;

pub use mocks::*;

use std::sync::Arc;
use std::time::Duration;

use hubview::dispatch::CallbackExecutor;
use hubview::loader::{LoaderConfig, ViewModelLoader};
use hubview::models::{ContentPolicy, FeatureConfig};

/// Feature identifier used by the fixtures.
pub const FEATURE: &str = "browse";
/// View URI used by the fixtures.
pub const VIEW_URI: &str = "hub:browse";

/// Upper bound for anything a test waits on.
pub const TEST_TIMEOUT: Duration = Duration::from_secs(5);

/// A minimal valid view document whose id is `id`.
pub fn view_json(id: &str) -> String {
    format!(
        r#"{{"id":"{id}","title":"{id}","body":[{{"id":"{id}-row","component":"hub:row","title":"Row"}}]}}"#
    )
}

pub fn feature(policy: ContentPolicy) -> FeatureConfig {
    FeatureConfig::new(FEATURE, VIEW_URI).with_policy(policy)
}

/// Builder for loaders wired to mock collaborators.
pub struct LoaderFixture {
    policy: ContentPolicy,
    connectivity: MockConnectivity,
    local: Option<MockContentProvider>,
    remote: Option<MockContentProvider>,
    executor: Option<Arc<dyn CallbackExecutor>>,
    config: LoaderConfig,
}

impl LoaderFixture {
    pub fn new() -> Self {
        Self {
            policy: ContentPolicy::PreferRemote,
            connectivity: MockConnectivity::online(),
            local: None,
            remote: None,
            executor: None,
            config: LoaderConfig::default(),
        }
    }

    pub fn with_policy(mut self, policy: ContentPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_connectivity(mut self, connectivity: MockConnectivity) -> Self {
        self.connectivity = connectivity;
        self
    }

    pub fn with_local(mut self, provider: MockContentProvider) -> Self {
        self.local = Some(provider);
        self
    }

    pub fn with_remote(mut self, provider: MockContentProvider) -> Self {
        self.remote = Some(provider);
        self
    }

    #[allow(dead_code)]
    pub fn with_executor(mut self, executor: Arc<dyn CallbackExecutor>) -> Self {
        self.executor = Some(executor);
        self
    }

    #[allow(dead_code)]
    pub fn with_config(mut self, config: LoaderConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the loader. Must run inside a tokio runtime.
    pub fn build(self) -> ViewModelLoader {
        let mut builder = ViewModelLoader::builder(feature(self.policy))
            .with_connectivity_resolver(Arc::new(self.connectivity))
            .with_config(self.config);

        if let Some(local) = self.local {
            builder = builder.with_local_provider(Arc::new(local));
        }
        if let Some(remote) = self.remote {
            builder = builder.with_remote_provider(Arc::new(remote));
        }
        if let Some(executor) = self.executor {
            builder = builder.with_callback_executor(executor);
        }

        builder.build().expect("fixture loader should build")
    }
}

impl Default for LoaderFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Await `future`, failing the test if it takes longer than [`TEST_TIMEOUT`].
pub async fn within<F: std::future::Future>(future: F) -> F::Output {
    tokio::time::timeout(TEST_TIMEOUT, future)
        .await
        .expect("test timed out")
}
