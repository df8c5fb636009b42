//! Configuration for a single CLI load.

use std::path::PathBuf;
use std::time::Duration;

use crate::models::{ContentPolicy, FeatureConfig};

/// Environment variable naming the remote content base URL.
pub const ENV_REMOTE_URL: &str = "HUBVIEW_REMOTE_URL";
/// Environment variable naming the local content directory.
pub const ENV_CACHE_DIR: &str = "HUBVIEW_CACHE_DIR";
/// Environment variable forcing offline mode when set to `1` or `true`.
pub const ENV_OFFLINE: &str = "HUBVIEW_OFFLINE";

const DEFAULT_FEATURE: &str = "hub";

/// Everything the CLI needs to load one view model.
#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    pub view_uri: String,
    pub feature: String,
    pub policy: ContentPolicy,
    /// Base URL of the remote content service; no remote provider when unset
    pub remote_url: Option<String>,
    /// Local content root; the platform cache directory when unset
    pub cache_dir: Option<PathBuf>,
    pub offline: bool,
    pub timeout: Option<Duration>,
}

impl CliConfig {
    pub fn new(view_uri: impl Into<String>) -> Self {
        Self {
            view_uri: view_uri.into(),
            feature: DEFAULT_FEATURE.to_string(),
            policy: ContentPolicy::default(),
            remote_url: None,
            cache_dir: None,
            offline: false,
            timeout: None,
        }
    }

    /// Apply environment fallbacks read through `lookup`.
    pub fn with_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_REMOTE_URL).filter(|v| !v.is_empty()) {
            self.remote_url = Some(url);
        }
        if let Some(dir) = lookup(ENV_CACHE_DIR).filter(|v| !v.is_empty()) {
            self.cache_dir = Some(PathBuf::from(dir));
        }
        if let Some(flag) = lookup(ENV_OFFLINE) {
            self.offline = matches!(flag.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes");
        }
        self
    }

    pub fn with_feature(mut self, feature: impl Into<String>) -> Self {
        self.feature = feature.into();
        self
    }

    pub fn with_policy(mut self, policy: ContentPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_remote_url(mut self, url: impl Into<String>) -> Self {
        self.remote_url = Some(url.into());
        self
    }

    pub fn with_cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = Some(dir.into());
        self
    }

    pub fn with_offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn feature_config(&self) -> FeatureConfig {
        FeatureConfig::new(&self.feature, &self.view_uri).with_policy(self.policy)
    }
}
