//! Feature configuration consumed by the view-model loader.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::connectivity::ConnectivityState;

/// How a feature combines its local and remote content providers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentPolicy {
    /// Remote when online, local as fallback and when offline.
    #[default]
    PreferRemote,
    /// Local first, remote as fallback when online.
    PreferLocal,
    /// Remote only; nothing to load when offline.
    RemoteOnly,
    /// Local only, regardless of connectivity.
    LocalOnly,
}

impl ContentPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentPolicy::PreferRemote => "prefer-remote",
            ContentPolicy::PreferLocal => "prefer-local",
            ContentPolicy::RemoteOnly => "remote-only",
            ContentPolicy::LocalOnly => "local-only",
        }
    }
}

impl fmt::Display for ContentPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prefer-remote" => Ok(ContentPolicy::PreferRemote),
            "prefer-local" => Ok(ContentPolicy::PreferLocal),
            "remote-only" => Ok(ContentPolicy::RemoteOnly),
            "local-only" => Ok(ContentPolicy::LocalOnly),
            other => Err(format!("unknown content policy '{}'", other)),
        }
    }
}

/// Identity and content policy of the feature a loader serves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureConfig {
    /// Feature identifier, e.g. `browse`
    pub identifier: String,
    /// URI of the view being loaded, e.g. `hub:browse:home`
    pub view_uri: String,
    #[serde(default)]
    pub policy: ContentPolicy,
}

impl FeatureConfig {
    pub fn new(identifier: impl Into<String>, view_uri: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            view_uri: view_uri.into(),
            policy: ContentPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: ContentPolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// What a content provider is asked to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRequest {
    pub feature: String,
    pub view_uri: String,
    /// Connectivity resolved at the start of the load attempt
    pub connectivity: ConnectivityState,
}

impl ContentRequest {
    pub fn new(feature: &FeatureConfig, connectivity: ConnectivityState) -> Self {
        Self {
            feature: feature.identifier.clone(),
            view_uri: feature.view_uri.clone(),
            connectivity,
        }
    }
}
