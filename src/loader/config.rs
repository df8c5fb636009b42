//! Loader configuration.

use std::time::Duration;

/// Tunables for a [`ViewModelLoader`](super::ViewModelLoader).
///
/// # Example
///
/// ```ignore
/// use hubview::loader::LoaderConfig;
///
/// let config = LoaderConfig::default()
///     .with_provider_timeout(Duration::from_secs(10));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Upper bound for a single provider fetch. `None` waits indefinitely
    /// and leaves timeouts to the providers.
    pub provider_timeout: Option<Duration>,
}

impl LoaderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-provider timeout.
    pub fn with_provider_timeout(mut self, timeout: Duration) -> Self {
        self.provider_timeout = Some(timeout);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_waits_indefinitely() {
        assert_eq!(LoaderConfig::default().provider_timeout, None);
    }

    #[test]
    fn test_with_provider_timeout() {
        let config = LoaderConfig::new().with_provider_timeout(Duration::from_secs(3));
        assert_eq!(config.provider_timeout, Some(Duration::from_secs(3)));
    }
}
