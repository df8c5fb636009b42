//! Content provider trait.

use async_trait::async_trait;

use crate::error::ProviderError;
use crate::models::{ContentRequest, RawPayload};

/// A source of raw content for a view model (local store or remote service).
///
/// A fetch resolves at most once. Providers own their retry and timeout
/// semantics; the loader only adds an optional outer timeout.
///
/// # Example
///
/// ```ignore
/// use hubview::traits::ContentProvider;
///
/// async fn warm<P: ContentProvider>(provider: &P, request: &ContentRequest) {
///     if let Err(err) = provider.fetch(request).await {
///         tracing::warn!(provider = provider.name(), error = %err, "warmup failed");
///     }
/// }
/// ```
#[async_trait]
pub trait ContentProvider: Send + Sync {
    /// Fetch raw content for the request.
    async fn fetch(&self, request: &ContentRequest) -> Result<RawPayload, ProviderError>;

    /// Short name used in logs.
    fn name(&self) -> &str {
        "content-provider"
    }
}
