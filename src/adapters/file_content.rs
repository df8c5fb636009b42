//! File-backed local content provider.
//!
//! Content for a view lives at `{root}/{feature}/{sha256(view_uri)}.json`.
//! Hashing the view URI keeps arbitrary URIs safe to use as file names.

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

use crate::error::ProviderError;
use crate::models::{ContentRequest, ContentSource, RawPayload};
use crate::traits::ContentProvider;

const CACHE_DIR_NAME: &str = "hubview";

/// Local content provider reading cached JSON documents from disk.
///
/// # Example
///
/// ```ignore
/// use hubview::adapters::FileContentProvider;
///
/// let provider = FileContentProvider::with_default_root()?;
/// provider.store("browse", "hub:browse", br#"{"id":"browse","body":[]}"#).await?;
/// ```
#[derive(Debug, Clone)]
pub struct FileContentProvider {
    root: PathBuf,
}

impl FileContentProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Provider rooted at the platform cache directory.
    ///
    /// # Returns
    /// The provider, or an error if the cache directory cannot be determined.
    pub fn with_default_root() -> Result<Self, ProviderError> {
        Self::default_root()
            .map(Self::new)
            .ok_or_else(|| ProviderError::Unavailable("no cache directory on this platform".to_string()))
    }

    /// `{platform cache dir}/hubview`, if the platform has one.
    pub fn default_root() -> Option<PathBuf> {
        dirs::cache_dir().map(|dir| dir.join(CACHE_DIR_NAME))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Hex SHA-256 of a view URI.
    pub fn cache_key(view_uri: &str) -> String {
        hex::encode(Sha256::digest(view_uri.as_bytes()))
    }

    /// Path of the cached document for a feature and view URI.
    pub fn path_for(&self, feature: &str, view_uri: &str) -> PathBuf {
        self.root
            .join(feature)
            .join(format!("{}.json", Self::cache_key(view_uri)))
    }

    /// Write a document so later fetches for the same view find it.
    pub async fn store(
        &self,
        feature: &str,
        view_uri: &str,
        body: &[u8],
    ) -> Result<PathBuf, ProviderError> {
        let path = self.path_for(feature, view_uri);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, body).await?;
        tracing::debug!(path = %path.display(), bytes = body.len(), "Stored local content");
        Ok(path)
    }

    /// Remove a cached document. Missing documents are not an error.
    pub async fn remove(&self, feature: &str, view_uri: &str) -> Result<bool, ProviderError> {
        match tokio::fs::remove_file(self.path_for(feature, view_uri)).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl ContentProvider for FileContentProvider {
    async fn fetch(&self, request: &ContentRequest) -> Result<RawPayload, ProviderError> {
        let path = self.path_for(&request.feature, &request.view_uri);
        tracing::debug!(path = %path.display(), "Reading local content");

        let body = tokio::fs::read(&path).await?;
        Ok(RawPayload::new(ContentSource::Local, body).with_content_type("application/json"))
    }

    fn name(&self) -> &str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ConnectivityState, FeatureConfig};
    use tempfile::TempDir;

    fn request(view_uri: &str) -> ContentRequest {
        ContentRequest::new(&FeatureConfig::new("browse", view_uri), ConnectivityState::Offline)
    }

    #[test]
    fn test_cache_key_is_sha256_hex() {
        assert_eq!(
            FileContentProvider::cache_key(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_ne!(
            FileContentProvider::cache_key("hub:a"),
            FileContentProvider::cache_key("hub:b")
        );
    }

    #[test]
    fn test_path_layout() {
        let provider = FileContentProvider::new("/tmp/root");
        let path = provider.path_for("browse", "hub:browse");
        assert!(path.starts_with("/tmp/root/browse"));
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("json"));
    }

    #[tokio::test]
    async fn test_store_then_fetch() {
        let dir = TempDir::new().unwrap();
        let provider = FileContentProvider::new(dir.path());

        provider.store("browse", "hub:browse", br#"{"id":"browse"}"#).await.unwrap();
        let payload = provider.fetch(&request("hub:browse")).await.unwrap();

        assert_eq!(payload.source, ContentSource::Local);
        assert_eq!(payload.content_type.as_deref(), Some("application/json"));
        assert_eq!(&payload.body[..], br#"{"id":"browse"}"#);
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let provider = FileContentProvider::new(dir.path());

        assert_eq!(
            provider.fetch(&request("hub:nothing")).await,
            Err(ProviderError::NotFound)
        );
    }

    #[tokio::test]
    async fn test_remove() {
        let dir = TempDir::new().unwrap();
        let provider = FileContentProvider::new(dir.path());

        provider.store("browse", "hub:browse", b"{}").await.unwrap();
        assert!(provider.remove("browse", "hub:browse").await.unwrap());
        assert!(!provider.remove("browse", "hub:browse").await.unwrap());
    }
}
