//! Remote content provider backed by an [`HttpClient`].

use async_trait::async_trait;

use crate::error::ProviderError;
use crate::models::{ContentRequest, ContentSource, RawPayload};
use crate::traits::{ContentProvider, Headers, HttpClient};

/// Fetches view content with `GET {base_url}/{feature}?uri={view_uri}`.
///
/// A 404 is reported as [`ProviderError::NotFound`]; any other non-2xx
/// status becomes [`ProviderError::Http`].
#[derive(Debug, Clone)]
pub struct HttpContentProvider<C: HttpClient> {
    client: C,
    base_url: String,
    headers: Headers,
}

impl<C: HttpClient> HttpContentProvider<C> {
    pub fn new(client: C, base_url: impl Into<String>) -> Self {
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            headers,
        }
    }

    /// Add a header sent with every request.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL the provider requests for `request`.
    pub fn content_url(&self, request: &ContentRequest) -> String {
        format!(
            "{}/{}?uri={}",
            self.base_url,
            urlencoding::encode(&request.feature),
            urlencoding::encode(&request.view_uri)
        )
    }
}

#[async_trait]
impl<C: HttpClient> ContentProvider for HttpContentProvider<C> {
    async fn fetch(&self, request: &ContentRequest) -> Result<RawPayload, ProviderError> {
        let url = self.content_url(request);
        tracing::debug!(url = %url, "Fetching remote content");

        let response = self.client.get(&url, &self.headers).await?;

        if response.status == 404 {
            return Err(ProviderError::NotFound);
        }
        if !response.is_success() {
            let message = String::from_utf8_lossy(&response.body).trim().to_string();
            return Err(ProviderError::Http {
                status: response.status,
                message,
            });
        }

        let mut payload = RawPayload::new(ContentSource::Remote, response.body.clone());
        if let Some(content_type) = response.content_type() {
            payload = payload.with_content_type(content_type);
        }
        Ok(payload)
    }

    fn name(&self) -> &str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::models::{ConnectivityState, FeatureConfig};
    use crate::traits::{HttpError, Response};
    use bytes::Bytes;

    fn request() -> ContentRequest {
        ContentRequest::new(
            &FeatureConfig::new("browse", "hub:browse/new releases"),
            ConnectivityState::Online,
        )
    }

    #[test]
    fn test_content_url_encodes_query() {
        let provider = HttpContentProvider::new(MockHttpClient::new(), "https://content.example.com/");
        assert_eq!(
            provider.content_url(&request()),
            "https://content.example.com/browse?uri=hub%3Abrowse%2Fnew%20releases"
        );
    }

    #[tokio::test]
    async fn test_fetch_success_carries_content_type() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::Success(
            Response::new(200, r#"{"id":"browse"}"#).with_header("Content-Type", "application/json"),
        ));

        let provider = HttpContentProvider::new(client.clone(), "https://content.example.com");
        let payload = provider.fetch(&request()).await.unwrap();

        assert_eq!(payload.source, ContentSource::Remote);
        assert_eq!(payload.content_type.as_deref(), Some("application/json"));
        assert_eq!(payload.body, Bytes::from(r#"{"id":"browse"}"#));

        let requests = client.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].headers.get("Accept").map(String::as_str), Some("application/json"));
    }

    #[tokio::test]
    async fn test_fetch_not_found() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::Success(Response::new(404, Bytes::new())));

        let provider = HttpContentProvider::new(client, "https://content.example.com");
        assert_eq!(provider.fetch(&request()).await, Err(ProviderError::NotFound));
    }

    #[tokio::test]
    async fn test_fetch_server_error() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::Success(Response::new(503, Bytes::from("busy"))));

        let provider = HttpContentProvider::new(client, "https://content.example.com");
        assert_eq!(
            provider.fetch(&request()).await,
            Err(ProviderError::Http { status: 503, message: "busy".to_string() })
        );
    }

    #[tokio::test]
    async fn test_fetch_connection_failure() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::Error(HttpError::Connect(
            "refused".to_string(),
        )));

        let provider = HttpContentProvider::new(client, "https://content.example.com");
        assert_eq!(
            provider.fetch(&request()).await,
            Err(ProviderError::Network("refused".to_string()))
        );
    }

    #[test]
    fn test_with_header() {
        let provider = HttpContentProvider::new(MockHttpClient::new(), "https://x")
            .with_header("Authorization", "Bearer t");
        assert_eq!(provider.headers.get("Authorization").map(String::as_str), Some("Bearer t"));
    }
}
