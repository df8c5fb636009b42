//! Mock implementations for test fixtures.
//!
//! This module re-exports the mock implementations from `hubview::adapters::mock`
//! and provides additional test-specific mock configurations.

pub use hubview::adapters::mock::{
    DelegateEvent, MockConnectivity, MockContent, MockContentProvider, MockHttpClient,
    MockResponse, PanickingObserver, RecordingDelegate, RecordingObserver,
};
pub use hubview::traits::{Headers, HttpClient, Response};

/// Configuration for setting up mock HTTP responses.
pub struct MockHttpConfig {
    client: MockHttpClient,
}

impl MockHttpConfig {
    /// Creates a new mock HTTP configuration.
    pub fn new() -> Self {
        Self {
            client: MockHttpClient::new(),
        }
    }

    /// Configures a JSON response for a URL prefix.
    #[allow(dead_code)]
    pub fn with_json_response(self, url: &str, status: u16, json: &str) -> Self {
        self.client.set_response(
            url,
            MockResponse::Success(
                Response::new(status, json.to_string())
                    .with_header("content-type", "application/json"),
            ),
        );
        self
    }

    /// Configures a transport error for a URL prefix.
    #[allow(dead_code)]
    pub fn with_connection_failure(self, url: &str) -> Self {
        self.client.set_response(
            url,
            MockResponse::Error(hubview::traits::HttpError::Connect(
                "connection refused".to_string(),
            )),
        );
        self
    }

    /// Builds the configured MockHttpClient.
    pub fn build(self) -> MockHttpClient {
        self.client
    }
}

impl Default for MockHttpConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_http_config() {
        let client = MockHttpConfig::new()
            .with_json_response("https://content.example.com/", 200, r#"{"id":"x"}"#)
            .build();

        let response = client
            .get("https://content.example.com/browse?uri=x", &Headers::new())
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.header("Content-Type"), Some("application/json"));
    }
}
