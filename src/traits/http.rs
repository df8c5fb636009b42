//! HTTP client trait abstraction.
//!
//! The remote content provider talks to the network through this trait so
//! tests can substitute a mock client.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;

/// Request and response headers.
pub type Headers = HashMap<String, String>;

/// A completed HTTP exchange. Any status, including 4xx and 5xx, lands here.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub headers: Headers,
    pub body: Bytes,
}

impl Response {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: Headers::new(),
            body: body.into(),
        }
    }

    /// Add a header, replacing one of the same name.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Header lookup; names compare case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }
}

/// Transport failures. A response was never received.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HttpError {
    #[error("connection failed: {0}")]
    Connect(String),

    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP error: {0}")]
    Other(String),
}

/// Minimal HTTP client used by the remote content provider and the
/// connectivity monitor.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Perform a GET request.
    ///
    /// Non-2xx statuses are returned as a [`Response`], not as an error.
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError>;
}
