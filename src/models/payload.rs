//! Raw content handed from a content provider to a view-model builder.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which content provider role produced a payload or a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentSource {
    Local,
    Remote,
}

impl ContentSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentSource::Local => "local",
            ContentSource::Remote => "remote",
        }
    }
}

impl fmt::Display for ContentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unparsed content as supplied by a provider.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPayload {
    /// Provider role that supplied the bytes
    pub source: ContentSource,
    /// Content type if the provider knows it (e.g. `application/json`)
    pub content_type: Option<String>,
    /// Payload body
    pub body: Bytes,
}

impl RawPayload {
    pub fn new(source: ContentSource, body: impl Into<Bytes>) -> Self {
        Self {
            source,
            content_type: None,
            body: body.into(),
        }
    }

    /// Attach a content type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }
}
