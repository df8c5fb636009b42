//! Mock content provider for testing.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::{Notify, Semaphore};

use crate::error::ProviderError;
use crate::models::{ContentRequest, ContentSource, RawPayload};
use crate::traits::ContentProvider;

/// What the mock does when fetched.
#[derive(Debug, Clone)]
pub enum MockContent {
    /// Return this payload
    Payload(RawPayload),
    /// Return this error
    Fail(ProviderError),
    /// Panic with this message
    Panic(String),
    /// Never complete
    Hang,
}

/// Mock content provider with configurable behavior.
///
/// Fetches can be held at a gate until the test calls [`release`], which
/// lets tests observe the loader while a load is in flight.
///
/// # Example
///
/// ```ignore
/// let remote = MockContentProvider::remote(r#"{"id":"browse"}"#);
/// remote.hold();
/// let handle = loader.load_view_model();
/// remote.wait_for_calls(1).await;
/// assert!(loader.is_loading());
/// remote.release(1);
/// ```
///
/// [`release`]: MockContentProvider::release
#[derive(Debug, Clone)]
pub struct MockContentProvider {
    source: ContentSource,
    behavior: Arc<Mutex<MockContent>>,
    delay: Arc<Mutex<Option<Duration>>>,
    gate: Arc<Mutex<Option<Arc<Semaphore>>>>,
    requests: Arc<Mutex<Vec<ContentRequest>>>,
    calls: Arc<AtomicUsize>,
    called: Arc<Notify>,
}

impl MockContentProvider {
    /// Create a provider for `source` with the given behavior.
    pub fn new(source: ContentSource, behavior: MockContent) -> Self {
        Self {
            source,
            behavior: Arc::new(Mutex::new(behavior)),
            delay: Arc::new(Mutex::new(None)),
            gate: Arc::new(Mutex::new(None)),
            requests: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(AtomicUsize::new(0)),
            called: Arc::new(Notify::new()),
        }
    }

    /// Remote provider returning `body` as JSON.
    pub fn remote(body: &str) -> Self {
        Self::new(ContentSource::Remote, MockContent::Payload(json_payload(ContentSource::Remote, body)))
    }

    /// Local provider returning `body` as JSON.
    pub fn local(body: &str) -> Self {
        Self::new(ContentSource::Local, MockContent::Payload(json_payload(ContentSource::Local, body)))
    }

    /// Provider that always fails with `error`.
    pub fn failing(source: ContentSource, error: ProviderError) -> Self {
        Self::new(source, MockContent::Fail(error))
    }

    /// Provider that panics on every fetch.
    pub fn panicking(source: ContentSource) -> Self {
        Self::new(source, MockContent::Panic("mock provider panic".to_string()))
    }

    /// Provider whose fetches never complete.
    pub fn hanging(source: ContentSource) -> Self {
        Self::new(source, MockContent::Hang)
    }

    /// Replace the behavior for subsequent fetches.
    pub fn set_behavior(&self, behavior: MockContent) {
        *self.behavior.lock().unwrap() = behavior;
    }

    /// Return `body` as JSON on subsequent fetches.
    pub fn set_body(&self, body: &str) {
        self.set_behavior(MockContent::Payload(json_payload(self.source, body)));
    }

    /// Delay every fetch by `delay`.
    pub fn set_delay(&self, delay: Option<Duration>) {
        *self.delay.lock().unwrap() = delay;
    }

    /// Hold subsequent fetches until released.
    pub fn hold(&self) {
        *self.gate.lock().unwrap() = Some(Arc::new(Semaphore::new(0)));
    }

    /// Let `count` held fetches proceed.
    pub fn release(&self, count: usize) {
        if let Some(gate) = self.gate.lock().unwrap().as_ref() {
            gate.add_permits(count);
        }
    }

    /// Number of fetches started.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Requests seen so far.
    pub fn requests(&self) -> Vec<ContentRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Wait until at least `count` fetches have started.
    pub async fn wait_for_calls(&self, count: usize) {
        loop {
            let notified = self.called.notified();
            if self.call_count() >= count {
                return;
            }
            notified.await;
        }
    }
}

fn json_payload(source: ContentSource, body: &str) -> RawPayload {
    RawPayload::new(source, body.to_string()).with_content_type("application/json")
}

#[async_trait]
impl ContentProvider for MockContentProvider {
    async fn fetch(&self, request: &ContentRequest) -> Result<RawPayload, ProviderError> {
        self.requests.lock().unwrap().push(request.clone());
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.called.notify_waiters();

        let gate = self.gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            if let Ok(permit) = gate.acquire().await {
                permit.forget();
            }
        }

        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let behavior = self.behavior.lock().unwrap().clone();
        match behavior {
            MockContent::Payload(payload) => Ok(payload),
            MockContent::Fail(error) => Err(error),
            MockContent::Panic(message) => panic!("{}", message),
            MockContent::Hang => std::future::pending().await,
        }
    }

    fn name(&self) -> &str {
        match self.source {
            ContentSource::Local => "mock-local",
            ContentSource::Remote => "mock-remote",
        }
    }
}
