//! Mock implementations for testing.
//!
//! This module provides mock implementations of the loader's collaborators,
//! enabling tests without network or file system access.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`MockContentProvider`] - content provider with failure, panic and gating modes
//! - [`MockConnectivity`] - connectivity resolver tests can flip
//! - [`RecordingDelegate`] - loader delegate that records callbacks
//! - [`RecordingObserver`] / [`PanickingObserver`] - action observers

pub mod connectivity;
pub mod content;
pub mod delegate;
pub mod http;
pub mod observer;

pub use connectivity::MockConnectivity;
pub use content::{MockContent, MockContentProvider};
pub use delegate::{DelegateEvent, RecordingDelegate};
pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use observer::{PanickingObserver, RecordingObserver};
