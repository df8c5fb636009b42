//! Concrete implementations of trait abstractions.
//!
//! Production adapters implementing the traits defined in `crate::traits`.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`HttpContentProvider`] - remote content over HTTP
//! - [`FileContentProvider`] - local content cached on disk
//! - [`JsonViewModelBuilder`] - view models from JSON documents
//! - [`FixedConnectivity`] / [`WatchConnectivity`] - connectivity resolvers
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles for the loader's
//! collaborators.

pub mod connectivity;
pub mod file_content;
pub mod json_builder;
pub mod mock;
pub mod remote_content;
pub mod reqwest_http;

pub use connectivity::{
    spawn_connectivity_monitor, watch_connectivity, ConnectivityPublisher, FixedConnectivity,
    WatchConnectivity,
};
pub use file_content::FileContentProvider;
pub use json_builder::JsonViewModelBuilder;
pub use remote_content::HttpContentProvider;
pub use reqwest_http::ReqwestHttpClient;
