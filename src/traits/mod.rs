//! Trait abstractions for the collaborators of the view-model loader.
//!
//! These traits are the seams between the loading core and the outside
//! world, enabling dependency injection and mocking in tests.
//!
//! # Traits
//!
//! - [`ConnectivityStateResolver`] - current network reachability
//! - [`ContentProvider`] - local or remote raw content
//! - [`ViewModelBuilder`] - raw content to view model
//! - [`ViewModelLoaderDelegate`] - load outcome notifications
//! - [`Component`] / [`ActionObserver`] - action notifications for components
//! - [`HttpClient`] - HTTP GET for the remote content adapter

pub mod builder;
pub mod component;
pub mod connectivity;
pub mod content;
pub mod delegate;
pub mod http;

pub use builder::ViewModelBuilder;
pub use component::{ActionObserver, Component};
pub use connectivity::ConnectivityStateResolver;
pub use content::ContentProvider;
pub use delegate::ViewModelLoaderDelegate;
pub use http::{Headers, HttpClient, HttpError, Response};
