//! hubview - view-model loading core for component-driven UIs
//!
//! A [`loader::ViewModelLoader`] resolves connectivity, consults local and
//! remote content providers, builds a view model and reports exactly one
//! outcome per load to its delegate. Components that want to hear about
//! actions performed in their view implement [`traits::ActionObserver`] and
//! register with an [`actions::ActionObserverRegistry`].
//!
//! This library exposes modules for use in integration tests.

pub mod actions;
pub mod adapters;
pub mod cli;
pub mod dispatch;
pub mod error;
pub mod loader;
pub mod models;
pub mod traits;
