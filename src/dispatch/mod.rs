//! Callback execution contexts.
//!
//! - [`ImmediateExecutor`] - run on the completing task (default)
//! - [`TokioExecutor`] - spawn on a runtime handle
//! - [`DispatchQueue`] - marshal onto a main context drained by its owner

mod executor;
mod queue;

pub use executor::{CallbackExecutor, ImmediateExecutor, Job, TokioExecutor};
pub use queue::{DispatchQueue, DispatchQueueHandle};
