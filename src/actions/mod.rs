//! Action observation for components.

mod registry;

pub use registry::{ActionObserverRegistry, NotifyReport, ObserverId};
