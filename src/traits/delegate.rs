//! Delegate notified about load outcomes.

use std::sync::Arc;

use crate::error::LoadError;
use crate::loader::ViewModelLoader;
use crate::models::ViewModel;

/// Receives exactly one of the two callbacks per load cycle.
///
/// Callbacks run on the loader's callback executor, never from inside
/// `load_view_model`, and only after the loader state is terminal. Calling
/// `load_view_model` again from a callback is allowed.
pub trait ViewModelLoaderDelegate: Send + Sync {
    /// A view model was loaded.
    fn did_load_view_model(&self, loader: &ViewModelLoader, view_model: Arc<ViewModel>);

    /// Loading failed.
    fn did_fail_loading(&self, loader: &ViewModelLoader, error: &LoadError);
}
