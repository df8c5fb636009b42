//! View-model builder trait.

use crate::error::BuildError;
use crate::models::{RawPayload, ViewModel};

/// Turns a provider payload into a view model.
pub trait ViewModelBuilder: Send + Sync {
    fn build(&self, payload: &RawPayload) -> Result<ViewModel, BuildError>;
}

impl<F> ViewModelBuilder for F
where
    F: Fn(&RawPayload) -> Result<ViewModel, BuildError> + Send + Sync,
{
    fn build(&self, payload: &RawPayload) -> Result<ViewModel, BuildError> {
        self(payload)
    }
}
