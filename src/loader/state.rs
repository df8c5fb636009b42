//! Loader state machine values.

use std::sync::Arc;

use crate::error::LoadError;
use crate::models::ViewModel;

/// Result of one load cycle.
pub type LoadOutcome = Result<Arc<ViewModel>, LoadError>;

/// Where a loader is in its load cycle.
///
/// `Completed` and `Failed` keep the last outcome around; both accept a new
/// `load_view_model` call just like `Idle`.
#[derive(Debug, Clone, Default)]
pub enum LoaderState {
    #[default]
    Idle,
    Loading {
        cycle: u64,
    },
    Completed(Arc<ViewModel>),
    Failed(LoadError),
}

impl LoaderState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoaderState::Loading { .. })
    }

    /// True for `Completed` and `Failed`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, LoaderState::Completed(_) | LoaderState::Failed(_))
    }

    pub fn view_model(&self) -> Option<&Arc<ViewModel>> {
        match self {
            LoaderState::Completed(vm) => Some(vm),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&LoadError> {
        match self {
            LoaderState::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LoaderState::Idle => "idle",
            LoaderState::Loading { .. } => "loading",
            LoaderState::Completed(_) => "completed",
            LoaderState::Failed(_) => "failed",
        }
    }
}

impl From<&LoadOutcome> for LoaderState {
    fn from(outcome: &LoadOutcome) -> Self {
        match outcome {
            Ok(vm) => LoaderState::Completed(vm.clone()),
            Err(err) => LoaderState::Failed(err.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        let state = LoaderState::default();
        assert_eq!(state.as_str(), "idle");
        assert!(!state.is_loading());
        assert!(!state.is_terminal());
    }

    #[test]
    fn test_state_from_outcome() {
        let ok: LoadOutcome = Ok(Arc::new(ViewModel::new("home")));
        let state = LoaderState::from(&ok);
        assert!(state.is_terminal());
        assert_eq!(state.view_model().map(|vm| vm.id.as_str()), Some("home"));
        assert!(state.error().is_none());

        let err: LoadOutcome = Err(LoadError::Cancelled);
        let state = LoaderState::from(&err);
        assert_eq!(state.as_str(), "failed");
        assert_eq!(state.error(), Some(&LoadError::Cancelled));
    }

    #[test]
    fn test_loading_state() {
        let state = LoaderState::Loading { cycle: 3 };
        assert!(state.is_loading());
        assert!(!state.is_terminal());
        assert!(state.view_model().is_none());
    }
}
