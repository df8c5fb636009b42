//! Component capabilities.
//!
//! [`Component`] is the base capability every component has;
//! [`ActionObserver`] is an orthogonal extension a component opts into to
//! hear about actions performed in its view.

use crate::models::ActionContext;

/// Base capability of a component.
pub trait Component: Send + Sync {
    /// Identifier of the component model this component is rendering.
    fn identifier(&self) -> &str;
}

/// A component that wants to know whenever an action was performed in the
/// view it is used in, including actions it did not trigger itself.
///
/// Purely observational: there is no return value and no way to veto.
pub trait ActionObserver: Component {
    fn action_performed(&self, context: &ActionContext);
}
