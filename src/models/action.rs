//! Action context passed to action observers.

use serde::Serialize;
use serde_json::{Map, Value};

use super::identifier::Identifier;

/// What caused an action to be performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionTrigger {
    /// The user selected a component
    Selection,
    /// A component triggered a custom action itself
    Custom,
}

/// Contextual information about a performed action.
///
/// Observers receive this after the action ran; they cannot veto or change it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionContext {
    /// Which action ran
    pub action: Identifier,
    pub trigger: ActionTrigger,
    /// URI of the view the action was performed in
    pub view_uri: String,
    /// Id of the component model that triggered the action, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_id: Option<String>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub custom_data: Map<String, Value>,
}

impl ActionContext {
    pub fn new(action: Identifier, trigger: ActionTrigger, view_uri: impl Into<String>) -> Self {
        Self {
            action,
            trigger,
            view_uri: view_uri.into(),
            component_id: None,
            custom_data: Map::new(),
        }
    }

    /// Context for a default selection action on a component.
    pub fn selection(view_uri: impl Into<String>, component_id: impl Into<String>) -> Self {
        Self::new(
            Identifier::new("hub", "selection"),
            ActionTrigger::Selection,
            view_uri,
        )
        .with_component(component_id)
    }

    pub fn with_component(mut self, component_id: impl Into<String>) -> Self {
        self.component_id = Some(component_id.into());
        self
    }

    pub fn with_data(mut self, key: impl Into<String>, value: Value) -> Self {
        self.custom_data.insert(key.into(), value);
        self
    }

    /// Whether the given component triggered this action.
    pub fn was_triggered_by(&self, component_id: &str) -> bool {
        self.component_id.as_deref() == Some(component_id)
    }
}
