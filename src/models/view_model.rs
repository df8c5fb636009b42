//! Render-ready view model values.
//!
//! A [`ViewModel`] is produced once per successful load and handed to the
//! loader's delegate behind an `Arc`; nothing mutates it afterwards.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

use super::identifier::Identifier;

/// Custom data attached to view and component models.
pub type CustomData = Map<String, Value>;

/// Model for a single component in a view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentModel {
    /// Identifier unique within the view model
    pub id: String,
    /// Which component renders this model
    pub component: Identifier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// URI to navigate to when the component is selected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub custom: CustomData,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ComponentModel>,
}

impl ComponentModel {
    pub fn new(id: impl Into<String>, component: Identifier) -> Self {
        Self {
            id: id.into(),
            component,
            title: None,
            subtitle: None,
            description: None,
            target: None,
            custom: Map::new(),
            children: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn with_child(mut self, child: ComponentModel) -> Self {
        self.children.push(child);
        self
    }

    /// Count this model and all of its descendants.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(ComponentModel::count).sum::<usize>()
    }
}

/// Fully-resolved content for one screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigation_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<ComponentModel>,
    pub body: Vec<ComponentModel>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub overlays: Vec<ComponentModel>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub custom: CustomData,
    /// When the builder produced this view model
    pub built_at: DateTime<Utc>,
}

impl ViewModel {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            navigation_title: None,
            header: None,
            body: Vec::new(),
            overlays: Vec::new(),
            custom: Map::new(),
            built_at: Utc::now(),
        }
    }

    pub fn with_navigation_title(mut self, title: impl Into<String>) -> Self {
        self.navigation_title = Some(title.into());
        self
    }

    pub fn with_header(mut self, header: ComponentModel) -> Self {
        self.header = Some(header);
        self
    }

    pub fn with_body_component(mut self, component: ComponentModel) -> Self {
        self.body.push(component);
        self
    }

    pub fn with_overlay(mut self, component: ComponentModel) -> Self {
        self.overlays.push(component);
        self
    }

    pub fn with_custom(mut self, key: impl Into<String>, value: Value) -> Self {
        self.custom.insert(key.into(), value);
        self
    }

    /// True when the view model has nothing to render.
    pub fn is_empty(&self) -> bool {
        self.header.is_none() && self.body.is_empty() && self.overlays.is_empty()
    }

    /// Total number of component models, children included.
    pub fn component_count(&self) -> usize {
        self.header.iter().map(ComponentModel::count).sum::<usize>()
            + self.body.iter().map(ComponentModel::count).sum::<usize>()
            + self.overlays.iter().map(ComponentModel::count).sum::<usize>()
    }

    /// Find a component model by id anywhere in the tree.
    pub fn find_component(&self, id: &str) -> Option<&ComponentModel> {
        fn search<'a>(models: &'a [ComponentModel], id: &str) -> Option<&'a ComponentModel> {
            for model in models {
                if model.id == id {
                    return Some(model);
                }
                if let Some(found) = search(&model.children, id) {
                    return Some(found);
                }
            }
            None
        }

        self.header
            .as_ref()
            .and_then(|h| search(std::slice::from_ref(h), id))
            .or_else(|| search(&self.body, id))
            .or_else(|| search(&self.overlays, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str) -> ComponentModel {
        ComponentModel::new(id, Identifier::new("hub", "row"))
    }

    #[test]
    fn test_empty_view_model() {
        let vm = ViewModel::new("home");
        assert!(vm.is_empty());
        assert_eq!(vm.component_count(), 0);
    }

    #[test]
    fn test_component_count_includes_children() {
        let vm = ViewModel::new("home")
            .with_header(row("header"))
            .with_body_component(row("a").with_child(row("a.1")).with_child(row("a.2")))
            .with_overlay(row("overlay"));

        assert!(!vm.is_empty());
        assert_eq!(vm.component_count(), 5);
    }

    #[test]
    fn test_find_component() {
        let vm = ViewModel::new("home")
            .with_header(row("header"))
            .with_body_component(row("a").with_child(row("nested").with_title("Nested")));

        assert_eq!(vm.find_component("header").map(|c| c.id.as_str()), Some("header"));
        assert_eq!(
            vm.find_component("nested").and_then(|c| c.title.as_deref()),
            Some("Nested")
        );
        assert!(vm.find_component("missing").is_none());
    }

    #[test]
    fn test_serialize_skips_empty_fields() {
        let vm = ViewModel::new("home").with_body_component(row("a"));
        let json = serde_json::to_value(&vm).unwrap();

        assert_eq!(json["id"], "home");
        assert_eq!(json["body"][0]["component"], "hub:row");
        assert!(json.get("header").is_none());
        assert!(json.get("overlays").is_none());
        assert!(json["body"][0].get("children").is_none());
    }
}
