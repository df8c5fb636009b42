//! JSON view model builder.
//!
//! Documents look like:
//!
//! ```json
//! {
//!   "id": "browse",
//!   "title": "Browse",
//!   "header": { "id": "header", "component": "hub:header", "title": "Browse" },
//!   "body": [
//!     { "id": "row-1", "component": "hub:row", "title": "New releases",
//!       "target": "hub:browse/new", "children": [] }
//!   ],
//!   "overlays": [],
//!   "custom": {}
//! }
//! ```

use serde::Deserialize;
use std::collections::HashSet;

use crate::error::BuildError;
use crate::models::{ComponentModel, CustomData, Identifier, RawPayload, ViewModel};
use crate::traits::ViewModelBuilder;

#[derive(Debug, Deserialize)]
struct ViewDocument {
    id: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    header: Option<ComponentDocument>,
    #[serde(default)]
    body: Vec<ComponentDocument>,
    #[serde(default)]
    overlays: Vec<ComponentDocument>,
    #[serde(default)]
    custom: CustomData,
}

#[derive(Debug, Deserialize)]
struct ComponentDocument {
    id: String,
    component: Identifier,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    subtitle: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    target: Option<String>,
    #[serde(default)]
    custom: CustomData,
    #[serde(default)]
    children: Vec<ComponentDocument>,
}

impl ComponentDocument {
    fn into_model(self, seen: &mut HashSet<String>) -> Result<ComponentModel, BuildError> {
        if self.id.is_empty() {
            return Err(BuildError::Invalid("component with empty id".to_string()));
        }
        if !seen.insert(self.id.clone()) {
            return Err(BuildError::Invalid(format!("duplicate component id '{}'", self.id)));
        }

        let children = self
            .children
            .into_iter()
            .map(|child| child.into_model(seen))
            .collect::<Result<Vec<_>, _>>()?;

        let mut model = ComponentModel::new(self.id, self.component);
        model.title = self.title;
        model.subtitle = self.subtitle;
        model.description = self.description;
        model.target = self.target;
        model.custom = self.custom;
        model.children = children;
        Ok(model)
    }
}

/// Builds view models from JSON documents.
#[derive(Debug, Clone, Default)]
pub struct JsonViewModelBuilder {
    require_content: bool,
}

impl JsonViewModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject documents with no header, body or overlays.
    pub fn with_require_content(mut self, require: bool) -> Self {
        self.require_content = require;
        self
    }

    fn check_content_type(payload: &RawPayload) -> Result<(), BuildError> {
        match payload.content_type.as_deref() {
            None => Ok(()),
            Some(content_type) => {
                let mime = content_type
                    .split(';')
                    .next()
                    .unwrap_or_default()
                    .trim()
                    .to_ascii_lowercase();
                if mime == "application/json" || mime.ends_with("+json") {
                    Ok(())
                } else {
                    Err(BuildError::Malformed(format!(
                        "unsupported content type '{}'",
                        content_type
                    )))
                }
            }
        }
    }
}

impl ViewModelBuilder for JsonViewModelBuilder {
    fn build(&self, payload: &RawPayload) -> Result<ViewModel, BuildError> {
        if payload.is_empty() {
            return Err(BuildError::EmptyPayload);
        }
        Self::check_content_type(payload)?;

        let document: ViewDocument = serde_json::from_slice(&payload.body)?;
        if document.id.is_empty() {
            return Err(BuildError::Invalid("view model with empty id".to_string()));
        }

        let mut seen = HashSet::new();
        let header = document
            .header
            .map(|header| header.into_model(&mut seen))
            .transpose()?;
        let body = document
            .body
            .into_iter()
            .map(|c| c.into_model(&mut seen))
            .collect::<Result<Vec<_>, _>>()?;
        let overlays = document
            .overlays
            .into_iter()
            .map(|c| c.into_model(&mut seen))
            .collect::<Result<Vec<_>, _>>()?;

        let mut view_model = ViewModel::new(document.id);
        view_model.navigation_title = document.title;
        view_model.header = header;
        view_model.body = body;
        view_model.overlays = overlays;
        view_model.custom = document.custom;

        if self.require_content && view_model.is_empty() {
            return Err(BuildError::Invalid(format!(
                "view model '{}' has no components",
                view_model.id
            )));
        }

        tracing::trace!(
            view_model = %view_model.id,
            components = view_model.component_count(),
            source = %payload.source,
            "Built view model"
        );
        Ok(view_model)
    }
}
