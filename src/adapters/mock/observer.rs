//! Action observers for testing.

use std::sync::Mutex;

use crate::models::ActionContext;
use crate::traits::{ActionObserver, Component};

/// Observer that records every action context it receives.
#[derive(Debug)]
pub struct RecordingObserver {
    identifier: String,
    contexts: Mutex<Vec<ActionContext>>,
}

impl RecordingObserver {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            contexts: Mutex::new(Vec::new()),
        }
    }

    pub fn contexts(&self) -> Vec<ActionContext> {
        self.contexts.lock().unwrap().clone()
    }
}

impl Component for RecordingObserver {
    fn identifier(&self) -> &str {
        &self.identifier
    }
}

impl ActionObserver for RecordingObserver {
    fn action_performed(&self, context: &ActionContext) {
        self.contexts.lock().unwrap().push(context.clone());
    }
}

/// Observer that panics whenever an action is performed.
#[derive(Debug)]
pub struct PanickingObserver {
    identifier: String,
}

impl PanickingObserver {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
        }
    }
}

impl Component for PanickingObserver {
    fn identifier(&self) -> &str {
        &self.identifier
    }
}

impl ActionObserver for PanickingObserver {
    fn action_performed(&self, _context: &ActionContext) {
        panic!("observer {} failed", self.identifier);
    }
}
