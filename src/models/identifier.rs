//! Namespaced identifiers for components and actions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A `namespace:name` pair identifying a component or an action.
///
/// Namespaces let several feature teams register components and actions
/// without colliding on plain names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identifier {
    namespace: String,
    name: String,
}

/// Error returned when a string is not a valid `namespace:name` identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid identifier '{0}': expected 'namespace:name'")]
pub struct ParseIdentifierError(pub String);

impl Identifier {
    /// Create a new identifier from its two parts.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.name)
    }
}

impl FromStr for Identifier {
    type Err = ParseIdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((namespace, name))
                if !namespace.is_empty() && !name.is_empty() && !name.contains(':') =>
            {
                Ok(Self::new(namespace, name))
            }
            _ => Err(ParseIdentifierError(s.to_string())),
        }
    }
}

impl TryFrom<String> for Identifier {
    type Error = ParseIdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Identifier> for String {
    fn from(id: Identifier) -> Self {
        id.to_string()
    }
}
