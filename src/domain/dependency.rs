//! Dependency declarations read from manifests

use serde::{Deserialize, Serialize};

/// One entry of a manifest's `dependencies` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyDeclaration {
    pub name: String,

    /// Version range as written in the manifest; may be empty
    pub spec: String,
}

impl DependencyDeclaration {
    pub fn new(name: impl Into<String>, spec: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            spec: spec.into(),
        }
    }

    /// The range to test against, with an empty spec meaning "any version"
    pub fn effective_spec(&self) -> &str {
        if self.spec.is_empty() { "*" } else { &self.spec }
    }
}
