//! Classification result types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Metadata recorded for a dependency that must travel with the package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundledDependency {
    /// Versions the host offers for this name; `None` when the host has none
    pub available: Option<Vec<String>>,

    /// The effective range that the default version failed to satisfy
    pub spec: String,
}

/// Partition of dependencies into host-provided externals and bundled ones.
///
/// A name can appear in both maps: `externals` is add-only while `bundled`
/// keeps the last unsatisfied declaration for a name. Callers packaging the
/// result decide how to treat the overlap (see [`Self::overlapping`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub externals: BTreeMap<String, bool>,
    pub bundled: BTreeMap<String, BundledDependency>,
}

impl ClassificationResult {
    /// Start a result with every native module already external
    pub fn seeded<I, S>(native: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            externals: native.into_iter().map(|name| (name.into(), true)).collect(),
            bundled: BTreeMap::new(),
        }
    }

    pub fn mark_external(&mut self, name: &str) {
        self.externals.insert(name.to_string(), true);
    }

    /// Record `name` as bundled, replacing any earlier record
    pub fn mark_bundled(&mut self, name: &str, available: Option<Vec<String>>, spec: &str) {
        self.bundled.insert(
            name.to_string(),
            BundledDependency {
                available,
                spec: spec.to_string(),
            },
        );
    }

    pub fn is_external(&self, name: &str) -> bool {
        self.externals.get(name).copied().unwrap_or(false)
    }

    pub fn is_bundled(&self, name: &str) -> bool {
        self.bundled.contains_key(name)
    }

    /// Names claimed by both maps
    pub fn overlapping(&self) -> Vec<&str> {
        self.bundled
            .keys()
            .filter(|name| self.externals.contains_key(*name))
            .map(String::as_str)
            .collect()
    }

    /// Stable JSON rendering; identical results render byte-identically
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
