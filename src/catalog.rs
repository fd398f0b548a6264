//! Host module catalog
//!
//! The catalog describes what the hosting runtime already provides:
//! - `native`: builtin module names, always treated as externals
//! - `installed`: module name to the versions the host can serve, default first
//!
//! How the host assembles this table is outside this crate; callers hand it in
//! through [`CatalogProvider`].

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::{Result, invalid_catalog};

/// Two-part module catalog supplied by the hosting runtime
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleCatalog {
    /// Builtin modules
    pub native: BTreeSet<String>,

    /// Installed module versions, ordered with the default version first
    pub installed: BTreeMap<String, Vec<String>>,
}

impl ModuleCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a builtin module name
    #[must_use]
    pub fn with_native(mut self, name: impl Into<String>) -> Self {
        self.native.insert(name.into());
        self
    }

    /// Set the available versions for a module, default first
    #[must_use]
    pub fn with_installed<I, S>(mut self, name: impl Into<String>, versions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.installed
            .insert(name.into(), versions.into_iter().map(Into::into).collect());
        self
    }

    /// Parse a catalog from its JSON form and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(json)
            .map_err(|e| invalid_catalog(format!("Invalid JSON: {e}")))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Reject catalogs the classifier cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.native.iter().any(|name| name.trim().is_empty()) {
            return Err(invalid_catalog("native module names cannot be empty"));
        }

        if let Some((_, versions)) = self
            .installed
            .iter()
            .find(|(name, _)| name.trim().is_empty())
        {
            return Err(invalid_catalog(format!(
                "installed module with versions {versions:?} has an empty name"
            )));
        }

        Ok(())
    }

    /// Versions the host can serve for `name`, if it knows the module at all
    pub fn available(&self, name: &str) -> Option<&[String]> {
        self.installed.get(name).map(Vec::as_slice)
    }

    /// The version served for an unscoped `name`: the first listed one
    pub fn default_version(&self, name: &str) -> Option<&str> {
        self.available(name)
            .and_then(|versions| versions.first())
            .map(String::as_str)
    }

    pub fn is_native(&self, name: &str) -> bool {
        self.native.contains(name)
    }
}

/// Source of the host module catalog for one classification run
pub trait CatalogProvider {
    fn load_catalog(&self) -> Result<ModuleCatalog>;
}

impl CatalogProvider for ModuleCatalog {
    fn load_catalog(&self) -> Result<ModuleCatalog> {
        Ok(self.clone())
    }
}

impl<P: CatalogProvider + ?Sized> CatalogProvider for &P {
    fn load_catalog(&self) -> Result<ModuleCatalog> {
        (**self).load_catalog()
    }
}
