//! Options for a classification run
//!
//! `ExternalsConfig` is an in-memory options struct. It derives `Deserialize`
//! so a host pipeline can embed it in its own configuration file; loading that
//! file is the caller's job.

use serde::{Deserialize, Serialize};

/// Default manifest file name searched for below the entry directory
pub const DEFAULT_MANIFEST_FILE_NAME: &str = "package.json";

/// Options controlling manifest discovery and extraction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExternalsConfig {
    /// File name of a dependency manifest (e.g. `package.json`, `package.yaml`)
    pub manifest_file_name: String,

    /// Descend into dot-prefixed directories and match dot-prefixed files
    pub include_hidden: bool,

    /// Follow symbolic links while searching
    pub follow_links: bool,

    /// Read manifests on the rayon thread pool
    pub parallel: bool,
}

impl Default for ExternalsConfig {
    fn default() -> Self {
        Self {
            manifest_file_name: DEFAULT_MANIFEST_FILE_NAME.to_string(),
            include_hidden: false,
            follow_links: false,
            parallel: true,
        }
    }
}

impl ExternalsConfig {
    /// Use a different manifest file name
    #[must_use]
    pub fn with_manifest_file_name(mut self, name: impl Into<String>) -> Self {
        self.manifest_file_name = name.into();
        self
    }

    /// Toggle parallel extraction
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Toggle searching hidden entries
    #[must_use]
    pub fn with_include_hidden(mut self, include_hidden: bool) -> Self {
        self.include_hidden = include_hidden;
        self
    }

    /// Glob matched against paths relative to the entry directory
    pub fn manifest_glob(&self) -> String {
        format!("**/{}", self.manifest_file_name)
    }
}
