//! Externals - decide which dependencies a hosted runtime already provides
//!
//! Given a program's entry file, every dependency manifest below the entry's
//! directory is read and each declared dependency is classified:
//! - **external**: the host runtime's default version satisfies the declared range
//! - **bundled**: it does not, so the dependency must be packaged with the program
//!
//! The host's builtin and installed modules come from a [`CatalogProvider`].
//!
//! ```no_run
//! use externals::{ModuleCatalog, calculate_externals};
//!
//! let catalog = ModuleCatalog::new()
//!     .with_native("fs")
//!     .with_installed("lodash", ["4.17.21"]);
//! let result = calculate_externals("app/index.js", &catalog)?;
//! assert!(result.is_external("fs"));
//! # Ok::<(), externals::ExternalsError>(())
//! ```

use std::path::{Path, PathBuf};

use log::debug;

pub mod catalog;
pub mod classifier;
pub mod config;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod range;

#[cfg(test)]
mod test_fixtures;

pub use catalog::{CatalogProvider, ModuleCatalog};
pub use config::ExternalsConfig;
pub use domain::{BundledDependency, ClassificationResult, DependencyDeclaration};
pub use error::{ExternalsError, Result};

/// Directory containing the entry file; a bare file name resolves to `.`
pub fn entry_directory(entry: impl AsRef<Path>) -> PathBuf {
    let entry = entry.as_ref();
    match entry.parent() {
        Some(parent) if parent.as_os_str().is_empty() => PathBuf::from("."),
        Some(parent) => parent.to_path_buf(),
        None => entry.to_path_buf(),
    }
}

/// Classify the dependencies reachable from `entry` with default options
pub fn calculate_externals<P>(entry: impl AsRef<Path>, catalog: &P) -> Result<ClassificationResult>
where
    P: CatalogProvider + ?Sized,
{
    calculate_externals_with_config(entry, catalog, &ExternalsConfig::default())
}

/// Classify the dependencies reachable from `entry`.
///
/// Runs catalog loading, manifest discovery, extraction and classification in
/// that order, returning the first error any stage produces.
pub fn calculate_externals_with_config<P>(
    entry: impl AsRef<Path>,
    catalog: &P,
    config: &ExternalsConfig,
) -> Result<ClassificationResult>
where
    P: CatalogProvider + ?Sized,
{
    let catalog = catalog.load_catalog()?;
    catalog.validate()?;

    let dir = entry_directory(entry);
    debug!("Calculating externals for {}", dir.display());

    let paths = manifest::locate_manifests(&dir, config)?;
    let dependencies = manifest::extract_all(&paths, config.parallel)?;

    Ok(classifier::classify(&dependencies, &catalog))
}
