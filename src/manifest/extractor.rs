//! Dependency extraction from a single manifest
//!
//! Manifests are parsed strictly as data. Only the `dependencies` section is
//! read; every other field is ignored.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use log::{debug, trace};
use rayon::prelude::*;
use serde::Deserialize;

use crate::domain::DependencyDeclaration;
use crate::error::{Result, manifest_parse_failed, manifest_read_failed};

/// Structured-data format of a manifest, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Json,
    Yaml,
}

impl ManifestFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            _ => Self::Json,
        }
    }
}

/// The part of a package manifest this crate reads
#[derive(Debug, Default, Deserialize)]
struct PackageManifest {
    #[serde(default)]
    dependencies: Option<IndexMap<String, String>>,
}

fn parse_manifest(path: &Path, content: &str) -> Result<PackageManifest> {
    let display = || path.display().to_string();

    match ManifestFormat::from_path(path) {
        ManifestFormat::Json => {
            let value: serde_json::Value = serde_json::from_str(content)
                .map_err(|e| manifest_parse_failed(display(), format!("Invalid JSON: {e}")))?;
            if !value.is_object() {
                return Err(manifest_parse_failed(display(), "top level is not an object"));
            }
            serde_json::from_value(value)
                .map_err(|e| manifest_parse_failed(display(), e.to_string()))
        }
        ManifestFormat::Yaml => {
            let value: serde_yaml::Value = serde_yaml::from_str(content)
                .map_err(|e| manifest_parse_failed(display(), format!("Invalid YAML: {e}")))?;
            if !value.is_mapping() {
                return Err(manifest_parse_failed(display(), "top level is not a mapping"));
            }
            serde_yaml::from_value(value)
                .map_err(|e| manifest_parse_failed(display(), e.to_string()))
        }
    }
}

/// Read one manifest and list its runtime dependencies in declaration order
pub fn extract_dependencies(path: &Path) -> Result<Vec<DependencyDeclaration>> {
    let content = fs::read_to_string(path)
        .map_err(|e| manifest_read_failed(path.display().to_string(), e.to_string()))?;
    // Editors on Windows often prefix JSON files with a byte order mark
    let content = content.strip_prefix('\u{feff}').unwrap_or(&content);
    let manifest = parse_manifest(path, content)?;

    let declarations: Vec<DependencyDeclaration> = manifest
        .dependencies
        .unwrap_or_default()
        .into_iter()
        .map(|(name, spec)| DependencyDeclaration { name, spec })
        .collect();

    trace!(
        "{}: {} dependency declaration(s)",
        path.display(),
        declarations.len()
    );

    Ok(declarations)
}

/// Extract every manifest and flatten the declarations in input order.
///
/// The first failing manifest aborts the whole extraction. When several
/// manifests fail, a parallel run may report any one of them; pass
/// `parallel: false` to always get the earliest failure in path order.
pub fn extract_all(paths: &[PathBuf], parallel: bool) -> Result<Vec<DependencyDeclaration>> {
    let per_manifest: Vec<Vec<DependencyDeclaration>> = if parallel {
        paths
            .par_iter()
            .map(|path| extract_dependencies(path))
            .collect::<Result<_>>()?
    } else {
        paths
            .iter()
            .map(|path| extract_dependencies(path))
            .collect::<Result<_>>()?
    };

    let declarations: Vec<DependencyDeclaration> = per_manifest.into_iter().flatten().collect();
    debug!(
        "Extracted {} declaration(s) from {} manifest(s)",
        declarations.len(),
        paths.len()
    );

    Ok(declarations)
}
