//! Error types and handling for externals classification
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`fs`]: Directory traversal errors
//! - [`manifest`]: Manifest read and parse errors
//! - [`catalog`]: Host module catalog errors

pub mod catalog;
pub mod fs;
pub mod manifest;

pub use catalog::invalid as invalid_catalog;
pub use fs::traversal_failed;
pub use manifest::{parse_failed as manifest_parse_failed, read_failed as manifest_read_failed};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for externals classification
#[derive(Error, Diagnostic, Debug)]
pub enum ExternalsError {
    // File system errors
    #[error("Failed to search for manifests under '{path}': {reason}")]
    #[diagnostic(
        code(externals::fs::traversal_failed),
        help("Check that the entry directory exists and is readable")
    )]
    FilesystemError { path: String, reason: String },

    // Manifest errors
    /// The manifest is missing or unreadable. Malformed content is reported as
    /// [`Self::ManifestParseError`]; use [`Self::is_manifest_error`] to match both.
    #[error("Failed to read manifest '{path}': {reason}")]
    #[diagnostic(
        code(externals::manifest::read_failed),
        help(
            "Every located manifest must exist and be readable, including the entry directory's own"
        )
    )]
    ManifestReadError { path: String, reason: String },

    /// The manifest is not valid structured data or has a malformed `dependencies` section
    #[error("Failed to parse manifest '{path}': {reason}")]
    #[diagnostic(
        code(externals::manifest::parse_failed),
        help(
            "Manifests must be structured data with 'dependencies' mapping names to version ranges"
        )
    )]
    ManifestParseError { path: String, reason: String },

    // Catalog errors
    #[error("Invalid host module catalog: {message}")]
    #[diagnostic(code(externals::catalog::invalid))]
    InvalidCatalogError { message: String },
}

impl ExternalsError {
    /// Whether this error came from reading or parsing a single manifest
    pub fn is_manifest_error(&self) -> bool {
        matches!(
            self,
            Self::ManifestReadError { .. } | Self::ManifestParseError { .. }
        )
    }
}

impl From<walkdir::Error> for ExternalsError {
    fn from(err: walkdir::Error) -> Self {
        let path = err
            .path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "unknown".to_string());
        ExternalsError::FilesystemError {
            path,
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ExternalsError>;
