//! Manifest discovery and dependency extraction
//!
//! - [`locator`]: finds manifest files below an entry directory
//! - [`extractor`]: reads the `dependencies` section of each manifest

pub mod extractor;
pub mod locator;

pub use extractor::{ManifestFormat, extract_all, extract_dependencies};
pub use locator::locate_manifests;
