//! Manifest discovery below an entry directory
//!
//! The entry directory's own manifest always comes first, whether or not it
//! exists on disk. Every other match of `**/<manifest>` follows in traversal
//! order, sorted by file name within each directory.

use std::path::{Path, PathBuf};

use log::debug;
use walkdir::{DirEntry, WalkDir};
use wax::{CandidatePath, Glob, Pattern};

use crate::config::ExternalsConfig;
use crate::error::{ExternalsError, Result, traversal_failed};

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

/// Find every manifest under `dir`
pub fn locate_manifests(dir: &Path, config: &ExternalsConfig) -> Result<Vec<PathBuf>> {
    let mut paths = vec![dir.join(&config.manifest_file_name)];

    let pattern = config.manifest_glob();
    let glob = Glob::new(&pattern).map_err(|e| {
        traversal_failed(
            dir.display().to_string(),
            format!("invalid manifest pattern '{pattern}': {e}"),
        )
    })?;

    let include_hidden = config.include_hidden;
    let walker = WalkDir::new(dir)
        .follow_links(config.follow_links)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || include_hidden || !is_hidden(e));

    for entry in walker {
        let entry = entry.map_err(ExternalsError::from)?;
        if entry.depth() == 0 || entry.file_type().is_dir() {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(dir) else {
            continue;
        };
        // The root manifest is already first in the list
        if relative == Path::new(&config.manifest_file_name) {
            continue;
        }

        let relative = relative.to_string_lossy().replace('\\', "/");
        if glob.matched(&CandidatePath::from(relative.as_str())).is_some() {
            paths.push(dir.join(&relative));
        }
    }

    debug!(
        "Located {} manifest(s) under {}",
        paths.len(),
        dir.display()
    );

    Ok(paths)
}
