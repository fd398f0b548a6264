//! Common test utilities for externals integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use externals::ModuleCatalog;
use tempfile::TempDir;

/// A throwaway project directory for integration tests
pub struct TestWorkspace {
    /// Temporary directory, removed on drop
    pub temp: TempDir,
    /// Path to the project root
    pub path: PathBuf,
}

impl TestWorkspace {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in the workspace, creating parent directories
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Write a `package.json` under `dir` (relative, "" for the root) declaring `deps` in order
    pub fn write_manifest(&self, dir: &str, deps: &[(&str, &str)]) {
        let entries: Vec<String> = deps
            .iter()
            .map(|(name, spec)| format!("\"{name}\": \"{spec}\""))
            .collect();
        let body = format!(
            "{{\n  \"name\": \"{}\",\n  \"dependencies\": {{ {} }}\n}}\n",
            if dir.is_empty() { "root" } else { dir },
            entries.join(", ")
        );
        self.write_file(&join_rel(dir, "package.json"), &body);
    }

    /// Path to an entry file inside the workspace; the file itself is created empty
    pub fn entry(&self, path: &str) -> PathBuf {
        self.write_file(path, "module.exports = {};\n");
        self.path.join(path)
    }

    /// Copy a fixture project into the workspace root
    pub fn copy_fixture_project(&self, fixture_name: &str) {
        let fixture_path = fixtures_dir().join("projects").join(fixture_name);
        copy_dir_recursive(&fixture_path, &self.path).expect("Failed to copy fixture project");
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("common")
        .join("fixtures")
}

/// Load a host catalog fixture
pub fn fixture_catalog(name: &str) -> ModuleCatalog {
    let path = fixtures_dir().join("catalogs").join(format!("{name}.json"));
    let json = std::fs::read_to_string(&path).expect("Failed to read catalog fixture");
    ModuleCatalog::from_json(&json).expect("Failed to parse catalog fixture")
}

fn join_rel(dir: &str, file: &str) -> String {
    if dir.is_empty() {
        file.to_string()
    } else {
        format!("{dir}/{file}")
    }
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    if !dst.exists() {
        std::fs::create_dir_all(dst)?;
    }

    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if entry.file_type()?.is_dir() {
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }

    Ok(())
}
