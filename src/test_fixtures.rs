//! Test fixtures for building manifest trees on disk.
//!
//! ```ignore
//! use crate::test_fixtures::{create_temp_dir, create_test_files};
//!
//! let temp = create_temp_dir();
//! create_test_files(&temp, &[("package.json", r#"{"dependencies":{}}"#)]);
//! ```

use std::env;
use std::path::PathBuf;

use tempfile::TempDir;

/// Returns an absolute directory for temp dirs, even when TMPDIR is relative.
pub fn temp_dir_base() -> PathBuf {
    let t = env::temp_dir();
    if t.is_absolute() {
        return t;
    }
    #[cfg(windows)]
    {
        env::var("TEMP")
            .or_else(|_| env::var("TMP"))
            .map_or_else(|_| PathBuf::from("C:\\Windows\\Temp"), PathBuf::from)
    }
    #[cfg(not(windows))]
    {
        PathBuf::from("/tmp")
    }
}

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new_in(temp_dir_base()).expect("Failed to create temp directory")
}

/// Create files from (relative path, content) pairs, creating parent directories.
///
/// # Panics
///
/// Panics if any file cannot be created.
pub fn create_test_files(temp: &TempDir, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = temp.path().join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&full_path, content).expect("Failed to write test file");
    }
}

/// Build a `package.json` body declaring the given dependencies in order.
pub fn manifest_json(deps: &[(&str, &str)]) -> String {
    let entries: Vec<String> = deps
        .iter()
        .map(|(name, spec)| format!("{}: {}", quote(name), quote(spec)))
        .collect();
    format!(
        "{{\"name\": \"fixture\", \"dependencies\": {{{}}}}}",
        entries.join(", ")
    )
}

fn quote(s: &str) -> String {
    serde_json::Value::from(s).to_string()
}

/// Route `log` output to the test harness; safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_create_temp_dir() {
        let temp = create_temp_dir();
        assert!(temp.path().exists());
        assert!(temp.path().is_absolute());
    }

    #[test]
    fn test_create_test_files_nested() {
        let temp = create_temp_dir();
        create_test_files(&temp, &[("a/b/package.json", "{}")]);
        assert!(temp.path().join("a/b/package.json").is_file());
    }

    #[test]
    fn test_manifest_json_keeps_declaration_order() {
        let body = manifest_json(&[("zeta", "^1.0.0"), ("alpha", "~2.1.0")]);
        assert_eq!(
            body,
            r#"{"name": "fixture", "dependencies": {"zeta": "^1.0.0", "alpha": "~2.1.0"}}"#
        );
        let parsed: serde_json::Value = serde_json::from_str(&body).expect("valid JSON");
        assert_eq!(parsed["dependencies"]["alpha"], "~2.1.0");
    }
}
