//! File system errors

use super::ExternalsError;

/// Creates a traversal failed error
pub fn traversal_failed(path: impl Into<String>, reason: impl Into<String>) -> ExternalsError {
    ExternalsError::FilesystemError {
        path: path.into(),
        reason: reason.into(),
    }
}
