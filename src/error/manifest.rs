//! Manifest errors

use super::ExternalsError;

/// Creates a manifest read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> ExternalsError {
    ExternalsError::ManifestReadError {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a manifest parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> ExternalsError {
    ExternalsError::ManifestParseError {
        path: path.into(),
        reason: reason.into(),
    }
}
