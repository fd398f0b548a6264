//! Host module catalog errors

use super::ExternalsError;

/// Creates an invalid catalog error
pub fn invalid(message: impl Into<String>) -> ExternalsError {
    ExternalsError::InvalidCatalogError {
        message: message.into(),
    }
}
