//! Error types for simmer.
//!
//! Session transitions never fail; these errors only cover the outer layers
//! (configuration, the recipe catalog, authoring and the terminal).

use thiserror::Error;

/// Errors that can occur in simmer.
#[derive(Error, Debug)]
pub enum SimmerError {
    /// Configuration or environment problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A recipe or other item could not be found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Recipe input failed validation.
    #[error("Invalid recipe: {0}")]
    Validation(String),

    /// The recipe catalog could not be written.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Terminal setup or drawing failed.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Parse(#[from] serde_json::Error),

    /// YAML parsing failed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Filesystem error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SimmerError {
    /// Whether the error comes from bad user input rather than the system.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SimmerError::NotFound("recipe abc".to_string());
        assert_eq!(err.to_string(), "Not found: recipe abc");

        let err = SimmerError::Validation("Add at least one step".to_string());
        assert_eq!(err.to_string(), "Invalid recipe: Add at least one step");
    }

    #[test]
    fn test_user_error_classification() {
        assert!(SimmerError::Validation(String::new()).is_user_error());
        assert!(SimmerError::NotFound(String::new()).is_user_error());
        assert!(!SimmerError::Storage(String::new()).is_user_error());
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: SimmerError = io.into();
        assert!(matches!(err, SimmerError::Io(_)));
    }
}
