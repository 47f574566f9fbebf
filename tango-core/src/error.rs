//! Error types for parsing and configuration

use thiserror::Error;

/// Error type for core operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The header row has no recognizable `japanese` or `english` column
    #[error("CSV header must contain \"japanese\" and \"english\" columns (missing: {})", .missing.join(", "))]
    MissingRequiredColumn {
        /// Names of the required columns that could not be found
        missing: Vec<&'static str>,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_names_both_requirements() {
        let error = Error::MissingRequiredColumn {
            missing: vec!["english"],
        };
        let message = error.to_string();
        assert!(message.contains("\"japanese\""));
        assert!(message.contains("\"english\""));
        assert!(message.ends_with("(missing: english)"));
    }

    #[test]
    fn test_configuration_error_display() {
        let error = Error::Configuration("unknown parse mode: loose".into());
        assert_eq!(
            error.to_string(),
            "Configuration error: unknown parse mode: loose"
        );
    }
}
