//! Error types for configuration loading and validation.

/// Errors that can occur when loading or validating a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An I/O error occurred while reading the configuration file.
    #[error("failed to read configuration: {0}")]
    IoError(#[from] std::io::Error),

    /// The file content could not be parsed as JSON or TOML.
    #[error("failed to parse configuration: {0}")]
    ParseError(String),

    /// The file extension is neither `.json` nor `.toml`.
    #[error("unsupported configuration format '{0}' (expected .json or .toml)")]
    UnsupportedFormat(String),

    /// A required field is missing or empty.
    #[error("missing required field: {0}")]
    MissingField(String),

    /// A configuration value failed validation.
    #[error("validation error at {path}: {message}")]
    ValidationError {
        /// Dotted path of the offending entry (e.g., `ports[2].negative_terminal`).
        path: String,
        /// What is wrong with the value.
        message: String,
    },
}

impl ConfigError {
    /// Creates a validation error for the given entry path.
    pub fn validation(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            path: path.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_missing_field() {
        let err = ConfigError::MissingField("ports[0].name".to_string());
        assert_eq!(format!("{err}"), "missing required field: ports[0].name");
    }

    #[test]
    fn display_parse_error() {
        let err = ConfigError::ParseError("expected ':' at line 3".to_string());
        assert_eq!(
            format!("{err}"),
            "failed to parse configuration: expected ':' at line 3"
        );
    }

    #[test]
    fn display_validation_error() {
        let err = ConfigError::validation("setups[1].f_adapt", "invalid frequency: 'fast'");
        assert_eq!(
            format!("{err}"),
            "validation error at setups[1].f_adapt: invalid frequency: 'fast'"
        );
    }

    #[test]
    fn display_unsupported_format() {
        let err = ConfigError::UnsupportedFormat("yaml".to_string());
        assert!(format!("{err}").contains("yaml"));
    }

    #[test]
    fn display_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = ConfigError::IoError(io_err);
        assert!(format!("{err}").starts_with("failed to read configuration:"));
    }
}
