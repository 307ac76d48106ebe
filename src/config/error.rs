//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    /// An entry in `content.extensions` that cannot be joined onto a
    /// slug (empty, or carrying a leading dot).
    #[error("invalid content extension `{0}`: expected a bare extension like `md`")]
    Extension(String),

    #[error("Config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("plume.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("plume.toml"));

        let validation_err = ConfigError::Validation("extensions must not be empty".to_string());
        let display = format!("{validation_err}");
        assert!(display.contains("extensions must not be empty"));
    }

    #[test]
    fn test_extension_error_names_offender() {
        let err = ConfigError::Extension(".md".to_string());
        let display = format!("{err}");
        assert!(display.contains("`.md`"));
        assert!(display.contains("bare extension"));
    }
}
