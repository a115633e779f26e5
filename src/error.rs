use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Main error type for proctab
#[derive(Debug, Error)]
pub enum ProctabError {
    /// Terminal initialization or operation failed
    #[error("Terminal error: {0}")]
    Terminal(#[from] io::Error),

    /// A proc source could not be read for a reason other than permission or process exit
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A record does not have one field per column
    #[error("Row {row} has {found} fields, expected {expected}")]
    ShapeMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A column definition cannot be rendered
    #[error("Invalid column {index}: {reason}")]
    InvalidColumn { index: usize, reason: String },

    /// Command line could not be parsed; carries the usage text
    #[error("{0}")]
    Usage(String),

    /// Configuration parsing failed
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Configuration file is invalid
    #[error("Invalid configuration file {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },
}

impl ProctabError {
    /// Create an I/O error bound to a path
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ProctabError::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        ProctabError::Config {
            message: message.into(),
        }
    }

    /// Create a usage error
    pub fn usage(message: impl Into<String>) -> Self {
        ProctabError::Usage(message.into())
    }

    /// Create a config invalid error
    pub fn config_invalid(path: PathBuf, reason: impl Into<String>) -> Self {
        ProctabError::ConfigInvalid {
            path,
            reason: reason.into(),
        }
    }

    /// Create a shape mismatch error
    pub fn shape_mismatch(row: usize, expected: usize, found: usize) -> Self {
        ProctabError::ShapeMismatch {
            row,
            expected,
            found,
        }
    }

    /// Create an invalid column error
    pub fn invalid_column(index: usize, reason: impl Into<String>) -> Self {
        ProctabError::InvalidColumn {
            index,
            reason: reason.into(),
        }
    }
}

/// Result type alias for proctab operations
pub type Result<T> = std::result::Result<T, ProctabError>;

impl From<toml::de::Error> for ProctabError {
    fn from(err: toml::de::Error) -> Self {
        ProctabError::Config {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ProctabError::config("Test error");
        assert!(err.to_string().contains("Test error"));
        assert!(matches!(err, ProctabError::Config { .. }));

        let err = ProctabError::shape_mismatch(3, 3, 2);
        assert_eq!(err.to_string(), "Row 3 has 2 fields, expected 3");
    }

    #[test]
    fn test_error_creation_helpers() {
        let err = ProctabError::io("/proc/1/cmdline", io::Error::other("boom"));
        assert!(
            matches!(&err, ProctabError::Io { path, .. } if path == &PathBuf::from("/proc/1/cmdline"))
        );
        assert!(err.to_string().contains("boom"));

        let err = ProctabError::invalid_column(1, "zero width");
        assert!(
            matches!(err, ProctabError::InvalidColumn { index, reason } if index == 1 && reason == "zero width")
        );
    }
}
