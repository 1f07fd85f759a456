//! Error types for the linkinfo library.
//!
//! The link model itself is total and never fails. Errors only arise in the
//! surrounding layers: loading configuration files, reading environment
//! overrides and rendering output.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a linkinfo error.
///
/// # Examples
///
/// ```
/// use linkinfo::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the linkinfo library.
#[derive(Debug, Error)]
pub enum Error {
    /// A configuration file path could not be used.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// Output could not be serialized as JSON.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Create a validation error.
    pub(crate) fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Check if this error came from configuration handling.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkinfo::Error;
    ///
    /// let err = Error::Validation {
    ///     field: "markdown_extensions".into(),
    ///     message: "must not be empty".into(),
    /// };
    /// assert!(err.is_configuration());
    /// ```
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::Configuration(_) | Self::Validation { .. } | Self::InvalidPath { .. }
        )
    }
}
