//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Validates merged configuration.
///
/// # Examples
///
/// ```
/// use linkinfo::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let bad = Config {
///     markdown_extensions: Some(vec!["docs/md".into()]),
///     ..Default::default()
/// };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref extensions) = config.markdown_extensions {
            Self::validate_extensions("markdown_extensions", extensions)?;
        }

        if let Some(ref extensions) = config.wiki_page_extensions {
            Self::validate_extensions("wiki_page_extensions", extensions)?;
        }

        Ok(())
    }

    /// Validate an extension list.
    ///
    /// The list must not be empty. Each entry, after one optional leading
    /// `.`, must be non-empty and contain no `/`, `.` or whitespace.
    ///
    /// # Errors
    ///
    /// Returns a validation error describing the offending entry.
    pub fn validate_extensions(field: &str, extensions: &[String]) -> Result<()> {
        if extensions.is_empty() {
            return Err(Error::validation(field, "must list at least one extension"));
        }

        for ext in extensions {
            Self::validate_extension(field, ext)?;
        }

        Ok(())
    }

    fn validate_extension(field: &str, ext: &str) -> Result<()> {
        let bare = ext.strip_prefix('.').unwrap_or(ext);
        if bare.is_empty() {
            return Err(Error::validation(field, "extensions must not be empty"));
        }
        if bare.contains('/') || bare.contains('.') {
            return Err(Error::validation(
                field,
                format!("extension '{ext}' must not contain '/' or '.'"),
            ));
        }
        if bare.chars().any(char::is_whitespace) {
            return Err(Error::validation(
                field,
                format!("extension '{ext}' must not contain whitespace"),
            ));
        }
        Ok(())
    }
}
