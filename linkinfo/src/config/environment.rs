//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `LINKINFO_*` environment variables that
//! override configuration file values.

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};
use std::env;

/// Comma-separated markdown extensions.
pub const MARKDOWN_EXTENSIONS_ENV: &str = "LINKINFO_MARKDOWN_EXTENSIONS";

/// Comma-separated wiki page extensions.
pub const WIKI_PAGE_EXTENSIONS_ENV: &str = "LINKINFO_WIKI_PAGE_EXTENSIONS";

/// Report output format (`human`, `json` or `yaml`).
pub const OUTPUT_FORMAT_ENV: &str = "LINKINFO_OUTPUT_FORMAT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use linkinfo::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(value) = env::var(MARKDOWN_EXTENSIONS_ENV) {
            config.markdown_extensions =
                Some(Self::parse_extension_list(MARKDOWN_EXTENSIONS_ENV, &value)?);
        }

        if let Ok(value) = env::var(WIKI_PAGE_EXTENSIONS_ENV) {
            config.wiki_page_extensions =
                Some(Self::parse_extension_list(WIKI_PAGE_EXTENSIONS_ENV, &value)?);
        }

        if let Ok(value) = env::var(OUTPUT_FORMAT_ENV) {
            config.output_format = Some(
                value
                    .parse::<OutputFormat>()
                    .map_err(|message| Error::validation(OUTPUT_FORMAT_ENV, message))?,
            );
        }

        Ok(())
    }

    /// Parse a comma-separated extension list.
    ///
    /// Whitespace around entries is trimmed and one leading `.` is removed.
    fn parse_extension_list(field: &str, s: &str) -> Result<Vec<String>> {
        let extensions: Vec<String> = s
            .split(',')
            .map(str::trim)
            .map(|ext| ext.strip_prefix('.').unwrap_or(ext))
            .filter(|ext| !ext.is_empty())
            .map(str::to_string)
            .collect();

        if extensions.is_empty() {
            return Err(Error::validation(field, "must list at least one extension"));
        }

        Ok(extensions)
    }
}
