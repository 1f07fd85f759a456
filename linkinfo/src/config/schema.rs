//! Configuration schema definitions.
//!
//! The configuration decides which file extensions the link model treats as
//! markdown documents and wiki pages, and how reports are rendered.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::link::{ExtensionSet, Extensions};

/// Complete configuration structure.
///
/// Every field is optional so that configuration files and environment
/// overrides can be layered; unset fields fall back to built-in defaults.
///
/// # Examples
///
/// ```
/// use linkinfo::config::Config;
///
/// let config = Config {
///     markdown_extensions: Some(vec!["md".to_string()]),
///     ..Default::default()
/// };
/// let extensions = config.extensions();
/// assert!(extensions.markdown.contains("md", true));
/// assert!(!extensions.markdown.contains("markdown", true));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Extensions recognized as markdown documents.
    pub markdown_extensions: Option<Vec<String>>,

    /// Extensions recognized as wiki pages.
    pub wiki_page_extensions: Option<Vec<String>>,

    /// Output format for link reports.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// Build the extension registry consumed by the link model.
    ///
    /// Unset lists use the built-in markdown extensions. Wiki page
    /// extensions default to the markdown extensions when only those are
    /// configured.
    #[must_use]
    pub fn extensions(&self) -> Extensions {
        let defaults = Extensions::default();
        let markdown = self
            .markdown_extensions
            .as_ref()
            .map_or(defaults.markdown, ExtensionSet::new);
        let wiki_page = self
            .wiki_page_extensions
            .as_ref()
            .map_or_else(|| markdown.clone(), ExtensionSet::new);
        Extensions::new(markdown, wiki_page)
    }

    /// The configured output format, or the default.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }
}

/// Output format for link reports.
///
/// # Examples
///
/// ```
/// use linkinfo::config::OutputFormat;
///
/// let format: OutputFormat = "json".parse().unwrap();
/// assert_eq!(format, OutputFormat::Json);
/// assert_eq!(format.to_string(), "json");
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable key/value listing.
    #[default]
    Human,
    /// JSON output format.
    Json,
    /// YAML output format.
    Yaml,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            "yaml" => Ok(Self::Yaml),
            _ => Err(format!("invalid output format: {s} (expected human, json or yaml)")),
        }
    }
}
