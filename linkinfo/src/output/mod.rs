//! Link report rendering.
//!
//! A [`LinkReport`] is a flat snapshot of every view and classification of a
//! [`LinkInfo`]. Reports are rendered by an [`OutputFormatter`] chosen from
//! the configured [`OutputFormat`].

mod formatters;

use serde::Serialize;

use crate::config::OutputFormat;
use crate::link::{Extensions, LinkInfo};
use crate::Result;

pub use formatters::{HumanFormatter, JsonFormatter, YamlFormatter};

/// Trait for formatting link reports into different output formats.
pub trait OutputFormatter {
    /// Format the given reports into a string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format(&self, reports: &[LinkReport]) -> Result<String>;
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Human => Box::new(HumanFormatter),
            Self::Json => Box::new(JsonFormatter),
            Self::Yaml => Box::new(YamlFormatter),
        }
    }
}

/// Every view and classification of one link.
///
/// # Examples
///
/// ```
/// use linkinfo::{Extensions, LinkInfo, LinkReport};
///
/// let report = LinkReport::new("./docs/guide.md", &Extensions::default());
/// assert_eq!(report.full_path, "docs/guide.md");
/// assert_eq!(report.file_name_no_ext, "guide");
/// assert!(report.is_markdown);
/// assert!(!report.is_image);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkReport {
    /// The text the link was built from.
    pub input: String,
    /// Canonical path.
    pub full_path: String,
    /// Directory portion including the trailing separator.
    pub path: String,
    /// Last segment.
    pub file_name: String,
    /// Last segment without its extension.
    pub file_name_no_ext: String,
    /// Full path without the extension.
    pub file_path_no_ext: String,
    /// Extension without its dot.
    pub ext: String,
    /// Byte offset where the last segment begins.
    pub name_start: usize,
    /// Byte offset of the extension dot, or the path length.
    pub name_end: usize,
    /// Whether the canonical path is empty.
    pub is_empty: bool,
    /// Whether the link is relative.
    pub is_relative: bool,
    /// Whether the link is absolute.
    pub is_absolute: bool,
    /// Whether the link refers to the local filesystem.
    pub is_local: bool,
    /// Whether the link points at an external resource.
    pub is_external: bool,
    /// Whether the link carries a URI scheme.
    pub is_uri: bool,
    /// Whether the extension is an image extension.
    pub is_image: bool,
    /// Whether the extension is a configured markdown extension.
    pub is_markdown: bool,
    /// Whether the extension is a configured wiki page extension.
    pub is_wiki_page: bool,
    /// Whether the path contains a space.
    pub contains_spaces: bool,
    /// Whether the path contains a `#` anchor.
    pub contains_anchor: bool,
}

impl LinkReport {
    /// Build a report for raw link text.
    #[must_use]
    pub fn new(input: &str, extensions: &Extensions) -> Self {
        Self::from_link(input, &LinkInfo::new(input), extensions)
    }

    /// Build a report for an existing link, recording `input` as its source.
    #[must_use]
    pub fn from_link(input: &str, link: &LinkInfo, extensions: &Extensions) -> Self {
        Self {
            input: input.to_string(),
            full_path: link.file_path().to_string(),
            path: link.path().to_string(),
            file_name: link.file_name().to_string(),
            file_name_no_ext: link.file_name_no_ext().to_string(),
            file_path_no_ext: link.file_path_no_ext().to_string(),
            ext: link.ext().to_string(),
            name_start: link.name_start(),
            name_end: link.name_end(),
            is_empty: link.is_empty(),
            is_relative: link.is_relative(),
            is_absolute: link.is_absolute(),
            is_local: link.is_local(),
            is_external: link.is_external(),
            is_uri: link.is_uri(),
            is_image: link.is_image_ext(),
            is_markdown: link.is_markdown_ext(extensions),
            is_wiki_page: link.is_wiki_page_ext(extensions),
            contains_spaces: link.contains_spaces(),
            contains_anchor: link.contains_anchor(),
        }
    }
}
