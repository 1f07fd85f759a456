//! Recognized file extension sets.
//!
//! Which extensions count as markdown or wiki pages is decided by the host
//! configuration, not by the link model. [`ExtensionSet`] is the ordered set
//! the classifier consumes and [`Extensions`] bundles the sets a link needs.

use serde::{Deserialize, Serialize};

/// Built-in markdown extensions used when no configuration overrides them.
pub const DEFAULT_MARKDOWN_EXTENSIONS: &[&str] = &["md", "markdown", "mkd", "mdown", "mkdn", "mdwn"];

/// An ordered set of file extensions without leading dots.
///
/// Insertion order is preserved and duplicates (compared case-insensitively)
/// are dropped.
///
/// # Examples
///
/// ```
/// use linkinfo::link::ExtensionSet;
///
/// let set = ExtensionSet::new([".md", "markdown", "MD"]);
/// assert_eq!(set.as_slice(), ["md", "markdown"]);
/// assert!(set.contains("MD", true));
/// assert!(!set.contains("MD", false));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct ExtensionSet {
    extensions: Vec<String>,
}

impl ExtensionSet {
    /// Create a set from extensions, stripping one leading `.` from each.
    ///
    /// Empty entries are ignored.
    #[must_use]
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();
        for ext in extensions {
            set.insert(ext.as_ref());
        }
        set
    }

    /// Add an extension unless an equal one (ignoring case) is present.
    ///
    /// Returns `true` if the extension was added.
    pub fn insert(&mut self, ext: &str) -> bool {
        let ext = ext.strip_prefix('.').unwrap_or(ext);
        if ext.is_empty() || self.contains(ext, true) {
            return false;
        }
        self.extensions.push(ext.to_string());
        true
    }

    /// Check whether `ext` is in the set.
    #[must_use]
    pub fn contains(&self, ext: &str, ignore_case: bool) -> bool {
        super::classify::is_ext_in(ext, ignore_case, &self.extensions)
    }

    /// The extensions in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.extensions
    }

    /// Iterate the extensions in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(String::as_str)
    }

    /// Number of extensions in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    /// Check whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }
}

impl From<Vec<String>> for ExtensionSet {
    fn from(extensions: Vec<String>) -> Self {
        Self::new(extensions)
    }
}

impl From<ExtensionSet> for Vec<String> {
    fn from(set: ExtensionSet) -> Self {
        set.extensions
    }
}

impl<'a> FromIterator<&'a str> for ExtensionSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// The extension sets supplied by the host configuration.
///
/// # Examples
///
/// ```
/// use linkinfo::link::{ExtensionSet, Extensions};
///
/// let extensions = Extensions::default();
/// assert!(extensions.markdown.contains("markdown", true));
///
/// let only_md = Extensions::new(ExtensionSet::new(["md"]), ExtensionSet::new(["md"]));
/// assert!(!only_md.markdown.contains("mkd", true));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extensions {
    /// Extensions recognized as markdown documents.
    pub markdown: ExtensionSet,
    /// Extensions recognized as wiki pages.
    pub wiki_page: ExtensionSet,
}

impl Extensions {
    /// Create a registry from explicit sets.
    #[must_use]
    pub fn new(markdown: ExtensionSet, wiki_page: ExtensionSet) -> Self {
        Self {
            markdown,
            wiki_page,
        }
    }
}

impl Default for Extensions {
    fn default() -> Self {
        let defaults = ExtensionSet::new(DEFAULT_MARKDOWN_EXTENSIONS.iter().copied());
        Self::new(defaults.clone(), defaults)
    }
}
