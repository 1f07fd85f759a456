//! The immutable link value.

use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::classify;
use super::extensions::Extensions;
use super::normalize::normalize;
use super::segments::name_bounds;

/// A canonical link path with its file name boundaries.
///
/// A `LinkInfo` is built once from a raw path and never changes. Every view
/// (`path`, `file_name`, `ext`, ...) is a slice of the canonical path, and
/// new values are only produced by [`LinkInfo::append`] and
/// [`LinkInfo::with_ext`].
///
/// Values are ordered by their canonical path.
///
/// # Examples
///
/// ```
/// use linkinfo::LinkInfo;
///
/// let link = LinkInfo::new("./docs/guide.md");
/// assert_eq!(link.file_path(), "docs/guide.md");
/// assert_eq!(link.path(), "docs/");
/// assert_eq!(link.file_name(), "guide.md");
/// assert_eq!(link.file_name_no_ext(), "guide");
/// assert_eq!(link.ext(), "md");
/// assert!(link.is_relative());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct LinkInfo {
    full_path: String,
    name_start: usize,
    name_end: usize,
}

impl LinkInfo {
    /// Create a link from a raw path.
    ///
    /// Never fails; `None` produces the empty link.
    #[must_use]
    pub fn new<'a>(raw: impl Into<Option<&'a str>>) -> Self {
        let full_path = normalize(raw);
        let (name_start, name_end) = name_bounds(&full_path);
        Self {
            full_path,
            name_start,
            name_end,
        }
    }

    /// Append path segments to `full_path` and return the resulting link.
    ///
    /// Each part has one leading and one trailing `/` removed, and one
    /// trailing `.` unless the part is `..`. Empty and `.` parts are skipped,
    /// `..` pops the last segment and anything else is joined with `/`.
    ///
    /// Popping is purely textual: `..` on an empty path leaves it empty.
    /// A `/` is only inserted when the running path is non-empty, so
    /// `"/a"` with `["..", "b"]` yields `"b"`, not `"/b"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkinfo::LinkInfo;
    ///
    /// let link = LinkInfo::append_to(Some("wiki/pages"), ["..", "images", "logo.png"]);
    /// assert_eq!(link.file_path(), "wiki/images/logo.png");
    ///
    /// // Parts are not split on `/`
    /// let link = LinkInfo::append_to(None, ["a", "../b"]);
    /// assert_eq!(link.file_path(), "a/../b");
    /// ```
    #[must_use]
    pub fn append_to<I>(full_path: Option<&str>, parts: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut path = normalize(full_path);

        for part in parts {
            let part = part.as_ref();
            let part = part.strip_prefix('/').unwrap_or(part);
            let mut part = part.strip_suffix('/').unwrap_or(part);
            if part != ".." {
                part = part.strip_suffix('.').unwrap_or(part);
            }

            match part {
                "" | "." => {}
                ".." => {
                    if path.is_empty() {
                        log::trace!("'..' applied to an empty link path");
                    }
                    let parent = Self::new(path.as_str());
                    let parent = parent.path();
                    path = parent.strip_suffix('/').unwrap_or(parent).to_string();
                }
                _ => {
                    if !path.is_empty() && !path.ends_with('/') {
                        path.push('/');
                    }
                    path.push_str(part);
                }
            }
        }

        Self::new(path.as_str())
    }

    /// Append path segments to this link.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkinfo::LinkInfo;
    ///
    /// let link = LinkInfo::new("a/b").append(["c", "..", "d"]);
    /// assert_eq!(link, LinkInfo::new("a/b/d"));
    /// ```
    #[must_use]
    pub fn append<I>(&self, parts: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self::append_to(Some(&self.full_path), parts)
    }

    /// Return this link with its extension replaced by `ext`.
    ///
    /// The extension may be given with or without its leading dot. The link
    /// is returned unchanged when it is empty, `ext` is `None`, or the
    /// extension already matches. An empty `ext` removes the extension.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkinfo::LinkInfo;
    ///
    /// let link = LinkInfo::new("a/b.txt");
    /// assert_eq!(link.with_ext("md").file_path(), "a/b.md");
    /// assert_eq!(link.with_ext(".md").file_path(), "a/b.md");
    /// assert_eq!(link.with_ext("txt"), link);
    /// assert_eq!(link.with_ext("").file_path(), "a/b");
    /// ```
    #[must_use]
    pub fn with_ext<'a>(&self, ext: impl Into<Option<&'a str>>) -> Self {
        let Some(ext) = ext.into() else {
            return self.clone();
        };
        let bare = ext.strip_prefix('.').unwrap_or(ext);
        if self.is_empty() || self.ext() == bare {
            return self.clone();
        }
        Self::new(format!("{}.{bare}", self.file_path_no_ext()).as_str())
    }

    /// The canonical path.
    #[must_use]
    pub fn file_path(&self) -> &str {
        &self.full_path
    }

    /// The canonical path without its extension.
    #[must_use]
    pub fn file_path_no_ext(&self) -> &str {
        &self.full_path[..self.name_end]
    }

    /// The directory portion, including its trailing `/`, or empty.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.full_path[..self.name_start]
    }

    /// The file name, including its extension.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.full_path[self.name_start..]
    }

    /// The file name without its extension.
    #[must_use]
    pub fn file_name_no_ext(&self) -> &str {
        &self.full_path[self.name_start..self.name_end]
    }

    /// The extension without its leading dot, or empty.
    #[must_use]
    pub fn ext(&self) -> &str {
        if self.has_ext() {
            &self.full_path[self.name_end + 1..]
        } else {
            ""
        }
    }

    /// Check whether the file name has a non-empty extension.
    #[must_use]
    pub fn has_ext(&self) -> bool {
        self.name_end + 1 < self.full_path.len()
    }

    /// Offset where the file name starts.
    #[must_use]
    pub fn name_start(&self) -> usize {
        self.name_start
    }

    /// Offset of the extension separator, or the path length.
    #[must_use]
    pub fn name_end(&self) -> usize {
        self.name_end
    }

    /// Check whether the canonical path is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.full_path.is_empty()
    }

    /// Check whether the canonical path is exactly `/`.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.full_path == "/"
    }

    /// True if the link needs resolving against a base path.
    #[must_use]
    pub fn is_relative(&self) -> bool {
        classify::is_relative(self.file_path())
    }

    /// True if the link resolves locally, if it resolves.
    #[must_use]
    pub fn is_local(&self) -> bool {
        classify::is_local(self.file_path())
    }

    /// True if the link points outside the local system.
    #[must_use]
    pub fn is_external(&self) -> bool {
        classify::is_external(self.file_path())
    }

    /// True if the link is URI prefixed.
    #[must_use]
    pub fn is_uri(&self) -> bool {
        classify::is_uri(self.file_path())
    }

    /// True if the link needs no resolving.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        classify::is_absolute(self.file_path())
    }

    /// Check whether this link's extension is one of `candidates`.
    #[must_use]
    pub fn is_ext_in<I>(&self, ignore_case: bool, candidates: I) -> bool
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        classify::is_ext_in(self.ext(), ignore_case, candidates)
    }

    /// Check whether this link names an image.
    #[must_use]
    pub fn is_image_ext(&self) -> bool {
        classify::is_image_ext(self.ext(), true)
    }

    /// Check whether this link names a markdown document.
    #[must_use]
    pub fn is_markdown_ext(&self, extensions: &Extensions) -> bool {
        classify::is_markdown_ext(self.ext(), true, &extensions.markdown)
    }

    /// Check whether this link names a wiki page.
    #[must_use]
    pub fn is_wiki_page_ext(&self, extensions: &Extensions) -> bool {
        classify::is_wiki_page_ext(self.ext(), true, &extensions.wiki_page)
    }

    /// Check whether the canonical path contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str, ignore_case: bool) -> bool {
        contains(&self.full_path, needle, ignore_case)
    }

    /// Check whether the canonical path contains a space.
    #[must_use]
    pub fn contains_spaces(&self) -> bool {
        self.full_path.contains(' ')
    }

    /// Check whether the canonical path contains an anchor marker (`#`).
    #[must_use]
    pub fn contains_anchor(&self) -> bool {
        self.full_path.contains('#')
    }

    /// Check whether the directory portion contains `needle`.
    #[must_use]
    pub fn path_contains(&self, needle: &str, ignore_case: bool) -> bool {
        contains(self.path(), needle, ignore_case)
    }

    /// Check whether the directory portion contains a space.
    #[must_use]
    pub fn path_contains_spaces(&self) -> bool {
        self.path().contains(' ')
    }

    /// Check whether the directory portion contains `#`.
    #[must_use]
    pub fn path_contains_anchor(&self) -> bool {
        self.path().contains('#')
    }

    /// Check whether the file name contains `needle`.
    #[must_use]
    pub fn file_name_contains(&self, needle: &str, ignore_case: bool) -> bool {
        contains(self.file_name(), needle, ignore_case)
    }

    /// Check whether the file name contains a space.
    #[must_use]
    pub fn file_name_contains_spaces(&self) -> bool {
        self.file_name().contains(' ')
    }

    /// Check whether the file name contains `#`.
    #[must_use]
    pub fn file_name_contains_anchor(&self) -> bool {
        self.file_name().contains('#')
    }
}

fn contains(haystack: &str, needle: &str, ignore_case: bool) -> bool {
    if ignore_case {
        haystack.to_lowercase().contains(&needle.to_lowercase())
    } else {
        haystack.contains(needle)
    }
}

impl Default for LinkInfo {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Ord for LinkInfo {
    fn cmp(&self, other: &Self) -> Ordering {
        self.full_path.cmp(&other.full_path)
    }
}

impl PartialOrd for LinkInfo {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for LinkInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_path)
    }
}

impl From<&str> for LinkInfo {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for LinkInfo {
    fn from(raw: String) -> Self {
        Self::new(raw.as_str())
    }
}

impl From<LinkInfo> for String {
    fn from(link: LinkInfo) -> Self {
        link.full_path
    }
}

impl FromStr for LinkInfo {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl AsRef<str> for LinkInfo {
    fn as_ref(&self) -> &str {
        &self.full_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dir_and_file_views() {
        let link = LinkInfo::new("dir/file.txt");
        assert_eq!(link.file_path(), "dir/file.txt");
        assert_eq!(link.file_path_no_ext(), "dir/file");
        assert_eq!(link.path(), "dir/");
        assert_eq!(link.file_name(), "file.txt");
        assert_eq!(link.file_name_no_ext(), "file");
        assert_eq!(link.ext(), "txt");
        assert!(link.has_ext());
    }

    #[test]
    fn test_bare_file_views() {
        let link = LinkInfo::new("file");
        assert_eq!(link.path(), "");
        assert_eq!(link.file_name(), "file");
        assert_eq!(link.file_name_no_ext(), "file");
        assert_eq!(link.file_path_no_ext(), "file");
        assert_eq!(link.ext(), "");
        assert!(!link.has_ext());
    }

    #[test]
    fn test_ext_keeps_case() {
        assert_eq!(LinkInfo::new("a/b/c.MD").ext(), "MD");
    }

    #[test]
    fn test_empty_link() {
        for link in [LinkInfo::new(None), LinkInfo::new(""), LinkInfo::default()] {
            assert!(link.is_empty());
            assert_eq!(link.file_path(), "");
            assert_eq!(link.path(), "");
            assert_eq!(link.file_name(), "");
            assert_eq!(link.ext(), "");
            assert!(!link.has_ext());
        }
    }

    #[test]
    fn test_trailing_slash_quirk() {
        // "a/." keeps its slash because it is stripped before the dot
        let link = LinkInfo::new("a/.");
        assert_eq!(link.file_path(), "a/");
        assert_eq!(link.path(), "a");
        assert_eq!(link.file_name(), "/");
        assert!(!link.has_ext());

        let link = LinkInfo::new("//");
        assert_eq!(link.file_path(), "//");
        assert_eq!(link.path(), "/");
        assert_eq!(link.file_name(), "/");
    }

    #[test]
    fn test_hidden_file_has_no_ext() {
        let link = LinkInfo::new("dir/.gitignore");
        assert_eq!(link.file_name_no_ext(), ".gitignore");
        assert_eq!(link.ext(), "");
    }

    #[test]
    fn test_root_is_collapsed() {
        let link = LinkInfo::new("/");
        assert!(link.is_empty());
        assert!(!link.is_root());
    }

    #[test]
    fn test_classification() {
        let link = LinkInfo::new("/a/b");
        assert!(link.is_absolute());
        assert!(!link.is_relative());
        assert!(link.is_local());
        assert!(!link.is_external());

        let link = LinkInfo::new("http://example.com/page.html");
        assert!(link.is_external());
        assert!(link.is_uri());
        assert!(!link.is_local());
        assert_eq!(link.ext(), "html");

        let link = LinkInfo::new("file:///home/user/notes.md");
        assert!(link.is_uri());
        assert!(link.is_local());
        assert!(!link.is_external());
    }

    #[test]
    fn test_extension_queries() {
        let extensions = Extensions::default();
        assert!(LinkInfo::new("img/logo.PNG").is_image_ext());
        assert!(LinkInfo::new("guide.Markdown").is_markdown_ext(&extensions));
        assert!(LinkInfo::new("Home.md").is_wiki_page_ext(&extensions));
        assert!(!LinkInfo::new("notes.txt").is_markdown_ext(&extensions));
        assert!(LinkInfo::new("notes.txt").is_ext_in(false, ["txt"]));
        assert!(!LinkInfo::new("notes.TXT").is_ext_in(false, ["txt"]));
    }

    #[test]
    fn test_contains_queries() {
        let link = LinkInfo::new("My Docs/page#Intro.md");
        assert!(link.contains_spaces());
        assert!(link.contains_anchor());
        assert!(link.path_contains_spaces());
        assert!(!link.path_contains_anchor());
        assert!(link.file_name_contains_anchor());
        assert!(!link.file_name_contains_spaces());
        assert!(link.contains("intro", true));
        assert!(!link.contains("intro", false));
        assert!(link.path_contains("docs", true));
        assert!(link.file_name_contains("Intro", false));
    }

    #[test]
    fn test_append_push_pop() {
        let link = LinkInfo::new("a/b").append(["c", "..", "d"]);
        assert_eq!(link, LinkInfo::new("a/b/d"));
    }

    #[test]
    fn test_append_cleans_parts() {
        let link = LinkInfo::new("a").append(["/b/", "c.", ".", "", "./", "/"]);
        assert_eq!(link.file_path(), "a/b/c");
    }

    #[test]
    fn test_append_parent_chain() {
        let link = LinkInfo::new("wiki/pages/sub").append(["..", "..", "images/logo.png"]);
        assert_eq!(link.file_path(), "wiki/images/logo.png");
    }

    #[test]
    fn test_append_pop_past_root_is_empty() {
        let link = LinkInfo::new("a").append(["..", ".."]);
        assert!(link.is_empty());

        let link = LinkInfo::new("a").append(["..", "..", "b"]);
        assert_eq!(link.file_path(), "b");
    }

    #[test]
    fn test_append_keeps_absolute_prefix() {
        let link = LinkInfo::new("/a/b").append(["..", "c"]);
        assert_eq!(link.file_path(), "/a/c");
        assert!(link.is_absolute());
    }

    #[test]
    fn test_append_to_none() {
        let link = LinkInfo::append_to(None, ["a", "b.md"]);
        assert_eq!(link.file_path(), "a/b.md");
    }

    #[test]
    fn test_append_after_popping_root_segment_is_relative() {
        let link = LinkInfo::new("/a").append(["..", "b"]);
        assert_eq!(link.file_path(), "b");
        assert!(link.is_relative());
    }

    #[test]
    fn test_append_accepts_owned_parts() {
        let parts = vec!["x".to_string(), "y".to_string()];
        let link = LinkInfo::new("base").append(&parts);
        assert_eq!(link.file_path(), "base/x/y");
    }

    #[test]
    fn test_with_ext() {
        let link = LinkInfo::new("a/b.txt");
        let md = link.with_ext("md");
        assert_eq!(md.ext(), "md");
        assert_eq!(md.file_path(), "a/b.md");
        assert_eq!(link.with_ext("txt"), link);
        assert_eq!(link.with_ext(".txt"), link);
        assert_eq!(link.with_ext(None), link);
    }

    #[test]
    fn test_with_ext_adds_and_removes() {
        assert_eq!(LinkInfo::new("a/b").with_ext("md").file_path(), "a/b.md");
        assert_eq!(LinkInfo::new("a/b.md").with_ext("").file_path(), "a/b");
        assert!(LinkInfo::new("").with_ext("md").is_empty());
    }

    #[test]
    fn test_ordering_by_path() {
        let mut links = vec![LinkInfo::new("b"), LinkInfo::new("a")];
        links.sort();
        assert_eq!(links, vec![LinkInfo::new("a"), LinkInfo::new("b")]);
        assert!(LinkInfo::new("a/b") < LinkInfo::new("a/c"));
    }

    #[test]
    fn test_conversions() {
        let link: LinkInfo = "./x/y.md".into();
        assert_eq!(link.to_string(), "x/y.md");
        let link: LinkInfo = String::from("x/").into();
        assert_eq!(String::from(link), "x");
        let link: LinkInfo = "x/./y".parse().unwrap();
        assert_eq!(AsRef::<str>::as_ref(&link), "x/y");
    }

    #[test]
    fn test_serde_as_canonical_string() {
        let link = LinkInfo::new("./docs/a.md");
        let json = serde_json::to_string(&link).unwrap();
        assert_eq!(json, r#""docs/a.md""#);

        let parsed: LinkInfo = serde_json::from_str(r#""./docs/./b.md/""#).unwrap();
        assert_eq!(parsed.file_path(), "docs/b.md");
        assert_eq!(parsed.ext(), "md");
    }
}
