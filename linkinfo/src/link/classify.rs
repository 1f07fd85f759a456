//! Prefix-based link classification and extension matching.
//!
//! Classification is driven by ordered constant prefix sets and a single
//! [`starts_with_any`] primitive. The predicates overlap on purpose: a path
//! such as `/docs/a.md` is both local and absolute. Only [`is_relative`] and
//! [`is_absolute`] are mutually exclusive.
//!
//! Every predicate accepts an optional string; `None` is never relative,
//! local, external, absolute or a URI.
//!
//! # Examples
//!
//! ```
//! use linkinfo::link::classify::{is_absolute, is_external, is_local, is_relative, is_uri};
//!
//! assert!(is_relative("docs/guide.md"));
//! assert!(is_local("docs/guide.md"));
//!
//! assert!(is_absolute("/docs/guide.md"));
//! assert!(is_local("/docs/guide.md"));
//!
//! assert!(is_external("https://example.com"));
//! assert!(is_uri("https://example.com"));
//! assert!(!is_local("https://example.com"));
//!
//! assert!(!is_relative(None));
//! ```

use super::extensions::ExtensionSet;

/// Prefixes of references to resources outside the local system.
pub const EXTERNAL_PREFIXES: &[&str] = &["http://", "ftp://", "https://", "mailto:"];

/// Prefixes of URI references.
pub const URI_PREFIXES: &[&str] = &["file://", "http://", "ftp://", "https://", "mailto:"];

/// Prefixes that mark a reference as relative.
///
/// Empty: a reference is relative exactly when it is not absolute.
pub const RELATIVE_PREFIXES: &[&str] = &[];

/// Prefixes of references that resolve within the local workspace.
pub const LOCAL_PREFIXES: &[&str] = &["file:", "/"];

/// Prefixes of references that need no resolution against a base path.
pub const ABSOLUTE_PREFIXES: &[&str] = &["/", "file://", "http://", "ftp://", "https://", "mailto:"];

/// Extensions treated as images.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif"];

/// Extension given to new wiki pages.
pub const WIKI_PAGE_EXTENSION: &str = ".md";

/// Extension of the wiki home marker.
pub const WIKI_HOME_EXTENSION: &str = ".wiki";

/// File name of the wiki home page.
pub const WIKI_HOME_FILENAME: &str = "Home";

/// Check whether `path` starts with any of `prefixes`.
#[must_use]
pub fn starts_with_any(path: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|prefix| path.starts_with(prefix))
}

fn matches<'a>(path: impl Into<Option<&'a str>>, prefixes: &[&str]) -> bool {
    path.into().is_some_and(|path| starts_with_any(path, prefixes))
}

/// True if the reference already needs no resolving against a base path.
#[must_use]
pub fn is_absolute<'a>(path: impl Into<Option<&'a str>>) -> bool {
    matches(path, ABSOLUTE_PREFIXES)
}

/// True if the reference must be resolved against a base path.
#[must_use]
pub fn is_relative<'a>(path: impl Into<Option<&'a str>>) -> bool {
    path.into().is_some_and(|path| !is_absolute(path))
}

/// True if the reference points outside the local system.
#[must_use]
pub fn is_external<'a>(path: impl Into<Option<&'a str>>) -> bool {
    matches(path, EXTERNAL_PREFIXES)
}

/// True if the reference is URI prefixed.
#[must_use]
pub fn is_uri<'a>(path: impl Into<Option<&'a str>>) -> bool {
    matches(path, URI_PREFIXES)
}

/// True if the reference resolves locally, if it resolves at all.
///
/// Every relative reference is local, as is anything prefixed with `file:`
/// or `/`.
#[must_use]
pub fn is_local<'a>(path: impl Into<Option<&'a str>>) -> bool {
    path.into()
        .is_some_and(|path| starts_with_any(path, LOCAL_PREFIXES) || is_relative(path))
}

/// Check whether `ext` equals any of `candidates`.
///
/// # Examples
///
/// ```
/// use linkinfo::link::classify::is_ext_in;
///
/// assert!(is_ext_in("PNG", true, ["png", "gif"]));
/// assert!(!is_ext_in("PNG", false, ["png", "gif"]));
/// ```
#[must_use]
pub fn is_ext_in<I>(ext: &str, ignore_case: bool, candidates: I) -> bool
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    candidates.into_iter().any(|candidate| {
        let candidate = candidate.as_ref();
        if ignore_case {
            candidate
                .chars()
                .flat_map(char::to_lowercase)
                .eq(ext.chars().flat_map(char::to_lowercase))
        } else {
            candidate == ext
        }
    })
}

/// Check whether `ext` is an image extension.
#[must_use]
pub fn is_image_ext(ext: &str, ignore_case: bool) -> bool {
    is_ext_in(ext, ignore_case, IMAGE_EXTENSIONS)
}

/// Check whether `ext` is one of the configured markdown extensions.
#[must_use]
pub fn is_markdown_ext(ext: &str, ignore_case: bool, markdown: &ExtensionSet) -> bool {
    markdown.contains(ext, ignore_case)
}

/// Check whether `ext` is one of the configured wiki page extensions.
#[must_use]
pub fn is_wiki_page_ext(ext: &str, ignore_case: bool, wiki_page: &ExtensionSet) -> bool {
    wiki_page.contains(ext, ignore_case)
}
