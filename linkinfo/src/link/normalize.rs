//! Link path normalization.
//!
//! Normalization produces the canonical form every other link operation
//! assumes:
//! - `/./` sequences are replaced by `/` in a single left-to-right pass
//! - A leading `./` is removed
//! - One trailing `/` is removed unless the path ends with `//`
//! - One trailing `.` is removed
//!
//! The `/./` removal is deliberately not repeated until a fixed point is
//! reached: `a/././b` becomes `a/./b`. Segment indexing and classification
//! are written against this exact behavior.

/// Remove `/./` directory references and a leading `./`.
///
/// `None` is treated as the empty string.
///
/// # Examples
///
/// ```
/// use linkinfo::link::normalize::remove_dot_directory;
///
/// assert_eq!(remove_dot_directory("./a/./b"), "a/b");
/// assert_eq!(remove_dot_directory(None), "");
///
/// // Single pass: overlapping occurrences are not collapsed
/// assert_eq!(remove_dot_directory("a/././b"), "a/./b");
/// ```
#[must_use]
pub fn remove_dot_directory<'a>(path: impl Into<Option<&'a str>>) -> String {
    let replaced = path.into().unwrap_or_default().replace("/./", "/");
    match replaced.strip_prefix("./") {
        Some(rest) => rest.to_string(),
        None => replaced,
    }
}

/// Normalize a raw link path to canonical form.
///
/// This never fails: absent input maps to the empty string and every other
/// input is cleaned on a best-effort basis.
///
/// # Examples
///
/// ```
/// use linkinfo::link::normalize::normalize;
///
/// assert_eq!(normalize("./docs/./guide.md"), "docs/guide.md");
/// assert_eq!(normalize("docs/"), "docs");
/// assert_eq!(normalize("docs/page."), "docs/page");
///
/// // A trailing `//` is preserved
/// assert_eq!(normalize("http://"), "http://");
/// ```
#[must_use]
pub fn normalize<'a>(raw: impl Into<Option<&'a str>>) -> String {
    let mut clean = remove_dot_directory(raw);

    if !clean.ends_with("//") && clean.ends_with('/') {
        clean.pop();
    }

    if clean.ends_with('.') {
        clean.pop();
    }

    clean
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_none_is_empty() {
        assert_eq!(normalize(None), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_dot_directories() {
        assert_eq!(normalize("a/./b"), "a/b");
        assert_eq!(normalize("./a/b"), "a/b");
        assert_eq!(normalize("/a/./b/./c"), "/a/b/c");
    }

    #[test]
    fn test_normalize_single_pass_only() {
        assert_eq!(normalize("a/././b"), "a/./b");
        // A second pass finishes the job
        assert_eq!(normalize(normalize("a/././b").as_str()), "a/b");
    }

    #[test]
    fn test_normalize_trailing_slash() {
        assert_eq!(normalize("a/b/"), "a/b");
        assert_eq!(normalize("/"), "");
        // Only one slash is removed
        assert_eq!(normalize("a/b///"), "a/b///");
        assert_eq!(normalize("//"), "//");
        assert_eq!(normalize("file://"), "file://");
    }

    #[test]
    fn test_normalize_trailing_dot() {
        assert_eq!(normalize("a/b."), "a/b");
        assert_eq!(normalize("."), "");
        assert_eq!(normalize("./"), "");
        // Only one dot is removed
        assert_eq!(normalize("a/b.."), "a/b.");
    }

    #[test]
    fn test_normalize_slash_then_dot() {
        // The slash strip runs before the dot strip
        assert_eq!(normalize("a/."), "a/");
        assert_eq!(normalize("a./"), "a");
    }

    #[test]
    fn test_normalize_leaves_urls_alone() {
        assert_eq!(
            normalize("https://example.com/a/b.html"),
            "https://example.com/a/b.html"
        );
        assert_eq!(normalize("mailto:someone@example.com"), "mailto:someone@example.com");
    }

    #[test]
    fn test_normalize_idempotent_on_canonical() {
        for path in ["", "a", "a/b", "/a/b.md", "//", "http://x/y", "a/b.c.d"] {
            let once = normalize(path);
            assert_eq!(normalize(once.as_str()), once, "not idempotent for {path:?}");
        }
    }

    #[test]
    fn test_remove_dot_directory_keeps_inner_dots() {
        assert_eq!(remove_dot_directory("a/.hidden/b"), "a/.hidden/b");
        assert_eq!(remove_dot_directory("../a"), "../a");
        assert_eq!(remove_dot_directory(".a"), ".a");
    }
}
