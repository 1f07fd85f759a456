//! The link path model.
//!
//! This module turns raw link text (a file path, a wiki link, a URI) into an
//! immutable [`LinkInfo`] value and answers questions about it. Nothing here
//! touches the file system; every operation is a pure function of strings.
//!
//! # Key Concepts
//!
//! ## Normalization
//!
//! [`normalize::normalize`] produces the canonical form every other
//! operation assumes: `/./` is collapsed in a single pass, a leading `./`
//! and one trailing `/` or `.` are removed.
//!
//! ## Segments
//!
//! [`segments::name_bounds`] finds where the file name starts and where
//! its extension separator is. All views of a [`LinkInfo`] are slices at
//! those offsets.
//!
//! ## Classification
//!
//! [`classify`] answers prefix-based questions (relative, absolute, local,
//! external, URI) and extension membership. The markdown and wiki page
//! extension sets are supplied by the caller through [`Extensions`].
//!
//! ## Path algebra
//!
//! [`LinkInfo::append`] pushes segments with `.`/`..` handling and
//! [`LinkInfo::with_ext`] swaps the extension; both return new values.
//!
//! # Examples
//!
//! ```
//! use linkinfo::link::{Extensions, LinkInfo};
//!
//! let extensions = Extensions::default();
//! let page = LinkInfo::new("wiki/pages/./Setup.md");
//! assert_eq!(page.file_path(), "wiki/pages/Setup.md");
//! assert!(page.is_markdown_ext(&extensions));
//!
//! let image = page.append(["..", "images", "setup.png"]);
//! assert_eq!(image.file_path(), "wiki/pages/images/setup.png");
//! assert!(image.is_image_ext());
//! ```

pub mod classify;
pub mod extensions;
mod info;
pub mod normalize;
pub mod segments;
mod variant;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use extensions::{ExtensionSet, Extensions};
pub use info::LinkInfo;
pub use variant::{
    Classify, LinkPolicy, LinkVariant, StandardLink, StandardPolicy, WikiLink, WikiPagePolicy,
};
