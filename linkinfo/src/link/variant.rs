//! Link variants with their own classification policy.
//!
//! [`LinkInfo`] answers the structural questions (directory, file name,
//! extension) and the default classification. A specialized kind of link,
//! such as a wiki page reference, keeps that structure but answers the
//! classification questions differently. [`LinkVariant`] pairs a `LinkInfo`
//! with a [`LinkPolicy`] that decides classification, while dereferencing to
//! the core value for everything else.
//!
//! # Examples
//!
//! ```
//! use linkinfo::link::{Classify, StandardLink, WikiLink};
//!
//! let plain = StandardLink::from_raw("https://example.com/Home");
//! assert!(plain.is_external());
//!
//! // The same text as a wiki page reference names a page, not a URL
//! let wiki = WikiLink::from_raw("https://example.com/Home");
//! assert!(!wiki.is_external());
//! assert!(wiki.is_relative());
//!
//! // Structure is shared with the core value
//! assert_eq!(wiki.file_name(), "Home");
//! ```

use std::ops::Deref;

use super::info::LinkInfo;

/// The classification queries every link kind answers.
pub trait Classify {
    /// True if the link has an empty canonical path.
    fn is_empty(&self) -> bool;

    /// True if the link needs resolving against a base path.
    fn is_relative(&self) -> bool;

    /// True if the link resolves locally, if it resolves.
    fn is_local(&self) -> bool;

    /// True if the link points outside the local system.
    fn is_external(&self) -> bool;

    /// True if the link is URI prefixed.
    fn is_uri(&self) -> bool;

    /// True if the link needs no resolving.
    fn is_absolute(&self) -> bool;
}

impl Classify for LinkInfo {
    fn is_empty(&self) -> bool {
        LinkInfo::is_empty(self)
    }

    fn is_relative(&self) -> bool {
        LinkInfo::is_relative(self)
    }

    fn is_local(&self) -> bool {
        LinkInfo::is_local(self)
    }

    fn is_external(&self) -> bool {
        LinkInfo::is_external(self)
    }

    fn is_uri(&self) -> bool {
        LinkInfo::is_uri(self)
    }

    fn is_absolute(&self) -> bool {
        LinkInfo::is_absolute(self)
    }
}

/// Classification policy applied by a [`LinkVariant`].
///
/// Every method defaults to the core classification of the link, so a
/// policy only overrides the queries it answers differently.
pub trait LinkPolicy {
    /// Classify emptiness.
    fn is_empty(&self, link: &LinkInfo) -> bool {
        link.is_empty()
    }

    /// Classify relativity.
    fn is_relative(&self, link: &LinkInfo) -> bool {
        link.is_relative()
    }

    /// Classify locality.
    fn is_local(&self, link: &LinkInfo) -> bool {
        link.is_local()
    }

    /// Classify external references.
    fn is_external(&self, link: &LinkInfo) -> bool {
        link.is_external()
    }

    /// Classify URI references.
    fn is_uri(&self, link: &LinkInfo) -> bool {
        link.is_uri()
    }

    /// Classify absolute references.
    fn is_absolute(&self, link: &LinkInfo) -> bool {
        link.is_absolute()
    }
}

/// The core classification, unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StandardPolicy;

impl LinkPolicy for StandardPolicy {}

/// Classification of wiki page references.
///
/// A wiki page reference names a page inside the wiki, so it is never a URI
/// or an external reference. It is always resolved relative to the wiki home
/// and therefore always relative and local.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WikiPagePolicy;

impl LinkPolicy for WikiPagePolicy {
    fn is_relative(&self, _link: &LinkInfo) -> bool {
        true
    }

    fn is_local(&self, _link: &LinkInfo) -> bool {
        true
    }

    fn is_external(&self, _link: &LinkInfo) -> bool {
        false
    }

    fn is_uri(&self, _link: &LinkInfo) -> bool {
        false
    }

    fn is_absolute(&self, _link: &LinkInfo) -> bool {
        false
    }
}

/// A link paired with a classification policy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LinkVariant<P> {
    link: LinkInfo,
    policy: P,
}

/// A link classified by the core rules.
pub type StandardLink = LinkVariant<StandardPolicy>;

/// A wiki page reference.
pub type WikiLink = LinkVariant<WikiPagePolicy>;

impl<P: LinkPolicy> LinkVariant<P> {
    /// Wrap a link with a policy.
    #[must_use]
    pub fn new(link: LinkInfo, policy: P) -> Self {
        Self { link, policy }
    }

    /// The underlying link.
    #[must_use]
    pub fn link(&self) -> &LinkInfo {
        &self.link
    }

    /// The classification policy.
    #[must_use]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Unwrap into the underlying link.
    #[must_use]
    pub fn into_link(self) -> LinkInfo {
        self.link
    }

    // These shadow the `LinkInfo` methods reachable through `Deref`, so the
    // policy answers even when `Classify` is not in scope.

    /// True if the policy classifies the link as empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.policy.is_empty(&self.link)
    }

    /// True if the policy classifies the link as relative.
    #[must_use]
    pub fn is_relative(&self) -> bool {
        self.policy.is_relative(&self.link)
    }

    /// True if the policy classifies the link as local.
    #[must_use]
    pub fn is_local(&self) -> bool {
        self.policy.is_local(&self.link)
    }

    /// True if the policy classifies the link as external.
    #[must_use]
    pub fn is_external(&self) -> bool {
        self.policy.is_external(&self.link)
    }

    /// True if the policy classifies the link as a URI.
    #[must_use]
    pub fn is_uri(&self) -> bool {
        self.policy.is_uri(&self.link)
    }

    /// True if the policy classifies the link as absolute.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.policy.is_absolute(&self.link)
    }
}

impl<P: LinkPolicy + Default> LinkVariant<P> {
    /// Build a variant from a raw path with the default policy.
    #[must_use]
    pub fn from_raw<'a>(raw: impl Into<Option<&'a str>>) -> Self {
        Self::new(LinkInfo::new(raw), P::default())
    }
}

impl<P: LinkPolicy + Clone> LinkVariant<P> {
    /// Append segments, keeping this variant's policy.
    #[must_use]
    pub fn append<I>(&self, parts: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self::new(self.link.append(parts), self.policy.clone())
    }

    /// Replace the extension, keeping this variant's policy.
    #[must_use]
    pub fn with_ext<'a>(&self, ext: impl Into<Option<&'a str>>) -> Self {
        Self::new(self.link.with_ext(ext), self.policy.clone())
    }
}

impl<P: LinkPolicy + Default> From<LinkInfo> for LinkVariant<P> {
    fn from(link: LinkInfo) -> Self {
        Self::new(link, P::default())
    }
}

impl<P> Deref for LinkVariant<P> {
    type Target = LinkInfo;

    fn deref(&self) -> &LinkInfo {
        &self.link
    }
}

impl<P: LinkPolicy> Classify for LinkVariant<P> {
    fn is_empty(&self) -> bool {
        LinkVariant::is_empty(self)
    }

    fn is_relative(&self) -> bool {
        LinkVariant::is_relative(self)
    }

    fn is_local(&self) -> bool {
        LinkVariant::is_local(self)
    }

    fn is_external(&self) -> bool {
        LinkVariant::is_external(self)
    }

    fn is_uri(&self) -> bool {
        LinkVariant::is_uri(self)
    }

    fn is_absolute(&self) -> bool {
        LinkVariant::is_absolute(self)
    }
}
