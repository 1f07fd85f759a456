#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # linkinfo
//!
//! A model of document links and file paths.
//!
//! A [`LinkInfo`] holds the canonical form of a link string together with
//! the bounds of its last segment, and answers questions about it: its
//! directory, file name and extension, whether it is relative, local,
//! external or a URI, and whether its extension is an image, markdown or
//! wiki page extension. Links compose by appending path segments and by
//! replacing the extension.
//!
//! ## Core Types
//!
//! - [`LinkInfo`]: Canonical link with path views and classification
//! - [`Extensions`] and [`ExtensionSet`]: Configured markdown and wiki page extensions
//! - [`Classify`] and [`LinkVariant`]: Variants that override classification
//! - [`Config`] and [`ConfigBuilder`]: Layered configuration
//! - [`LinkReport`]: Serializable snapshot of a link
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use linkinfo::{Extensions, LinkInfo};
//!
//! let link = LinkInfo::new("./docs/./guide.md/");
//! assert_eq!(link.file_path(), "docs/guide.md");
//! assert_eq!(link.path(), "docs/");
//! assert_eq!(link.file_name_no_ext(), "guide");
//! assert!(link.is_relative());
//! assert!(link.is_markdown_ext(&Extensions::default()));
//!
//! let image = link.append(["..", "img", "logo.png"]);
//! assert_eq!(image.file_path(), "docs/img/logo.png");
//! assert!(image.is_image_ext());
//!
//! assert_eq!(link.with_ext("html").file_path(), "docs/guide.html");
//! ```

pub mod config;
pub mod error;
pub mod link;
pub mod logging;
pub mod output;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder, OutputFormat};
pub use error::{Error, Result};
pub use link::{
    Classify, ExtensionSet, Extensions, LinkInfo, LinkPolicy, LinkVariant, StandardLink,
    StandardPolicy, WikiLink, WikiPagePolicy,
};
pub use logging::{init_logger, LogLevel, Logger};
pub use output::{LinkReport, OutputFormatter};
