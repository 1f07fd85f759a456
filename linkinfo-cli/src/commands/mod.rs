//! CLI command implementations.
//!
//! - `inspect`: Show every view and classification of links
//! - `normalize`: Print canonical forms
//! - `append`: Join path segments onto a link
//! - `with_ext`: Replace a link's extension
//! - `sort`: Sort links by canonical path
//! - `classify`: Test a link against a classification
//! - `completions`: Generate shell completion scripts

pub mod append;
pub mod classify;
pub mod completions;
pub mod inspect;
pub mod normalize;
pub mod sort;
pub mod with_ext;

pub use append::AppendCommand;
pub use classify::{ClassifyCommand, LinkKind};
pub use completions::CompletionsCommand;
pub use inspect::InspectCommand;
pub use normalize::NormalizeCommand;
pub use sort::SortCommand;
pub use with_ext::WithExtCommand;
