//! Configuration system for linkinfo.
//!
//! Configuration decides which extensions count as markdown documents and
//! wiki pages, and how link reports are rendered. It is layered from:
//!
//! - YAML configuration files (user config and an explicit file)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//!
//! # Configuration Precedence
//!
//! Highest to lowest:
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`LINKINFO_*`)
//! 3. Explicit config file (`--config` / `LINKINFO_CONFIG`)
//! 4. User config (`~/.linkinfo/config.yaml`)
//! 5. Built-in defaults
//!
//! # Examples
//!
//! ```
//! use linkinfo::config::{Config, ConfigBuilder};
//! use linkinfo::LinkInfo;
//!
//! let custom = Config {
//!     markdown_extensions: Some(vec!["md".to_string(), "txt".to_string()]),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! let extensions = config.extensions();
//! assert!(LinkInfo::new("notes.TXT").is_markdown_ext(&extensions));
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, OutputFormat};
pub use validator::ConfigValidator;
