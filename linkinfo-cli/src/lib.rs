//! Library exports for linkinfo-cli.
//!
//! Exposes the CLI structure so completion and documentation tooling can
//! inspect it.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
