//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AppendCommand, ClassifyCommand, CompletionsCommand, InspectCommand, NormalizeCommand,
    SortCommand, WithExtCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for inspecting and composing link paths.
#[derive(Parser)]
#[command(name = "linkinfo")]
#[command(version, about = "Inspect and compose markdown link paths", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Load this configuration file on top of the user configuration
    #[arg(long, value_name = "FILE", global = true, env = "LINKINFO_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Show every view and classification of links
    Inspect(InspectCommand),

    /// Print the canonical form of links
    Normalize(NormalizeCommand),

    /// Append path segments to a link
    Append(AppendCommand),

    /// Replace the extension of a link
    WithExt(WithExtCommand),

    /// Sort links by canonical path
    Sort(SortCommand),

    /// Check whether a link has a classification
    Classify(ClassifyCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
