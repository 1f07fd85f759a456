//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, input collection and report output.

use crate::error::CliError;
use clap::ValueEnum;
use linkinfo::{Config, ConfigBuilder, LinkReport, OutputFormat};
use std::io::{self, BufRead};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit configuration file.
    pub config: Option<PathBuf>,
}

/// Output format selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum FormatArg {
    /// Human-readable listing
    Human,
    /// JSON array
    Json,
    /// YAML sequence
    Yaml,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Human => OutputFormat::Human,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Yaml => OutputFormat::Yaml,
        }
    }
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables
/// 2. The `--config` file
/// 3. The user configuration file
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref path) = global.config {
        builder = builder.with_config_file(path);
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Use the given links, or read one link per line from stdin when none
/// were given.
///
/// Blank lines are skipped when reading stdin.
pub fn collect_links(links: Vec<String>) -> Result<Vec<String>, CliError> {
    if !links.is_empty() {
        return Ok(links);
    }

    let mut from_stdin = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            from_stdin.push(line);
        }
    }
    Ok(from_stdin)
}

/// Render reports in the requested format and print them.
pub fn print_reports(reports: &[LinkReport], format: OutputFormat) -> Result<(), CliError> {
    let output = format.create_formatter().format(reports)?;
    println!("{output}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_arg_conversion() {
        assert_eq!(OutputFormat::from(FormatArg::Human), OutputFormat::Human);
        assert_eq!(OutputFormat::from(FormatArg::Json), OutputFormat::Json);
        assert_eq!(OutputFormat::from(FormatArg::Yaml), OutputFormat::Yaml);
    }

    #[test]
    fn test_collect_links_prefers_arguments() {
        let links = collect_links(vec!["a".into(), "b".into()]).unwrap();
        assert_eq!(links, vec!["a", "b"]);
    }
}
