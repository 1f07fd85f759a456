//! Main entry point for the linkinfo CLI.
//!
//! This is the command-line interface for the linkinfo link model.
//! It provides commands for working with link paths:
//! - `inspect`: Show every view and classification of links
//! - `normalize`: Print canonical forms
//! - `append`: Join path segments onto a link
//! - `with-ext`: Replace a link's extension
//! - `sort`: Sort links by canonical path
//! - `classify`: Test a link against a classification

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    // Route library log records through the CLI logger
    let logger = linkinfo::init_logger(cli.verbose, cli.quiet);
    logger.install();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
    };

    let result = match cli.command {
        cli::Command::Inspect(cmd) => cmd.execute(&global),
        cli::Command::Normalize(cmd) => cmd.execute(&global),
        cli::Command::Append(cmd) => cmd.execute(&global),
        cli::Command::WithExt(cmd) => cmd.execute(&global),
        cli::Command::Sort(cmd) => cmd.execute(&global),
        cli::Command::Classify(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            if !(global.quiet && e.is_semantic()) {
                eprintln!("Error: {e}");
            }
            std::process::exit(e.exit_code());
        }
    }
}
