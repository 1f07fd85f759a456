//! Build script for linkinfo-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep this structure synchronized with src/cli.rs.
fn build_cli() -> Command {
    Command::new("linkinfo")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect and compose markdown link paths")
        .long_about(
            "Command-line tool for normalizing, classifying and composing the links found in markdown documents",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Load this configuration file on top of the user configuration")
                .value_name("FILE")
                .global(true)
                .env("LINKINFO_CONFIG"),
        )
        .subcommands(vec![
            Command::new("inspect")
                .about("Show every view and classification of links")
                .long_about("Print the path, file name, extension and classifications of links"),
            Command::new("normalize")
                .about("Print the canonical form of links")
                .long_about("Collapse '/./', strip a leading './' and trailing '/' or '.'"),
            Command::new("append")
                .about("Append path segments to a link")
                .long_about("Join segments onto a link, popping one segment for each '..'"),
            Command::new("with-ext")
                .about("Replace the extension of a link"),
            Command::new("sort")
                .about("Sort links by canonical path"),
            Command::new("classify")
                .about("Check whether a link has a classification")
                .long_about(
                    "Exit with status 0 if the link has the classification and 1 if it does not",
                ),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "OUT_DIR is not set")
    })?);
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    fs::write(man_dir.join("linkinfo.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
