//! Command to print the canonical form of links.

use crate::error::CliError;
use crate::utils::{collect_links, GlobalOptions};
use clap::Args;
use linkinfo::link::normalize::normalize;

/// Print the canonical form of links, one per line.
#[derive(Args)]
pub struct NormalizeCommand {
    /// Links to normalize (read from stdin, one per line, when omitted)
    #[arg(value_name = "LINK")]
    pub links: Vec<String>,
}

impl NormalizeCommand {
    /// Execute the normalize command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        for link in collect_links(self.links)? {
            println!("{}", normalize(link.as_str()));
        }
        Ok(())
    }
}
