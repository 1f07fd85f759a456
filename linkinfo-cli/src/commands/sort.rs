//! Command to sort links by canonical path.

use crate::error::CliError;
use crate::utils::{collect_links, GlobalOptions};
use clap::Args;
use linkinfo::LinkInfo;

/// Sort links by canonical path and print them, one per line.
#[derive(Args)]
pub struct SortCommand {
    /// Links to sort (read from stdin, one per line, when omitted)
    #[arg(value_name = "LINK")]
    pub links: Vec<String>,

    /// Sort in descending order
    #[arg(long, short = 'r')]
    pub reverse: bool,

    /// Drop links whose canonical forms are equal
    #[arg(long, short = 'u')]
    pub unique: bool,
}

impl SortCommand {
    /// Execute the sort command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let mut links: Vec<LinkInfo> = collect_links(self.links)?
            .iter()
            .map(|raw| LinkInfo::new(raw.as_str()))
            .collect();

        links.sort();
        if self.unique {
            links.dedup();
        }
        if self.reverse {
            links.reverse();
        }

        for link in &links {
            println!("{link}");
        }
        Ok(())
    }
}
