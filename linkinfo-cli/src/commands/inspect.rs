//! Command to show every view and classification of links.

use crate::error::CliError;
use crate::utils::{collect_links, load_configuration, print_reports, FormatArg, GlobalOptions};
use clap::Args;
use linkinfo::{LinkReport, OutputFormat};

/// Show every view and classification of links.
#[derive(Args)]
pub struct InspectCommand {
    /// Links to inspect (read from stdin, one per line, when omitted)
    #[arg(value_name = "LINK")]
    pub links: Vec<String>,

    /// Output format (defaults to the configured format)
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<FormatArg>,
}

impl InspectCommand {
    /// Execute the inspect command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let extensions = config.extensions();
        let format = self
            .format
            .map_or_else(|| config.output_format(), OutputFormat::from);

        let reports: Vec<LinkReport> = collect_links(self.links)?
            .iter()
            .map(|link| LinkReport::new(link, &extensions))
            .collect();

        print_reports(&reports, format)
    }
}
