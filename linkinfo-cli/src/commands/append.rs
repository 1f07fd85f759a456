//! Command to append path segments to a link.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use linkinfo::LinkInfo;

/// Append path segments to a link.
///
/// Each segment is applied in order: `..` pops the last segment and `.` or
/// empty segments are skipped. Segments are not split on `/`.
#[derive(Args)]
pub struct AppendCommand {
    /// Link to start from
    #[arg(value_name = "LINK")]
    pub link: String,

    /// Segments to append
    #[arg(value_name = "SEGMENT", required = true, allow_hyphen_values = true)]
    pub segments: Vec<String>,
}

impl AppendCommand {
    /// Execute the append command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let base = LinkInfo::new(self.link.as_str());
        let result = base.append(&self.segments);

        if global.verbose {
            eprintln!("{base} + {:?}", self.segments);
        }
        println!("{result}");
        Ok(())
    }
}
