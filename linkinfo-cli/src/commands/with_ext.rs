//! Command to replace the extension of a link.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use linkinfo::LinkInfo;

/// Replace the extension of a link.
#[derive(Args)]
pub struct WithExtCommand {
    /// Link to change
    #[arg(value_name = "LINK")]
    pub link: String,

    /// New extension, with or without the leading dot (empty removes it)
    #[arg(value_name = "EXT", allow_hyphen_values = true)]
    pub ext: String,
}

impl WithExtCommand {
    /// Execute the with-ext command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let link = LinkInfo::new(self.link.as_str());
        println!("{}", link.with_ext(self.ext.as_str()));
        Ok(())
    }
}
