//! Command to print the extended-length form of a path.

use crate::error::CliError;
use crate::utils::{check_strict, load_configuration, GlobalOptions};
use clap::Args;
use winpath::ParsedPath;

/// Print the path in `\\?\` form.
#[derive(Args)]
pub struct ExtendedCommand {
    /// Path to render
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl ExtendedCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let path = ParsedPath::parse(&self.path);

        println!("{}", path.to_extended_unc());
        check_strict(&config, &[&path])
    }
}
