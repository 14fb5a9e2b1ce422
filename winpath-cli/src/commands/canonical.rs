//! Command to print the canonical form of a path.

use crate::error::CliError;
use crate::utils::{check_strict, load_configuration, GlobalOptions};
use clap::Args;
use winpath::ParsedPath;

/// Print the path with redundant separators removed.
#[derive(Args)]
pub struct CanonicalCommand {
    /// Path to render
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl CanonicalCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let path = ParsedPath::parse(&self.path);

        println!("{}", path.to_canonical_string());
        check_strict(&config, &[&path])
    }
}
