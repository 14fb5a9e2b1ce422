//! Command to coerce the trailing name of a path into a directory.

use crate::error::CliError;
use crate::utils::{check_strict, load_configuration, render_path, GlobalOptions};
use clap::Args;
use winpath::ParsedPath;

/// Move the trailing name onto the directory list and print the result.
#[derive(Args)]
pub struct DirectoryCommand {
    /// Path to coerce
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Print the extended-length form
    #[arg(long)]
    pub extended: bool,
}

impl DirectoryCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut path = ParsedPath::parse(&self.path);
        path.make_directory();

        println!(
            "{}",
            render_path(&path, self.extended || config.prefers_extended())
        );
        check_strict(&config, &[&path])
    }
}
