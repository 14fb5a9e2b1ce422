//! Command to check a path against the filesystem.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use winpath::{ParsedPath, StdFileSystem};

/// Check whether a path exists, optionally as a directory.
#[derive(Args)]
pub struct ExistsCommand {
    /// Path to check
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Require the path to be a directory
    #[arg(long)]
    pub dir: bool,
}

impl ExistsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = ParsedPath::parse(&self.path);

        let found = if self.dir {
            path.is_directory_with(&StdFileSystem)
        } else {
            path.exists_with(&StdFileSystem)
        };

        if !found {
            let what = if self.dir { "directory" } else { "path" };
            return Err(CliError::SemanticFailure(format!(
                "{what} does not exist: {}",
                self.path
            )));
        }

        if !global.quiet {
            println!("{}", self.path);
        }
        Ok(())
    }
}
