//! Command to report validation errors.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use winpath::ParsedPath;

/// Print every validation error; fail if any path has one.
#[derive(Args)]
pub struct ValidateCommand {
    /// Paths to validate
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,
}

impl ValidateCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut invalid = 0usize;

        for input in &self.paths {
            let path = ParsedPath::parse(input);
            if path.is_valid() {
                if !global.quiet {
                    println!("{input}: valid");
                }
                continue;
            }

            invalid += 1;
            for err in path.errors() {
                println!("{input}: {} ({})", err, err.kind());
            }
        }

        if invalid > 0 {
            return Err(CliError::SemanticFailure(format!(
                "{invalid} of {} path(s) are invalid",
                self.paths.len()
            )));
        }
        Ok(())
    }
}
