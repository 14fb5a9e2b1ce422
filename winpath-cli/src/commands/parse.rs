//! Command to report the decomposition of one or more paths.

use crate::error::CliError;
use crate::utils::{check_strict, format_reports, load_configuration, GlobalOptions};
use clap::Args;
use winpath::{ParsedPath, PathReport};

/// Report device, node, components, flags and errors for each path.
#[derive(Args)]
pub struct ParseCommand {
    /// Paths to parse
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,
}

impl ParseCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;

        let parsed: Vec<ParsedPath> = self.paths.iter().map(|p| ParsedPath::parse(p)).collect();
        let reports: Vec<PathReport> = self
            .paths
            .iter()
            .zip(&parsed)
            .map(|(input, path)| PathReport::new(input, path))
            .collect();

        let output = format_reports(&config, &reports)?;
        print!("{output}");
        if !output.ends_with('\n') {
            println!();
        }

        check_strict(&config, &parsed.iter().collect::<Vec<_>>())
    }
}
