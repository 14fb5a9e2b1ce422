//! Command to show the machine name and well-known directories.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;
use winpath::output::OutputFormat;
use winpath::system::SystemDirectories;
use winpath::SystemInfo;

/// Show the values that resolve from the process environment.
#[derive(Args)]
pub struct SystemDirsCommand {}

impl SystemDirsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let dirs = SystemInfo::from_process().snapshot();

        match config.output_format() {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&dirs)
                    .map_err(|e| CliError::Library(e.into()))?;
                println!("{json}");
            }
            OutputFormat::Yaml => {
                let yaml =
                    serde_yaml::to_string(&dirs).map_err(|e| CliError::Library(e.into()))?;
                print!("{yaml}");
            }
            OutputFormat::Human => print_human(&dirs),
        }
        Ok(())
    }
}

fn print_human(dirs: &SystemDirectories) {
    let rows = [
        ("computer name", &dirs.computer_name),
        ("system", &dirs.system_directory),
        ("home", &dirs.home_directory),
        ("config home", &dirs.config_home_directory),
        ("data home", &dirs.data_home_directory),
        ("config", &dirs.config_directory),
    ];
    for (label, value) in rows {
        if let Some(value) = value {
            println!("{label:<14} {value}");
        }
    }
}
