//! Command to resolve a path against a working directory.

use crate::error::CliError;
use crate::utils::{check_strict, load_configuration, render_path, GlobalOptions};
use clap::Args;
use winpath::{FullPathResolver, ParsedPath, SystemResolver, WorkingDirResolver};

/// Resolve a relative path into an absolute one.
///
/// With `--cwd` the resolution is purely lexical. Without it the operating
/// system's full-path service is used, which is only available on Windows;
/// elsewhere the path is printed unchanged.
#[derive(Args)]
pub struct AbsoluteCommand {
    /// Path to resolve
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Working directory to resolve against
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<String>,

    /// Print the extended-length form
    #[arg(long)]
    pub extended: bool,
}

impl AbsoluteCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let path = ParsedPath::parse(&self.path);

        let resolver: Box<dyn FullPathResolver> = match self.cwd {
            Some(ref cwd) => {
                let resolver = WorkingDirResolver::new(cwd);
                if !resolver.is_valid() {
                    return Err(CliError::InvalidArguments(format!(
                        "working directory must be absolute with a drive or share: {cwd}"
                    )));
                }
                Box::new(resolver)
            }
            None => Box::new(SystemResolver::new()),
        };

        let absolute = path.make_absolute(resolver.as_ref());
        println!(
            "{}",
            render_path(&absolute, self.extended || config.prefers_extended())
        );
        check_strict(&config, &[&absolute])
    }
}
