//! Main entry point for the winpath CLI.
//!
//! This is the command-line interface for the winpath parser. It provides
//! commands for inspecting Windows path strings:
//! - `parse`: Report every part of one or more paths
//! - `canonical` / `extended`: Print a string form
//! - `absolute` / `directory`: Apply a derived operation and print the result
//! - `validate`: Report validation errors
//! - `exists`: Check a path against the filesystem

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    let logger = winpath::init_logger(cli.verbose, cli.quiet);

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
        format: cli.format,
        strict: cli.strict,
    };

    // Route library logging to stderr before any command runs
    winpath::Logger::new(utils::resolve_log_level(&global, logger.level())).install();

    let result = match cli.command {
        cli::Command::Parse(cmd) => cmd.execute(&global),
        cli::Command::Canonical(cmd) => cmd.execute(&global),
        cli::Command::Extended(cmd) => cmd.execute(&global),
        cli::Command::Absolute(cmd) => cmd.execute(&global),
        cli::Command::Directory(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Exists(cmd) => cmd.execute(&global),
        cli::Command::SystemDirs(cmd) => cmd.execute(&global),
        cli::Command::Encode(cmd) => cmd.execute(&global),
        cli::Command::Decode(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
