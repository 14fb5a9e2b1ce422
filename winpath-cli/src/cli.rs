//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AbsoluteCommand, CanonicalCommand, CompletionsCommand, DecodeCommand, DirectoryCommand,
    EncodeCommand, ExistsCommand, ExtendedCommand, ParseCommand, SystemDirsCommand,
    ValidateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use winpath::OutputFormat;

/// Command-line tool for taking Windows paths apart.
#[derive(Parser)]
#[command(name = "winpath")]
#[command(version, about = "Parse, validate and rewrite Windows paths", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Load configuration from this file
    #[arg(long, value_name = "FILE", global = true, env = "WINPATH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for path reports
    #[arg(long, value_name = "FORMAT", global = true, value_parser = OutputFormat::parse)]
    pub format: Option<OutputFormat>,

    /// Fail when any path has validation errors
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Report every part of one or more paths
    Parse(ParseCommand),

    /// Print the canonical form of a path
    Canonical(CanonicalCommand),

    /// Print the extended-length form of a path
    Extended(ExtendedCommand),

    /// Resolve a relative path against a working directory
    Absolute(AbsoluteCommand),

    /// Treat the last component of a path as a directory
    Directory(DirectoryCommand),

    /// Report validation errors for one or more paths
    Validate(ValidateCommand),

    /// Check whether a path exists
    Exists(ExistsCommand),

    /// Show the machine name and well-known directories
    SystemDirs(SystemDirsCommand),

    /// Encode text into a legacy code page (printed as hex)
    Encode(EncodeCommand),

    /// Decode hex bytes from a legacy code page
    Decode(DecodeCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
