//! Library exports for winpath-cli.
//!
//! This module exports the CLI structure for use by the build script
//! and by integration tests.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
