//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `parse`: Report the decomposition of one or more paths
//! - `canonical`: Print the canonical form
//! - `extended`: Print the extended-length form
//! - `absolute`: Resolve against a working directory
//! - `directory`: Coerce the trailing name into a directory
//! - `validate`: Print validation errors
//! - `exists`: Check the filesystem
//! - `system_dirs`: Show well-known directories
//! - `encode` / `decode`: Convert through a legacy code page
//! - `completions`: Generate shell completion scripts

pub mod absolute;
pub mod canonical;
pub mod completions;
pub mod decode;
pub mod directory;
pub mod encode;
pub mod exists;
pub mod extended;
pub mod parse;
pub mod system_dirs;
pub mod validate;

pub use absolute::AbsoluteCommand;
pub use canonical::CanonicalCommand;
pub use completions::CompletionsCommand;
pub use decode::DecodeCommand;
pub use directory::DirectoryCommand;
pub use encode::EncodeCommand;
pub use exists::ExistsCommand;
pub use extended::ExtendedCommand;
pub use parse::ParseCommand;
pub use system_dirs::SystemDirsCommand;
pub use validate::ValidateCommand;
