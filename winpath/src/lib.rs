#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # winpath
//!
//! A library for taking Windows path strings apart without touching the
//! filesystem.
//!
//! The parser understands drive paths, rooted and relative paths, UNC
//! host/share paths and both extended-length (`\\?\`) forms. Parsing never
//! fails; illegal characters and over-long inputs are recorded as errors on
//! the result while the rest of the decomposition stays available.
//!
//! ## Core Types
//!
//! - [`ParsedPath`]: the decomposed path and its string forms
//! - [`PathError`] and [`PathErrorKind`]: accumulated validation errors
//! - [`FullPathResolver`]: the boundary used by [`ParsedPath::make_absolute`]
//! - [`Error`] and [`Result`]: errors from collaborators around the parser
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use winpath::ParsedPath;
//!
//! let mut path = ParsedPath::parse(r"C:\msys64");
//! assert_eq!(path.device(), Some('C'));
//! assert_eq!(path.name(), Some("msys64"));
//! assert!(path.is_absolute());
//!
//! path.make_directory();
//! assert_eq!(path.to_extended_unc(), r"\\?\C:\msys64\");
//! ```

pub mod config;
pub mod encoding;
pub mod error;
pub mod logging;
pub mod output;
pub mod path;
pub mod system;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use output::{OutputFormat, PathReport};
pub use path::{
    parse, FileSystem, FullPathResolver, ParsedPath, PathError, PathErrorKind, StdFileSystem,
    SystemResolver, WorkingDirResolver,
};
pub use system::SystemInfo;
