//! Lexical decomposition of Windows path strings.
//!
//! This module turns an arbitrary string into a [`ParsedPath`] without
//! touching the filesystem. The following input forms are understood:
//!
//! 1. Relative file or directory (`docs\guide.md`)
//! 2. Drive-relative file or directory (`C:docs`)
//! 3. Absolute file or directory (`C:\msys64`, `\msys64`)
//! 4. UNC file or directory (`\\host\share\file`)
//! 5. Extended-length local file or directory (`\\?\C:\msys64`)
//! 6. Extended-length UNC file or directory (`\\?\UNC\host\share`)
//!
//! # Validation
//!
//! Illegal characters and over-long paths do not stop parsing. They are
//! collected as [`PathError`] records in [`ParsedPath::errors`], and the
//! caller decides whether they are fatal.
//!
//! ```
//! use winpath::path::PathErrorKind;
//!
//! let path = winpath::parse("a\tb");
//! assert_eq!(path.name(), Some("a\tb"));
//! assert_eq!(path.errors()[0].kind(), PathErrorKind::ControlCharacter);
//! ```
//!
//! # String forms
//!
//! ```
//! use winpath::ParsedPath;
//!
//! let path = ParsedPath::parse(r"\\peaches\msys64\home\joe");
//! assert_eq!(path.to_canonical_string(), r"\\peaches\msys64\home\joe");
//! assert_eq!(path.to_extended_unc(), r"\\?\UNC\peaches\msys64\home\joe");
//! ```
//!
//! # Derived operations
//!
//! [`ParsedPath::make_directory`] mutates in place, while
//! [`ParsedPath::make_absolute`] returns a new value and leaves the
//! receiver alone.

pub mod fs;
pub mod parser;
pub mod resolver;
pub mod serialize;
mod types;
pub mod validate;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use fs::{FileSystem, StdFileSystem};
pub use parser::parse;
pub use resolver::{FullPathResolver, SystemResolver, WorkingDirResolver};
pub use types::ParsedPath;
pub use validate::{PathError, PathErrorKind, MAX_EXTENDED_PATH, MAX_PATH};
