//! Filesystem existence checks layered over [`ParsedPath`].
//!
//! The parser never touches the filesystem. These helpers are a convenience
//! for callers and go through the [`FileSystem`] trait.

use std::fs;
use std::path::Path;

use crate::path::types::ParsedPath;

/// Existence queries against a filesystem.
#[cfg_attr(test, mockall::automock)]
pub trait FileSystem {
    /// Whether anything exists at `path`.
    fn exists(&self, path: &str) -> bool;

    /// Whether a directory exists at `path`.
    fn is_directory(&self, path: &str) -> bool;
}

/// The real filesystem, via `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn exists(&self, path: &str) -> bool {
        Path::new(path).exists()
    }

    fn is_directory(&self, path: &str) -> bool {
        fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
    }
}

impl ParsedPath {
    /// Whether the path exists according to `fs`.
    pub fn exists_with<F: FileSystem + ?Sized>(&self, fs: &F) -> bool {
        fs.exists(&self.to_native_string())
    }

    /// Whether the path names an existing directory according to `fs`.
    pub fn is_directory_with<F: FileSystem + ?Sized>(&self, fs: &F) -> bool {
        fs.is_directory(&self.to_native_string())
    }

    /// Whether the path names an existing directory on the real filesystem.
    #[must_use]
    pub fn is_directory_exists(&self) -> bool {
        self.is_directory_with(&StdFileSystem)
    }
}
