//! Full-path resolution used by [`ParsedPath::make_absolute`].
//!
//! Resolution is the one operation that may need the operating system. It
//! sits behind the [`FullPathResolver`] trait so the parser itself stays
//! pure; a failed resolution is reported as an `Err` and callers fall back
//! to the unresolved path.

use crate::error::{Error, Result};
use crate::path::types::ParsedPath;

/// Turns a relative path into a fully qualified one.
#[cfg_attr(test, mockall::automock)]
pub trait FullPathResolver {
    /// Resolve `path` against the current drive and working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be resolved.
    fn full_path(&self, path: &str) -> Result<String>;
}

/// Resolves paths through the operating system.
///
/// Only available on Windows; elsewhere every call fails with
/// [`Error::Unsupported`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

impl SystemResolver {
    /// Create a new system resolver.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl FullPathResolver for SystemResolver {
    #[cfg(windows)]
    fn full_path(&self, path: &str) -> Result<String> {
        let absolute = std::path::absolute(path).map_err(|e| Error::Resolution {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        absolute
            .into_os_string()
            .into_string()
            .map_err(|_| Error::Resolution {
                path: path.to_string(),
                reason: "resolved path is not valid Unicode".to_string(),
            })
    }

    #[cfg(not(windows))]
    fn full_path(&self, _path: &str) -> Result<String> {
        Err(Error::Unsupported {
            operation: "operating system full-path resolution".to_string(),
        })
    }
}

/// Resolves paths lexically against a fixed working directory.
///
/// The working directory must be absolute: either drive-rooted (`C:\work`)
/// or a UNC share (`\\host\share`).
///
/// - `\foo` is placed at the root of the working directory's drive or share.
/// - `foo` and `C:foo` on the working directory's drive are appended to it.
/// - `D:foo` on another drive is placed at the root of that drive.
///
/// `.` and `..` components are kept as ordinary components.
///
/// # Examples
///
/// ```
/// use winpath::path::{FullPathResolver, WorkingDirResolver};
///
/// let resolver = WorkingDirResolver::new(r"C:\Users\joe");
/// assert_eq!(resolver.full_path("notes.txt").unwrap(), r"C:\Users\joe\notes.txt");
/// assert_eq!(resolver.full_path(r"\Windows").unwrap(), r"C:\Windows");
/// assert_eq!(resolver.full_path("d:data").unwrap(), r"D:\data");
/// ```
#[derive(Debug, Clone)]
pub struct WorkingDirResolver {
    cwd: ParsedPath,
}

impl WorkingDirResolver {
    /// Create a resolver for the given working directory.
    #[must_use]
    pub fn new(cwd: &str) -> Self {
        let mut cwd = ParsedPath::parse(cwd);
        cwd.make_directory();
        Self { cwd }
    }

    /// The working directory this resolver appends to.
    #[must_use]
    pub fn working_dir(&self) -> &ParsedPath {
        &self.cwd
    }

    /// Whether the working directory is rooted at a drive or a UNC share.
    ///
    /// Only such a directory can resolve relative paths; a rooted path like
    /// `\work` has no drive to resolve against.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        (self.cwd.device.is_some() && self.cwd.absolute) || self.cwd.node.is_some()
    }
}

impl FullPathResolver for WorkingDirResolver {
    fn full_path(&self, path: &str) -> Result<String> {
        if !self.is_valid() {
            return Err(Error::Resolution {
                path: path.to_string(),
                reason: format!(
                    "working directory {} is not absolute",
                    self.cwd.to_canonical_string()
                ),
            });
        }

        let target = ParsedPath::parse(path);
        if target.remote || (target.absolute && target.device.is_some()) {
            return Ok(target.to_canonical_string());
        }

        let mut resolved = ParsedPath {
            absolute: true,
            ..ParsedPath::default()
        };

        match target.device {
            Some(drive) if Some(drive) != self.cwd.device => {
                resolved.device = Some(drive);
            }
            _ => {
                resolved.device = self.cwd.device;
                resolved.node.clone_from(&self.cwd.node);
                resolved.remote = self.cwd.remote;
                if !target.absolute {
                    resolved.dirs.clone_from(&self.cwd.dirs);
                }
            }
        }

        resolved.dirs.extend(target.dirs.iter().cloned());
        resolved.name.clone_from(&target.name);
        Ok(resolved.to_canonical_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_appends_to_cwd() {
        let resolver = WorkingDirResolver::new(r"C:\Users\joe");
        assert_eq!(
            resolver.full_path(r"src\main.rs").unwrap(),
            r"C:\Users\joe\src\main.rs"
        );
    }

    #[test]
    fn test_cwd_trailing_separator() {
        let resolver = WorkingDirResolver::new(r"C:\Users\joe\");
        assert_eq!(resolver.full_path("a").unwrap(), r"C:\Users\joe\a");
    }

    #[test]
    fn test_rooted_uses_cwd_drive() {
        let resolver = WorkingDirResolver::new(r"E:\deep\work");
        assert_eq!(resolver.full_path(r"\msys64").unwrap(), r"E:\msys64");
    }

    #[test]
    fn test_same_drive_relative() {
        let resolver = WorkingDirResolver::new(r"C:\work");
        assert_eq!(resolver.full_path("c:file").unwrap(), r"C:\work\file");
    }

    #[test]
    fn test_other_drive_relative() {
        let resolver = WorkingDirResolver::new(r"C:\work");
        assert_eq!(resolver.full_path("D:file").unwrap(), r"D:\file");
        assert_eq!(resolver.full_path("D:").unwrap(), r"D:\");
    }

    #[test]
    fn test_absolute_passes_through() {
        let resolver = WorkingDirResolver::new(r"C:\work");
        assert_eq!(resolver.full_path(r"F:\x\y").unwrap(), r"F:\x\y");
        assert_eq!(
            resolver.full_path(r"\\host\share\y").unwrap(),
            r"\\host\share\y"
        );
    }

    #[test]
    fn test_unc_working_directory() {
        let resolver = WorkingDirResolver::new(r"\\peaches\msys64\home");
        assert_eq!(
            resolver.full_path("joe").unwrap(),
            r"\\peaches\msys64\home\joe"
        );
        assert_eq!(resolver.full_path(r"\etc").unwrap(), r"\\peaches\etc");
    }

    #[test]
    fn test_working_directory_validity() {
        assert!(WorkingDirResolver::new(r"C:\work").is_valid());
        assert!(WorkingDirResolver::new(r"\\peaches\msys64").is_valid());
        assert!(!WorkingDirResolver::new(r"\work").is_valid());
        assert!(!WorkingDirResolver::new("C:work").is_valid());
        assert!(!WorkingDirResolver::new("relative").is_valid());
    }

    #[test]
    fn test_rooted_working_directory_without_drive_fails() {
        let resolver = WorkingDirResolver::new(r"\work");
        let err = resolver.full_path(r"src\x").unwrap_err();
        assert!(matches!(err, Error::Resolution { .. }));
    }

    #[test]
    fn test_relative_working_directory_fails() {
        let resolver = WorkingDirResolver::new(r"relative\dir");
        let err = resolver.full_path("x").unwrap_err();
        assert!(matches!(err, Error::Resolution { .. }));
    }

    #[test]
    fn test_drive_relative_working_directory_fails() {
        let resolver = WorkingDirResolver::new("C:work");
        assert!(resolver.full_path("x").is_err());
    }

    #[test]
    fn test_make_absolute_with_working_dir() {
        let resolver = WorkingDirResolver::new(r"C:\Users\joe");
        let path = ParsedPath::parse("path_test.go").make_absolute(&resolver);
        assert_eq!(path.device(), Some('C'));
        assert_eq!(path.name(), Some("path_test.go"));
        assert!(path.is_absolute());
    }

    #[test]
    fn test_make_absolute_falls_back_on_bad_cwd() {
        let resolver = WorkingDirResolver::new("nowhere");
        let path = ParsedPath::parse("file");
        assert_eq!(path.make_absolute(&resolver), path);
    }

    #[cfg(not(windows))]
    #[test]
    fn test_system_resolver_unsupported() {
        let err = SystemResolver::new().full_path("x").unwrap_err();
        assert!(matches!(err, Error::Unsupported { .. }));
        let path = ParsedPath::parse("x");
        assert_eq!(path.make_absolute(&SystemResolver::new()), path);
    }
}
