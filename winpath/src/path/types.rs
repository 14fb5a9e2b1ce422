//! The parsed representation of a Windows path.

use serde::Serialize;

use crate::path::parser;
use crate::path::resolver::FullPathResolver;
use crate::path::validate::PathError;

/// A lexically decomposed Windows path.
///
/// A `ParsedPath` is either rooted at a local drive (`device`) or at a
/// remote host/share (`node`), never both. Directory components are kept in
/// root-to-leaf order and the trailing component, if any, is held separately
/// as the `name`.
///
/// Validation problems never prevent construction; they are recorded in
/// [`errors`](Self::errors) while every other accessor still reports the
/// best-effort decomposition.
///
/// # Examples
///
/// ```
/// use winpath::ParsedPath;
///
/// let path = ParsedPath::parse(r"\\peaches\msys64\home\joe");
/// assert_eq!(path.node(), Some("peaches"));
/// assert_eq!(path.dirs(), ["msys64", "home"]);
/// assert_eq!(path.name(), Some("joe"));
/// assert!(path.is_remote());
/// assert!(!path.is_absolute());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ParsedPath {
    pub(crate) device: Option<char>,
    pub(crate) node: Option<String>,
    pub(crate) dirs: Vec<String>,
    pub(crate) name: Option<String>,
    pub(crate) absolute: bool,
    pub(crate) remote: bool,
    pub(crate) extended_length: bool,
    pub(crate) errors: Vec<PathError>,
}

impl ParsedPath {
    /// Parse a path string by purely lexical processing.
    ///
    /// Parsing is total: every input, including ones containing characters
    /// that are illegal in Windows file names, produces a `ParsedPath`.
    ///
    /// # Examples
    ///
    /// ```
    /// use winpath::ParsedPath;
    ///
    /// let path = ParsedPath::parse(r"C:\msys64");
    /// assert_eq!(path.device(), Some('C'));
    /// assert_eq!(path.name(), Some("msys64"));
    /// assert!(path.is_absolute());
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Self {
        parser::parse(input)
    }

    /// The drive letter, always uppercase.
    #[must_use]
    pub fn device(&self) -> Option<char> {
        self.device
    }

    /// The host name of a UNC path.
    #[must_use]
    pub fn node(&self) -> Option<&str> {
        self.node.as_deref()
    }

    /// The leading directory components, root to leaf.
    #[must_use]
    pub fn dirs(&self) -> &[String] {
        &self.dirs
    }

    /// The trailing file or directory name.
    ///
    /// `None` when the input ended at a separator or held only a prefix.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Every component, directories first and the name last.
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.dirs
            .iter()
            .map(String::as_str)
            .chain(self.name.as_deref())
    }

    /// Whether the path has any directory or name components.
    #[must_use]
    pub fn has_components(&self) -> bool {
        !self.dirs.is_empty() || self.name.is_some()
    }

    /// Whether the path is independent of the current working directory.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.absolute
    }

    /// Whether the path depends on the current working directory.
    #[must_use]
    pub fn is_relative(&self) -> bool {
        !self.absolute
    }

    /// Whether the path names a host/share.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        self.remote
    }

    /// Whether the path refers to the local machine.
    #[must_use]
    pub fn is_local(&self) -> bool {
        !self.remote
    }

    /// Whether the input carried the `\\?\` extended-length marker.
    #[must_use]
    pub fn is_extended_length(&self) -> bool {
        self.extended_length
    }

    /// All validation errors in the order they were encountered.
    #[must_use]
    pub fn errors(&self) -> &[PathError] {
        &self.errors
    }

    /// Whether parsing recorded no validation errors.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Resolve a relative local path into an absolute one.
    ///
    /// Remote and already-absolute paths are returned as an unchanged copy.
    /// Otherwise the path is handed to `resolver` and the result is parsed
    /// into a new `ParsedPath`; if resolution fails, an unchanged copy is
    /// returned. The receiver is never modified.
    ///
    /// # Examples
    ///
    /// ```
    /// use winpath::path::WorkingDirResolver;
    /// use winpath::ParsedPath;
    ///
    /// let resolver = WorkingDirResolver::new(r"C:\Users\joe");
    /// let path = ParsedPath::parse(r"src\main.rs");
    /// let absolute = path.make_absolute(&resolver);
    ///
    /// assert_eq!(absolute.to_canonical_string(), r"C:\Users\joe\src\main.rs");
    /// assert!(path.is_relative());
    /// ```
    #[must_use]
    pub fn make_absolute<R>(&self, resolver: &R) -> Self
    where
        R: FullPathResolver + ?Sized,
    {
        if self.remote || self.absolute {
            return self.clone();
        }

        let native = self.to_native_string();
        match resolver.full_path(&native) {
            Ok(resolved) => {
                log::debug!("resolved {native:?} to {resolved:?}");
                Self::parse(&resolved)
            }
            Err(e) => {
                log::debug!("could not resolve {native:?}: {e}");
                self.clone()
            }
        }
    }

    /// Turn the trailing name into the last directory component.
    ///
    /// This mutates the receiver in place and returns it for chaining.
    ///
    /// # Examples
    ///
    /// ```
    /// use winpath::ParsedPath;
    ///
    /// let mut path = ParsedPath::parse(r"C:\msys64");
    /// path.make_directory();
    /// assert_eq!(path.name(), None);
    /// assert_eq!(path.dirs(), ["msys64"]);
    /// assert_eq!(path.to_extended_unc(), r"\\?\C:\msys64\");
    /// ```
    pub fn make_directory(&mut self) -> &mut Self {
        if let Some(name) = self.name.take() {
            self.dirs.push(name);
        }
        self
    }
}

impl From<&str> for ParsedPath {
    fn from(input: &str) -> Self {
        Self::parse(input)
    }
}

impl std::str::FromStr for ParsedPath {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::path::resolver::MockFullPathResolver;

    #[test]
    fn test_default_is_empty() {
        let path = ParsedPath::default();
        assert_eq!(path.device(), None);
        assert_eq!(path.node(), None);
        assert!(path.dirs().is_empty());
        assert_eq!(path.name(), None);
        assert!(!path.is_absolute());
        assert!(!path.is_remote());
        assert!(!path.is_extended_length());
        assert!(path.is_valid());
    }

    #[test]
    fn test_components_order() {
        let path = ParsedPath::parse(r"C:\a\b\c.txt");
        let components: Vec<&str> = path.components().collect();
        assert_eq!(components, vec!["a", "b", "c.txt"]);
    }

    #[test]
    fn test_make_directory_moves_name() {
        let mut path = ParsedPath::parse(r"C:\msys64");
        path.make_directory();
        assert_eq!(path.name(), None);
        assert_eq!(path.dirs(), ["msys64"]);
    }

    #[test]
    fn test_make_directory_without_name_is_noop() {
        let mut path = ParsedPath::parse(r"C:\msys64\");
        let before = path.clone();
        path.make_directory();
        assert_eq!(path, before);
    }

    #[test]
    fn test_make_directory_returns_same_handle() {
        let mut path = ParsedPath::parse(r"a\b");
        let ptr: *const ParsedPath = &path;
        let returned: *const ParsedPath = path.make_directory();
        assert_eq!(ptr, returned);
    }

    #[test]
    fn test_make_absolute_skips_absolute_paths() {
        let mut resolver = MockFullPathResolver::new();
        resolver.expect_full_path().never();

        let path = ParsedPath::parse(r"C:\msys64");
        assert_eq!(path.make_absolute(&resolver), path);
    }

    #[test]
    fn test_make_absolute_skips_remote_paths() {
        let mut resolver = MockFullPathResolver::new();
        resolver.expect_full_path().never();

        let path = ParsedPath::parse(r"\\peaches\msys64");
        assert_eq!(path.make_absolute(&resolver), path);
    }

    #[test]
    fn test_make_absolute_reparses_resolved_string() {
        let mut resolver = MockFullPathResolver::new();
        resolver
            .expect_full_path()
            .withf(|p| p == r"src\lib.rs")
            .times(1)
            .returning(|_| Ok(r"D:\work\src\lib.rs".to_string()));

        let path = ParsedPath::parse(r"src\lib.rs");
        let absolute = path.make_absolute(&resolver);

        assert_eq!(absolute.device(), Some('D'));
        assert_eq!(absolute.dirs(), ["work", "src"]);
        assert_eq!(absolute.name(), Some("lib.rs"));
        assert!(absolute.is_absolute());
        // receiver untouched
        assert!(path.is_relative());
        assert_eq!(path.device(), None);
    }

    #[test]
    fn test_make_absolute_returns_copy_on_failure() {
        let mut resolver = MockFullPathResolver::new();
        resolver.expect_full_path().returning(|p| {
            Err(Error::Resolution {
                path: p.to_string(),
                reason: "boom".to_string(),
            })
        });

        let path = ParsedPath::parse("file.txt");
        assert_eq!(path.make_absolute(&resolver), path);
    }

    #[test]
    fn test_from_str() {
        let path: ParsedPath = "C:".parse().unwrap();
        assert_eq!(path.device(), Some('C'));
        assert_eq!(ParsedPath::from("C:"), path);
    }
}
