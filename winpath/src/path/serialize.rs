//! String forms of a [`ParsedPath`].

use std::fmt;

use crate::path::parser::SEPARATOR;
use crate::path::types::ParsedPath;

/// Prefix of every extended-length path.
pub const EXTENDED_PREFIX: &str = r"\\?\";

impl ParsedPath {
    /// Render the path with its drive or host prefix and every component.
    ///
    /// Each component is preceded by exactly one separator, so redundant
    /// separators in the original input are dropped. A path with no prefix
    /// and no components renders as the empty string; an absolute path with
    /// no components renders with a single trailing separator.
    ///
    /// # Examples
    ///
    /// ```
    /// use winpath::ParsedPath;
    ///
    /// assert_eq!(ParsedPath::parse(r"C:\\a\\b").to_canonical_string(), r"C:\a\b");
    /// assert_eq!(ParsedPath::parse(r"C:\").to_canonical_string(), r"C:\");
    /// assert_eq!(ParsedPath::parse("").to_canonical_string(), "");
    /// ```
    #[must_use]
    pub fn to_canonical_string(&self) -> String {
        let mut out = self.prefix();
        for component in self.components() {
            out.push(SEPARATOR);
            out.push_str(component);
        }
        if self.absolute && !self.has_components() {
            out.push(SEPARATOR);
        }
        out
    }

    /// Render the path in `\\?\` extended-length form.
    ///
    /// Local paths become `\\?\D:\...`, remote ones `\\?\UNC\host\...`.
    /// Directory components carry a trailing separator and the name does
    /// not. Relative paths are rendered too; only the marker differs.
    ///
    /// # Examples
    ///
    /// ```
    /// use winpath::ParsedPath;
    ///
    /// assert_eq!(ParsedPath::parse("C:").to_extended_unc(), r"\\?\C:\");
    /// assert_eq!(
    ///     ParsedPath::parse(r"\\peaches\msys64").to_extended_unc(),
    ///     r"\\?\UNC\peaches\msys64"
    /// );
    /// ```
    #[must_use]
    pub fn to_extended_unc(&self) -> String {
        let mut out = String::from(EXTENDED_PREFIX);
        if let Some(device) = self.device {
            out.push(device);
            out.push(':');
            out.push(SEPARATOR);
        } else if let Some(node) = &self.node {
            out.push_str("UNC");
            out.push(SEPARATOR);
            out.push_str(node);
            out.push(SEPARATOR);
        }
        for dir in &self.dirs {
            out.push_str(dir);
            out.push(SEPARATOR);
        }
        if let Some(name) = &self.name {
            out.push_str(name);
        }
        out
    }

    /// Render the path the way Windows would interpret it.
    ///
    /// Unlike [`to_canonical_string`](Self::to_canonical_string), relative
    /// paths stay relative: `C:foo` and `foo\bar` are rendered without a
    /// separator after the drive or before the first component. This is the
    /// form handed to resolution and filesystem collaborators.
    ///
    /// # Examples
    ///
    /// ```
    /// use winpath::ParsedPath;
    ///
    /// assert_eq!(ParsedPath::parse(r"src\\lib.rs").to_native_string(), r"src\lib.rs");
    /// assert_eq!(ParsedPath::parse("c:foo").to_native_string(), "C:foo");
    /// assert_eq!(ParsedPath::parse(r"\foo").to_native_string(), r"\foo");
    /// ```
    #[must_use]
    pub fn to_native_string(&self) -> String {
        let mut out = self.prefix();
        let rooted = self.absolute || self.node.is_some();
        for (i, component) in self.components().enumerate() {
            if i > 0 || rooted {
                out.push(SEPARATOR);
            }
            out.push_str(component);
        }
        if self.absolute && !self.has_components() {
            out.push(SEPARATOR);
        }
        out
    }

    fn prefix(&self) -> String {
        let mut out = String::new();
        if let Some(device) = self.device {
            out.push(device);
            out.push(':');
        } else if let Some(node) = &self.node {
            out.push(SEPARATOR);
            out.push(SEPARATOR);
            out.push_str(node);
        }
        out
    }
}

impl fmt::Display for ParsedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_canonical_string())
    }
}
