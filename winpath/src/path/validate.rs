//! Character and length validation for path components.
//!
//! Validation never halts parsing. Every violation becomes a [`PathError`]
//! record appended to the parsed path, and the offending scalar is still
//! kept in the component it belongs to.
//!
//! See also MSDN, "Naming Files, Paths, and Namespaces".

use serde::Serialize;
use thiserror::Error;

/// Maximum number of scalars in a path without the extended-length marker.
pub const MAX_PATH: usize = 255;

/// Maximum number of scalars in a path carrying the `\\?\` marker.
pub const MAX_EXTENDED_PATH: usize = 32767;

/// Classification of an accumulated validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PathErrorKind {
    /// One of `< > : " / \ | ? *` appeared inside a component.
    ReservedCharacter,
    /// The NUL scalar appeared inside a component.
    NullCharacter,
    /// A control scalar in the range 1-31 appeared inside a component.
    ControlCharacter,
    /// The raw input exceeded the applicable length ceiling.
    PathTooLong,
}

impl std::fmt::Display for PathErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReservedCharacter => write!(f, "reserved character"),
            Self::NullCharacter => write!(f, "null character"),
            Self::ControlCharacter => write!(f, "control character"),
            Self::PathTooLong => write!(f, "path too long"),
        }
    }
}

/// A single validation error recorded while parsing a path.
///
/// # Examples
///
/// ```
/// use winpath::path::PathErrorKind;
///
/// let parsed = winpath::parse("a\tb");
/// let err = &parsed.errors()[0];
/// assert_eq!(err.kind(), PathErrorKind::ControlCharacter);
/// assert_eq!(err.offset(), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{message}")]
pub struct PathError {
    kind: PathErrorKind,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    offset: Option<usize>,
}

impl PathError {
    /// Create a new error record.
    #[must_use]
    pub fn new(kind: PathErrorKind, message: impl Into<String>, offset: Option<usize>) -> Self {
        Self {
            kind,
            message: message.into(),
            offset,
        }
    }

    /// The error classification.
    #[must_use]
    pub fn kind(&self) -> PathErrorKind {
        self.kind
    }

    /// Human-readable description.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Scalar index into the raw input, when the error concerns one scalar.
    #[must_use]
    pub fn offset(&self) -> Option<usize> {
        self.offset
    }
}

/// Check whether `c` may appear inside a path component.
///
/// Returns the kind of violation for illegal scalars. Alternate data stream
/// syntax (`name:stream`) is not special-cased, so its colon is reported as
/// a reserved character.
///
/// # Examples
///
/// ```
/// use winpath::path::validate::check_scalar;
/// use winpath::path::PathErrorKind;
///
/// assert_eq!(check_scalar('a'), None);
/// assert_eq!(check_scalar('*'), Some(PathErrorKind::ReservedCharacter));
/// assert_eq!(check_scalar('\0'), Some(PathErrorKind::NullCharacter));
/// ```
#[must_use]
pub fn check_scalar(c: char) -> Option<PathErrorKind> {
    match c {
        '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*' => {
            Some(PathErrorKind::ReservedCharacter)
        }
        '\0' => Some(PathErrorKind::NullCharacter),
        '\u{1}'..='\u{1f}' => Some(PathErrorKind::ControlCharacter),
        _ => None,
    }
}

/// Validate one scalar at `offset`, producing an error record when illegal.
#[must_use]
pub fn validate_scalar(c: char, offset: usize) -> Option<PathError> {
    let kind = check_scalar(c)?;
    let message = match kind {
        PathErrorKind::ReservedCharacter => {
            format!("reserved character {c:?} at position {offset}")
        }
        PathErrorKind::NullCharacter => format!("NUL character at position {offset}"),
        _ => format!(
            "control character U+{:04X} at position {offset}; only valid in a file stream",
            u32::from(c)
        ),
    };
    Some(PathError::new(kind, message, Some(offset)))
}

/// The length ceiling applicable to a path.
#[must_use]
pub const fn length_ceiling(extended_length: bool) -> usize {
    if extended_length {
        MAX_EXTENDED_PATH
    } else {
        MAX_PATH
    }
}

/// Check the raw scalar count of an input against its ceiling.
///
/// The count is taken over the original input, including redundant
/// separators and the extended-length marker.
#[must_use]
pub fn validate_length(scalar_count: usize, extended_length: bool) -> Option<PathError> {
    let ceiling = length_ceiling(extended_length);
    if scalar_count <= ceiling {
        return None;
    }
    let message = if extended_length {
        format!(
            "the extended-length path exceeds the maximum of {ceiling} characters ({scalar_count})"
        )
    } else {
        format!("the path exceeds the maximum of {ceiling} characters ({scalar_count})")
    };
    Some(PathError::new(PathErrorKind::PathTooLong, message, None))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_characters() {
        for c in ['<', '>', ':', '"', '/', '\\', '|', '?', '*'] {
            assert_eq!(
                check_scalar(c),
                Some(PathErrorKind::ReservedCharacter),
                "{c:?} should be reserved"
            );
        }
    }

    #[test]
    fn test_null_and_control_characters() {
        assert_eq!(check_scalar('\0'), Some(PathErrorKind::NullCharacter));
        assert_eq!(check_scalar('\u{1}'), Some(PathErrorKind::ControlCharacter));
        assert_eq!(check_scalar('\t'), Some(PathErrorKind::ControlCharacter));
        assert_eq!(check_scalar('\u{1f}'), Some(PathErrorKind::ControlCharacter));
    }

    #[test]
    fn test_ordinary_characters_are_legal() {
        for c in ['a', 'Z', '0', ' ', '.', '-', '_', '\u{7f}', 'é', '日', '🦀'] {
            assert_eq!(check_scalar(c), None, "{c:?} should be legal");
        }
    }

    #[test]
    fn test_validate_scalar_records_offset() {
        let err = validate_scalar('|', 7).unwrap();
        assert_eq!(err.kind(), PathErrorKind::ReservedCharacter);
        assert_eq!(err.offset(), Some(7));
        assert!(err.message().contains("position 7"));
    }

    #[test]
    fn test_control_character_message() {
        let err = validate_scalar('\t', 1).unwrap();
        assert!(err.to_string().contains("U+0009"));
    }

    #[test]
    fn test_length_boundaries() {
        assert!(validate_length(255, false).is_none());
        assert!(validate_length(256, false).is_some());
        assert!(validate_length(32767, true).is_none());
        assert!(validate_length(32768, true).is_some());
    }

    #[test]
    fn test_length_message_names_ceiling() {
        let err = validate_length(300, false).unwrap();
        assert_eq!(err.kind(), PathErrorKind::PathTooLong);
        assert!(err.message().contains("maximum of 255"));
        assert_eq!(err.offset(), None);

        let err = validate_length(40000, true).unwrap();
        assert!(err.message().contains("extended-length"));
        assert!(err.message().contains("32767"));
    }
}
