//! Error types for the winpath library.
//!
//! Parsing itself never fails: validation problems are accumulated as
//! [`PathError`](crate::path::PathError) records on the parsed path. The
//! [`Error`] type here covers the collaborators around the parser
//! (resolution, encoding, environment lookups, configuration).

use thiserror::Error;

/// Result type alias for operations that may fail with a winpath error.
///
/// # Examples
///
/// ```
/// use winpath::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok(r"C:\msys64".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the winpath library.
#[derive(Debug, Error)]
pub enum Error {
    /// A path could not be resolved to a full path.
    #[error("cannot resolve {path}: {reason}")]
    Resolution {
        /// The path that failed to resolve.
        path: String,
        /// The reason resolution failed.
        reason: String,
    },

    /// The operation is not available on this platform.
    #[error("unsupported operation: {operation}")]
    Unsupported {
        /// The operation that was attempted.
        operation: String,
    },

    /// Text could not be converted between encodings.
    #[error("encoding error for code page {code_page}: {reason}")]
    Encoding {
        /// The code page involved in the conversion.
        code_page: u32,
        /// The reason the conversion failed.
        reason: String,
    },

    /// The requested resource was not found.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A JSON serialization error occurred.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if error indicates a missing resource.
    ///
    /// # Examples
    ///
    /// ```
    /// use winpath::Error;
    ///
    /// let err = Error::NotFound { resource: "APPDATA".to_string() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if error means the operation cannot run on this platform.
    #[must_use]
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }
}
