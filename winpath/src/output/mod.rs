//! Output formatting for parsed paths.
//!
//! A [`PathReport`] is a serializable snapshot of everything known about a
//! parsed path. Reports are rendered by an [`OutputFormatter`] chosen from
//! an [`OutputFormat`].

mod formatters;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::path::{ParsedPath, PathError};
use crate::Result;

pub use formatters::{HumanFormatter, JsonFormatter, YamlFormatter};

/// Trait for formatting path reports into different output formats.
pub trait OutputFormatter {
    /// Format the given reports into a string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format(&self, reports: &[PathReport]) -> Result<String>;
}

/// Available output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable format.
    #[default]
    Human,
    /// JSON format.
    Json,
    /// YAML format.
    Yaml,
}

impl OutputFormat {
    /// Parse a format name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error message if the name is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use winpath::output::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::parse("JSON").unwrap(), OutputFormat::Json);
    /// assert!(OutputFormat::parse("xml").is_err());
    /// ```
    pub fn parse(s: &str) -> std::result::Result<Self, String> {
        match s.to_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            "yaml" => Ok(Self::Yaml),
            _ => Err(format!("invalid output format: {s}")),
        }
    }

    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Human => Box::new(HumanFormatter),
            Self::Json => Box::new(JsonFormatter),
            Self::Yaml => Box::new(YamlFormatter),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

/// Serializable view of a parsed path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathReport {
    /// The original input.
    pub input: String,
    /// Drive letter.
    pub device: Option<char>,
    /// UNC host name.
    pub node: Option<String>,
    /// Directory components.
    pub dirs: Vec<String>,
    /// Trailing name.
    pub name: Option<String>,
    /// Independent of the working directory.
    pub absolute: bool,
    /// Names a host/share.
    pub remote: bool,
    /// Carried the `\\?\` marker.
    pub extended_length: bool,
    /// Canonical string form.
    pub canonical: String,
    /// Extended-length string form.
    pub extended: String,
    /// Recorded validation errors.
    pub errors: Vec<PathError>,
}

impl PathReport {
    /// Build a report for `path`, which was parsed from `input`.
    #[must_use]
    pub fn new(input: &str, path: &ParsedPath) -> Self {
        Self {
            input: input.to_string(),
            device: path.device(),
            node: path.node().map(str::to_string),
            dirs: path.dirs().to_vec(),
            name: path.name().map(str::to_string),
            absolute: path.is_absolute(),
            remote: path.is_remote(),
            extended_length: path.is_extended_length(),
            canonical: path.to_canonical_string(),
            extended: path.to_extended_unc(),
            errors: path.errors().to_vec(),
        }
    }

    /// Parse `input` and build its report.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        Self::new(input, &ParsedPath::parse(input))
    }
}
