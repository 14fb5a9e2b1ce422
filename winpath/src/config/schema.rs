//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;
use crate::output::OutputFormat;

/// Complete configuration structure.
///
/// Every field is optional so that configurations from several sources
/// can be layered; see [`Config::merge_from`].
///
/// # Examples
///
/// ```
/// use winpath::config::Config;
/// use winpath::output::OutputFormat;
///
/// let config: Config = serde_yaml::from_str("output_format: json\nstrict: true\n").unwrap();
/// assert_eq!(config.output_format(), OutputFormat::Json);
/// assert!(config.is_strict());
/// assert!(!config.prefers_extended());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Output format for path reports.
    pub output_format: Option<OutputFormat>,

    /// Treat recorded validation errors as a failure.
    pub strict: Option<bool>,

    /// Print the extended-length form by default.
    pub extended: Option<bool>,

    /// Logging verbosity.
    pub log_mode: Option<LogLevel>,
}

impl Config {
    /// Overlay every field that is set in `source` onto `self`.
    pub fn merge_from(&mut self, source: &Config) {
        if source.output_format.is_some() {
            self.output_format = source.output_format;
        }
        if source.strict.is_some() {
            self.strict = source.strict;
        }
        if source.extended.is_some() {
            self.extended = source.extended;
        }
        if source.log_mode.is_some() {
            self.log_mode = source.log_mode;
        }
    }

    /// The effective output format.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }

    /// Whether validation errors should fail the command.
    #[must_use]
    pub fn is_strict(&self) -> bool {
        self.strict.unwrap_or(false)
    }

    /// Whether the extended-length form is preferred.
    #[must_use]
    pub fn prefers_extended(&self) -> bool {
        self.extended.unwrap_or(false)
    }

    /// The effective log level.
    #[must_use]
    pub fn log_level(&self) -> LogLevel {
        self.log_mode.unwrap_or(LogLevel::Normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.output_format(), OutputFormat::Human);
        assert!(!config.is_strict());
        assert!(!config.prefers_extended());
        assert_eq!(config.log_level(), LogLevel::Normal);
    }

    #[test]
    fn test_deserialize_full() {
        let yaml = "output_format: yaml\nstrict: true\nextended: true\nlog_mode: verbose\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.output_format(), OutputFormat::Yaml);
        assert!(config.is_strict());
        assert!(config.prefers_extended());
        assert_eq!(config.log_level(), LogLevel::Verbose);
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: Result<Config, _> = serde_yaml::from_str("ports: 5000\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_merge_overwrites_set_fields_only() {
        let mut base = Config {
            output_format: Some(OutputFormat::Json),
            strict: Some(true),
            ..Default::default()
        };
        let overlay = Config {
            strict: Some(false),
            extended: Some(true),
            ..Default::default()
        };
        base.merge_from(&overlay);

        assert_eq!(base.output_format, Some(OutputFormat::Json));
        assert_eq!(base.strict, Some(false));
        assert_eq!(base.extended, Some(true));
        assert_eq!(base.log_mode, None);
    }

    #[test]
    fn test_merge_with_empty_is_identity() {
        let original = Config {
            output_format: Some(OutputFormat::Yaml),
            log_mode: Some(LogLevel::Quiet),
            ..Default::default()
        };
        let mut merged = original.clone();
        merged.merge_from(&Config::default());
        assert_eq!(merged, original);
    }
}
