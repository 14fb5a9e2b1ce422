//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, report printing and the strict-mode
//! check.

use crate::error::CliError;
use std::path::PathBuf;
use winpath::output::OutputFormat;
use winpath::logging::LOG_MODE_ENV;
use winpath::{Config, ConfigBuilder, LogLevel, ParsedPath, PathReport};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
#[allow(dead_code)] // Fields used via pattern matching in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit configuration file.
    pub config: Option<PathBuf>,

    /// Output format override.
    pub format: Option<OutputFormat>,

    /// Fail when any path has validation errors.
    pub strict: bool,
}

impl GlobalOptions {
    /// The overrides these flags contribute to the configuration.
    fn as_config(&self) -> Config {
        Config {
            output_format: self.format,
            strict: self.strict.then_some(true),
            ..Config::default()
        }
    }
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. The `--config` file
/// 4. The user configuration file
/// 5. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref file) = global.config {
        if !file.exists() {
            return Err(CliError::Config(format!(
                "configuration file not found: {}",
                file.display()
            )));
        }
        builder = builder.with_file(file);
    }

    builder
        .with_config(global.as_config())
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Pick the log level, letting a configured `log_mode` apply only when
/// neither a flag nor `WINPATH_LOG_MODE` chose one.
pub fn resolve_log_level(global: &GlobalOptions, from_flags_or_env: LogLevel) -> LogLevel {
    if global.verbose || global.quiet || std::env::var_os(LOG_MODE_ENV).is_some() {
        return from_flags_or_env;
    }
    load_configuration(global)
        .ok()
        .and_then(|config| config.log_mode)
        .unwrap_or(from_flags_or_env)
}

/// Render reports in the configured output format.
pub fn format_reports(config: &Config, reports: &[PathReport]) -> Result<String, CliError> {
    let formatter = config.output_format().create_formatter();
    formatter.format(reports).map_err(CliError::from)
}

/// Print the chosen string form of a path.
pub fn render_path(path: &ParsedPath, extended: bool) -> String {
    if extended {
        path.to_extended_unc()
    } else {
        path.to_canonical_string()
    }
}

/// Under `--strict`, turn recorded validation errors into a failure.
pub fn check_strict(config: &Config, paths: &[&ParsedPath]) -> Result<(), CliError> {
    let invalid = paths.iter().filter(|p| !p.is_valid()).count();
    if config.is_strict() && invalid > 0 {
        return Err(CliError::SemanticFailure(format!(
            "{invalid} path(s) have validation errors"
        )));
    }
    Ok(())
}

/// Decode a string of hex digit pairs, ignoring whitespace.
pub fn parse_hex(input: &str) -> Result<Vec<u8>, CliError> {
    let digits: Vec<char> = input.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.len() % 2 != 0 {
        return Err(CliError::InvalidArguments(
            "hex input must have an even number of digits".to_string(),
        ));
    }

    digits
        .chunks(2)
        .map(|pair| {
            let text: String = pair.iter().collect();
            u8::from_str_radix(&text, 16)
                .map_err(|_| CliError::InvalidArguments(format!("invalid hex byte: {text}")))
        })
        .collect()
}

/// Render bytes as space-separated hex pairs.
pub fn to_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_path() {
        let path = ParsedPath::parse(r"C:\msys64");
        assert_eq!(render_path(&path, false), r"C:\msys64");
        assert_eq!(render_path(&path, true), r"\\?\C:\msys64");
    }

    #[test]
    fn test_check_strict() {
        let bad = ParsedPath::parse("a|b");
        let good = ParsedPath::parse("ab");
        let strict = Config {
            strict: Some(true),
            ..Config::default()
        };

        assert!(check_strict(&Config::default(), &[&bad]).is_ok());
        assert!(check_strict(&strict, &[&good]).is_ok());
        assert_eq!(check_strict(&strict, &[&good, &bad]).unwrap_err().exit_code(), 1);
    }

    #[test]
    fn test_hex_round_trip() {
        assert_eq!(parse_hex("68 65 80").unwrap(), vec![0x68, 0x65, 0x80]);
        assert_eq!(parse_hex("C:").unwrap_err().exit_code(), 4);
        assert!(parse_hex("abc").is_err());
        assert_eq!(to_hex(&[0x00, 0xff, 0x80]), "00 ff 80");
    }

    #[test]
    fn test_flags_decide_log_level() {
        let global = GlobalOptions {
            quiet: true,
            ..GlobalOptions::default()
        };
        assert_eq!(resolve_log_level(&global, LogLevel::Quiet), LogLevel::Quiet);
    }

    #[test]
    fn test_global_options_override_config() {
        let global = GlobalOptions {
            format: Some(OutputFormat::Json),
            strict: true,
            ..GlobalOptions::default()
        };
        let config = global.as_config();
        assert_eq!(config.output_format(), OutputFormat::Json);
        assert!(config.is_strict());
        assert_eq!(GlobalOptions::default().as_config(), Config::default());
    }
}
