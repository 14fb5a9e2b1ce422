//! Environment variable handling for configuration overrides.
//!
//! Recognized variables:
//! - `WINPATH_OUTPUT_FORMAT`: `human`, `json` or `yaml`
//! - `WINPATH_STRICT`: boolean
//! - `WINPATH_EXTENDED`: boolean
//! - `WINPATH_LOG_MODE`: `quiet`, `normal` or `verbose`

use std::env;

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::logging::{LogLevel, LOG_MODE_ENV};
use crate::output::OutputFormat;

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use winpath::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply `WINPATH_*` environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any variable holds an invalid value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(val) = env::var("WINPATH_OUTPUT_FORMAT") {
            config.output_format =
                Some(OutputFormat::parse(&val).map_err(|message| Error::Validation {
                    field: "WINPATH_OUTPUT_FORMAT".into(),
                    message,
                })?);
        }

        if let Ok(val) = env::var("WINPATH_STRICT") {
            config.strict = Some(Self::parse_bool("WINPATH_STRICT", &val)?);
        }

        if let Ok(val) = env::var("WINPATH_EXTENDED") {
            config.extended = Some(Self::parse_bool("WINPATH_EXTENDED", &val)?);
        }

        if let Ok(val) = env::var(LOG_MODE_ENV) {
            config.log_mode = Some(LogLevel::parse(&val).map_err(|message| Error::Validation {
                field: LOG_MODE_ENV.into(),
                message,
            })?);
        }

        Ok(())
    }

    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 4] = [
        "WINPATH_OUTPUT_FORMAT",
        "WINPATH_STRICT",
        "WINPATH_EXTENDED",
        LOG_MODE_ENV,
    ];

    fn with_env<F: FnOnce()>(pairs: &[(&str, &str)], f: F) {
        let saved: Vec<_> = VARS.iter().map(|k| (*k, env::var(k).ok())).collect();
        for k in VARS {
            env::remove_var(k);
        }
        for (k, v) in pairs {
            env::set_var(k, v);
        }

        f();

        for (k, v) in saved {
            match v {
                Some(v) => env::set_var(k, v),
                None => env::remove_var(k),
            }
        }
    }

    #[test]
    fn test_parse_bool() {
        for s in ["true", "1", "YES", "on"] {
            assert!(EnvironmentConfig::parse_bool("f", s).unwrap());
        }
        for s in ["false", "0", "No", "OFF"] {
            assert!(!EnvironmentConfig::parse_bool("f", s).unwrap());
        }
        assert!(EnvironmentConfig::parse_bool("f", "maybe").is_err());
    }

    #[test]
    #[serial]
    fn test_no_variables_no_changes() {
        with_env(&[], || {
            let mut config = Config::default();
            EnvironmentConfig::apply_overrides(&mut config).unwrap();
            assert_eq!(config, Config::default());
        });
    }

    #[test]
    #[serial]
    fn test_all_overrides() {
        with_env(
            &[
                ("WINPATH_OUTPUT_FORMAT", "json"),
                ("WINPATH_STRICT", "yes"),
                ("WINPATH_EXTENDED", "0"),
                (LOG_MODE_ENV, "quiet"),
            ],
            || {
                let mut config = Config::default();
                EnvironmentConfig::apply_overrides(&mut config).unwrap();
                assert_eq!(config.output_format, Some(OutputFormat::Json));
                assert_eq!(config.strict, Some(true));
                assert_eq!(config.extended, Some(false));
                assert_eq!(config.log_mode, Some(LogLevel::Quiet));
            },
        );
    }

    #[test]
    #[serial]
    fn test_invalid_format_rejected() {
        with_env(&[("WINPATH_OUTPUT_FORMAT", "xml")], || {
            let mut config = Config::default();
            let err = EnvironmentConfig::apply_overrides(&mut config).unwrap_err();
            assert!(err.to_string().contains("WINPATH_OUTPUT_FORMAT"));
        });
    }
}
