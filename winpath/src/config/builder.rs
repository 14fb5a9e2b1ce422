//! Layered configuration builder.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::schema::Config;
use crate::error::Result;

/// Builds a [`Config`] from files, environment and programmatic overrides.
///
/// # Examples
///
/// ```
/// use winpath::config::{Config, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config { strict: Some(true), ..Default::default() })
///     .build()
///     .unwrap();
/// assert!(config.is_strict());
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    file: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Create a builder with every source enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load this file on top of the user configuration.
    #[must_use]
    pub fn with_file(mut self, path: &Path) -> Self {
        self.file = Some(path.to_path_buf());
        self
    }

    /// Do not read any configuration files.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Do not apply `WINPATH_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Apply `config` last, above every other source.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Merge every enabled source.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be loaded or an environment
    /// variable is invalid.
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if !self.skip_files {
            for source in ConfigLoader::load_all(self.file.as_deref())? {
                config.merge_from(&source.config);
            }
        }

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(overrides) = &self.overrides {
            config.merge_from(overrides);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_build_defaults_only() {
        let config = ConfigBuilder::new().skip_files().skip_env().build().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_overrides_beat_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("c.yaml");
        fs::write(&path, "output_format: yaml\nstrict: true\n").unwrap();

        let config = ConfigBuilder::new()
            .with_file(&path)
            .skip_env()
            .with_config(Config {
                strict: Some(false),
                ..Default::default()
            })
            .build()
            .unwrap();

        assert_eq!(config.output_format(), OutputFormat::Yaml);
        assert!(!config.is_strict());
    }

    #[test]
    fn test_missing_explicit_file_fails() {
        let dir = TempDir::new().unwrap();
        let result = ConfigBuilder::new()
            .with_file(&dir.path().join("nope.yaml"))
            .skip_env()
            .build();
        assert!(result.is_err());
    }
}
