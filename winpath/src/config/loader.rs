//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Name of the per-user configuration directory under the home directory.
pub const USER_CONFIG_DIR: &str = ".winpath";

/// Name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration from files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the user configuration and, if given, an explicit file.
    ///
    /// Sources are returned lowest precedence first:
    /// 1. User config at `~/.winpath/config.yaml` (precedence 1), if present
    /// 2. The explicit file (precedence 2), which must exist
    ///
    /// # Errors
    ///
    /// Returns an error if the explicit file is missing, or if any file
    /// exists but cannot be read or parsed.
    pub fn load_all(explicit: Option<&Path>) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        if let Some(path) = Self::user_config_path() {
            if path.exists() {
                let config = Self::load_file(&path)?;
                log::debug!("loaded user configuration from {}", path.display());
                sources.push(ConfigSource {
                    path,
                    precedence: 1,
                    config,
                });
            }
        }

        if let Some(path) = explicit {
            let config = Self::load_file(path)?;
            log::debug!("loaded configuration from {}", path.display());
            sources.push(ConfigSource {
                path: path.to_path_buf(),
                precedence: 2,
                config,
            });
        }

        sources.sort_by_key(|s| s.precedence);
        Ok(sources)
    }

    /// Load and parse a single configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid YAML
    /// for the configuration schema.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path)?;
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(&contents)?)
    }

    /// Location of the user configuration file, if a home directory exists.
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        home::home_dir().map(|home| home.join(USER_CONFIG_DIR).join(CONFIG_FILE_NAME))
    }

    /// Parse a configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML does not match the schema.
    pub fn from_yaml(yaml: &str) -> Result<Config> {
        serde_yaml::from_str(yaml).map_err(Error::from)
    }
}
