//! Machine identity and well-known directories.
//!
//! These lookups read the Windows environment block (`USERPROFILE`,
//! `APPDATA`, ...) through an [`EnvSource`], falling back from the most
//! specific variable to more general locations. They are only consulted by
//! callers built on top of the parser, never by the parser itself.
//!
//! # Examples
//!
//! ```
//! use std::collections::HashMap;
//! use winpath::system::SystemInfo;
//!
//! let env: HashMap<String, String> = [
//!     ("USERPROFILE", r"C:\Users\joe"),
//!     ("LOCALAPPDATA", r"C:\Users\joe\AppData\Local"),
//! ]
//! .into_iter()
//! .map(|(k, v)| (k.to_string(), v.to_string()))
//! .collect();
//!
//! let info = SystemInfo::new(env);
//! assert_eq!(info.home_directory().unwrap(), r"C:\Users\joe");
//! assert_eq!(info.config_home_directory().unwrap(), r"C:\Users\joe");
//! assert_eq!(info.data_home_directory().unwrap(), r"C:\Users\joe\AppData\Local");
//! ```

use std::collections::HashMap;
use std::env;

use serde::Serialize;

use crate::error::{Error, Result};

/// A source of environment variables.
pub trait EnvSource {
    /// Look up a variable, treating empty values as unset.
    fn var(&self, key: &str) -> Option<String>;
}

/// The environment of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        env::var(key).ok().filter(|v| !v.is_empty())
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).filter(|v| !v.is_empty()).cloned()
    }
}

/// Directory lookups over an environment.
#[derive(Debug, Clone)]
pub struct SystemInfo<E: EnvSource = ProcessEnv> {
    env: E,
    use_home_crate: bool,
}

impl SystemInfo<ProcessEnv> {
    /// Lookups against the process environment.
    #[must_use]
    pub fn from_process() -> Self {
        Self {
            env: ProcessEnv,
            use_home_crate: true,
        }
    }
}

impl Default for SystemInfo<ProcessEnv> {
    fn default() -> Self {
        Self::from_process()
    }
}

impl<E: EnvSource> SystemInfo<E> {
    /// Lookups against an arbitrary environment.
    ///
    /// The home directory fallback through the `home` crate is disabled so
    /// results depend on `env` alone.
    #[must_use]
    pub fn new(env: E) -> Self {
        Self {
            env,
            use_home_crate: false,
        }
    }

    /// The NetBIOS name of the machine.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if neither `COMPUTERNAME` nor `HOSTNAME`
    /// is set.
    pub fn computer_name(&self) -> Result<String> {
        self.first_of(&["COMPUTERNAME", "HOSTNAME"], "computer name")
    }

    /// The system directory, typically `C:\WINDOWS\system32`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if neither `SystemRoot` nor `windir` is set.
    pub fn system_directory(&self) -> Result<String> {
        self.first_of(&["SystemRoot", "windir"], "system directory")
            .map(|root| join(&root, "System32"))
    }

    /// The current user's profile directory.
    ///
    /// Tries `USERPROFILE`, then `HOMEDRIVE` + `HOMEPATH`, then the
    /// platform home directory, then the system directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if none of these resolve.
    pub fn home_directory(&self) -> Result<String> {
        if let Some(profile) = self.env.var("USERPROFILE") {
            return Ok(profile);
        }
        if let (Some(drive), Some(path)) = (self.env.var("HOMEDRIVE"), self.env.var("HOMEPATH")) {
            return Ok(format!("{drive}{path}"));
        }
        if self.use_home_crate {
            if let Some(home) = home::home_dir().and_then(|p| p.to_str().map(str::to_string)) {
                return Ok(home);
            }
        }
        self.system_directory().map_err(|_| Error::NotFound {
            resource: "home directory".to_string(),
        })
    }

    /// The roaming application configuration directory (`APPDATA`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if neither `APPDATA` nor a home
    /// directory resolves.
    pub fn config_home_directory(&self) -> Result<String> {
        match self.env.var("APPDATA") {
            Some(dir) => Ok(dir),
            None => self.home_directory(),
        }
    }

    /// The machine-local application data directory (`LOCALAPPDATA`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if nothing along the fallback chain resolves.
    pub fn data_home_directory(&self) -> Result<String> {
        match self.env.var("LOCALAPPDATA") {
            Some(dir) => Ok(dir),
            None => self.config_home_directory(),
        }
    }

    /// The machine-wide application data directory (`PROGRAMDATA`).
    ///
    /// Writing here may require Administrator privileges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if neither `PROGRAMDATA` nor the system
    /// directory resolves.
    pub fn config_directory(&self) -> Result<String> {
        match self.env.var("PROGRAMDATA") {
            Some(dir) => Ok(dir),
            None => self.system_directory(),
        }
    }

    /// Every lookup at once; entries that fail are `None`.
    #[must_use]
    pub fn snapshot(&self) -> SystemDirectories {
        SystemDirectories {
            computer_name: self.computer_name().ok(),
            system_directory: self.system_directory().ok(),
            home_directory: self.home_directory().ok(),
            config_home_directory: self.config_home_directory().ok(),
            data_home_directory: self.data_home_directory().ok(),
            config_directory: self.config_directory().ok(),
        }
    }

    fn first_of(&self, keys: &[&str], resource: &str) -> Result<String> {
        keys.iter()
            .find_map(|key| self.env.var(key))
            .ok_or_else(|| Error::NotFound {
                resource: resource.to_string(),
            })
    }
}

/// The result of every [`SystemInfo`] lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SystemDirectories {
    /// Machine name.
    pub computer_name: Option<String>,
    /// System directory.
    pub system_directory: Option<String>,
    /// User profile directory.
    pub home_directory: Option<String>,
    /// Roaming configuration directory.
    pub config_home_directory: Option<String>,
    /// Local data directory.
    pub data_home_directory: Option<String>,
    /// Machine-wide configuration directory.
    pub config_directory: Option<String>,
}

fn join(dir: &str, leaf: &str) -> String {
    if dir.ends_with('\\') {
        format!("{dir}{leaf}")
    } else {
        format!("{dir}\\{leaf}")
    }
}
