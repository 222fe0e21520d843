//! Router configuration.
//!
//! Configuration is read from a TOML file, by default from `~/.config/yadap/router.toml`:
//!
//! ```toml
//! vendor_extensions = false
//! unknown_command_level = "warn"
//! ```

use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use strum_macros::{Display, EnumString};

use crate::{dap_debug, dap_error};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("read config file {0}: {1}")]
    Read(PathBuf, std::io::Error),
    #[error("parse config file {0}: {1}")]
    Parse(PathBuf, toml::de::Error),
}

/// Log level of router diagnostics.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Deserialize, EnumString, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DiagnosticLevel {
    #[default]
    Error,
    Warn,
    Info,
    Debug,
}

impl DiagnosticLevel {
    pub fn as_log_level(self) -> log::Level {
        match self {
            DiagnosticLevel::Error => log::Level::Error,
            DiagnosticLevel::Warn => log::Level::Warn,
            DiagnosticLevel::Info => log::Level::Info,
            DiagnosticLevel::Debug => log::Level::Debug,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RouterConfig {
    /// Accept requests that are not part of the standard protocol (`fb_continueToLocation`).
    pub vendor_extensions: bool,
    /// Level of the diagnostic emitted for unknown commands.
    pub unknown_command_level: DiagnosticLevel,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            vendor_extensions: true,
            unknown_command_level: DiagnosticLevel::Error,
        }
    }
}

impl RouterConfig {
    const DEFAULT_PATH: &'static str = ".config/yadap/router.toml";

    pub fn from_toml(path: &Path, data: &str) -> Result<Self, ConfigError> {
        toml::de::from_str(data).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))
    }

    /// Load configuration from an explicit file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let data = read_to_string(path).map_err(|e| ConfigError::Read(path.to_path_buf(), e))?;
        Self::from_toml(path, &data)
    }

    /// Load configuration from `path`, or from the default location if `path` is `None`.
    /// Falls back to the default configuration on any error, a missing default file
    /// is not reported.
    pub fn load(path: Option<&Path>) -> Self {
        let result = match path {
            Some(path) => Self::from_file(path),
            None => {
                let Some(home) = home::home_dir() else {
                    return Self::default();
                };
                let path = home.join(Self::DEFAULT_PATH);
                if !path.exists() {
                    dap_debug!("config file {} not found, use defaults", path.display());
                    return Self::default();
                }
                Self::from_file(&path)
            }
        };

        match result {
            Ok(config) => config,
            Err(e) => {
                dap_error!("{e}, use defaults");
                Self::default()
            }
        }
    }
}
