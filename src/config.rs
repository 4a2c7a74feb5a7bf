//! Optional TOML config file with defaults for the command-line switches.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// File name looked up in the config directory.
pub const FILE_NAME: &str = "pacmux.toml";

/// Environment variable that points at a config file directly.
pub const ENV_VAR: &str = "PACMUX_CONFIG";

/// User configuration. Every field is optional in the file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct Config {
    /// Always print commands instead of running them.
    pub dry_run: bool,
    /// Never ask for confirmation.
    pub no_confirm: bool,
    /// Never reinstall packages that are already installed.
    pub needed: bool,
    /// Clean the package cache after every install.
    pub no_cache: bool,
    /// Package manager to use instead of detecting one.
    pub default_pm: Option<String>,
}

impl Config {
    /// What: Load the config from its usual location.
    ///
    /// Output:
    /// - The parsed config, or defaults when no file exists.
    ///
    /// # Errors
    /// - `ConfigRead` or `ConfigParse` for an unreadable or malformed file.
    ///
    /// Details:
    /// - `$PACMUX_CONFIG` wins over `<config_dir>/pacmux.toml`.
    pub fn load() -> Result<Self> {
        let path = std::env::var_os(ENV_VAR)
            .filter(|p| !p.is_empty())
            .map_or_else(|| crate::paths::config_dir().join(FILE_NAME), PathBuf::from);
        Self::load_from(&path)
    }

    /// What: Load the config from an explicit path.
    ///
    /// Inputs:
    /// - `path`: Config file location.
    ///
    /// Output:
    /// - The parsed config, or defaults when `path` does not exist. Nothing is written.
    ///
    /// # Errors
    /// - `ConfigRead` when the file exists but cannot be read.
    /// - `ConfigParse` when it is not valid TOML for this shape.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file; using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), ?config, "config loaded");
        Ok(config)
    }
}
