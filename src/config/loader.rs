// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::Result;

/// Environment variable naming the config file when `--config` is absent.
pub const CONFIG_ENV_VAR: &str = "FLOWSTATE_CONFIG";

/// File looked up in the working directory when nothing else is given.
pub const DEFAULT_CONFIG_FILE: &str = "Flowstate.toml";

/// Parse TOML text into a [`RawConfigFile`]. No semantic checks.
pub fn parse_config(contents: &str) -> Result<RawConfigFile> {
    Ok(toml::from_str(contents)?)
}

/// Read and parse a config file. No semantic checks.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let contents = fs::read_to_string(path.as_ref())?;
    parse_config(&contents)
}

/// Read, parse and validate a config file.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    ConfigFile::try_from(load_from_path(path)?)
}

/// Like [`load_and_validate`], but a missing file yields the defaults.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();
    if !path.exists() {
        debug!(path = %path.display(), "no config file; using defaults");
        return Ok(ConfigFile::default());
    }
    load_and_validate(path)
}

/// Config path from the environment, else [`DEFAULT_CONFIG_FILE`].
pub fn default_config_path() -> PathBuf {
    config_path_from(std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from))
}

/// An explicit `--config` wins over the environment and the default.
pub fn resolve_config_path(explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None => default_config_path(),
    }
}

fn config_path_from(env_value: Option<PathBuf>) -> PathBuf {
    env_value
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}
