//! config
//!
//! Tool configuration: where the registry lives and which module proxy to
//! talk to.
//!
//! # Precedence
//!
//! Highest to lowest:
//!
//! 1. Command-line flags (`--registry`, `--proxy`)
//! 2. Environment (`BZLMIRROR_PROXY`)
//! 3. Config file (`$BZLMIRROR_CONFIG`, else `bzlmirror.toml` in the
//!    working directory)
//! 4. Built-in defaults
//!
//! # Example
//!
//! ```toml
//! registry = "/srv/bazel-registry"
//! proxy = "https://proxy.golang.org"
//! ```

use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::registry::goproxy::DEFAULT_PROXY;

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "BZLMIRROR_CONFIG";

/// Environment variable overriding the module proxy URL.
pub const PROXY_ENV: &str = "BZLMIRROR_PROXY";

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "bzlmirror.toml";

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Tool configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Root directory of the registry being mirrored into.
    pub registry: PathBuf,

    /// Base URL of the Go module proxy.
    pub proxy: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            registry: PathBuf::from("."),
            proxy: DEFAULT_PROXY.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the file system and environment.
    ///
    /// Reads `$BZLMIRROR_CONFIG` if set, else `bzlmirror.toml` under
    /// `cwd` if present, else defaults. `BZLMIRROR_PROXY` then overrides
    /// the proxy URL.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a config file exists but cannot be
    /// read or parsed. A missing file is not an error.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let mut config = match config_file_path(cwd) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        if let Ok(proxy) = env::var(PROXY_ENV) {
            if !proxy.is_empty() {
                config.proxy = proxy;
            }
        }
        Ok(config)
    }

    /// Parse configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let display = path.display().to_string();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: display.clone(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: display,
            source,
        })
    }

    /// Apply command-line overrides, which beat every other source.
    pub fn apply_overrides(&mut self, registry: Option<PathBuf>, proxy: Option<String>) {
        if let Some(registry) = registry {
            self.registry = registry;
        }
        if let Some(proxy) = proxy {
            self.proxy = proxy;
        }
    }
}

/// Locate the config file to load, if any.
fn config_file_path(cwd: &Path) -> Option<PathBuf> {
    if let Ok(explicit) = env::var(CONFIG_PATH_ENV) {
        if !explicit.is_empty() {
            return Some(PathBuf::from(explicit));
        }
    }
    let local = cwd.join(CONFIG_FILE_NAME);
    local.exists().then_some(local)
}
