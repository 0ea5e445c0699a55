//! Persisted calculator settings
//!
//! Stored as pretty JSON in `<config dir>/calculadora/config.json`. Every
//! field has a default, so an old or partial file still loads.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::machine::DEFAULT_PLACEHOLDER;
use crate::number::DEFAULT_PRECISION;

pub const APP_NAME: &str = "calculadora";

const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcConfig {
    /// Decimal places kept when showing a non-integer result
    pub precision: u32,
    /// Equation text shown before anything is entered
    pub placeholder: String,
    /// Default tracing filter, used when RUST_LOG is not set
    pub log_filter: String,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            log_filter: "warn,calculadora=info,calccore=info".to_string(),
        }
    }
}

/// Per-user configuration directory for `app`.
///
/// Falls back to `./.config/<app>` when no home directory can be found.
pub fn config_dir(app: &str) -> PathBuf {
    directories::ProjectDirs::from("", "", app)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".config").join(app))
}

impl CalcConfig {
    pub fn default_path() -> PathBuf {
        config_dir(APP_NAME).join(CONFIG_FILE)
    }

    /// Load from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::default_path())
    }

    /// Load from `path`. A missing file gives the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, json).map_err(io_err)
    }
}
