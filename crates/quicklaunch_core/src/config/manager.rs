//! Settings store for loading and saving the settings record.
//!
//! Key behavior:
//! - Whole-record reads; a missing or corrupt file yields defaults
//! - Indented JSON on write, parent directories created on demand
//! - Plain overwrite, last write wins

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use thiserror::Error;

use crate::models::Settings;
use crate::APP_DIR_NAME;

/// File name of the settings file inside the application directory.
pub const SETTINGS_FILE_NAME: &str = "usersettings.json";

/// Errors that can occur during settings operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read settings file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse settings file {path}: {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize settings: {0}")]
    SerializeError(#[from] serde_json::Error),

    #[error("Failed to write settings file {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Settings file not found: {0}")]
    NotFound(PathBuf),

    #[error("Could not determine the user's application data directory")]
    NoHomeDir,
}

/// Result type for settings operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Reads and writes the settings file.
///
/// The store holds no settings itself; callers own the in-memory record and
/// hand it back for every save.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    /// Path to the settings file.
    path: PathBuf,
}

impl SettingsStore {
    /// Create a store bound to the given settings file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store at the fixed per-user location.
    ///
    /// `<app data>/DevelopmentEnvironmentQuicklaunch/usersettings.json`
    pub fn default_location() -> ConfigResult<Self> {
        Ok(Self::new(app_data_dir()?.join(SETTINGS_FILE_NAME)))
    }

    /// Get the settings file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings, falling back to defaults on any failure.
    ///
    /// Never returns a partially populated record: either the whole file
    /// parses or the defaults are used.
    pub fn load(&self) -> Settings {
        match self.try_load() {
            Ok(settings) => {
                tracing::debug!("Loaded settings from {}", self.path.display());
                settings
            }
            Err(ConfigError::NotFound(path)) => {
                tracing::info!("No settings file at {}, using defaults", path.display());
                Settings::default()
            }
            Err(e) => {
                tracing::warn!("{}. Using defaults.", e);
                Settings::default()
            }
        }
    }

    /// Load settings, returning any error to the caller.
    pub fn try_load(&self) -> ConfigResult<Settings> {
        if !self.path.exists() {
            return Err(ConfigError::NotFound(self.path.clone()));
        }

        let content = fs::read_to_string(&self.path).map_err(|source| ConfigError::ReadError {
            path: self.path.clone(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::ParseError {
            path: self.path.clone(),
            source,
        })
    }

    /// Save the entire record as indented JSON, replacing the file.
    pub fn save(&self, settings: &Settings) -> ConfigResult<()> {
        let content = serde_json::to_string_pretty(settings)?;

        let write = || -> io::Result<()> {
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&self.path, content.as_bytes())
        };

        write().map_err(|source| ConfigError::WriteError {
            path: self.path.clone(),
            source,
        })?;

        tracing::debug!("Saved settings to {}", self.path.display());
        Ok(())
    }
}

/// Per-user application directory (`<app data>/DevelopmentEnvironmentQuicklaunch`).
///
/// On Windows this is under the roaming AppData folder.
pub fn app_data_dir() -> ConfigResult<PathBuf> {
    let dirs = BaseDirs::new().ok_or(ConfigError::NoHomeDir)?;
    Ok(dirs.data_dir().join(APP_DIR_NAME))
}
