use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "word-lookup";
const SETTINGS_FILE: &str = "settings.json";
const DEFAULT_DICTIONARY: &str = "dictionary.xml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] io::Error),

    #[error("invalid settings: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read-only startup settings. Nothing is ever written back.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Definitions file, relative paths resolve against the working directory.
    pub dictionary_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dictionary_path: PathBuf::from(DEFAULT_DICTIONARY),
        }
    }
}

impl Settings {
    pub fn load() -> Self {
        match settings_file_path() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::debug!("no config or home directory, using default settings");
                Self::default()
            }
        }
    }

    /// A missing file means defaults; a broken one means defaults and a warning.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match Self::read(path) {
            Ok(settings) => {
                tracing::info!(path = %path.display(), "loaded settings");
                settings
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), "{e}, using default settings");
                Self::default()
            }
        }
    }

    fn read(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}

fn settings_file_path() -> Option<PathBuf> {
    let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
    path.push(APP_DIR);
    path.push(SETTINGS_FILE);
    Some(path)
}
