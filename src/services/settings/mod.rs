// Settings service
// Loads and saves CalendarSettings as TOML in the platform config directory

use directories::ProjectDirs;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::settings::CalendarSettings;

const SETTINGS_FILE: &str = "settings.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings from {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write settings to {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("malformed settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("failed to encode settings: {0}")]
    Encode(#[from] toml::ser::Error),
}

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service bound to `settings.toml` in the user's config directory.
    pub fn from_project_dirs() -> Option<Self> {
        ProjectDirs::from("com", "ContentCalendar", "ContentCalendar")
            .map(|dirs| Self::new(dirs.config_dir().join(SETTINGS_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings; a missing file yields defaults.
    pub fn load(&self) -> Result<CalendarSettings, SettingsError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!("No settings at {}, using defaults", self.path.display());
                return Ok(CalendarSettings::default());
            }
            Err(source) => {
                return Err(SettingsError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let settings: CalendarSettings =
            toml::from_str(&raw).map_err(|source| SettingsError::Parse {
                path: self.path.clone(),
                source,
            })?;
        Ok(settings.sanitized())
    }

    /// Load settings, logging and falling back to defaults on any error.
    pub fn load_or_default(&self) -> CalendarSettings {
        self.load().unwrap_or_else(|err| {
            log::warn!("{}; falling back to default settings", err);
            CalendarSettings::default()
        })
    }

    pub fn save(&self, settings: &CalendarSettings) -> Result<(), SettingsError> {
        let encoded = toml::to_string_pretty(settings)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| SettingsError::Write {
                path: self.path.clone(),
                source,
            })?;
        }
        fs::write(&self.path, encoded).map_err(|source| SettingsError::Write {
            path: self.path.clone(),
            source,
        })
    }
}
