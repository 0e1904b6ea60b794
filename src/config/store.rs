//! Durable storage for [`SiteSettings`].

use super::{SettingsError, SiteSettings};
use crate::debug;
use serde_json::Value;
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

/// File name of the settings file inside the admin config directory.
pub const SETTINGS_FILE: &str = "seo_settings.json";

/// Reads and writes `seo_settings.json`.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store for `<config_dir>/seo_settings.json`.
    pub fn in_dir(config_dir: &Path) -> Self {
        Self::new(config_dir.join(SETTINGS_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings, falling back to defaults on any problem.
    ///
    /// This is the render-path loader: it never fails.
    pub fn load(&self) -> SiteSettings {
        match self.try_load() {
            Ok(settings) => settings,
            Err(e) => {
                debug!("settings"; "{}, using defaults", e);
                SiteSettings::default()
            }
        }
    }

    /// Load settings, reporting malformed files.
    ///
    /// A missing file is not an error and yields the defaults.
    pub fn try_load(&self) -> Result<SiteSettings, SettingsError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(SiteSettings::default()),
            Err(e) => return Err(SettingsError::Io(self.path.clone(), e)),
        };

        let value: Value = serde_json::from_str(&content)
            .map_err(|e| SettingsError::Json(self.path.clone(), e))?;

        match value {
            Value::Object(map) => Ok(SiteSettings::from_json_map(&map)),
            _ => Err(SettingsError::NotAnObject(self.path.clone())),
        }
    }

    /// Persist settings as pretty-printed JSON, creating parent directories.
    pub fn save(&self, settings: &SiteSettings) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| SettingsError::Io(parent.to_path_buf(), e))?;
        }

        let json = serde_json::to_string_pretty(settings)
            .map_err(|e| SettingsError::Json(self.path.clone(), e))?;
        fs::write(&self.path, json).map_err(|e| SettingsError::Io(self.path.clone(), e))
    }
}
