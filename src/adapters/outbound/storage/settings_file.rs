use std::path::{Path, PathBuf};

use crate::embed::domain::WidgetSettings;
use crate::ports::outbound::SettingsStore;
use crate::shared::error::EmbedError;
use crate::shared::Result;

/// FileSettingsStore adapter - YAML file backing for the settings record.
///
/// One YAML document holds the whole record. A missing file yields the
/// documented defaults; a present but unreadable or malformed file is an
/// error, because silently discarding an administrator's configuration
/// would be worse than failing loudly.
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for FileSettingsStore {
    fn load(&self) -> Result<WidgetSettings> {
        if !self.path.exists() {
            return Ok(WidgetSettings::default());
        }

        let content =
            std::fs::read_to_string(&self.path).map_err(|e| EmbedError::SettingsReadError {
                path: self.path.clone(),
                details: e.to_string(),
            })?;

        let settings: WidgetSettings =
            serde_yaml_ng::from_str(&content).map_err(|e| EmbedError::SettingsReadError {
                path: self.path.clone(),
                details: e.to_string(),
            })?;

        Ok(settings)
    }

    fn save(&self, settings: &WidgetSettings) -> Result<()> {
        let content =
            serde_yaml_ng::to_string(settings).map_err(|e| EmbedError::SettingsWriteError {
                path: self.path.clone(),
                details: e.to_string(),
            })?;

        std::fs::write(&self.path, content).map_err(|e| EmbedError::SettingsWriteError {
            path: self.path.clone(),
            details: e.to_string(),
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = TempDir::new().unwrap();
        let store = FileSettingsStore::new(dir.path().join("settings.yml"));
        let settings = store.load().unwrap();
        assert_eq!(settings, WidgetSettings::default());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = FileSettingsStore::new(dir.path().join("settings.yml"));

        let settings = WidgetSettings {
            boat_finder_version: "2.1.0".to_string(),
            boat_brand: "Centurion".to_string(),
            infinite_scroll: true,
            ..WidgetSettings::default()
        };
        store.save(&settings).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_save_replaces_previous_record() {
        let dir = TempDir::new().unwrap();
        let store = FileSettingsStore::new(dir.path().join("settings.yml"));

        store.save(&WidgetSettings::default()).unwrap();
        let updated = WidgetSettings {
            show_id: "miami".to_string(),
            ..WidgetSettings::default()
        };
        store.save(&updated).unwrap();

        assert_eq!(store.load().unwrap().show_id, "miami");
    }

    #[test]
    fn test_load_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.yml");
        std::fs::write(&path, "max_length: [not a number").unwrap();

        let store = FileSettingsStore::new(&path);
        let err = store.load().unwrap_err();
        assert!(format!("{}", err).contains("Failed to read settings file"));
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.yml");
        std::fs::write(&path, "boat_type: \"Pontoons\"\n").unwrap();

        let store = FileSettingsStore::new(&path);
        let settings = store.load().unwrap();
        assert_eq!(settings.boat_type, "Pontoons");
        assert_eq!(settings.show_id, "dbcom");
    }
}
