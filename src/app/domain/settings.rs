use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::print_config::PrintConfiguration;
use super::style::{FontSpec, Rgb};
use crate::app::infrastructure::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Page setup, remembered between runs
    #[serde(default)]
    pub print: PrintConfiguration,

    #[serde(default)]
    pub font: FontSpec,

    #[serde(default = "default_background")]
    pub background: Rgb,

    /// Progress simulation tick period in milliseconds
    #[serde(default = "default_progress_interval_ms")]
    pub progress_interval_ms: u64,

    #[serde(default = "default_progress_step")]
    pub progress_step: u32,

    #[serde(default)]
    pub last_open_directory: Option<String>,

    #[serde(default = "default_window_width")]
    pub window_width: i32,

    #[serde(default = "default_window_height")]
    pub window_height: i32,
}

fn default_background() -> Rgb {
    Rgb::WHITE
}

fn default_progress_interval_ms() -> u64 {
    30
}

fn default_progress_step() -> u32 {
    2
}

fn default_window_width() -> i32 {
    900
}

fn default_window_height() -> i32 {
    520
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            print: PrintConfiguration::default(),
            font: FontSpec::default(),
            background: default_background(),
            progress_interval_ms: default_progress_interval_ms(),
            progress_step: default_progress_step(),
            last_open_directory: None,
            window_width: default_window_width(),
            window_height: default_window_height(),
        }
    }
}

impl AppSettings {
    pub fn progress_interval(&self) -> Duration {
        Duration::from_millis(self.progress_interval_ms.max(1))
    }

    /// Load settings from disk, or create default if not exists
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_path())
    }

    pub fn load_from(config_path: &Path) -> Self {
        match fs::read_to_string(config_path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::warn!("Failed to parse settings: {}. Using defaults.", e);
                    Self::default()
                }
            },
            Err(_) => {
                // File doesn't exist, use defaults
                let default = Self::default();
                // Try to save defaults for next time
                if let Err(e) = default.save_to(config_path) {
                    tracing::debug!("Could not write default settings: {}", e);
                }
                default
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<(), AppError> {
        self.save_to(&Self::get_config_path())
    }

    pub fn save_to(&self, config_path: &Path) -> Result<(), AppError> {
        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(config_path, json)?;

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("dialogpad");
        path.push("settings.json");
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::print_config::{Orientation, PaperSize};
    use crate::app::domain::style::FontFace;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.progress_interval_ms, 30);
        assert_eq!(settings.progress_step, 2);
        assert_eq!(settings.background, Rgb::WHITE);
        assert_eq!(settings.print, PrintConfiguration::default());
        assert!(settings.last_open_directory.is_none());
    }

    #[test]
    fn test_partial_config() {
        // Simulate old config missing new fields
        let json = r#"{"progress_step": 5}"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.progress_step, 5);
        assert_eq!(settings.progress_interval_ms, 30);
        assert_eq!(settings.window_width, 900);
    }

    #[test]
    fn test_zero_interval_is_bumped() {
        let settings = AppSettings {
            progress_interval_ms: 0,
            ..Default::default()
        };
        assert_eq!(settings.progress_interval(), Duration::from_millis(1));
    }

    #[test]
    fn test_save_and_load_roundtrip_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let settings = AppSettings {
            print: PrintConfiguration {
                paper: PaperSize::Letter,
                orientation: Orientation::Landscape,
                ..Default::default()
            },
            font: FontSpec::new(FontFace::Courier, 18),
            last_open_directory: Some("/tmp/notes".to_string()),
            ..Default::default()
        };
        settings.save_to(&path).unwrap();

        let loaded = AppSettings::load_from(&path);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let loaded = AppSettings::load_from(&path);
        assert_eq!(loaded, AppSettings::default());
        assert!(path.exists());
    }

    #[test]
    fn test_corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();

        let loaded = AppSettings::load_from(&path);
        assert_eq!(loaded, AppSettings::default());
    }
}
