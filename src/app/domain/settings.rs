use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::error::AppError;
use crate::app::infrastructure::platform::detect_system_dark_mode;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub enum ThemeMode {
    Light,
    Dark,
    SystemDefault,
}

impl ThemeMode {
    /// Whether the browsers should draw with dark colors
    pub fn is_dark(&self) -> bool {
        match self {
            Self::Light => false,
            Self::Dark => true,
            Self::SystemDefault => detect_system_dark_mode(),
        }
    }
}

/// Settings shared by the icon and font browsers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BrowserSettings {
    #[serde(default = "default_theme_mode")]
    pub theme_mode: ThemeMode,

    #[serde(default = "default_window_width")]
    pub window_width: i32,

    #[serde(default = "default_window_height")]
    pub window_height: i32,

    /// Height of one button or label in the list
    #[serde(default = "default_row_height")]
    pub row_height: i32,

    /// Edge length icons are scaled to
    #[serde(default = "default_icon_size")]
    pub icon_size: i32,

    #[serde(default = "default_font_size")]
    pub font_size: i32,

    /// Icon theme to search instead of the desktop's
    #[serde(default)]
    pub icon_theme: Option<String>,

    /// Icon table to load instead of `freedesktop-icon.txt`
    #[serde(default)]
    pub icon_table: Option<String>,
}

fn default_theme_mode() -> ThemeMode {
    ThemeMode::SystemDefault
}

fn default_window_width() -> i32 {
    480
}

fn default_window_height() -> i32 {
    640
}

fn default_row_height() -> i32 {
    28
}

fn default_icon_size() -> i32 {
    24
}

fn default_font_size() -> i32 {
    16
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            theme_mode: default_theme_mode(),
            window_width: default_window_width(),
            window_height: default_window_height(),
            row_height: default_row_height(),
            icon_size: default_icon_size(),
            font_size: default_font_size(),
            icon_theme: None,
            icon_table: None,
        }
    }
}

impl BrowserSettings {
    /// Load settings from the given file, or the default location.
    ///
    /// A missing file gives defaults. A file that fails to parse is reported
    /// and also gives defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let config_path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::get_config_path);

        match Self::load_from(&config_path) {
            Ok(settings) => settings,
            Err(AppError::File { .. }) => {
                log::debug!("No settings at {}, using defaults", config_path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("Failed to parse settings: {}. Using defaults.", e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, AppError> {
        let contents = fs::read_to_string(path).map_err(|e| AppError::file(path, e))?;
        let settings: Self = serde_json::from_str(&contents)?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.window_width <= 0 || self.window_height <= 0 {
            return Err(AppError::Settings("window size must be positive".to_string()));
        }
        if self.row_height <= 0 || self.icon_size <= 0 || self.font_size <= 0 {
            return Err(AppError::Settings(
                "row height, icon size and font size must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("toolshed");
        path.push("settings.json");
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_settings() {
        let settings = BrowserSettings::default();
        assert_eq!(settings.theme_mode, ThemeMode::SystemDefault);
        assert_eq!(settings.window_width, 480);
        assert_eq!(settings.window_height, 640);
        assert_eq!(settings.row_height, 28);
        assert_eq!(settings.icon_size, 24);
        assert_eq!(settings.font_size, 16);
        assert!(settings.icon_theme.is_none());
        assert!(settings.icon_table.is_none());
    }

    #[test]
    fn test_deserialize_full_config() {
        let json = r#"{"theme_mode": "Dark", "icon_theme": "Adwaita", "font_size": 20}"#;
        let loaded: BrowserSettings = serde_json::from_str(json).unwrap();
        let expected = BrowserSettings {
            theme_mode: ThemeMode::Dark,
            icon_theme: Some("Adwaita".to_string()),
            font_size: 20,
            ..Default::default()
        };
        assert_eq!(loaded, expected);
    }

    #[test]
    fn test_partial_config() {
        let json = r#"{"icon_size": 48}"#;
        let settings: BrowserSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.icon_size, 48);
        assert_eq!(settings.font_size, 16);
        assert_eq!(settings.theme_mode, ThemeMode::SystemDefault);
    }

    #[test]
    fn test_explicit_modes_ignore_platform() {
        assert!(ThemeMode::Dark.is_dark());
        assert!(!ThemeMode::Light.is_dark());
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = BrowserSettings::load(Some(&dir.path().join("absent.json")));
        assert_eq!(settings, BrowserSettings::default());
    }

    #[test]
    fn test_load_garbage_gives_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json at all").unwrap();
        assert!(matches!(
            BrowserSettings::load_from(file.path()),
            Err(AppError::Json(_))
        ));
        assert_eq!(BrowserSettings::load(Some(file.path())), BrowserSettings::default());
    }

    #[test]
    fn test_load_rejects_non_positive_sizes() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"row_height": 0}}"#).unwrap();
        assert!(matches!(
            BrowserSettings::load_from(file.path()),
            Err(AppError::Settings(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"theme_mode": "Light", "icon_table": "/tmp/icons.txt", "window_width": 800}}"#
        )
        .unwrap();
        let settings = BrowserSettings::load(Some(file.path()));
        assert_eq!(settings.theme_mode, ThemeMode::Light);
        assert_eq!(settings.icon_table.as_deref(), Some("/tmp/icons.txt"));
        assert_eq!(settings.window_width, 800);
        assert_eq!(settings.window_height, 640);
    }
}
