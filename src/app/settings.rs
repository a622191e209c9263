use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::error::AppError;

/// An explicit theme choice made by the user. Serialized as "light"/"dark"
/// in the settings file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    Light,
    Dark,
}

impl ThemeChoice {
    pub fn for_dark_mode(dark: bool) -> Self {
        if dark { ThemeChoice::Dark } else { ThemeChoice::Light }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeChoice::Dark
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Last explicit user choice. `None` means never chosen: fall back to the
    /// system color-scheme preference at startup.
    #[serde(default)]
    pub theme: Option<ThemeChoice>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self { theme: None }
    }
}

/// Resolve the dark-mode flag used at startup: the persisted choice wins,
/// otherwise the host system preference.
pub fn resolve_initial_dark_mode(theme: Option<ThemeChoice>, system_dark: bool) -> bool {
    match theme {
        Some(choice) => choice.is_dark(),
        None => system_dark,
    }
}

impl AppSettings {
    /// Load settings from disk, or create default if not exists
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    eprintln!("Failed to parse settings: {}. Using defaults.", e);
                    Self::default()
                }
            },
            Err(_) => {
                // File doesn't exist, use defaults
                Self::default()
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<(), AppError> {
        self.save_to(&Self::get_config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), AppError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("folio");
        path.push("settings.json");
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.theme, None);
    }

    #[test]
    fn test_theme_serializes_lowercase() {
        let settings = AppSettings {
            theme: Some(ThemeChoice::Dark),
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"dark\""));

        let settings = AppSettings {
            theme: Some(ThemeChoice::Light),
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"light\""));
    }

    #[test]
    fn test_serialize_deserialize() {
        let settings = AppSettings {
            theme: Some(ThemeChoice::Dark),
        };
        let json = serde_json::to_string(&settings).unwrap();
        let loaded: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, loaded);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let settings: AppSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.theme, None);
    }

    #[test]
    fn test_resolve_initial_dark_mode() {
        // Persisted choice always wins
        assert!(resolve_initial_dark_mode(Some(ThemeChoice::Dark), false));
        assert!(!resolve_initial_dark_mode(Some(ThemeChoice::Light), true));
        // Unset: system preference decides
        assert!(resolve_initial_dark_mode(None, true));
        assert!(!resolve_initial_dark_mode(None, false));
    }

    #[test]
    fn test_first_toggle_from_system_dark_persists_light() {
        // Theme unset, system prefers dark: initial state is dark, so the
        // first toggle lands on light and that's what gets persisted.
        let mut dark = resolve_initial_dark_mode(None, true);
        assert!(dark);

        dark = !dark;
        let choice = ThemeChoice::for_dark_mode(dark);
        assert_eq!(choice, ThemeChoice::Light);
    }

    #[test]
    fn test_toggle_twice_roundtrips_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio").join("settings.json");

        let initial_dark = true;
        let mut dark = initial_dark;

        for _ in 0..2 {
            dark = !dark;
            let settings = AppSettings {
                theme: Some(ThemeChoice::for_dark_mode(dark)),
            };
            settings.save_to(&path).unwrap();

            // Persisted value matches the in-memory value after each toggle
            let loaded = AppSettings::load_from(&path);
            assert_eq!(loaded.theme, Some(ThemeChoice::for_dark_mode(dark)));
        }

        assert_eq!(dark, initial_dark);
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let settings = AppSettings::load_from(&dir.path().join("nope.json"));
        assert_eq!(settings, AppSettings::default());
    }
}
