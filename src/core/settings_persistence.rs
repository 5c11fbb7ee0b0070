//! Settings persistence
//!
//! Saves and loads [`GameSettings`] to/from a JSON file.
//!
//! # File Location
//!
//! Settings live in `settings.json` in the user's configuration directory,
//! falling back to the working directory when the platform has none.
//!
//! # Error Handling
//!
//! [`load_settings`] never fails: a missing file means defaults, and an
//! unreadable or malformed one is logged and replaced by defaults.
//! [`save_settings`] reports failures to the caller.

use super::error::{CoreError, CoreResult};
use super::GameSettings;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Directory holding the settings file
pub fn config_dir() -> CoreResult<PathBuf> {
    ProjectDirs::from("org", "sinta", "SintaChess")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or(CoreError::ConfigDirUnavailable)
}

/// Path to `settings.json`, falling back to the working directory
pub fn settings_path() -> PathBuf {
    match config_dir() {
        Ok(dir) => dir.join(SETTINGS_FILENAME),
        Err(_) => PathBuf::from(SETTINGS_FILENAME),
    }
}

/// Read and parse a settings file
pub fn read_settings(path: &Path) -> CoreResult<GameSettings> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Read a settings file if one exists at `path`
pub fn read_settings_if_present(path: &Path) -> CoreResult<Option<GameSettings>> {
    if !path.exists() {
        return Ok(None);
    }
    read_settings(path).map(Some)
}

/// Log the result of a settings read and pick the settings to use.
///
/// [`read_settings_if_present`] logs nothing, so a binary whose log filter
/// lives in the settings can read first and report here once logging is up.
pub fn settle_settings(path: &Path, loaded: CoreResult<Option<GameSettings>>) -> GameSettings {
    match loaded {
        Ok(Some(settings)) => {
            info!("[SETTINGS] Loaded settings from {:?}", path);
            settings
        }
        Ok(None) => {
            info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path);
            GameSettings::default()
        }
        Err(e) => {
            warn!(
                "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
                path, e
            );
            GameSettings::default()
        }
    }
}

/// Load settings from `path`, using defaults when that is not possible
pub fn load_settings(path: &Path) -> GameSettings {
    settle_settings(path, read_settings_if_present(path))
}

/// Write settings to `path` as pretty JSON, creating parent directories
pub fn save_settings(settings: &GameSettings, path: &Path) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    info!("[SETTINGS] Saved settings to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn scratch_dir(tag: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();
        std::env::temp_dir().join(format!("sinta-chess-{tag}-{}-{nanos}", std::process::id()))
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let path = scratch_dir("missing").join(SETTINGS_FILENAME);
        assert_eq!(load_settings(&path), GameSettings::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = scratch_dir("roundtrip");
        let path = dir.join("nested").join(SETTINGS_FILENAME);
        let settings = GameSettings {
            enforce_turns: false,
            default_puzzle: Some("third".to_string()),
            ..GameSettings::default()
        };

        save_settings(&settings, &path).unwrap();
        assert_eq!(load_settings(&path), settings);

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_malformed_file_falls_back() {
        let dir = scratch_dir("malformed");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(SETTINGS_FILENAME);
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            read_settings(&path),
            Err(CoreError::SettingsSerialization(_))
        ));
        assert_eq!(load_settings(&path), GameSettings::default());

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_read_if_present_reports_each_case() {
        let dir = scratch_dir("present");
        let path = dir.join(SETTINGS_FILENAME);
        assert!(matches!(read_settings_if_present(&path), Ok(None)));

        fs::create_dir_all(&dir).unwrap();
        fs::write(&path, "[1, 2").unwrap();
        let loaded = read_settings_if_present(&path);
        assert!(matches!(loaded, Err(CoreError::SettingsSerialization(_))));
        assert_eq!(settle_settings(&path, loaded), GameSettings::default());

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_save_overwrites_previous_settings() {
        let dir = scratch_dir("overwrite");
        let path = dir.join(SETTINGS_FILENAME);

        let mut settings = GameSettings::default();
        save_settings(&settings, &path).unwrap();

        settings.show_notation = false;
        settings.default_puzzle = Some("first".to_string());
        save_settings(&settings, &path).unwrap();

        assert_eq!(read_settings(&path).unwrap(), settings);

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = scratch_dir("partial");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(SETTINGS_FILENAME);
        fs::write(&path, r#"{ "show_notation": false }"#).unwrap();

        let settings = load_settings(&path);
        assert!(!settings.show_notation);
        assert!(settings.enforce_turns);
        assert_eq!(settings.log_filter, "info");

        fs::remove_dir_all(dir).ok();
    }
}
