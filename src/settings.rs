use log::{debug, error, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CURRENT_VERSION: u32 = 1;
const SETTINGS_FILENAME: &str = "config.yaml";
const APP_NAME: &str = "xycut";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_version")]
    pub version: u32,

    /// Device pixels per document point
    #[serde(default = "default_zoom")]
    pub zoom: f32,

    /// Entries kept by the translation cache
    #[serde(default = "default_translation_cache_capacity")]
    pub translation_cache_capacity: usize,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_version() -> u32 {
    CURRENT_VERSION
}

fn default_zoom() -> f32 {
    1.0
}

fn default_translation_cache_capacity() -> usize {
    256
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: CURRENT_VERSION,
            zoom: default_zoom(),
            translation_cache_capacity: default_translation_cache_capacity(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Parsed log level, falling back to `Info` for unknown names
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or_else(|_| {
            warn!("Unknown log level {:?}, using info", self.log_level);
            log::LevelFilter::Info
        })
    }
}

pub fn preferred_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|config| config.join(APP_NAME).join(SETTINGS_FILENAME))
}

/// Load settings from `path`, or from the default config location.
///
/// Never fails: a missing, unreadable or malformed file yields defaults.
pub fn load_settings(path: Option<&Path>) -> Settings {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => match preferred_config_path() {
            Some(path) => path,
            None => {
                warn!("Could not determine config directory, using default settings");
                return Settings::default();
            }
        },
    };

    if !path.exists() {
        info!("Settings file {path:?} not found, using defaults");
        return Settings::default();
    }

    load_settings_from_path(&path).unwrap_or_default()
}

fn load_settings_from_path(path: &Path) -> Option<Settings> {
    let content = fs::read_to_string(path)
        .map_err(|e| error!("Failed to read settings file {path:?}: {e}"))
        .ok()?;
    let mut settings = serde_yaml::from_str::<Settings>(&content)
        .map_err(|e| error!("Failed to parse settings file {path:?}: {e}"))
        .ok()?;
    debug!("Loaded settings from {path:?}");

    if settings.version < CURRENT_VERSION {
        migrate_settings(&mut settings);
        save_settings_to_file(&settings, path);
    }
    Some(settings)
}

fn migrate_settings(settings: &mut Settings) {
    info!(
        "Migrating settings from v{} to v{}",
        settings.version, CURRENT_VERSION
    );
    settings.version = CURRENT_VERSION;
}

/// Write `settings` as YAML, creating the parent directory if needed
pub fn save_settings_to_file(settings: &Settings, path: &Path) {
    if let Some(parent) = path.parent().filter(|parent| !parent.exists()) {
        if let Err(e) = fs::create_dir_all(parent) {
            error!("Failed to create config directory {parent:?}: {e}");
            return;
        }
    }

    let written = serde_yaml::to_string(settings)
        .map_err(|e| e.to_string())
        .and_then(|content| fs::write(path, content).map_err(|e| e.to_string()));
    match written {
        Ok(()) => debug!("Saved settings to {path:?}"),
        Err(e) => error!("Failed to save settings to {path:?}: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings(Some(&dir.path().join("nope.yaml")));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "version: 1\nzoom: 2.5\n").unwrap();

        let settings = load_settings(Some(&path));
        assert_eq!(settings.zoom, 2.5);
        assert_eq!(settings.translation_cache_capacity, 256);
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn malformed_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "zoom: [not, a, number]\n").unwrap();

        assert_eq!(load_settings(Some(&path)), Settings::default());
    }

    #[test]
    fn unversioned_file_is_stamped_and_saved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "version: 0\nzoom: 1.5\n").unwrap();

        let settings = load_settings(Some(&path));
        assert_eq!(settings.version, CURRENT_VERSION);
        assert_eq!(settings.zoom, 1.5);

        let saved = fs::read_to_string(&path).unwrap();
        assert!(saved.contains(&format!("version: {CURRENT_VERSION}")));
        assert_eq!(load_settings(Some(&path)), settings);
    }

    #[test]
    fn save_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");
        let settings = Settings {
            translation_cache_capacity: 32,
            ..Settings::default()
        };

        save_settings_to_file(&settings, &path);
        assert_eq!(load_settings(Some(&path)), settings);
    }

    #[test]
    fn unknown_log_level_falls_back_to_info() {
        let settings = Settings {
            log_level: "chatty".into(),
            ..Settings::default()
        };
        assert_eq!(settings.level_filter(), log::LevelFilter::Info);

        let settings = Settings {
            log_level: "debug".into(),
            ..Settings::default()
        };
        assert_eq!(settings.level_filter(), log::LevelFilter::Debug);
    }
}
