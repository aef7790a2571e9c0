use std::fs;
use std::path::{Path, PathBuf};

use insight_logging::insight_warn;
use serde::Deserialize;

const SETTINGS_FILENAME: &str = ".insight_settings.ron";

/// Dashboard settings, read from `.insight_settings.ron` in the working
/// directory. Every field defaults, so the file is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    /// Path of the JSON item source.
    pub items_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            items_path: PathBuf::from("items.json"),
        }
    }
}

pub(crate) fn load_settings(dir: &Path) -> Settings {
    let path = dir.join(SETTINGS_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Settings::default();
        }
        Err(err) => {
            insight_warn!("Failed to read settings from {:?}: {}", path, err);
            return Settings::default();
        }
    };

    match ron::from_str::<Settings>(&content) {
        Ok(settings) => settings,
        Err(err) => {
            insight_warn!("Failed to parse settings from {:?}: {}", path, err);
            Settings::default()
        }
    }
}
