// Settings persistence: host configuration stored separately from session state.
// Uses platform-native config dir: e.g. ~/Library/Application Support/tiling/settings.json
// on macOS, ~/.config/tiling/settings.json on Linux.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use tiling_core::Size;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TilingSettings {
    /// Prefix for panel ids the engine creates (splits, edge drops).
    pub panel_id_prefix: String,
    /// Splits and edge drops onto a panel at this depth are refused.
    pub max_split_depth: usize,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for TilingSettings {
    fn default() -> Self {
        Self {
            panel_id_prefix: "panel".to_string(),
            max_split_depth: 3,
            window_width: 1280.0,
            window_height: 800.0,
        }
    }
}

impl TilingSettings {
    pub fn window_size(&self) -> Size {
        Size {
            width: self.window_width,
            height: self.window_height,
        }
    }
}

pub(crate) fn config_dir() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join("tiling"))
}

fn settings_path() -> Option<PathBuf> {
    Some(config_dir()?.join("settings.json"))
}

/// Load settings, writing the defaults out on first run so they can be edited.
pub fn load_settings() -> TilingSettings {
    let Some(path) = settings_path() else {
        return TilingSettings::default();
    };
    if !path.exists() {
        let settings = TilingSettings::default();
        save_settings_to(&settings, &path);
        return settings;
    }
    load_settings_from(&path)
}

pub fn load_settings_from(path: &Path) -> TilingSettings {
    match std::fs::read_to_string(path) {
        Ok(data) => match serde_json::from_str(&data) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Failed to parse {}: {}", path.display(), e);
                TilingSettings::default()
            }
        },
        Err(_) => TilingSettings::default(),
    }
}

pub fn save_settings_to(settings: &TilingSettings, path: &Path) {
    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            log::error!("Failed to create config dir {}: {}", parent.display(), e);
            return;
        }
    }

    match serde_json::to_string_pretty(settings) {
        Ok(json) => {
            if let Err(e) = std::fs::write(path, json) {
                log::error!("Failed to write {}: {}", path.display(), e);
            }
        }
        Err(e) => {
            log::error!("Failed to serialize settings: {}", e);
        }
    }
}
