// Session persistence: the last layout is written to session.json on exit and
// restored on the next run.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tiling_core::SplitDirection;
use tiling_layout::{GroupPanel, LayoutSnapshot, Tab, TilesPanel};

use crate::settings::config_dir;

// ──────────────────────────────────────────────
// Tab payload
// ──────────────────────────────────────────────

/// What the host attaches to each tab. Flattened into the tab's JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub allow_overflow: bool,
}

pub type Layout = Arc<TilesPanel<TabContent>>;

fn tab(id: &str, href: &str) -> Tab<TabContent> {
    Tab::with_data(
        id,
        TabContent {
            href: Some(href.to_string()),
            allow_overflow: false,
        },
    )
}

/// Layout used on first run or when the saved session is unusable: a
/// description column beside an editor stacked over a console.
pub fn default_layout() -> Layout {
    let mut console = tab("console", "/console");
    console.closeable = false;
    console.data.allow_overflow = true;
    let right = TilesPanel::group(
        "workspace",
        SplitDirection::Vertical,
        vec![
            TilesPanel::item("editor", vec![tab("code", "/editor/main")]),
            TilesPanel::item("console", vec![console, tab("tests", "/console/tests")]),
        ],
    );
    Arc::new(TilesPanel::Group(GroupPanel {
        id: "root".to_string(),
        direction: SplitDirection::Horizontal,
        items: vec![
            Arc::new(TilesPanel::item(
                "description",
                vec![tab("prompt", "/description"), tab("solutions", "/solutions")],
            )),
            Arc::new(right),
        ],
        sizes: Some(vec![0.4, 0.6]),
    }))
}

// ──────────────────────────────────────────────
// Session file I/O
// ──────────────────────────────────────────────

fn session_path() -> Option<PathBuf> {
    Some(config_dir()?.join("session.json"))
}

pub fn load_session() -> Option<Layout> {
    load_session_from(&session_path()?)
}

/// Restore a saved layout. Snapshots that fail to parse or validate are
/// ignored so the caller falls back to the default layout.
pub fn load_session_from(path: &Path) -> Option<Layout> {
    let data = std::fs::read_to_string(path).ok()?;
    match LayoutSnapshot::<TabContent>::from_json(&data) {
        Ok(snapshot) => Some(snapshot.root),
        Err(e) => {
            log::warn!("Ignoring session {}: {}", path.display(), e);
            None
        }
    }
}

pub fn save_session(layout: &Layout) {
    match session_path() {
        Some(path) => save_session_to(layout, &path),
        None => log::warn!("Could not determine config directory for session save"),
    }
}

pub fn save_session_to(layout: &Layout, path: &Path) {
    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            log::error!("Failed to create session directory: {}", e);
            return;
        }
    }

    match LayoutSnapshot::new(Arc::clone(layout)).to_json() {
        Ok(json) => {
            if let Err(e) = std::fs::write(path, json) {
                log::error!("Failed to write session file: {}", e);
            }
        }
        Err(e) => {
            log::error!("Failed to serialize session: {}", e);
        }
    }
}
