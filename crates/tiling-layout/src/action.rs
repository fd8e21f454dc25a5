use serde::{Deserialize, Serialize};
use tiling_core::{DropAreaSection, PanelId, PanelOrder, SplitDirection, TabId};

use crate::node::Tab;

fn default_true() -> bool {
    true
}

/// A tab's current home.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabLocation {
    pub panel_id: PanelId,
    pub tab_id: TabId,
}

/// Where a dragged tab is released.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropTarget {
    pub panel_id: PanelId,
    pub drop_area_section: DropAreaSection,
}

/// Everything the UI can ask the layout to do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    rename_all = "kebab-case",
    rename_all_fields = "camelCase"
)]
pub enum Action<T = ()> {
    /// Append `tab` to the panel and make it active.
    TabOpen { panel_id: PanelId, tab: Tab<T> },
    /// Close one tab.
    TabClose {
        panel_id: PanelId,
        tab_id: TabId,
        #[serde(default = "default_true")]
        should_prune: bool,
    },
    /// Close several tabs of one panel with a single prune.
    TabsClose {
        panel_id: PanelId,
        tab_ids: Vec<TabId>,
        #[serde(default = "default_true")]
        should_prune: bool,
    },
    TabSetActive { panel_id: PanelId, tab_id: TabId },
    /// Rename a tab, e.g. once a provisional tab is persisted.
    TabChangeId {
        panel_id: PanelId,
        old_tab_id: TabId,
        new_tab_id: TabId,
    },
    /// Drag-and-drop of a tab onto a panel section.
    TabDrop { src: TabLocation, dst: DropTarget },
    /// Turn an item panel into a group holding it and a new sibling.
    PanelSplit {
        panel_id: PanelId,
        direction: SplitDirection,
        #[serde(default)]
        new_panel_order: PanelOrder,
        /// Tabs the new sibling starts with.
        #[serde(default)]
        tabs: Vec<Tab<T>>,
    },
    PanelClose { panel_id: PanelId },
    PanelCollapse { panel_id: PanelId, collapsed: bool },
    PanelFullScreen { panel_id: PanelId, full_screen: bool },
    /// Replace a group's child size fractions.
    LayoutChange { panel_id: PanelId, sizes: Vec<f32> },
}

impl<T> Action<T> {
    /// Short name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::TabOpen { .. } => "tab-open",
            Action::TabClose { .. } => "tab-close",
            Action::TabsClose { .. } => "tabs-close",
            Action::TabSetActive { .. } => "tab-set-active",
            Action::TabChangeId { .. } => "tab-change-id",
            Action::TabDrop { .. } => "tab-drop",
            Action::PanelSplit { .. } => "panel-split",
            Action::PanelClose { .. } => "panel-close",
            Action::PanelCollapse { .. } => "panel-collapse",
            Action::PanelFullScreen { .. } => "panel-full-screen",
            Action::LayoutChange { .. } => "layout-change",
        }
    }

    /// Panel whose subtree gains a nesting level when the action applies.
    pub fn nesting_target(&self) -> Option<&str> {
        match self {
            Action::PanelSplit { panel_id, .. } => Some(panel_id.as_str()),
            Action::TabDrop { dst, .. } if dst.drop_area_section.is_edge() => {
                Some(dst.panel_id.as_str())
            }
            _ => None,
        }
    }
}
