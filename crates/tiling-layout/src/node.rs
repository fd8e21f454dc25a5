use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tiling_core::{PanelId, SplitDirection, TabId};

// ──────────────────────────────────────────────
// Tab
// ──────────────────────────────────────────────

/// A unit of content hosted by an item panel. `data` is whatever the host
/// attaches to the tab (href, overflow policy, ...); it is flattened into the
/// tab's JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tab<T = ()> {
    pub id: TabId,
    #[serde(default = "default_closeable")]
    pub closeable: bool,
    #[serde(flatten)]
    pub data: T,
}

fn default_closeable() -> bool {
    true
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl<T: Default> Tab<T> {
    /// A closeable tab with default metadata.
    pub fn new(id: impl Into<TabId>) -> Self {
        Self::with_data(id, T::default())
    }

    /// A tab the user cannot close.
    pub fn pinned(id: impl Into<TabId>) -> Self {
        Self {
            closeable: false,
            ..Self::new(id)
        }
    }
}

impl<T> Tab<T> {
    pub fn with_data(id: impl Into<TabId>, data: T) -> Self {
        Self {
            id: id.into(),
            closeable: true,
            data,
        }
    }
}

// ──────────────────────────────────────────────
// Panels
// ──────────────────────────────────────────────

/// Leaf panel: a tab strip with one active tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPanel<T = ()> {
    pub id: PanelId,
    pub tabs: Vec<Tab<T>>,
    pub active_tab_id: Option<TabId>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub collapsed: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub full_screen: bool,
}

/// Split container. `sizes` holds one fraction per child (summing to 1.0);
/// `None` splits the extent equally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupPanel<T = ()> {
    pub id: PanelId,
    pub direction: SplitDirection,
    pub items: Vec<Arc<TilesPanel<T>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<Vec<f32>>,
}

/// A node of the tiling tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TilesPanel<T = ()> {
    Item(ItemPanel<T>),
    Group(GroupPanel<T>),
}

impl<T> TilesPanel<T> {
    /// Item panel holding `tabs`, with the first tab active.
    pub fn item(id: impl Into<PanelId>, tabs: Vec<Tab<T>>) -> Self {
        TilesPanel::Item(ItemPanel::new(id, tabs))
    }

    /// Group laying out `items` equally along `direction`.
    pub fn group(
        id: impl Into<PanelId>,
        direction: SplitDirection,
        items: Vec<TilesPanel<T>>,
    ) -> Self {
        TilesPanel::Group(GroupPanel {
            id: id.into(),
            direction,
            items: items.into_iter().map(Arc::new).collect(),
            sizes: None,
        })
    }

    pub fn id(&self) -> &str {
        match self {
            TilesPanel::Item(item) => &item.id,
            TilesPanel::Group(group) => &group.id,
        }
    }

    pub fn as_item(&self) -> Option<&ItemPanel<T>> {
        match self {
            TilesPanel::Item(item) => Some(item),
            TilesPanel::Group(_) => None,
        }
    }

    pub fn as_group(&self) -> Option<&GroupPanel<T>> {
        match self {
            TilesPanel::Group(group) => Some(group),
            TilesPanel::Item(_) => None,
        }
    }

    pub fn is_item(&self) -> bool {
        matches!(self, TilesPanel::Item(_))
    }
}

impl<T> ItemPanel<T> {
    pub fn new(id: impl Into<PanelId>, tabs: Vec<Tab<T>>) -> Self {
        let active_tab_id = tabs.first().map(|tab| tab.id.clone());
        Self {
            id: id.into(),
            tabs,
            active_tab_id,
            collapsed: false,
            full_screen: false,
        }
    }

    /// Item panel with no tabs.
    pub fn empty(id: impl Into<PanelId>) -> Self {
        Self::new(id, Vec::new())
    }

    pub fn tab_index(&self, tab_id: &str) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.id == tab_id)
    }

    pub fn tab(&self, tab_id: &str) -> Option<&Tab<T>> {
        self.tabs.iter().find(|tab| tab.id == tab_id)
    }

    pub fn has_tab(&self, tab_id: &str) -> bool {
        self.tab_index(tab_id).is_some()
    }

    pub fn is_active(&self, tab_id: &str) -> bool {
        self.active_tab_id.as_deref() == Some(tab_id)
    }

    /// Remove a tab and hand it back. When the removed tab was active, the
    /// tab that slides into its index becomes active, or the new last tab
    /// if it was at the end. An emptied panel has no active tab.
    pub fn remove_tab(&mut self, tab_id: &str) -> Option<Tab<T>> {
        let index = self.tab_index(tab_id)?;
        let removed = self.tabs.remove(index);
        if self.is_active(tab_id) {
            self.active_tab_id = if self.tabs.is_empty() {
                None
            } else {
                let next = index.min(self.tabs.len() - 1);
                Some(self.tabs[next].id.clone())
            };
        }
        Some(removed)
    }

    /// Append a tab (or reuse the one already carrying its id) and make it active.
    pub fn push_active(&mut self, tab: Tab<T>) {
        self.active_tab_id = Some(tab.id.clone());
        if !self.has_tab(&tab.id) {
            self.tabs.push(tab);
        }
    }
}
