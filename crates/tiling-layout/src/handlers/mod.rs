// One pure function per action kind. Each takes the current tree and the
// action payload and returns `None` when there is nothing to do (unknown
// panel or tab, or the edit would not change anything); the reducer keeps
// the previous tree in that case.

mod drop;
mod panel;
mod tab;

use std::sync::Arc;

use tiling_core::{PanelId, TabId};

use crate::node::TilesPanel;

pub use drop::tab_drop;
pub use panel::{layout_change, panel_close, panel_collapse, panel_full_screen, panel_split};
pub use tab::{tab_change_id, tab_close, tab_open, tab_set_active, tabs_close};

/// Result of a handler that changed something.
#[derive(Debug, Clone)]
pub struct Applied<T> {
    pub tree: Arc<TilesPanel<T>>,
    /// Tabs removed by a close, for the host to release their resources.
    pub closed_tabs: Vec<TabId>,
    /// Item panels the action may have emptied. The reducer prunes those
    /// that are empty; an empty list skips the pruning pass.
    pub emptied: Vec<PanelId>,
}

impl<T> Applied<T> {
    pub(crate) fn edit(tree: Arc<TilesPanel<T>>) -> Self {
        Self {
            tree,
            closed_tabs: Vec::new(),
            emptied: Vec::new(),
        }
    }

    pub(crate) fn structural(
        tree: Arc<TilesPanel<T>>,
        closed_tabs: Vec<TabId>,
        emptied: Vec<PanelId>,
    ) -> Self {
        Self {
            tree,
            closed_tabs,
            emptied,
        }
    }
}
