use std::sync::Arc;

use tiling_core::TabId;

use crate::action::Action;
use crate::handlers::{self, Applied};
use crate::ids::IdSource;
use crate::node::TilesPanel;
use crate::prune::prune_emptied;

/// Outcome of reducing one action.
#[derive(Debug, Clone)]
pub struct Transition<T> {
    /// The tree after the action. Same `Arc` as the input when `changed` is false.
    pub tree: Arc<TilesPanel<T>>,
    /// Tabs the action closed, each reported once.
    pub closed_tabs: Vec<TabId>,
    pub changed: bool,
}

impl<T> Transition<T> {
    fn unchanged(tree: &Arc<TilesPanel<T>>) -> Self {
        Self {
            tree: Arc::clone(tree),
            closed_tabs: Vec::new(),
            changed: false,
        }
    }
}

/// Apply `action` to `tree`, running the pruning pass for structural edits.
///
/// Never fails: stale panel or tab ids leave the tree untouched.
pub fn reduce<T: Clone>(
    tree: &Arc<TilesPanel<T>>,
    action: &Action<T>,
    ids: &mut dyn IdSource,
) -> Transition<T> {
    let Some(applied) = apply(tree, action, ids) else {
        log::trace!("{}: no-op", action.kind());
        return Transition::unchanged(tree);
    };

    let Applied {
        tree: next,
        closed_tabs,
        emptied,
    } = applied;
    let next = if emptied.is_empty() {
        next
    } else {
        prune_emptied(&next, &emptied)
    };
    let changed = !Arc::ptr_eq(&next, tree);
    log::debug!(
        "{}: changed={} closed={:?}",
        action.kind(),
        changed,
        closed_tabs
    );
    Transition {
        tree: next,
        closed_tabs,
        changed,
    }
}

fn apply<T: Clone>(
    tree: &Arc<TilesPanel<T>>,
    action: &Action<T>,
    ids: &mut dyn IdSource,
) -> Option<Applied<T>> {
    match action {
        Action::TabOpen { panel_id, tab } => handlers::tab_open(tree, panel_id, tab.clone()),
        Action::TabClose {
            panel_id,
            tab_id,
            should_prune,
        } => handlers::tab_close(tree, panel_id, tab_id, *should_prune),
        Action::TabsClose {
            panel_id,
            tab_ids,
            should_prune,
        } => handlers::tabs_close(tree, panel_id, tab_ids.as_slice(), *should_prune),
        Action::TabSetActive { panel_id, tab_id } => {
            handlers::tab_set_active(tree, panel_id, tab_id)
        }
        Action::TabChangeId {
            panel_id,
            old_tab_id,
            new_tab_id,
        } => handlers::tab_change_id(tree, panel_id, old_tab_id, new_tab_id),
        Action::TabDrop { src, dst } => handlers::tab_drop(tree, src, dst, ids),
        Action::PanelSplit {
            panel_id,
            direction,
            new_panel_order,
            tabs,
        } => handlers::panel_split(tree, panel_id, *direction, *new_panel_order, tabs.clone(), ids),
        Action::PanelClose { panel_id } => handlers::panel_close(tree, panel_id),
        Action::PanelCollapse {
            panel_id,
            collapsed,
        } => handlers::panel_collapse(tree, panel_id, *collapsed),
        Action::PanelFullScreen {
            panel_id,
            full_screen,
        } => handlers::panel_full_screen(tree, panel_id, *full_screen),
        Action::LayoutChange { panel_id, sizes } => handlers::layout_change(tree, panel_id, sizes),
    }
}
