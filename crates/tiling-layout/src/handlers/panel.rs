use std::sync::Arc;

use tiling_core::{PanelId, PanelOrder, SplitDirection, TabId};

use super::Applied;
use crate::ids::{fresh_panel_ids, IdSource};
use crate::node::{GroupPanel, ItemPanel, Tab, TilesPanel};
use crate::prune::normalize_sizes;
use crate::tree::{find_item, find_panel, item_panels, update_item, update_panel};
use crate::MIN_SIZE;

/// Replace the item panel with a group in `direction` holding it and a new
/// sibling seeded with `tabs`. The sibling goes before or after the
/// original according to `order`. Groups cannot be split.
pub fn panel_split<T: Clone>(
    tree: &Arc<TilesPanel<T>>,
    panel_id: &str,
    direction: SplitDirection,
    order: PanelOrder,
    tabs: Vec<Tab<T>>,
    ids: &mut dyn IdSource,
) -> Option<Applied<T>> {
    find_item(tree, panel_id)?;
    let mut fresh = fresh_panel_ids(tree, ids, 2).into_iter();
    let (group_id, sibling_id) = (fresh.next()?, fresh.next()?);
    let sibling = Arc::new(TilesPanel::Item(ItemPanel::new(sibling_id, tabs)));

    update_panel(tree, panel_id, |node| {
        Some(Arc::new(split_around(
            group_id,
            direction,
            order,
            Arc::clone(node),
            sibling,
        )))
    })
    .map(Applied::edit)
}

/// A two-child group holding `existing` and `added`, `added` placed per `order`.
pub(super) fn split_around<T>(
    group_id: PanelId,
    direction: SplitDirection,
    order: PanelOrder,
    existing: Arc<TilesPanel<T>>,
    added: Arc<TilesPanel<T>>,
) -> TilesPanel<T> {
    let items = match order {
        PanelOrder::Before => vec![added, existing],
        PanelOrder::After => vec![existing, added],
    };
    TilesPanel::Group(GroupPanel {
        id: group_id,
        direction,
        items,
        sizes: None,
    })
}

/// Close every tab under the panel and prune it away. All or nothing: if
/// any tab under the panel is not closeable, nothing happens.
pub fn panel_close<T: Clone>(tree: &Arc<TilesPanel<T>>, panel_id: &str) -> Option<Applied<T>> {
    let target = find_panel(tree, panel_id)?;
    let items = item_panels(target);
    if let Some(blocking) = items
        .iter()
        .find(|item| item.tabs.iter().any(|tab| !tab.closeable))
    {
        log::debug!("panel-close {panel_id}: {} holds a tab that cannot be closed", blocking.id);
        return None;
    }
    let closed: Vec<TabId> = items
        .iter()
        .flat_map(|item| item.tabs.iter().map(|tab| tab.id.clone()))
        .collect();

    let emptied: Vec<PanelId> = items.iter().map(|item| item.id.clone()).collect();

    let tree = update_panel(tree, panel_id, |node| {
        if closed.is_empty() {
            Some(Arc::clone(node))
        } else {
            Some(Arc::new(without_tabs(node)))
        }
    })?;
    Some(Applied::structural(tree, closed, emptied))
}

fn without_tabs<T>(node: &TilesPanel<T>) -> TilesPanel<T> {
    match node {
        TilesPanel::Item(item) => TilesPanel::Item(ItemPanel {
            id: item.id.clone(),
            tabs: Vec::new(),
            active_tab_id: None,
            collapsed: item.collapsed,
            full_screen: item.full_screen,
        }),
        TilesPanel::Group(group) => TilesPanel::Group(GroupPanel {
            id: group.id.clone(),
            direction: group.direction,
            items: group
                .items
                .iter()
                .map(|child| Arc::new(without_tabs(child)))
                .collect(),
            sizes: group.sizes.clone(),
        }),
    }
}

pub fn panel_collapse<T: Clone>(
    tree: &Arc<TilesPanel<T>>,
    panel_id: &str,
    collapsed: bool,
) -> Option<Applied<T>> {
    update_item(tree, panel_id, |item| {
        let changed = item.collapsed != collapsed;
        item.collapsed = collapsed;
        changed
    })
    .map(Applied::edit)
}

/// Set the full-screen flag. Keeping a single full-screen panel is up to
/// the host.
pub fn panel_full_screen<T: Clone>(
    tree: &Arc<TilesPanel<T>>,
    panel_id: &str,
    full_screen: bool,
) -> Option<Applied<T>> {
    update_item(tree, panel_id, |item| {
        let changed = item.full_screen != full_screen;
        item.full_screen = full_screen;
        changed
    })
    .map(Applied::edit)
}

/// Replace a group's size fractions. `sizes` must hold one finite,
/// non-negative entry per child; entries are raised to [`MIN_SIZE`] and
/// then renormalized to sum to 1.0. Children are untouched.
pub fn layout_change<T>(
    tree: &Arc<TilesPanel<T>>,
    panel_id: &str,
    sizes: &[f32],
) -> Option<Applied<T>> {
    update_panel(tree, panel_id, |node| {
        let group = node.as_group()?;
        if sizes.len() != group.items.len()
            || sizes.iter().any(|size| !size.is_finite() || *size < 0.0)
        {
            log::debug!("layout-change {panel_id}: rejected sizes {sizes:?}");
            return None;
        }
        let sizes = normalize_sizes(sizes.iter().map(|size| size.max(MIN_SIZE)).collect());
        if group.sizes.as_deref() == Some(sizes.as_slice()) {
            return None;
        }
        Some(Arc::new(TilesPanel::Group(GroupPanel {
            id: group.id.clone(),
            direction: group.direction,
            items: group.items.clone(),
            sizes: Some(sizes),
        })))
    })
    .map(Applied::edit)
}
