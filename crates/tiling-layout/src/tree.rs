// Generic read and path-copy helpers over the panel tree.

use std::collections::HashSet;
use std::sync::Arc;

use thiserror::Error;
use tiling_core::{PanelId, TabId};

use crate::node::{GroupPanel, ItemPanel, Tab, TilesPanel};

// ──────────────────────────────────────────────
// Lookup
// ──────────────────────────────────────────────

/// Depth-first search for the first node whose id matches, children in order.
pub fn find_panel<'a, T>(tree: &'a TilesPanel<T>, panel_id: &str) -> Option<&'a TilesPanel<T>> {
    if tree.id() == panel_id {
        return Some(tree);
    }
    match tree {
        TilesPanel::Item(_) => None,
        TilesPanel::Group(group) => group
            .items
            .iter()
            .find_map(|child| find_panel(child, panel_id)),
    }
}

/// Like [`find_panel`], restricted to item panels.
pub fn find_item<'a, T>(tree: &'a TilesPanel<T>, panel_id: &str) -> Option<&'a ItemPanel<T>> {
    find_panel(tree, panel_id).and_then(TilesPanel::as_item)
}

/// First item panel (depth-first) holding a tab with the given id.
pub fn find_tab<'a, T>(
    tree: &'a TilesPanel<T>,
    tab_id: &str,
) -> Option<(&'a ItemPanel<T>, &'a Tab<T>)> {
    match tree {
        TilesPanel::Item(item) => item.tab(tab_id).map(|tab| (item, tab)),
        TilesPanel::Group(group) => group.items.iter().find_map(|child| find_tab(child, tab_id)),
    }
}

pub fn contains_panel<T>(tree: &TilesPanel<T>, panel_id: &str) -> bool {
    find_panel(tree, panel_id).is_some()
}

/// Number of group levels above the panel: 0 for the root, `None` if absent.
pub fn depth_of<T>(tree: &TilesPanel<T>, panel_id: &str) -> Option<usize> {
    if tree.id() == panel_id {
        return Some(0);
    }
    match tree {
        TilesPanel::Item(_) => None,
        TilesPanel::Group(group) => group
            .items
            .iter()
            .find_map(|child| depth_of(child, panel_id))
            .map(|depth| depth + 1),
    }
}

/// Collect the ids of every node, pre-order.
pub fn panel_ids<T>(tree: &TilesPanel<T>) -> Vec<PanelId> {
    let mut ids = Vec::new();
    collect_ids(tree, &mut ids);
    ids
}

fn collect_ids<T>(tree: &TilesPanel<T>, out: &mut Vec<PanelId>) {
    out.push(tree.id().to_string());
    if let TilesPanel::Group(group) = tree {
        for child in &group.items {
            collect_ids(child, out);
        }
    }
}

/// Every item panel in left-to-right (top-to-bottom) order.
pub fn item_panels<T>(tree: &TilesPanel<T>) -> Vec<&ItemPanel<T>> {
    let mut items = Vec::new();
    collect_items(tree, &mut items);
    items
}

fn collect_items<'a, T>(tree: &'a TilesPanel<T>, out: &mut Vec<&'a ItemPanel<T>>) {
    match tree {
        TilesPanel::Item(item) => out.push(item),
        TilesPanel::Group(group) => {
            for child in &group.items {
                collect_items(child, out);
            }
        }
    }
}

/// Total number of tabs across all item panels.
pub fn tab_count<T>(tree: &TilesPanel<T>) -> usize {
    item_panels(tree).iter().map(|item| item.tabs.len()).sum()
}

// ──────────────────────────────────────────────
// Path-copy updates
// ──────────────────────────────────────────────

/// Rebuild the path from the root to `panel_id`, replacing that node with
/// what `transform` returns. Siblings along the path keep their `Arc`.
///
/// Returns `None` when the panel is absent or the transform declines
/// (returns `None`). A transform that hands back the same `Arc` yields the
/// original root.
pub fn update_panel<T, F>(
    tree: &Arc<TilesPanel<T>>,
    panel_id: &str,
    transform: F,
) -> Option<Arc<TilesPanel<T>>>
where
    F: FnOnce(&Arc<TilesPanel<T>>) -> Option<Arc<TilesPanel<T>>>,
{
    update_in(tree, panel_id, &mut Some(transform)).flatten()
}

/// Single descent for [`update_panel`]. The outer `None` means the panel is
/// not under `node`; `Some(None)` means it was found but the transform
/// declined.
fn update_in<T, F>(
    node: &Arc<TilesPanel<T>>,
    panel_id: &str,
    transform: &mut Option<F>,
) -> Option<Option<Arc<TilesPanel<T>>>>
where
    F: FnOnce(&Arc<TilesPanel<T>>) -> Option<Arc<TilesPanel<T>>>,
{
    if node.id() == panel_id {
        return Some(transform.take().and_then(|transform| transform(node)));
    }
    let TilesPanel::Group(group) = node.as_ref() else {
        return None;
    };
    for (index, child) in group.items.iter().enumerate() {
        let Some(found) = update_in(child, panel_id, transform) else {
            continue;
        };
        let Some(replacement) = found else {
            return Some(None);
        };
        if Arc::ptr_eq(&replacement, child) {
            return Some(Some(Arc::clone(node)));
        }
        let mut items = group.items.clone();
        items[index] = replacement;
        return Some(Some(Arc::new(TilesPanel::Group(GroupPanel {
            id: group.id.clone(),
            direction: group.direction,
            items,
            sizes: group.sizes.clone(),
        }))));
    }
    None
}

/// Apply `transform` to the panel with `panel_id`. If no node matches, the
/// original tree is returned.
pub fn map_panel<T, F>(
    tree: &Arc<TilesPanel<T>>,
    panel_id: &str,
    transform: F,
) -> Arc<TilesPanel<T>>
where
    F: FnOnce(&TilesPanel<T>) -> TilesPanel<T>,
{
    update_panel(tree, panel_id, |node| Some(Arc::new(transform(node))))
        .unwrap_or_else(|| Arc::clone(tree))
}

/// Path-copy update of an item panel. The closure edits a clone of the item
/// and returns `false` to signal that nothing changed.
pub(crate) fn update_item<T, F>(
    tree: &Arc<TilesPanel<T>>,
    panel_id: &str,
    edit: F,
) -> Option<Arc<TilesPanel<T>>>
where
    T: Clone,
    F: FnOnce(&mut ItemPanel<T>) -> bool,
{
    update_panel(tree, panel_id, |node| {
        let mut item = node.as_item()?.clone();
        edit(&mut item).then(|| Arc::new(TilesPanel::Item(item)))
    })
}

// ──────────────────────────────────────────────
// Validation
// ──────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TreeError {
    #[error("panel id {0:?} appears more than once")]
    DuplicatePanelId(PanelId),
    #[error("panel {panel_id:?} holds tab {tab_id:?} more than once")]
    DuplicateTabId { panel_id: PanelId, tab_id: TabId },
    #[error("panel {panel_id:?} marks missing tab {tab_id:?} as active")]
    DanglingActiveTab { panel_id: PanelId, tab_id: TabId },
    #[error("panel {0:?} has tabs but no active tab")]
    MissingActiveTab(PanelId),
    #[error("group {0:?} has no children")]
    EmptyGroup(PanelId),
    #[error("group {panel_id:?} has {children} children but {sizes} sizes")]
    SizesMismatch {
        panel_id: PanelId,
        children: usize,
        sizes: usize,
    },
}

/// Check the structural invariants every reducer output upholds.
pub fn validate<T>(tree: &TilesPanel<T>) -> Result<(), TreeError> {
    let mut seen = HashSet::new();
    validate_node(tree, &mut seen)
}

fn validate_node<'a, T>(
    tree: &'a TilesPanel<T>,
    seen: &mut HashSet<&'a str>,
) -> Result<(), TreeError> {
    if !seen.insert(tree.id()) {
        return Err(TreeError::DuplicatePanelId(tree.id().to_string()));
    }
    match tree {
        TilesPanel::Item(item) => {
            let mut tab_ids = HashSet::new();
            for tab in &item.tabs {
                if !tab_ids.insert(tab.id.as_str()) {
                    return Err(TreeError::DuplicateTabId {
                        panel_id: item.id.clone(),
                        tab_id: tab.id.clone(),
                    });
                }
            }
            match &item.active_tab_id {
                Some(active) if !item.has_tab(active) => Err(TreeError::DanglingActiveTab {
                    panel_id: item.id.clone(),
                    tab_id: active.clone(),
                }),
                None if !item.tabs.is_empty() => Err(TreeError::MissingActiveTab(item.id.clone())),
                _ => Ok(()),
            }
        }
        TilesPanel::Group(group) => {
            if group.items.is_empty() {
                return Err(TreeError::EmptyGroup(group.id.clone()));
            }
            if let Some(sizes) = &group.sizes {
                if sizes.len() != group.items.len() {
                    return Err(TreeError::SizesMismatch {
                        panel_id: group.id.clone(),
                        children: group.items.len(),
                        sizes: sizes.len(),
                    });
                }
            }
            for child in &group.items {
                validate_node(child, seen)?;
            }
            Ok(())
        }
    }
}
