use std::sync::Arc;

use tiling_core::PanelId;

use crate::node::{GroupPanel, ItemPanel, TilesPanel};

enum Pruned<T> {
    Unchanged,
    Removed,
    Replaced(Arc<TilesPanel<T>>),
}

/// Normalize the whole tree:
/// - an item panel without tabs is removed from its parent;
/// - a group left with no children is removed from its parent;
/// - a group left with one child is replaced by that child, which takes
///   over the group's slot (and size) in the grandparent.
///
/// Surviving siblings' sizes are renormalized. The root itself is never
/// removed: an item root is kept as-is and a group root that prunes away
/// entirely becomes an empty item panel with the root's id. A tree with
/// nothing to prune is returned as the same `Arc`.
pub fn prune<T>(tree: &Arc<TilesPanel<T>>) -> Arc<TilesPanel<T>> {
    prune_where(tree, &|_: &ItemPanel<T>| true)
}

/// Pruning pass run by the reducer after a structural edit. Only the listed
/// item panels are removed when empty, so an empty panel the edit did not
/// touch (a fresh split sibling) survives. Groups degenerated by those
/// removals collapse as in [`prune`].
pub(crate) fn prune_emptied<T>(
    tree: &Arc<TilesPanel<T>>,
    emptied: &[PanelId],
) -> Arc<TilesPanel<T>> {
    prune_where(tree, &|item: &ItemPanel<T>| emptied.contains(&item.id))
}

fn prune_where<T>(
    tree: &Arc<TilesPanel<T>>,
    removable: &dyn Fn(&ItemPanel<T>) -> bool,
) -> Arc<TilesPanel<T>> {
    if tree.is_item() {
        return Arc::clone(tree);
    }
    match prune_node(tree, removable) {
        Pruned::Unchanged => Arc::clone(tree),
        Pruned::Replaced(node) => node,
        Pruned::Removed => {
            log::debug!("prune: layout {} emptied, keeping an empty root", tree.id());
            Arc::new(TilesPanel::Item(ItemPanel::empty(tree.id())))
        }
    }
}

fn prune_node<T>(
    node: &Arc<TilesPanel<T>>,
    removable: &dyn Fn(&ItemPanel<T>) -> bool,
) -> Pruned<T> {
    let group = match node.as_ref() {
        TilesPanel::Item(item) if item.tabs.is_empty() && removable(item) => {
            return Pruned::Removed
        }
        TilesPanel::Item(_) => return Pruned::Unchanged,
        TilesPanel::Group(group) => group,
    };

    let mut changed = false;
    let mut items = Vec::with_capacity(group.items.len());
    let mut sizes = group.sizes.as_ref().map(|_| Vec::with_capacity(group.items.len()));

    for (index, child) in group.items.iter().enumerate() {
        let survivor = match prune_node(child, removable) {
            Pruned::Unchanged => Arc::clone(child),
            Pruned::Replaced(replacement) => {
                changed = true;
                replacement
            }
            Pruned::Removed => {
                changed = true;
                continue;
            }
        };
        items.push(survivor);
        if let (Some(kept), Some(old)) = (sizes.as_mut(), group.sizes.as_ref()) {
            kept.push(old.get(index).copied().unwrap_or(0.0));
        }
    }

    match items.len() {
        0 => Pruned::Removed,
        1 => Pruned::Replaced(items.remove(0)),
        _ if !changed => Pruned::Unchanged,
        _ => Pruned::Replaced(Arc::new(TilesPanel::Group(GroupPanel {
            id: group.id.clone(),
            direction: group.direction,
            items,
            sizes: sizes.map(normalize_sizes),
        }))),
    }
}

/// Scale fractions so they sum to 1.0. Degenerate input splits equally.
pub(crate) fn normalize_sizes(mut sizes: Vec<f32>) -> Vec<f32> {
    let total: f32 = sizes.iter().sum();
    if !total.is_finite() || total <= f32::EPSILON {
        let equal = 1.0 / sizes.len().max(1) as f32;
        sizes.iter_mut().for_each(|size| *size = equal);
    } else {
        sizes.iter_mut().for_each(|size| *size /= total);
    }
    sizes
}
