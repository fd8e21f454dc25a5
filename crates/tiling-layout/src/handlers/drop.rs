use std::sync::Arc;

use super::panel::split_around;
use super::Applied;
use crate::action::{DropTarget, TabLocation};
use crate::ids::{fresh_panel_ids, IdSource};
use crate::node::{ItemPanel, TilesPanel};
use crate::tree::{find_item, update_item, update_panel};

/// Move a tab onto a section of a panel.
///
/// `Center` appends the tab to the destination's strip and activates it.
/// An edge section replaces the destination with a group split along the
/// implied axis, holding the destination and a new panel carrying only the
/// dropped tab on the dropped-on side. The tab leaves its source either
/// way; the source is pruned away if that empties it.
///
/// Dropping a tab onto its own panel's center, onto any section of a panel
/// holding nothing but that tab, or onto the center of a panel that already
/// has a tab with the same id, is a no-op.
pub fn tab_drop<T: Clone>(
    tree: &Arc<TilesPanel<T>>,
    src: &TabLocation,
    dst: &DropTarget,
    ids: &mut dyn IdSource,
) -> Option<Applied<T>> {
    let source = find_item(tree, &src.panel_id)?;
    let tab = source.tab(&src.tab_id)?.clone();
    let target = find_item(tree, &dst.panel_id)?;

    let same_panel = src.panel_id == dst.panel_id;
    let placement = dst.drop_area_section.split_placement();
    match placement {
        None if same_panel || target.has_tab(&tab.id) => return None,
        Some(_) if same_panel && source.tabs.len() == 1 => return None,
        _ => {}
    }

    let detached = update_item(tree, &src.panel_id, |item| item.remove_tab(&src.tab_id).is_some())?;

    let dropped = match placement {
        None => update_item(&detached, &dst.panel_id, |item| {
            item.push_active(tab);
            true
        })?,
        Some((direction, order)) => {
            let mut fresh = fresh_panel_ids(&detached, ids, 2).into_iter();
            let (group_id, panel_id) = (fresh.next()?, fresh.next()?);
            let carried = Arc::new(TilesPanel::Item(ItemPanel::new(panel_id, vec![tab])));
            update_panel(&detached, &dst.panel_id, |node| {
                Some(Arc::new(split_around(
                    group_id,
                    direction,
                    order,
                    Arc::clone(node),
                    carried,
                )))
            })?
        }
    };

    log::trace!(
        "tab-drop {} from {} onto {} ({:?})",
        src.tab_id,
        src.panel_id,
        dst.panel_id,
        dst.drop_area_section
    );
    Some(Applied::structural(dropped, Vec::new(), vec![src.panel_id.clone()]))
}
