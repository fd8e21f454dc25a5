use std::sync::Arc;

use super::Applied;
use crate::node::{Tab, TilesPanel};
use crate::tree::update_item;

/// Append `tab` to the panel and activate it. A tab id the panel already
/// holds is activated instead of duplicated.
pub fn tab_open<T: Clone>(
    tree: &Arc<TilesPanel<T>>,
    panel_id: &str,
    tab: Tab<T>,
) -> Option<Applied<T>> {
    update_item(tree, panel_id, |item| {
        if item.is_active(&tab.id) {
            return false;
        }
        item.push_active(tab);
        true
    })
    .map(Applied::edit)
}

pub fn tab_close<T: Clone>(
    tree: &Arc<TilesPanel<T>>,
    panel_id: &str,
    tab_id: &str,
    should_prune: bool,
) -> Option<Applied<T>> {
    tabs_close(tree, panel_id, &[tab_id], should_prune)
}

/// Close tabs of one panel, in order. Unknown and non-closeable tabs are
/// skipped; each closed id is reported once.
pub fn tabs_close<T: Clone, S: AsRef<str>>(
    tree: &Arc<TilesPanel<T>>,
    panel_id: &str,
    tab_ids: &[S],
    should_prune: bool,
) -> Option<Applied<T>> {
    let mut closed = Vec::new();
    let tree = update_item(tree, panel_id, |item| {
        for tab_id in tab_ids {
            let tab_id = tab_id.as_ref();
            match item.tab(tab_id) {
                Some(tab) if tab.closeable => {
                    item.remove_tab(tab_id);
                    closed.push(tab_id.to_string());
                }
                Some(_) => log::trace!("tab {tab_id} in {} is not closeable", item.id),
                None => {}
            }
        }
        !closed.is_empty()
    })?;
    let emptied = if should_prune {
        vec![panel_id.to_string()]
    } else {
        Vec::new()
    };
    Some(Applied::structural(tree, closed, emptied))
}

pub fn tab_set_active<T: Clone>(
    tree: &Arc<TilesPanel<T>>,
    panel_id: &str,
    tab_id: &str,
) -> Option<Applied<T>> {
    update_item(tree, panel_id, |item| {
        if !item.has_tab(tab_id) || item.is_active(tab_id) {
            return false;
        }
        item.active_tab_id = Some(tab_id.to_string());
        true
    })
    .map(Applied::edit)
}

/// Rename a tab in place, carrying the active marker along. Refused when
/// the new id is already taken in the panel.
pub fn tab_change_id<T: Clone>(
    tree: &Arc<TilesPanel<T>>,
    panel_id: &str,
    old_tab_id: &str,
    new_tab_id: &str,
) -> Option<Applied<T>> {
    if old_tab_id == new_tab_id {
        return None;
    }
    update_item(tree, panel_id, |item| {
        if item.has_tab(new_tab_id) {
            return false;
        }
        let Some(index) = item.tab_index(old_tab_id) else {
            return false;
        };
        item.tabs[index].id = new_tab_id.to_string();
        if item.is_active(old_tab_id) {
            item.active_tab_id = Some(new_tab_id.to_string());
        }
        true
    })
    .map(Applied::edit)
}
