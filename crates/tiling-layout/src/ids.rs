use tiling_core::PanelId;

use crate::node::TilesPanel;
use crate::tree::contains_panel;

/// Source of ids for panels the engine creates itself (split siblings,
/// wrapping groups, panels born from an edge drop).
pub trait IdSource {
    fn next_panel_id(&mut self) -> PanelId;
}

impl<F> IdSource for F
where
    F: FnMut() -> PanelId,
{
    fn next_panel_id(&mut self) -> PanelId {
        self()
    }
}

/// Yields `"{prefix}-1"`, `"{prefix}-2"`, ...
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("panel")
    }
}

impl IdSource for SequentialIds {
    fn next_panel_id(&mut self) -> PanelId {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

/// Bound on how many ids are drawn while looking for one the tree does not
/// already use.
const MAX_ID_ATTEMPTS: usize = 1024;

/// Draw `count` ids that are not present in `tree` and distinct from each other.
pub(crate) fn fresh_panel_ids<T>(
    tree: &TilesPanel<T>,
    ids: &mut dyn IdSource,
    count: usize,
) -> Vec<PanelId> {
    let mut fresh: Vec<PanelId> = Vec::with_capacity(count);
    let mut attempts = 0;
    while fresh.len() < count {
        let candidate = ids.next_panel_id();
        attempts += 1;
        let taken = contains_panel(tree, &candidate) || fresh.contains(&candidate);
        if !taken || attempts >= MAX_ID_ATTEMPTS {
            if taken {
                log::warn!("id source keeps returning taken ids; using {candidate:?} anyway");
            }
            fresh.push(candidate);
        }
    }
    fresh
}
