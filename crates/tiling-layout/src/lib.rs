// Tiling panel engine.
// A layout is an immutable tree of item panels (tab strips) and groups
// (splits). Every change goes through `reduce`, which path-copies the tree
// so untouched subtrees stay shared between successive layouts.

mod action;
mod geometry;
pub mod handlers;
mod ids;
mod node;
mod prune;
mod reducer;
mod snapshot;
mod store;
mod tree;

pub use action::{Action, DropTarget, TabLocation};
pub use geometry::{compute_rects, drop_area_section_at, panel_at, COLLAPSED_EXTENT};
pub use ids::{IdSource, SequentialIds};
pub use node::{GroupPanel, ItemPanel, Tab, TilesPanel};
pub use prune::prune;
pub use reducer::{reduce, Transition};
pub use snapshot::{LayoutSnapshot, SnapshotError, SNAPSHOT_VERSION};
pub use store::{SubscriptionId, TilesStore};
pub use tree::{
    contains_panel, depth_of, find_item, find_panel, find_tab, item_panels, map_panel, panel_ids,
    tab_count, update_panel, validate, TreeError,
};

pub use tiling_core::{
    DropAreaSection, PanelId, PanelOrder, Rect, Size, SplitDirection, TabId, Vec2,
};

/// Smallest fraction a group child can be given by a layout change.
pub const MIN_SIZE: f32 = 0.05;
