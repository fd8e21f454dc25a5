// Rect solver and drop-zone hit-testing for hosts that draw the tree.

use tiling_core::{DropAreaSection, PanelId, Rect, SplitDirection, Vec2};

use crate::node::TilesPanel;
use crate::tree::item_panels;

/// Extent a collapsed panel keeps along its parent's axis (a tab strip).
pub const COLLAPSED_EXTENT: f32 = 28.0;

/// Share of a panel's width/height treated as an edge drop zone.
const EDGE_ZONE: f32 = 0.25;

/// Rect of every item panel inside `area`, left-to-right / top-to-bottom.
///
/// A full-screen item (the first one found) takes the whole area and is the
/// only panel returned.
pub fn compute_rects<T>(tree: &TilesPanel<T>, area: Rect) -> Vec<(PanelId, Rect)> {
    if let Some(item) = item_panels(tree).into_iter().find(|item| item.full_screen) {
        return vec![(item.id.clone(), area)];
    }
    let mut out = Vec::new();
    layout_node(tree, area, &mut out);
    out
}

fn layout_node<T>(node: &TilesPanel<T>, rect: Rect, out: &mut Vec<(PanelId, Rect)>) {
    match node {
        TilesPanel::Item(item) => out.push((item.id.clone(), rect)),
        TilesPanel::Group(group) => {
            let collapsed: Vec<bool> = group
                .items
                .iter()
                .map(|child| child.as_item().is_some_and(|item| item.collapsed))
                .collect();
            let fractions = match &group.sizes {
                Some(sizes) if sizes.len() == group.items.len() => sizes.clone(),
                _ => vec![1.0 / group.items.len().max(1) as f32; group.items.len()],
            };
            let extents = child_extents(rect.extent(group.direction), &fractions, &collapsed);
            for (child, child_rect) in group
                .items
                .iter()
                .zip(slice_rect(rect, group.direction, &extents))
            {
                layout_node(child, child_rect, out);
            }
        }
    }
}

/// Split `total` among children: collapsed children get `COLLAPSED_EXTENT`,
/// the rest share what remains in proportion to their fractions. If every
/// child is collapsed the fractions apply as-is.
fn child_extents(total: f32, fractions: &[f32], collapsed: &[bool]) -> Vec<f32> {
    let open_weight: f32 = fractions
        .iter()
        .zip(collapsed)
        .filter(|(_, collapsed)| !**collapsed)
        .map(|(fraction, _)| *fraction)
        .sum();
    if open_weight <= f32::EPSILON {
        return fractions.iter().map(|fraction| total * fraction).collect();
    }

    let collapsed_count = collapsed.iter().filter(|c| **c).count() as f32;
    let collapsed_extent = COLLAPSED_EXTENT.min(total / fractions.len().max(1) as f32);
    let remaining = (total - collapsed_extent * collapsed_count).max(0.0);
    fractions
        .iter()
        .zip(collapsed)
        .map(|(fraction, collapsed)| {
            if *collapsed {
                collapsed_extent
            } else {
                remaining * fraction / open_weight
            }
        })
        .collect()
}

/// Cut `rect` into consecutive slices of the given extents along `direction`.
fn slice_rect(rect: Rect, direction: SplitDirection, extents: &[f32]) -> Vec<Rect> {
    let mut offset = 0.0;
    extents
        .iter()
        .map(|extent| {
            let slice = match direction {
                SplitDirection::Horizontal => {
                    Rect::new(rect.x + offset, rect.y, *extent, rect.height)
                }
                SplitDirection::Vertical => Rect::new(rect.x, rect.y + offset, rect.width, *extent),
            };
            offset += extent;
            slice
        })
        .collect()
}

/// Section of `rect` under `point`: the outer quarter on each side is an
/// edge (top and bottom win over left and right), the middle is `Center`.
pub fn drop_area_section_at(rect: Rect, point: Vec2) -> Option<DropAreaSection> {
    if !rect.contains(point) || rect.width <= 0.0 || rect.height <= 0.0 {
        return None;
    }
    let rel_x = (point.x - rect.x) / rect.width;
    let rel_y = (point.y - rect.y) / rect.height;

    let section = if rel_y < EDGE_ZONE {
        DropAreaSection::Top
    } else if rel_y > 1.0 - EDGE_ZONE {
        DropAreaSection::Bottom
    } else if rel_x < EDGE_ZONE {
        DropAreaSection::Left
    } else if rel_x > 1.0 - EDGE_ZONE {
        DropAreaSection::Right
    } else {
        DropAreaSection::Center
    };
    Some(section)
}

/// Panel whose rect contains `point`.
pub fn panel_at(rects: &[(PanelId, Rect)], point: Vec2) -> Option<&str> {
    rects
        .iter()
        .find(|(_, rect)| rect.contains(point))
        .map(|(id, _)| id.as_str())
}
