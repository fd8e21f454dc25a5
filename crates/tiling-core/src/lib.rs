use serde::{Deserialize, Serialize};

// ──────────────────────────────────────────────
// Geometry
// ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    /// Extent of the rect along the axis a split in `direction` divides.
    pub fn extent(&self, direction: SplitDirection) -> f32 {
        match direction {
            SplitDirection::Horizontal => self.width,
            SplitDirection::Vertical => self.height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

// ──────────────────────────────────────────────
// Identity
// ──────────────────────────────────────────────

/// Identifier of a panel (item or group). Unique across a whole tree.
pub type PanelId = String;

/// Identifier of a tab. Unique within the item panel holding it.
pub type TabId = String;

// ──────────────────────────────────────────────
// Split vocabulary
// ──────────────────────────────────────────────

/// Axis along which a group lays out its children.
/// `Horizontal` places children side by side, `Vertical` stacks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitDirection {
    Horizontal,
    Vertical,
}

/// Where a newly created panel goes relative to the one it was split from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelOrder {
    Before,
    #[default]
    After,
}

/// Zone of a panel targeted by a tab drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DropAreaSection {
    Top,
    Bottom,
    Left,
    Right,
    Center,
}

impl DropAreaSection {
    /// Split implied by an edge section: the direction of the new group and
    /// the side the dropped panel lands on. `None` for `Center`.
    pub fn split_placement(self) -> Option<(SplitDirection, PanelOrder)> {
        match self {
            DropAreaSection::Top => Some((SplitDirection::Vertical, PanelOrder::Before)),
            DropAreaSection::Bottom => Some((SplitDirection::Vertical, PanelOrder::After)),
            DropAreaSection::Left => Some((SplitDirection::Horizontal, PanelOrder::Before)),
            DropAreaSection::Right => Some((SplitDirection::Horizontal, PanelOrder::After)),
            DropAreaSection::Center => None,
        }
    }

    pub fn is_edge(self) -> bool {
        self != DropAreaSection::Center
    }
}
