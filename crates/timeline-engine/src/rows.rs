//! Row Packing
//!
//! Sequential vertical stacking: every item gets one row in input order,
//! rows never overlap.

use std::collections::HashMap;

use crate::model::{TimelineItem, ViewMode};

/// Fixed vertical gap between consecutive rows
pub const ROW_GAP: f64 = 2.0;
/// Padding below the last row
pub const CONTENT_PADDING: f64 = 20.0;
/// Row height multiplier in detailed view
pub const DETAILED_HEIGHT_FACTOR: f64 = 1.5;

/// Vertical slot of one item
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowPosition {
    pub y: f64,
    pub height: f64,
}

impl RowPosition {
    /// Y used for dependency anchor points
    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }
}

/// Item-id -> row slot mapping plus total content height
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowLayout {
    positions: HashMap<String, RowPosition>,
    /// Item ids in input (= display) order
    pub order: Vec<String>,
    pub content_height: f64,
}

impl RowLayout {
    pub fn get(&self, item_id: &str) -> Option<RowPosition> {
        self.positions.get(item_id).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Stack items top-to-bottom in input order with a fixed gap.
pub fn pack_rows(items: &[TimelineItem], row_height: f64, view_mode: ViewMode) -> RowLayout {
    let height = match view_mode {
        ViewMode::Compact => row_height,
        ViewMode::Detailed => row_height * DETAILED_HEIGHT_FACTOR,
    };

    let mut positions = HashMap::with_capacity(items.len());
    let mut order = Vec::with_capacity(items.len());
    let mut y = 0.0;
    let mut max_bottom = 0.0_f64;

    for item in items {
        positions.insert(item.id.clone(), RowPosition { y, height });
        order.push(item.id.clone());
        max_bottom = max_bottom.max(y + height);
        y += height + ROW_GAP;
    }

    RowLayout {
        positions,
        order,
        content_height: max_bottom + CONTENT_PADDING,
    }
}
