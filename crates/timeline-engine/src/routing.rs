//! Dependency Routing
//!
//! Turns typed dependencies between timeline items into renderable connector
//! geometry: anchor selection per type, a small straight/forward/backward
//! decision table for the path shape, and viewport culling.
//!
//! Dangling references (missing item or row) are dropped silently - that is
//! an expected transient state while the planning layer edits data.

use std::collections::HashMap;

use crate::date::parse_date;
use crate::grid::TimelineGrid;
use crate::model::{DependencyKind, TimelineDependency, TimelineItem, Viewport};
use crate::rows::RowLayout;

/// Straight line only when the endpoints are nearly level and the target is
/// clearly to the right.
const STRAIGHT_MAX_DY: f64 = 20.0;
const STRAIGHT_MIN_DX: f64 = 20.0;
/// Cap on the forward-curve control-point distance
const FORWARD_CONTROL_MAX: f64 = 50.0;
/// Backward curves leave each endpoint horizontally by this much
const BACKWARD_H_OFFSET: f64 = 20.0;
/// Vertical push for backward curves: stronger when the rows are close
const BACKWARD_V_PUSH_NEAR: f64 = 40.0;
const BACKWARD_V_PUSH_FAR: f64 = 20.0;
/// Slack around the path bounding box before culling
pub const CULL_BUFFER: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Renderable connector shape between two anchor points
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathShape {
    Line,
    Cubic { c1: Point, c2: Point },
}

/// One routed, visible connector
#[derive(Debug, Clone, PartialEq)]
pub struct DependencyPath {
    pub id: String,
    pub start: Point,
    pub end: Point,
    pub shape: PathShape,
    pub color_class: &'static str,
    /// Midpoint annotation when the dependency carries lag, e.g. "+3d"
    pub lag_label: Option<String>,
}

impl DependencyPath {
    /// SVG path data for the connector
    pub fn svg_path(&self) -> String {
        match self.shape {
            PathShape::Line => format!(
                "M {} {} L {} {}",
                self.start.x, self.start.y, self.end.x, self.end.y
            ),
            PathShape::Cubic { c1, c2 } => format!(
                "M {} {} C {} {}, {} {}, {} {}",
                self.start.x, self.start.y, c1.x, c1.y, c2.x, c2.y, self.end.x, self.end.y
            ),
        }
    }

    /// Where the lag annotation renders
    pub fn midpoint(&self) -> Point {
        Point {
            x: (self.start.x + self.end.x) / 2.0,
            y: (self.start.y + self.end.y) / 2.0,
        }
    }
}

/// Anchor points for a dependency: the date-edge of each item selected by the
/// dependency type, at each row's vertical center.
pub fn anchor_points(
    kind: DependencyKind,
    from_item: &TimelineItem,
    to_item: &TimelineItem,
    grid: &TimelineGrid,
    rows: &RowLayout,
) -> Option<(Point, Point)> {
    let from_row = rows.get(&from_item.id)?;
    let to_row = rows.get(&to_item.id)?;

    let from_start = parse_date(&from_item.start_date).ok()?;
    let from_end = parse_date(&from_item.end_date).ok()?;
    let to_start = parse_date(&to_item.start_date).ok()?;
    let to_end = parse_date(&to_item.end_date).ok()?;

    let (start_date, end_date) = match kind {
        DependencyKind::FS => (from_end, to_start),
        DependencyKind::SS => (from_start, to_start),
        DependencyKind::FF => (from_end, to_end),
        DependencyKind::SF => (from_start, to_end),
    };

    Some((
        Point {
            x: grid.date_to_pixel(start_date),
            y: from_row.center_y(),
        },
        Point {
            x: grid.date_to_pixel(end_date),
            y: to_row.center_y(),
        },
    ))
}

/// Shape decision table: straight / forward curve / backward curve.
pub fn build_path(start: Point, end: Point) -> PathShape {
    let dx = end.x - start.x;
    let dy = end.y - start.y;

    if dy.abs() < STRAIGHT_MAX_DY && dx > STRAIGHT_MIN_DX {
        return PathShape::Line;
    }

    if dx > 0.0 {
        // Forward: gentle S-curve, control points at each endpoint's own Y
        let d = (dx.abs() / 2.0).min(FORWARD_CONTROL_MAX);
        return PathShape::Cubic {
            c1: Point { x: start.x + d, y: start.y },
            c2: Point { x: end.x - d, y: end.y },
        };
    }

    // Backward: target is left of or under the source. Bow the curve out
    // vertically, following the sign of dy so it clears intervening rows.
    let push = if dy.abs() < BACKWARD_V_PUSH_NEAR {
        BACKWARD_V_PUSH_NEAR
    } else {
        BACKWARD_V_PUSH_FAR
    };
    let sign = if dy >= 0.0 { 1.0 } else { -1.0 };
    PathShape::Cubic {
        c1: Point {
            x: start.x + BACKWARD_H_OFFSET,
            y: start.y + sign * push,
        },
        c2: Point {
            x: end.x - BACKWARD_H_OFFSET,
            y: end.y - sign * push,
        },
    }
}

/// Visibility test against the scrolled viewport.
///
/// The endpoint bounding box is expanded by `CULL_BUFFER` before the
/// intersection test. Both scroll offsets at exactly zero is the first-paint
/// (or headless test) state and is treated as always visible.
pub fn is_visible(start: Point, end: Point, viewport: &Viewport) -> bool {
    if viewport.scroll_left == 0.0 && viewport.scroll_top == 0.0 {
        return true;
    }

    let min_x = start.x.min(end.x) - CULL_BUFFER;
    let max_x = start.x.max(end.x) + CULL_BUFFER;
    let min_y = start.y.min(end.y) - CULL_BUFFER;
    let max_y = start.y.max(end.y) + CULL_BUFFER;

    min_x <= viewport.scroll_left + viewport.width
        && max_x >= viewport.scroll_left
        && min_y <= viewport.scroll_top + viewport.height
        && max_y >= viewport.scroll_top
}

fn format_lag(lag_days: i32) -> String {
    if lag_days >= 0 {
        format!("+{}d", lag_days)
    } else {
        format!("-{}d", lag_days.abs())
    }
}

/// Route every dependency against the current snapshot and return the visible
/// path set. Invisible connectors are culled before their shape is built.
pub fn route_paths(
    items: &[TimelineItem],
    dependencies: &[TimelineDependency],
    grid: &TimelineGrid,
    rows: &RowLayout,
    viewport: &Viewport,
) -> Vec<DependencyPath> {
    let by_id: HashMap<&str, &TimelineItem> =
        items.iter().map(|item| (item.id.as_str(), item)).collect();

    dependencies
        .iter()
        .filter_map(|dep| {
            let from_item = by_id.get(dep.from_id.as_str())?;
            let to_item = by_id.get(dep.to_id.as_str())?;
            let (start, end) = anchor_points(dep.kind, from_item, to_item, grid, rows)?;

            if !is_visible(start, end, viewport) {
                return None;
            }

            Some(DependencyPath {
                id: dep.id.clone(),
                start,
                end,
                shape: build_path(start, end),
                color_class: dep.kind.color_class(),
                lag_label: (dep.lag_days != 0).then(|| format_lag(dep.lag_days)),
            })
        })
        .collect()
}
