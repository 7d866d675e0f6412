//! Coordinate Grid
//!
//! Bidirectional linear mapping between calendar dates and horizontal pixel
//! offsets, plus per-item bar geometry. `date_to_pixel` and `pixel_to_date`
//! are inverses of each other up to one cell duration of rounding.

use chrono::{Duration, NaiveDate};

use crate::date::{parse_date, DateBounds};
use crate::model::{TimeScale, TimelineItem};
use crate::rows::RowPosition;

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Bars never render narrower than this, so inverted or zero-length ranges
/// stay visible instead of collapsing.
pub const MIN_BAR_WIDTH: f64 = 10.0;

/// Pixel grid over a date window at a fixed cell granularity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineGrid {
    pub bounds: DateBounds,
    pub scale: TimeScale,
    pub cell_width: f64,
    cell_ms: i64,
}

impl TimelineGrid {
    pub fn new(bounds: DateBounds, scale: TimeScale, cell_width: f64) -> Self {
        Self {
            bounds,
            scale,
            cell_width,
            cell_ms: scale.cell_duration_ms(),
        }
    }

    pub fn cell_duration_ms(&self) -> i64 {
        self.cell_ms
    }

    /// Number of cells covering the bounds, rounded up. At least one cell so
    /// a degenerate window still has a drawable grid.
    pub fn total_cells(&self) -> i64 {
        let span_ms = (self.bounds.end - self.bounds.start).num_milliseconds().max(0);
        let cells = (span_ms + self.cell_ms - 1) / self.cell_ms;
        cells.max(1)
    }

    pub fn total_width(&self) -> f64 {
        self.total_cells() as f64 * self.cell_width
    }

    /// Calendar date of the left edge of cell `index`
    pub fn cell_start_date(&self, index: i64) -> NaiveDate {
        self.bounds.start + Duration::days(index * self.cell_ms / DAY_MS)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.bounds.start && date <= self.bounds.end
    }

    /// Horizontal pixel offset of a date relative to the bounds start
    pub fn date_to_pixel(&self, date: NaiveDate) -> f64 {
        let ms = (date - self.bounds.start).num_milliseconds() as f64;
        ms / self.cell_ms as f64 * self.cell_width
    }

    /// Inverse of `date_to_pixel`, truncated to day resolution
    pub fn pixel_to_date(&self, x: f64) -> NaiveDate {
        let ms = (x / self.cell_width * self.cell_ms as f64) as i64;
        self.bounds.start + Duration::days(ms.div_euclid(DAY_MS))
    }
}

/// Pixel rectangle of one item bar
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BarGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BarGeometry {
    pub fn end_x(&self) -> f64 {
        self.x + self.width
    }
}

/// Compute the bar rectangle for an item in its row.
///
/// Malformed dates degrade instead of failing: whichever endpoint parses is
/// used for both edges, and if neither parses the bar sits at x = 0. The
/// minimum-width clamp keeps the result a visible stub either way.
pub fn bar_geometry(item: &TimelineItem, grid: &TimelineGrid, row: &RowPosition) -> BarGeometry {
    let (x0, x1) = match (parse_date(&item.start_date), parse_date(&item.end_date)) {
        (Ok(start), Ok(end)) => (grid.date_to_pixel(start), grid.date_to_pixel(end)),
        (Ok(start), Err(_)) => {
            log::warn!("item {} has an unparsable end date, rendering zero-width", item.id);
            let x = grid.date_to_pixel(start);
            (x, x)
        }
        (Err(_), Ok(end)) => {
            log::warn!("item {} has an unparsable start date, rendering zero-width", item.id);
            let x = grid.date_to_pixel(end);
            (x, x)
        }
        (Err(_), Err(_)) => {
            log::warn!("item {} has no parsable dates, rendering zero-width at origin", item.id);
            (0.0, 0.0)
        }
    };

    BarGeometry {
        x: x0,
        y: row.y,
        width: (x1 - x0).max(MIN_BAR_WIDTH),
        height: row.height,
    }
}
