//! Timeline Models
//!
//! Data structures matching the records the planning layer feeds the engine.
//! Items and dependencies are immutable snapshots per render pass; the engine
//! never mutates them.

use serde::{Deserialize, Serialize};

/// Kind of row-bearing entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Project,
    Task,
}

/// One row on the timeline (a project or a task nested under one)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineItem {
    pub id: String,
    pub kind: ItemKind,
    pub title: String,
    /// Inclusive start date, serialized as dd-mm-yyyy
    pub start_date: String,
    /// Inclusive end date, serialized as dd-mm-yyyy
    pub end_date: String,
    /// Owning project for tasks
    pub parent_id: Option<String>,
    /// Nesting depth, display offset only
    #[serde(default)]
    pub level: u32,
}

/// Dependency type - which date-edge of each item the connector joins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DependencyKind {
    /// Finish-to-Start
    FS,
    /// Start-to-Start
    SS,
    /// Finish-to-Finish
    FF,
    /// Start-to-Finish
    SF,
}

impl DependencyKind {
    /// CSS class hook for theming connectors per type
    pub fn color_class(&self) -> &'static str {
        match self {
            DependencyKind::FS => "dep-fs",
            DependencyKind::SS => "dep-ss",
            DependencyKind::FF => "dep-ff",
            DependencyKind::SF => "dep-sf",
        }
    }
}

/// Directed relationship between two timeline items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineDependency {
    pub id: String,
    pub from_id: String,
    pub to_id: String,
    pub kind: DependencyKind,
    /// Display-only lag annotation in days, 0 = none
    #[serde(default)]
    pub lag_days: i32,
}

/// Calendar-to-pixel cell granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeScale {
    Day,
    Week,
    Month,
}

impl TimeScale {
    /// Duration of one grid cell in milliseconds
    pub fn cell_duration_ms(&self) -> i64 {
        const DAY_MS: i64 = 24 * 60 * 60 * 1000;
        match self {
            TimeScale::Day => DAY_MS,
            TimeScale::Week => 7 * DAY_MS,
            TimeScale::Month => 30 * DAY_MS,
        }
    }

    /// Symmetric padding applied around derived bounds, in days
    pub fn padding_days(&self) -> i64 {
        match self {
            TimeScale::Day => 7,
            TimeScale::Week => 28,
            TimeScale::Month => 30,
        }
    }
}

/// Row density
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Compact,
    Detailed,
}

/// Configuration flags handed in by the host (spec'd defaults)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineConfig {
    pub show_grid: bool,
    pub show_dependencies: bool,
    pub allow_drag_and_drop: bool,
    pub allow_resize: bool,
    pub row_height: f64,
    pub cell_width: f64,
    pub container_height: f64,
    pub view_mode: ViewMode,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            show_grid: true,
            show_dependencies: true,
            allow_drag_and_drop: true,
            allow_resize: true,
            row_height: 36.0,
            cell_width: 30.0,
            container_height: 600.0,
            view_mode: ViewMode::Compact,
        }
    }
}

/// Current scroll/size of the scrollable timeline container
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub scroll_left: f64,
    pub scroll_top: f64,
    pub width: f64,
    pub height: f64,
}
