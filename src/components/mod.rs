//! UI Components
//!
//! Leptos components for the gantt board timeline.

pub mod gantt_timeline;
mod dependency_layer;
mod timeline_bar;
mod timeline_grid;
mod timeline_toolbar;

pub use dependency_layer::DependencyLayer;
pub use gantt_timeline::GanttTimeline;
pub use timeline_bar::TimelineBar;
pub use timeline_grid::TimelineGridLayer;
pub use timeline_toolbar::TimelineToolbar;
