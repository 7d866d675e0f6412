//! Timeline Engine
//!
//! Renderer-agnostic core of the gantt board: converts dated items and typed
//! dependencies into pixel geometry, maps drag gestures back to dates, and
//! routes dependency connectors with viewport culling. The host owns
//! persistence and rendering; this crate only computes.
//!
//! Derived state recomputes in dependency order per pass:
//! bounds -> grid -> rows -> paths.

pub mod date;
pub mod grid;
pub mod interaction;
pub mod model;
pub mod routing;
pub mod rows;

pub use date::{compute_bounds, current_year_bounds, format_date, parse_date, DateBounds};
pub use grid::{bar_geometry, BarGeometry, TimelineGrid, MIN_BAR_WIDTH};
pub use interaction::{drag_dates, DragMode, DragState, InteractionState};
pub use model::{
    DependencyKind, ItemKind, TimeScale, TimelineConfig, TimelineDependency, TimelineItem,
    ViewMode, Viewport,
};
pub use routing::{
    anchor_points, build_path, is_visible, route_paths, DependencyPath, PathShape, Point,
};
pub use rows::{pack_rows, RowLayout, RowPosition};

#[cfg(test)]
mod tests {
    //! End-to-end scenarios across the whole pipeline.

    use super::*;
    use chrono::{Datelike, Local, NaiveDate};

    fn date(d: u32, m: u32, y: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn make_item(id: &str, start: &str, end: &str) -> TimelineItem {
        TimelineItem {
            id: id.to_string(),
            kind: ItemKind::Task,
            title: id.to_string(),
            start_date: start.to_string(),
            end_date: end.to_string(),
            parent_id: None,
            level: 0,
        }
    }

    fn make_dep(id: &str, from: &str, to: &str, kind: DependencyKind) -> TimelineDependency {
        TimelineDependency {
            id: id.to_string(),
            from_id: from.to_string(),
            to_id: to.to_string(),
            kind,
            lag_days: 0,
        }
    }

    /// Full pass over a snapshot the way the orchestrator runs it.
    fn pipeline(
        items: &[TimelineItem],
        deps: &[TimelineDependency],
        scale: TimeScale,
        config: &TimelineConfig,
        viewport: &Viewport,
    ) -> (TimelineGrid, RowLayout, Vec<DependencyPath>) {
        let bounds = compute_bounds(items, None, None, scale);
        let grid = TimelineGrid::new(bounds, scale, config.cell_width);
        let rows = pack_rows(items, config.row_height, config.view_mode);
        let paths = route_paths(items, deps, &grid, &rows, viewport);
        (grid, rows, paths)
    }

    #[test]
    fn test_empty_timeline_defaults_to_current_year() {
        let config = TimelineConfig::default();
        let (grid, rows, paths) =
            pipeline(&[], &[], TimeScale::Week, &config, &Viewport::default());

        let year = Local::now().date_naive().year();
        assert_eq!(grid.bounds.start, date(1, 1, year));
        assert_eq!(grid.bounds.end, date(31, 12, year));
        assert!(rows.is_empty());
        assert!(paths.is_empty());
    }

    #[test]
    fn test_bar_width_before_clamp_is_thirty_cells() {
        let config = TimelineConfig::default();
        let items = vec![make_item("a", "01-03-2025", "31-03-2025")];
        let (grid, rows, _) = pipeline(&items, &[], TimeScale::Day, &config, &Viewport::default());

        let bar = bar_geometry(&items[0], &grid, &rows.get("a").unwrap());
        assert_eq!(bar.width, 30.0 * config.cell_width);
    }

    #[test]
    fn test_adjacent_rows_forward_dependency_is_straight() {
        let mut config = TimelineConfig::default();
        config.row_height = 14.0; // adjacent centers closer than 20px
        let items = vec![
            make_item("a", "01-01-2025", "10-01-2025"),
            make_item("b", "15-01-2025", "25-01-2025"),
        ];
        let deps = vec![make_dep("d", "a", "b", DependencyKind::FS)];
        let (_, _, paths) = pipeline(&items, &deps, TimeScale::Day, &config, &Viewport::default());

        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].shape, PathShape::Line);
    }

    #[test]
    fn test_distant_rows_forward_dependency_is_cubic() {
        let config = TimelineConfig::default();
        let items = vec![
            make_item("a", "01-01-2025", "10-01-2025"),
            make_item("x1", "01-01-2025", "02-01-2025"),
            make_item("x2", "01-01-2025", "02-01-2025"),
            make_item("b", "15-01-2025", "25-01-2025"),
        ];
        let deps = vec![make_dep("d", "a", "b", DependencyKind::FS)];
        let (grid, rows, paths) =
            pipeline(&items, &deps, TimeScale::Day, &config, &Viewport::default());

        assert_eq!(paths.len(), 1);
        let dx = grid.date_to_pixel(date(15, 1, 2025)) - grid.date_to_pixel(date(10, 1, 2025));
        match paths[0].shape {
            PathShape::Cubic { c1, .. } => {
                let control = (dx / 2.0).min(50.0);
                assert_eq!(c1.x, paths[0].start.x + control);
                assert_eq!(c1.y, rows.get("a").unwrap().center_y());
            }
            other => panic!("expected cubic, got {:?}", other),
        }
    }

    #[test]
    fn test_dependency_on_deleted_item_is_excluded() {
        let config = TimelineConfig::default();
        let items = vec![make_item("a", "01-01-2025", "10-01-2025")];
        let deps = vec![make_dep("d", "a", "deleted", DependencyKind::FS)];
        let (_, _, paths) = pipeline(&items, &deps, TimeScale::Day, &config, &Viewport::default());
        assert!(paths.is_empty());
    }

    #[test]
    fn test_drag_then_route_keeps_pipeline_consistent() {
        let config = TimelineConfig::default();
        let items = vec![
            make_item("a", "05-01-2025", "10-01-2025"),
            make_item("b", "15-01-2025", "20-01-2025"),
        ];
        let deps = vec![make_dep("d", "a", "b", DependencyKind::FS)];
        let (grid, _, _) = pipeline(&items, &deps, TimeScale::Day, &config, &Viewport::default());

        // drag item a two cells right, then re-run the pass with new dates
        let state = InteractionState::Idle.begin_drag(
            "a",
            DragMode::Move,
            date(5, 1, 2025),
            date(10, 1, 2025),
            true,
        );
        let drag = match &state {
            InteractionState::Dragging(d) => d.clone(),
            other => panic!("expected dragging, got {:?}", other),
        };
        let x = grid.date_to_pixel(date(7, 1, 2025));
        let (new_start, new_end) = drag_dates(&drag, &grid, x, 0.0);
        assert_eq!(new_start, date(7, 1, 2025));
        assert_eq!(new_end, date(12, 1, 2025));

        let moved = vec![
            make_item("a", &format_date(new_start), &format_date(new_end)),
            items[1].clone(),
        ];
        let (grid2, _, paths) =
            pipeline(&moved, &deps, TimeScale::Day, &config, &Viewport::default());
        assert_eq!(paths[0].start.x, grid2.date_to_pixel(new_end));
    }
}
