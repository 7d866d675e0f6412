//! Interaction State
//!
//! Drag-to-reschedule and linking mode as one explicit finite-state value
//! with pure transitions. At most one interaction is active at a time - the
//! enum makes drag and linking mutually exclusive by construction.

use chrono::NaiveDate;

use crate::grid::TimelineGrid;

/// What an active drag moves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMode {
    /// Whole bar, duration preserved
    Move,
    /// Left edge only
    ResizeStart,
    /// Right edge only
    ResizeEnd,
}

/// Snapshot of the dragged item taken at drag start
#[derive(Debug, Clone, PartialEq)]
pub struct DragState {
    pub item_id: String,
    pub mode: DragMode,
    pub origin_start: NaiveDate,
    pub origin_end: NaiveDate,
}

/// The one interaction the timeline is currently in
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Dragging(DragState),
    /// Linking mode; `source` is set once the first item was picked
    Linking { source: Option<String> },
}

impl InteractionState {
    /// Start dragging an item. Only possible from `Idle` and when the host
    /// allows the gesture; otherwise the state is unchanged.
    pub fn begin_drag(
        &self,
        item_id: &str,
        mode: DragMode,
        origin_start: NaiveDate,
        origin_end: NaiveDate,
        allowed: bool,
    ) -> InteractionState {
        match self {
            InteractionState::Idle if allowed => InteractionState::Dragging(DragState {
                item_id: item_id.to_string(),
                mode,
                origin_start,
                origin_end,
            }),
            _ => self.clone(),
        }
    }

    /// Mouse-up: an active drag ends, anything else is unchanged.
    pub fn end_drag(&self) -> InteractionState {
        match self {
            InteractionState::Dragging(_) => InteractionState::Idle,
            _ => self.clone(),
        }
    }

    /// Enter linking mode from idle.
    pub fn enter_linking(&self) -> InteractionState {
        match self {
            InteractionState::Idle => InteractionState::Linking { source: None },
            _ => self.clone(),
        }
    }

    /// Item clicked while linking. First click picks the source; a click on
    /// a *different* item completes the link and returns the `(from, to)`
    /// pair. Re-selecting the source is a no-op.
    pub fn select_link_item(&self, item_id: &str) -> (InteractionState, Option<(String, String)>) {
        match self {
            InteractionState::Linking { source: None } => (
                InteractionState::Linking {
                    source: Some(item_id.to_string()),
                },
                None,
            ),
            InteractionState::Linking { source: Some(src) } if src == item_id => {
                (self.clone(), None)
            }
            InteractionState::Linking { source: Some(src) } => (
                InteractionState::Idle,
                Some((src.clone(), item_id.to_string())),
            ),
            _ => (self.clone(), None),
        }
    }

    /// Escape or an explicit cancel gesture: back to idle, no side effects,
    /// no dangling drag or link source.
    pub fn cancel(&self) -> InteractionState {
        InteractionState::Idle
    }

    pub fn dragging_item(&self) -> Option<&str> {
        match self {
            InteractionState::Dragging(drag) => Some(drag.item_id.as_str()),
            _ => None,
        }
    }

    pub fn is_linking(&self) -> bool {
        matches!(self, InteractionState::Linking { .. })
    }

    pub fn link_source(&self) -> Option<&str> {
        match self {
            InteractionState::Linking { source } => source.as_deref(),
            _ => None,
        }
    }

    /// While linking, every item except the chosen source is a valid target.
    pub fn is_link_target(&self, item_id: &str) -> bool {
        match self {
            InteractionState::Linking { source } => source.as_deref() != Some(item_id),
            _ => false,
        }
    }
}

/// Map the current pointer position to the dragged item's proposed dates.
///
/// Move re-anchors the start at the cursor and preserves the original
/// duration exactly, irrespective of where on the bar the user grabbed
/// (documented simplification). Resize moves one edge and leaves the other.
pub fn drag_dates(
    drag: &DragState,
    grid: &TimelineGrid,
    pointer_x: f64,
    scroll_left: f64,
) -> (NaiveDate, NaiveDate) {
    let cursor = grid.pixel_to_date(pointer_x + scroll_left);
    match drag.mode {
        DragMode::Move => {
            let duration = drag.origin_end - drag.origin_start;
            (cursor, cursor + duration)
        }
        DragMode::ResizeStart => (cursor, drag.origin_end),
        DragMode::ResizeEnd => (drag.origin_start, cursor),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::DateBounds;
    use crate::model::TimeScale;

    fn date(d: u32, m: u32, y: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn day_grid() -> TimelineGrid {
        let bounds = DateBounds {
            start: date(1, 1, 2025),
            end: date(31, 12, 2025),
        };
        TimelineGrid::new(bounds, TimeScale::Day, 30.0)
    }

    fn move_drag(start: NaiveDate, end: NaiveDate) -> DragState {
        DragState {
            item_id: "a".to_string(),
            mode: DragMode::Move,
            origin_start: start,
            origin_end: end,
        }
    }

    #[test]
    fn test_drag_preserves_duration_exactly() {
        let grid = day_grid();
        let drag = move_drag(date(4, 1, 2025), date(9, 1, 2025));
        for pointer_x in [0.0, 95.0, 160.0, 1234.0] {
            let (new_start, new_end) = drag_dates(&drag, &grid, pointer_x, 0.0);
            assert_eq!(new_end - new_start, drag.origin_end - drag.origin_start);
        }
    }

    #[test]
    fn test_drag_two_cells_right_shifts_two_days() {
        // spec scenario: x=100 -> x=160 at 30px/day moves the item 2 days
        let grid = day_grid();
        let drag = move_drag(date(4, 1, 2025), date(9, 1, 2025));
        let (start_before, _) = drag_dates(&drag, &grid, 100.0, 0.0);
        let (start_after, end_after) = drag_dates(&drag, &grid, 160.0, 0.0);
        assert_eq!(start_after - start_before, chrono::Duration::days(2));
        assert_eq!(end_after - start_after, chrono::Duration::days(5));
    }

    #[test]
    fn test_drag_accounts_for_scroll() {
        let grid = day_grid();
        let drag = move_drag(date(4, 1, 2025), date(9, 1, 2025));
        let (scrolled, _) = drag_dates(&drag, &grid, 100.0, 300.0);
        let (unscrolled, _) = drag_dates(&drag, &grid, 400.0, 0.0);
        assert_eq!(scrolled, unscrolled);
    }

    #[test]
    fn test_resize_moves_only_one_edge() {
        let grid = day_grid();
        let mut drag = move_drag(date(4, 1, 2025), date(9, 1, 2025));

        drag.mode = DragMode::ResizeStart;
        let (start, end) = drag_dates(&drag, &grid, 30.0, 0.0);
        assert_eq!(start, date(2, 1, 2025));
        assert_eq!(end, drag.origin_end);

        drag.mode = DragMode::ResizeEnd;
        let (start, end) = drag_dates(&drag, &grid, 360.0, 0.0);
        assert_eq!(start, drag.origin_start);
        assert_eq!(end, date(13, 1, 2025));
    }

    #[test]
    fn test_begin_drag_requires_idle_and_permission() {
        let idle = InteractionState::Idle;
        let s = date(4, 1, 2025);
        let e = date(9, 1, 2025);

        let denied = idle.begin_drag("a", DragMode::Move, s, e, false);
        assert_eq!(denied, InteractionState::Idle);

        let dragging = idle.begin_drag("a", DragMode::Move, s, e, true);
        assert_eq!(dragging.dragging_item(), Some("a"));

        // already dragging: second begin is ignored
        let again = dragging.begin_drag("b", DragMode::Move, s, e, true);
        assert_eq!(again.dragging_item(), Some("a"));

        // linking blocks dragging
        let linking = idle.enter_linking();
        let blocked = linking.begin_drag("a", DragMode::Move, s, e, true);
        assert!(blocked.is_linking());
    }

    #[test]
    fn test_end_drag_clears_state() {
        let s = date(4, 1, 2025);
        let e = date(9, 1, 2025);
        let dragging = InteractionState::Idle.begin_drag("a", DragMode::Move, s, e, true);
        assert_eq!(dragging.end_drag(), InteractionState::Idle);
        assert_eq!(InteractionState::Idle.end_drag(), InteractionState::Idle);
    }

    #[test]
    fn test_linking_completes_once() {
        let state = InteractionState::Idle.enter_linking();
        assert!(state.is_linking());
        assert_eq!(state.link_source(), None);

        let (state, link) = state.select_link_item("x");
        assert_eq!(link, None);
        assert_eq!(state.link_source(), Some("x"));

        let (state, link) = state.select_link_item("y");
        assert_eq!(link, Some(("x".to_string(), "y".to_string())));
        assert_eq!(state, InteractionState::Idle);
    }

    #[test]
    fn test_reselecting_source_is_a_noop() {
        let state = InteractionState::Idle.enter_linking();
        let (state, _) = state.select_link_item("x");
        let (state, link) = state.select_link_item("x");
        assert_eq!(link, None);
        assert_eq!(state.link_source(), Some("x"));
    }

    #[test]
    fn test_cancel_from_any_state() {
        let s = date(4, 1, 2025);
        let e = date(9, 1, 2025);
        assert_eq!(InteractionState::Idle.cancel(), InteractionState::Idle);
        let dragging = InteractionState::Idle.begin_drag("a", DragMode::Move, s, e, true);
        assert_eq!(dragging.cancel(), InteractionState::Idle);
        let (linking, _) = InteractionState::Idle.enter_linking().select_link_item("x");
        assert_eq!(linking.cancel(), InteractionState::Idle);
    }

    #[test]
    fn test_link_targets_exclude_source() {
        let (state, _) = InteractionState::Idle.enter_linking().select_link_item("x");
        assert!(!state.is_link_target("x"));
        assert!(state.is_link_target("y"));
        assert!(!InteractionState::Idle.is_link_target("y"));

        // no source picked yet: everything is a target
        let fresh = InteractionState::Idle.enter_linking();
        assert!(fresh.is_link_target("x"));
    }

    #[test]
    fn test_select_outside_linking_does_nothing() {
        let (state, link) = InteractionState::Idle.select_link_item("x");
        assert_eq!(state, InteractionState::Idle);
        assert_eq!(link, None);
    }
}
