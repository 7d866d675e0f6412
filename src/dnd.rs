//! Timeline Drag Bindings
//!
//! Pointer plumbing for dragging bars on the timeline using mouse events.
//! Uses a movement threshold to distinguish click from drag, so linking-mode
//! clicks never accidentally start a drag.

use leptos::prelude::*;
use timeline_engine::{DragMode, InteractionState};
use wasm_bindgen::JsCast;

use chrono::NaiveDate;

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// A mousedown that has not yet crossed the drag threshold
#[derive(Clone, Debug, PartialEq)]
pub struct PendingDrag {
    pub item_id: String,
    pub mode: DragMode,
    pub origin_start: NaiveDate,
    pub origin_end: NaiveDate,
    /// Mousedown position for movement detection
    pub start_x: i32,
    pub start_y: i32,
}

/// Drag plumbing signals
#[derive(Clone, Copy)]
pub struct DragSignals {
    pub pending: RwSignal<Option<PendingDrag>>,
}

pub fn create_drag_signals() -> DragSignals {
    DragSignals {
        pending: RwSignal::new(None),
    }
}

/// Record a pending drag on a bar (or a resize handle).
pub fn start_pending_drag(
    dnd: DragSignals,
    ev: &web_sys::MouseEvent,
    item_id: &str,
    mode: DragMode,
    origin_start: NaiveDate,
    origin_end: NaiveDate,
) {
    if ev.button() != 0 {
        return;
    }
    dnd.pending.set(Some(PendingDrag {
        item_id: item_id.to_string(),
        mode,
        origin_start,
        origin_end,
        start_x: ev.client_x(),
        start_y: ev.client_y(),
    }));
}

/// Bind the document-level listeners that drive a drag:
///
/// - mousemove promotes a pending drag past the threshold into the
///   interaction state, then reports every move to `on_drag_move`
/// - mouseup ends the drag with no dangling state
/// - Escape cancels whatever interaction is active
pub fn bind_global_drag<M>(
    dnd: DragSignals,
    interaction: RwSignal<InteractionState>,
    on_drag_move: M,
) where
    M: Fn(web_sys::MouseEvent) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        if let Some(pending) = dnd.pending.get_untracked() {
            let dx = (ev.client_x() - pending.start_x).abs();
            let dy = (ev.client_y() - pending.start_y).abs();
            if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                interaction.update(|state| {
                    // permission was checked at mousedown time
                    *state = state.begin_drag(
                        &pending.item_id,
                        pending.mode,
                        pending.origin_start,
                        pending.origin_end,
                        true,
                    );
                });
                dnd.pending.set(None);
            }
        }

        if interaction.with_untracked(|state| state.dragging_item().is_some()) {
            on_drag_move(ev);
        }
    });

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        dnd.pending.set(None);
        interaction.update(|state| *state = state.end_drag());
    });

    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" {
            dnd.pending.set(None);
            interaction.update(|state| *state = state.cancel());
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
            let _ = doc.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
    on_mouseup.forget();
    on_keydown.forget();
}
