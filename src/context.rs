//! Timeline Context
//!
//! Shared state and callbacks provided via Leptos Context API to every
//! component inside the timeline.

use leptos::prelude::*;
use timeline_engine::{InteractionState, TimelineConfig};

use crate::dnd::DragSignals;

/// Timeline-wide signals and host callbacks
#[derive(Clone, Copy)]
pub struct TimelineContext {
    /// The one active interaction (idle / dragging / linking)
    pub interaction: RwSignal<InteractionState>,
    /// Pointer plumbing for bar dragging
    pub dnd: DragSignals,
    pub config: TimelineConfig,
    /// Fired continuously during a move drag: (item id, start, end) as dd-mm-yyyy
    pub on_item_move: Callback<(String, String, String)>,
    /// Fired continuously during an edge drag: (item id, start, end)
    pub on_item_resize: Callback<(String, String, String)>,
    /// Fired once when linking mode completes: (from id, to id)
    pub on_dependency_create: Callback<(String, String)>,
    /// Fired when the user deletes a rendered connector
    pub on_dependency_delete: Callback<String>,
}

pub fn use_timeline_context() -> TimelineContext {
    use_context::<TimelineContext>().expect("TimelineContext should be provided")
}
