//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. This store plays
//! the role of the external planning layer: the timeline only reads
//! snapshots from it and proposes changes through callbacks.

use leptos::prelude::*;
use reactive_stores::Store;
use timeline_engine::{DependencyKind, TimeScale, TimelineDependency, TimelineItem};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// All items on the board, in display order
    pub items: Vec<TimelineItem>,
    /// All dependencies between items
    pub dependencies: Vec<TimelineDependency>,
    /// Current cell granularity
    pub scale: TimeScale,
    /// Counter for generating dependency ids
    pub next_dependency_id: u32,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            dependencies: Vec::new(),
            scale: TimeScale::Day,
            next_dependency_id: 1,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Rewrite an item's dates (move or resize proposal accepted as-is)
pub fn store_set_item_dates(store: &AppStore, item_id: &str, start: String, end: String) {
    store.items().write().iter_mut()
        .find(|item| item.id == item_id)
        .map(|item| {
            item.start_date = start;
            item.end_date = end;
        });
}

/// Add a dependency from a completed link (FS by default, no lag)
pub fn store_add_dependency(store: &AppStore, from_id: String, to_id: String) {
    let id = store.next_dependency_id().get_untracked();
    store.next_dependency_id().set(id + 1);
    store.dependencies().write().push(TimelineDependency {
        id: format!("dep-{}", id),
        from_id,
        to_id,
        kind: DependencyKind::FS,
        lag_days: 0,
    });
}

/// Remove a dependency by ID
pub fn store_remove_dependency(store: &AppStore, dependency_id: &str) {
    store.dependencies().write().retain(|dep| dep.id != dependency_id);
}
