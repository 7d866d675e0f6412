//! Gantt Board Frontend App
//!
//! Stands in for the external planning layer: holds the item/dependency
//! snapshots in the store and commits the proposals the timeline emits
//! through its callbacks. Persistence would happen here, not in the
//! timeline.

use leptos::prelude::*;
use timeline_engine::{
    DependencyKind, ItemKind, TimeScale, TimelineConfig, TimelineDependency, TimelineItem,
    ViewMode,
};

use crate::components::GanttTimeline;
use crate::store::{
    store_add_dependency, store_remove_dependency, store_set_item_dates, AppState,
    AppStateStoreFields, AppStore,
};
use reactive_stores::Store;

fn seed_items() -> Vec<TimelineItem> {
    let item = |id: &str, kind, title: &str, start: &str, end: &str, parent: Option<&str>, level| {
        TimelineItem {
            id: id.to_string(),
            kind,
            title: title.to_string(),
            start_date: start.to_string(),
            end_date: end.to_string(),
            parent_id: parent.map(str::to_string),
            level,
        }
    };
    vec![
        item("p1", ItemKind::Project, "Website relaunch", "03-02-2025", "30-05-2025", None, 0),
        item("t1", ItemKind::Task, "Design", "03-02-2025", "28-02-2025", Some("p1"), 1),
        item("t2", ItemKind::Task, "Build", "03-03-2025", "25-04-2025", Some("p1"), 1),
        item("t3", ItemKind::Task, "Launch", "12-05-2025", "30-05-2025", Some("p1"), 1),
        item("p2", ItemKind::Project, "Data platform", "17-03-2025", "29-08-2025", None, 0),
        item("t4", ItemKind::Task, "Ingestion", "17-03-2025", "16-05-2025", Some("p2"), 1),
        item("t5", ItemKind::Task, "Dashboards", "19-05-2025", "29-08-2025", Some("p2"), 1),
    ]
}

fn seed_dependencies() -> Vec<TimelineDependency> {
    let dep = |id: &str, from: &str, to: &str, kind, lag_days| TimelineDependency {
        id: id.to_string(),
        from_id: from.to_string(),
        to_id: to.to_string(),
        kind,
        lag_days,
    };
    vec![
        dep("dep-seed-1", "t1", "t2", DependencyKind::FS, 0),
        dep("dep-seed-2", "t2", "t3", DependencyKind::FS, 5),
        dep("dep-seed-3", "t1", "t4", DependencyKind::SS, 0),
        dep("dep-seed-4", "t5", "t3", DependencyKind::FF, 0),
    ]
}

#[component]
pub fn App() -> impl IntoView {
    let store: AppStore = Store::new(AppState {
        items: seed_items(),
        dependencies: seed_dependencies(),
        next_dependency_id: 1,
        ..Default::default()
    });
    provide_context(store);

    let items = Signal::derive(move || store.items().get());
    let dependencies = Signal::derive(move || store.dependencies().get());
    let scale = Signal::derive(move || store.scale().get());

    let on_scale_change = Callback::new(move |scale: TimeScale| {
        store.scale().set(scale);
    });

    // Proposals arrive continuously during a drag; this demo layer commits
    // them straight into the store.
    let on_item_move = Callback::new(move |(id, start, end): (String, String, String)| {
        web_sys::console::log_1(
            &format!("[APP] move {} -> {} .. {}", id, start, end).into(),
        );
        store_set_item_dates(&store, &id, start, end);
    });

    let on_item_resize = Callback::new(move |(id, start, end): (String, String, String)| {
        web_sys::console::log_1(
            &format!("[APP] resize {} -> {} .. {}", id, start, end).into(),
        );
        store_set_item_dates(&store, &id, start, end);
    });

    let on_dependency_create = Callback::new(move |(from, to): (String, String)| {
        web_sys::console::log_1(&format!("[APP] new dependency {} -> {}", from, to).into());
        store_add_dependency(&store, from, to);
    });

    let on_dependency_delete = Callback::new(move |dependency_id: String| {
        web_sys::console::log_1(
            &format!("[APP] delete dependency {}", dependency_id).into(),
        );
        store_remove_dependency(&store, &dependency_id);
    });

    let config = TimelineConfig {
        view_mode: ViewMode::Compact,
        ..TimelineConfig::default()
    };

    view! {
        <div class="app-layout">
            <h1>"Gantt Board"</h1>

            <GanttTimeline
                items=items
                dependencies=dependencies
                scale=scale
                config=config
                on_scale_change=on_scale_change
                on_item_move=on_item_move
                on_item_resize=on_item_resize
                on_dependency_create=on_dependency_create
                on_dependency_delete=on_dependency_delete
            />
        </div>
    }
}
