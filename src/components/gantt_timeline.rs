//! Gantt Timeline Component
//!
//! The timeline orchestrator: recomputes bounds -> grid -> rows -> paths in
//! dependency order whenever its inputs change, owns the scroll viewport,
//! and dispatches the four host callbacks. It never persists anything.

use chrono::NaiveDate;
use leptos::{html, prelude::*};
use timeline_engine::{
    compute_bounds, drag_dates, format_date, pack_rows, route_paths, DependencyPath, DragMode,
    InteractionState, RowLayout, TimeScale, TimelineConfig, TimelineDependency, TimelineGrid,
    TimelineItem, Viewport,
};

use crate::components::{DependencyLayer, TimelineBar, TimelineGridLayer, TimelineToolbar};
use crate::context::TimelineContext;
use crate::dnd::{bind_global_drag, create_drag_signals};

/// Height of the header strip above the rows
pub const HEADER_HEIGHT: f64 = 28.0;

#[component]
pub fn GanttTimeline(
    /// Immutable item snapshot per render pass
    items: Signal<Vec<TimelineItem>>,
    /// Immutable dependency snapshot per render pass
    dependencies: Signal<Vec<TimelineDependency>>,
    scale: Signal<TimeScale>,
    /// Explicit window start; overrides the derived bound, unpadded
    #[prop(optional)] explicit_start: Option<NaiveDate>,
    /// Explicit window end; overrides the derived bound, unpadded
    #[prop(optional)] explicit_end: Option<NaiveDate>,
    #[prop(default = TimelineConfig::default())] config: TimelineConfig,
    on_scale_change: Callback<TimeScale>,
    on_item_move: Callback<(String, String, String)>,
    on_item_resize: Callback<(String, String, String)>,
    on_dependency_create: Callback<(String, String)>,
    on_dependency_delete: Callback<String>,
) -> impl IntoView {
    let interaction = RwSignal::new(InteractionState::Idle);
    let dnd = create_drag_signals();
    let viewport = RwSignal::new(Viewport::default());

    provide_context(TimelineContext {
        interaction,
        dnd,
        config,
        on_item_move,
        on_item_resize,
        on_dependency_create,
        on_dependency_delete,
    });

    // Derived state, recomputed in dependency order within one tick
    let bounds = Memo::new(move |_| {
        compute_bounds(&items.get(), explicit_start, explicit_end, scale.get())
    });
    let grid = Memo::new(move |_| TimelineGrid::new(bounds.get(), scale.get(), config.cell_width));
    let rows: Memo<RowLayout> =
        Memo::new(move |_| pack_rows(&items.get(), config.row_height, config.view_mode));
    let paths: Memo<Vec<DependencyPath>> = Memo::new(move |_| {
        if !config.show_dependencies {
            return Vec::new();
        }
        route_paths(
            &items.get(),
            &dependencies.get(),
            &grid.get(),
            &rows.get(),
            &viewport.get(),
        )
    });

    let total_width = Signal::derive(move || grid.get().total_width());
    let content_height = Signal::derive(move || rows.get().content_height);

    let container_ref = NodeRef::<html::Div>::new();

    // Scroll owns the viewport state
    let on_scroll = move |_| {
        if let Some(el) = container_ref.get_untracked() {
            viewport.update(|vp| {
                vp.scroll_left = el.scroll_left() as f64;
                vp.scroll_top = el.scroll_top() as f64;
            });
        }
    };

    // Observe container size on mount and on window resize
    Effect::new(move |_| {
        if let Some(el) = container_ref.get() {
            viewport.update(|vp| {
                vp.width = el.client_width() as f64;
                vp.height = el.client_height() as f64;
            });

            let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
                if let Some(el) = container_ref.get_untracked() {
                    viewport.update(|vp| {
                        vp.width = el.client_width() as f64;
                        vp.height = el.client_height() as f64;
                    });
                }
            });
            if let Some(win) = web_sys::window() {
                use wasm_bindgen::JsCast;
                let _ = win.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
            }
            cb.forget();
        }
    });

    // Global drag plumbing: every mousemove during a drag proposes new dates
    // through the move/resize callback; the host decides what to commit.
    bind_global_drag(dnd, interaction, move |ev: web_sys::MouseEvent| {
        let Some(el) = container_ref.get_untracked() else {
            return;
        };
        let drag = match interaction.get_untracked() {
            InteractionState::Dragging(drag) => drag,
            _ => return,
        };
        let rect = el.get_bounding_client_rect();
        let pointer_x = ev.client_x() as f64 - rect.left();
        let scroll_left = viewport.with_untracked(|vp| vp.scroll_left);
        let (new_start, new_end) =
            drag_dates(&drag, &grid.get_untracked(), pointer_x, scroll_left);
        let payload = (
            drag.item_id.clone(),
            format_date(new_start),
            format_date(new_end),
        );
        match drag.mode {
            DragMode::Move => on_item_move.run(payload),
            DragMode::ResizeStart | DragMode::ResizeEnd => on_item_resize.run(payload),
        }
    });

    view! {
        <div class="gantt-timeline">
            <TimelineToolbar scale=scale on_scale_change=on_scale_change />

            <div
                node_ref=container_ref
                class="gantt-scroll"
                style=format!(
                    "position: relative; overflow: auto; height: {}px;",
                    config.container_height
                )
                on:scroll=on_scroll
            >
                <div
                    class="gantt-canvas"
                    style=move || {
                        format!(
                            "position: relative; width: {}px; height: {}px;",
                            total_width.get(),
                            HEADER_HEIGHT + content_height.get(),
                        )
                    }
                >
                    <TimelineGridLayer grid=grid content_height=content_height />

                    // Rows area, offset below the header strip
                    <div
                        class="gantt-rows"
                        style=move || {
                            format!(
                                "position: absolute; left: 0; top: {}px; width: {}px; height: {}px;",
                                HEADER_HEIGHT,
                                total_width.get(),
                                content_height.get(),
                            )
                        }
                    >
                        <For
                            each=move || items.get()
                            key=|item| format!("{}:{}:{}", item.id, item.start_date, item.end_date)
                            children=move |item| {
                                view! { <TimelineBar item=item grid=grid rows=rows /> }
                            }
                        />

                        <DependencyLayer
                            paths=paths
                            width=total_width
                            height=content_height
                        />
                    </div>
                </div>
            </div>
        </div>
    }
}
