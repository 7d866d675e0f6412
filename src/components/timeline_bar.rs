//! Timeline Bar Component
//!
//! One item bar on the timeline: drag target, resize handles, and
//! linking-mode click target.

use leptos::prelude::*;
use timeline_engine::{
    bar_geometry, parse_date, DragMode, ItemKind, RowLayout, TimelineGrid, TimelineItem,
};

use crate::context::use_timeline_context;
use crate::dnd::start_pending_drag;

/// A single bar row on the timeline
#[component]
pub fn TimelineBar(
    item: TimelineItem,
    grid: Memo<TimelineGrid>,
    rows: Memo<RowLayout>,
) -> impl IntoView {
    let ctx = use_timeline_context();

    let id = item.id.clone();
    let title = item.title.clone();
    let kind = item.kind;
    let indent = item.level * 12;

    let geometry = {
        let item = item.clone();
        Memo::new(move |_| {
            rows.get()
                .get(&item.id)
                .map(|row| bar_geometry(&item, &grid.get(), &row))
        })
    };

    let bar_class = {
        let id = id.clone();
        move || {
            let mut c = match kind {
                ItemKind::Project => "gantt-bar project".to_string(),
                ItemKind::Task => "gantt-bar task".to_string(),
            };
            let state = ctx.interaction.get();
            if state.dragging_item() == Some(id.as_str()) {
                c.push_str(" dragging");
            }
            if state.link_source() == Some(id.as_str()) {
                c.push_str(" link-source");
            } else if state.is_link_target(&id) {
                c.push_str(" link-target");
            }
            c
        }
    };

    // Whole-bar drag (move). Ignored while linking so clicks stay clicks.
    let on_bar_mousedown = {
        let item = item.clone();
        move |ev: web_sys::MouseEvent| {
            if !ctx.config.allow_drag_and_drop {
                return;
            }
            if ctx.interaction.with_untracked(|state| state.is_linking()) {
                return;
            }
            let (Ok(start), Ok(end)) =
                (parse_date(&item.start_date), parse_date(&item.end_date))
            else {
                return;
            };
            start_pending_drag(ctx.dnd, &ev, &item.id, DragMode::Move, start, end);
        }
    };

    let make_handle_mousedown = |mode: DragMode| {
        let item = item.clone();
        move |ev: web_sys::MouseEvent| {
            ev.stop_propagation();
            if !ctx.config.allow_resize {
                return;
            }
            if ctx.interaction.with_untracked(|state| state.is_linking()) {
                return;
            }
            let (Ok(start), Ok(end)) =
                (parse_date(&item.start_date), parse_date(&item.end_date))
            else {
                return;
            };
            start_pending_drag(ctx.dnd, &ev, &item.id, mode, start, end);
        }
    };
    let on_left_handle = StoredValue::new(make_handle_mousedown(DragMode::ResizeStart));
    let on_right_handle = StoredValue::new(make_handle_mousedown(DragMode::ResizeEnd));

    // Linking mode: clicks pick the source, then a different item completes
    let on_click = {
        let id = id.clone();
        move |_ev: web_sys::MouseEvent| {
            if !ctx.interaction.with_untracked(|state| state.is_linking()) {
                return;
            }
            let mut completed = None;
            ctx.interaction.update(|state| {
                let (next, link) = state.select_link_item(&id);
                *state = next;
                completed = link;
            });
            if let Some((from, to)) = completed {
                web_sys::console::log_1(
                    &format!("[TIMELINE] link completed {} -> {}", from, to).into(),
                );
                ctx.on_dependency_create.run((from, to));
            }
        }
    };

    view! {
        <Show when=move || geometry.get().is_some()>
            <div
                class=bar_class.clone()
                style=move || {
                    let bar = geometry.get().unwrap_or_default();
                    format!(
                        "position: absolute; left: {}px; top: {}px; width: {}px; height: {}px;",
                        bar.x, bar.y, bar.width, bar.height,
                    )
                }
                on:mousedown=on_bar_mousedown.clone()
                on:click=on_click.clone()
            >
                <span
                    class="gantt-bar-title"
                    style=format!("padding-left: {}px;", indent)
                >
                    {title.clone()}
                </span>

                <Show when=move || ctx.config.allow_resize>
                    <div class="gantt-handle left" on:mousedown=move |ev| on_left_handle.with_value(|f| f(ev)) />
                    <div class="gantt-handle right" on:mousedown=move |ev| on_right_handle.with_value(|f| f(ev)) />
                </Show>
            </div>
        </Show>
    }
}
