//! Timeline Grid Component
//!
//! Header cell labels and vertical grid lines per time scale, plus a marker
//! for today when it falls inside the bounds.

use chrono::Local;
use leptos::prelude::*;
use timeline_engine::{TimeScale, TimelineGrid};

use crate::components::gantt_timeline::HEADER_HEIGHT;
use crate::context::use_timeline_context;

fn cell_label(grid: &TimelineGrid, index: i64) -> String {
    let date = grid.cell_start_date(index);
    match grid.scale {
        TimeScale::Day => date.format("%d").to_string(),
        TimeScale::Week => date.format("%d %b").to_string(),
        TimeScale::Month => date.format("%b %Y").to_string(),
    }
}

/// Header strip and vertical grid lines
#[component]
pub fn TimelineGridLayer(grid: Memo<TimelineGrid>, content_height: Signal<f64>) -> impl IntoView {
    let ctx = use_timeline_context();

    let cells = Memo::new(move |_| {
        let g = grid.get();
        (0..g.total_cells())
            .map(|i| (i, cell_label(&g, i)))
            .collect::<Vec<_>>()
    });

    let today_x = Memo::new(move |_| {
        let g = grid.get();
        let today = Local::now().date_naive();
        g.contains(today).then(|| g.date_to_pixel(today))
    });

    view! {
        <Show when=move || ctx.config.show_grid>
            <div class="gantt-grid">
                <For
                    each=move || cells.get()
                    key=|(i, _)| *i
                    children=move |(i, label)| {
                        let cell_width = ctx.config.cell_width;
                        let x = i as f64 * cell_width;
                        view! {
                            <div
                                class="gantt-header-cell"
                                style=format!(
                                    "position: absolute; left: {}px; top: 0; width: {}px; height: {}px;",
                                    x, cell_width, HEADER_HEIGHT,
                                )
                            >
                                {label}
                            </div>
                            <div
                                class="gantt-gridline"
                                style=move || {
                                    format!(
                                        "position: absolute; left: {}px; top: {}px; width: 1px; height: {}px;",
                                        x, HEADER_HEIGHT, content_height.get(),
                                    )
                                }
                            />
                        }
                    }
                />
            </div>
        </Show>

        <Show when=move || today_x.get().is_some()>
            <div
                class="gantt-today"
                style=move || {
                    let x = today_x.get().unwrap_or(0.0);
                    format!(
                        "position: absolute; left: {}px; top: {}px; width: 2px; height: {}px;",
                        x, HEADER_HEIGHT, content_height.get(),
                    )
                }
            />
        </Show>
    }
}
