//! Timeline Toolbar Component
//!
//! Time-scale switcher and linking-mode controls above the chart.

use leptos::prelude::*;
use timeline_engine::TimeScale;

use crate::context::use_timeline_context;

const SCALES: [(TimeScale, &str); 3] = [
    (TimeScale::Day, "Day"),
    (TimeScale::Week, "Week"),
    (TimeScale::Month, "Month"),
];

/// Scale tabs plus the linking-mode toggle
#[component]
pub fn TimelineToolbar(
    scale: Signal<TimeScale>,
    on_scale_change: Callback<TimeScale>,
) -> impl IntoView {
    let ctx = use_timeline_context();

    let linking_active = move || ctx.interaction.with(|state| state.is_linking());

    let on_toggle_linking = move |_| {
        ctx.interaction.update(|state| {
            *state = if state.is_linking() {
                state.cancel()
            } else {
                state.enter_linking()
            };
        });
    };

    view! {
        <div class="gantt-toolbar">
            {SCALES
                .iter()
                .map(|(value, label)| {
                    let value = *value;
                    view! {
                        <button
                            class=move || {
                                if scale.get() == value {
                                    "scale-tab active"
                                } else {
                                    "scale-tab"
                                }
                            }
                            on:click=move |_| on_scale_change.run(value)
                        >
                            {*label}
                        </button>
                    }
                })
                .collect_view()}

            <button
                class=move || {
                    if linking_active() { "link-toggle active" } else { "link-toggle" }
                }
                on:click=on_toggle_linking
            >
                {move || if linking_active() { "Cancel linking" } else { "Link items" }}
            </button>

            <Show when=move || {
                ctx.interaction.with(|state| state.link_source().is_some())
            }>
                <span class="link-hint">"Pick the item to link to"</span>
            </Show>
        </div>
    }
}
