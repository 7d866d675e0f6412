//! Dependency Layer Component
//!
//! SVG overlay rendering the routed, culled connector set. Connectors are
//! clickable for deletion; lag annotations render at path midpoints.

use leptos::prelude::*;
use timeline_engine::DependencyPath;

use crate::context::use_timeline_context;

/// SVG overlay of dependency connectors
#[component]
pub fn DependencyLayer(
    paths: Memo<Vec<DependencyPath>>,
    width: Signal<f64>,
    height: Signal<f64>,
) -> impl IntoView {
    let ctx = use_timeline_context();

    view! {
        <svg
            class="dependency-layer"
            xmlns="http://www.w3.org/2000/svg"
            style="position: absolute; left: 0; top: 0; pointer-events: none; overflow: visible;"
            width=move || width.get()
            height=move || height.get()
        >
            <For
                each=move || paths.get()
                key=|path| {
                    format!(
                        "{}:{}:{}:{}:{}",
                        path.id, path.start.x, path.start.y, path.end.x, path.end.y,
                    )
                }
                children=move |path| {
                    let id = path.id.clone();
                    let midpoint = path.midpoint();
                    let on_delete = move |ev: web_sys::MouseEvent| {
                        ev.stop_propagation();
                        web_sys::console::log_1(
                            &format!("[TIMELINE] deleting dependency {}", id).into(),
                        );
                        ctx.on_dependency_delete.run(id.clone());
                    };
                    view! {
                        <g class=format!("dependency {}", path.color_class)>
                            <path
                                d=path.svg_path()
                                fill="none"
                                style="pointer-events: stroke; cursor: pointer;"
                                on:click=on_delete
                            />
                            {path
                                .lag_label
                                .as_ref()
                                .map(|label| {
                                    view! {
                                        <text
                                            class="dependency-lag"
                                            x=midpoint.x
                                            y=midpoint.y - 4.0
                                            text-anchor="middle"
                                            font-size="10"
                                        >
                                            {label.clone()}
                                        </text>
                                    }
                                })}
                        </g>
                    }
                }
            />
        </svg>
    }
}
