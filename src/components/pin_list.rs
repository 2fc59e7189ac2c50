//! Pin List Panel
//!
//! Sidebar listing every pin with its chips; clicking an entry focuses the
//! map on it. The header hosts the clear-all action.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::context::use_pin_context;
use crate::models::Pin;
use crate::store::MapStateStoreFields;

/// How many chips to show before collapsing into a "+n more" badge
const CHIP_PREVIEW: usize = 2;

fn chip_preview(labels: &[String]) -> (Vec<String>, usize) {
    let shown: Vec<String> = labels.iter().take(CHIP_PREVIEW).cloned().collect();
    (shown, labels.len().saturating_sub(CHIP_PREVIEW))
}

#[component]
pub fn PinList(#[prop(into)] on_select: Callback<Pin>) -> impl IntoView {
    let ctx = use_pin_context();
    let pins = move || ctx.store.pins().get();

    view! {
        <div class="pin-list">
            <div class="pin-list-header">
                <h3>{move || format!("Locations ({})", pins().len())}</h3>
                <DeleteConfirmButton
                    label="Clear all"
                    button_class="pin-list-clear"
                    on_confirm=move |_| ctx.clear()
                />
            </div>
            <div class="pin-list-body">
                <Show when=move || pins().is_empty()>
                    <p class="pin-list-empty">"No locations added yet"</p>
                </Show>
                {move || {
                    pins()
                        .into_iter()
                        .map(|pin| {
                            let entry = pin.clone();
                            let (assignees, more_assignees) = chip_preview(&pin.assignees);
                            let (families, more_families) = chip_preview(&pin.target_families);
                            view! {
                                <div class="pin-list-entry" on:click=move |_| on_select.run(entry.clone())>
                                    <h4>{pin.title.clone()}</h4>
                                    <p class="pin-list-coords">
                                        {format!("{:.5}, {:.5}", pin.lat, pin.lng)}
                                    </p>
                                    <div class="chip-row">
                                        {assignees
                                            .into_iter()
                                            .map(|name| view! { <span class="chip chip-blue">{name}</span> })
                                            .collect_view()}
                                        {(more_assignees > 0)
                                            .then(|| {
                                                view! {
                                                    <span class="chip chip-muted">
                                                        {format!("+{} more", more_assignees)}
                                                    </span>
                                                }
                                            })}
                                    </div>
                                    <div class="chip-row">
                                        {families
                                            .into_iter()
                                            .map(|name| view! { <span class="chip chip-green">{name}</span> })
                                            .collect_view()}
                                        {(more_families > 0)
                                            .then(|| {
                                                view! {
                                                    <span class="chip chip-muted">
                                                        {format!("+{} more", more_families)}
                                                    </span>
                                                }
                                            })}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_collapses_long_chip_lists() {
        let labels: Vec<String> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
        let (shown, more) = chip_preview(&labels);
        assert_eq!(shown, ["a", "b"]);
        assert_eq!(more, 2);

        let (shown, more) = chip_preview(&labels[..1]);
        assert_eq!(shown, ["a"]);
        assert_eq!(more, 0);
    }
}
