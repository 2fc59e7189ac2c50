//! Barangay Info Panel
//!
//! Closable card with the attributes of the selected barangay.

use leptos::prelude::*;

use crate::models::Barangay;

#[component]
pub fn BarangayInfo(
    barangay: ReadSignal<Option<Barangay>>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || barangay.get().is_some()>
            <div class="barangay-card">
                <div class="barangay-card-header">
                    <h3>{move || barangay.get().map(|b| b.name).unwrap_or_default()}</h3>
                    <button
                        class="barangay-card-close"
                        aria-label="Close"
                        on:click=move |_| on_close.run(())
                    >
                        "×"
                    </button>
                </div>
                {move || {
                    barangay
                        .get()
                        .and_then(|b| b.description)
                        .map(|text| view! { <p class="barangay-card-text">{text}</p> })
                }}
                {move || {
                    barangay
                        .get()
                        .and_then(|b| b.area)
                        .map(|area| {
                            view! { <p class="barangay-card-line">"Area: " {area}</p> }
                        })
                }}
                {move || {
                    barangay
                        .get()
                        .and_then(|b| b.population)
                        .map(|population| {
                            view! {
                                <p class="barangay-card-line">
                                    "Population: " {population.to_string()}
                                </p>
                            }
                        })
                }}
            </div>
        </Show>
    }
}
