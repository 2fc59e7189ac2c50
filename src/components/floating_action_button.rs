//! Floating Action Button
//!
//! Toggles add-pin mode. Shows its armed state while the next tap on the map
//! will open the creation dialog.

use leptos::prelude::*;

#[component]
pub fn FloatingActionButton(
    #[prop(into)] active: Signal<bool>,
    #[prop(into)] on_press: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="fab-wrap">
            <button
                class=move || if active.get() { "fab fab-active" } else { "fab" }
                title=move || {
                    if active.get() { "Adding Pin… tap map" } else { "Add Pin" }
                }
                aria-label="Add pin"
                on:click=move |_| on_press.run(())
            >
                {move || if active.get() { "◎" } else { "+" }}
            </button>
        </div>
    }
}
