//! Delete Confirm Button
//!
//! Inline confirmation for destructive actions: a first press arms the
//! button, a second press confirms, the cross cancels.

use leptos::prelude::*;

#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] label: String,
    #[prop(into)] button_class: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (armed, set_armed) = signal(false);
    let label = StoredValue::new(label);

    view! {
        <Show when=move || !armed.get()>
            <button
                class=button_class.clone()
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_armed.set(true);
                }
            >
                {label.get_value()}
            </button>
        </Show>
        <Show when=move || armed.get()>
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Sure?"</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_armed.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_armed.set(false);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
