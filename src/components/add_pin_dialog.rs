//! Add/Edit Pin Dialog
//!
//! Modal form collecting title, assignees and target families. Assignees and
//! families are chip inputs: Enter or comma adds, Backspace on an empty
//! input removes the last chip.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::Pin;

/// Dialog output on submission
#[derive(Debug, Clone, PartialEq)]
pub struct PinDraft {
    pub title: String,
    pub assignees: Vec<String>,
    pub target_families: Vec<String>,
}

/// Add a chip label: trimmed, non-empty, no duplicates. Returns whether the
/// list changed.
fn append_label(labels: &mut Vec<String>, value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() || labels.iter().any(|l| l == value) {
        return false;
    }
    labels.push(value.to_string());
    true
}

fn input_value(ev: &web_sys::Event) -> String {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}

#[component]
pub fn AddPinDialog(
    open: ReadSignal<bool>,
    edit_pin: ReadSignal<Option<Pin>>,
    #[prop(into)] on_submit: Callback<PinDraft>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let (title, set_title) = signal(String::new());
    let (assignees, set_assignees) = signal(Vec::<String>::new());
    let (assignee_input, set_assignee_input) = signal(String::new());
    let (families, set_families) = signal(Vec::<String>::new());
    let (family_input, set_family_input) = signal(String::new());

    let reset = move || {
        set_title.set(String::new());
        set_assignees.set(Vec::new());
        set_assignee_input.set(String::new());
        set_families.set(Vec::new());
        set_family_input.set(String::new());
    };

    // Prefill when opened in edit mode, start blank otherwise
    Effect::new(move |_| {
        if !open.get() {
            return;
        }
        if let Some(pin) = edit_pin.get() {
            set_title.set(pin.title);
            set_assignees.set(pin.assignees);
            set_families.set(pin.target_families);
        } else {
            reset();
        }
    });

    let chip_keydown = move |input: ReadSignal<String>,
                             set_input: WriteSignal<String>,
                             set_list: WriteSignal<Vec<String>>| {
        move |ev: web_sys::KeyboardEvent| {
            let key = ev.key();
            if key == "Enter" || key == "," {
                ev.prevent_default();
                let value = input.get_untracked();
                set_list.update(|labels| {
                    if append_label(labels, &value) {
                        set_input.set(String::new());
                    }
                });
            } else if key == "Backspace" && input.get_untracked().is_empty() {
                set_list.update(|labels| {
                    labels.pop();
                });
            }
        }
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = title.get_untracked().trim().to_string();
        if name.is_empty() {
            return;
        }
        on_submit.run(PinDraft {
            title: name,
            assignees: assignees.get_untracked(),
            target_families: families.get_untracked(),
        });
        reset();
    };

    let cancel = move |_| {
        reset();
        on_cancel.run(());
    };

    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop">
                <div class="dialog-card">
                    <div class="dialog-header">
                        <h2>
                            {move || {
                                if edit_pin.get().is_some() { "Edit Location" } else { "Add New Location" }
                            }}
                        </h2>
                        <button class="dialog-close" on:click=cancel aria-label="Close">
                            "×"
                        </button>
                    </div>

                    <form on:submit=submit>
                        <label class="dialog-label">"Location Name *"</label>
                        <input
                            type="text"
                            class="dialog-input"
                            placeholder="Enter location name"
                            prop:value=move || title.get()
                            on:input=move |ev| set_title.set(input_value(&ev))
                        />

                        <label class="dialog-label">"Assignees"</label>
                        <div class="chip-box">
                            <div class="chip-row">
                                {move || {
                                    assignees
                                        .get()
                                        .into_iter()
                                        .enumerate()
                                        .map(|(index, name)| {
                                            view! {
                                                <span class="chip chip-blue">
                                                    {name}
                                                    <button
                                                        type="button"
                                                        class="chip-remove"
                                                        on:click=move |_| {
                                                            set_assignees.update(|labels| {
                                                                labels.remove(index);
                                                            })
                                                        }
                                                    >
                                                        "×"
                                                    </button>
                                                </span>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </div>
                            <input
                                type="text"
                                class="chip-input"
                                placeholder="Enter assignees (press Enter or comma to add)"
                                prop:value=move || assignee_input.get()
                                on:input=move |ev| set_assignee_input.set(input_value(&ev))
                                on:keydown=chip_keydown(assignee_input, set_assignee_input, set_assignees)
                            />
                        </div>

                        <label class="dialog-label">"Target Families"</label>
                        <div class="chip-box">
                            <div class="chip-row">
                                {move || {
                                    families
                                        .get()
                                        .into_iter()
                                        .enumerate()
                                        .map(|(index, name)| {
                                            view! {
                                                <span class="chip chip-green">
                                                    {name}
                                                    <button
                                                        type="button"
                                                        class="chip-remove"
                                                        on:click=move |_| {
                                                            set_families.update(|labels| {
                                                                labels.remove(index);
                                                            })
                                                        }
                                                    >
                                                        "×"
                                                    </button>
                                                </span>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </div>
                            <input
                                type="text"
                                class="chip-input"
                                placeholder="Enter target families (press Enter or comma to add)"
                                prop:value=move || family_input.get()
                                on:input=move |ev| set_family_input.set(input_value(&ev))
                                on:keydown=chip_keydown(family_input, set_family_input, set_families)
                            />
                        </div>

                        <div class="dialog-actions">
                            <button type="button" class="btn-secondary" on:click=cancel>
                                "Cancel"
                            </button>
                            <button
                                type="submit"
                                class="btn-primary"
                                disabled=move || title.get().trim().is_empty()
                            >
                                {move || {
                                    if edit_pin.get().is_some() { "Save Changes" } else { "Add Location" }
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
