//! Barangay Map Frontend App
//!
//! Composition of the map page: map view, pin list, dialogs and visit
//! logging. Dialog state lives here; pin state lives in the shared store.

use std::rc::Rc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    AddPinDialog, BarangayInfo, FloatingActionButton, MapView, PinDraft, PinList, VisitLogger,
};
use crate::context::PinContext;
use crate::models::{Barangay, Pin};
use crate::services::PinStore;
use crate::store::{MapState, MapStateStoreFields};

#[component]
pub fn App(client: Rc<dyn PinStore>) -> impl IntoView {
    let store = Store::new(MapState::default());
    provide_context(store);

    let ctx = PinContext::new(store, client);
    provide_context(ctx);

    // Dialog state
    let (show_dialog, set_show_dialog) = signal(false);
    let (pending_coords, set_pending_coords) = signal::<Option<(f64, f64)>>(None);
    let (editing_pin, set_editing_pin) = signal::<Option<Pin>>(None);
    // Map page state
    let (selected_barangay, set_selected_barangay) = signal::<Option<Barangay>>(None);
    let (focus, set_focus) = signal::<Option<(f64, f64)>>(None);

    // Load pins once on startup
    Effect::new(move |_| {
        ctx.load();
    });

    let open_create = move |(lng, lat): (f64, f64)| {
        set_editing_pin.set(None);
        set_pending_coords.set(Some((lng, lat)));
        set_show_dialog.set(true);
    };

    let open_edit = move |pin: Pin| {
        set_pending_coords.set(None);
        set_editing_pin.set(Some(pin));
        set_show_dialog.set(true);
    };

    let close_dialog = move || {
        set_show_dialog.set(false);
        set_pending_coords.set(None);
        set_editing_pin.set(None);
    };

    let submit_dialog = move |draft: PinDraft| {
        if let Some(pin) = editing_pin.get_untracked() {
            ctx.update(pin.id, draft.title, draft.assignees, draft.target_families);
        } else if let Some((lng, lat)) = pending_coords.get_untracked() {
            ctx.add(lng, lat, draft.title, draft.assignees, draft.target_families);
        }
        close_dialog();
    };

    view! {
        <div class="app-shell">
            <header class="map-header">
                <h1>"Malolos, Bulacan Barangays Map"</h1>
                <p>"Interactive map with pin management"</p>
            </header>

            <div class="map-stage">
                <MapView
                    on_request_pin=open_create
                    on_edit_pin=open_edit
                    on_select_barangay=move |barangay| set_selected_barangay.set(Some(barangay))
                    focus=focus
                />

                <FloatingActionButton
                    active=Signal::derive(move || ctx.store.adding_pin().get())
                    on_press=move |_| ctx.toggle_add_mode()
                />

                <PinList on_select=move |pin: Pin| set_focus.set(Some((pin.lng, pin.lat))) />

                <BarangayInfo
                    barangay=selected_barangay
                    on_close=move |_| set_selected_barangay.set(None)
                />
            </div>

            <AddPinDialog
                open=show_dialog
                edit_pin=editing_pin
                on_submit=submit_dialog
                on_cancel=move |_| close_dialog()
            />

            <VisitLogger />
        </div>
    }
}
