//! Pin Management Context
//!
//! The controller for the authoritative pin collection. Every mutation goes
//! through the injected store client first; local state changes only after a
//! confirmed success, so the user never sees a pin the backend does not hold.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::services::{PinFields, PinStore};
use crate::store::{remove_pin, replace_pin, MapStateStoreFields, MapStore};

/// Pin controller provided via Leptos context
#[derive(Clone, Copy)]
pub struct PinContext {
    pub store: MapStore,
    client: StoredValue<Rc<dyn PinStore>, LocalStorage>,
}

impl PinContext {
    pub fn new(store: MapStore, client: Rc<dyn PinStore>) -> Self {
        Self {
            store,
            client: StoredValue::new_local(client),
        }
    }

    fn client(&self) -> Rc<dyn PinStore> {
        self.client.with_value(Rc::clone)
    }

    /// Fetch all pins once and replace local state wholesale. On failure the
    /// collection stays as it was.
    pub fn load(&self) {
        let client = self.client();
        let store = self.store;
        spawn_local(async move {
            match client.list_pins().await {
                Ok(pins) => store.pins().set(pins),
                Err(err) => {
                    web_sys::console::error_1(&format!("Failed to load pins: {}", err).into())
                }
            }
        });
    }

    /// Create a pin at the given coordinate; on success append it and leave
    /// add-pin mode.
    pub fn add(
        &self,
        lng: f64,
        lat: f64,
        title: String,
        assignees: Vec<String>,
        target_families: Vec<String>,
    ) {
        let client = self.client();
        let store = self.store;
        spawn_local(async move {
            match client
                .create_pin(title.trim(), lng, lat, &assignees, &target_families)
                .await
            {
                Ok(pin) => {
                    store.pins().write().push(pin);
                    store.adding_pin().set(false);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("Failed to add pin: {}", err).into())
                }
            }
        });
    }

    /// Update title/assignees/target families of an existing pin. The entry
    /// is replaced in place so ordering is stable.
    pub fn update(
        &self,
        id: String,
        title: String,
        assignees: Vec<String>,
        target_families: Vec<String>,
    ) {
        let client = self.client();
        let store = self.store;
        spawn_local(async move {
            let fields = PinFields {
                title: Some(title.trim().to_string()),
                assignees: Some(assignees),
                target_families: Some(target_families),
            };
            match client.update_pin(&id, fields).await {
                Ok(updated) => replace_pin(&mut store.pins().write(), updated),
                Err(err) => {
                    web_sys::console::error_1(&format!("Failed to update pin: {}", err).into())
                }
            }
        });
    }

    /// Delete one pin.
    pub fn remove(&self, id: String) {
        let client = self.client();
        let store = self.store;
        spawn_local(async move {
            match client.delete_pin(&id).await {
                Ok(()) => remove_pin(&mut store.pins().write(), &id),
                Err(err) => {
                    web_sys::console::error_1(&format!("Failed to delete pin: {}", err).into())
                }
            }
        });
    }

    /// Delete every pin.
    pub fn clear(&self) {
        let client = self.client();
        let store = self.store;
        spawn_local(async move {
            match client.delete_all_pins().await {
                Ok(()) => store.pins().write().clear(),
                Err(err) => {
                    web_sys::console::error_1(&format!("Failed to clear pins: {}", err).into())
                }
            }
        });
    }

    /// Flip add-pin mode. Purely local, no backend effect.
    pub fn toggle_add_mode(&self) {
        self.store.adding_pin().update(|v| *v = !*v);
    }
}

pub fn use_pin_context() -> PinContext {
    expect_context::<PinContext>()
}
