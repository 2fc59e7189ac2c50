//! Map Marker Synchronizer
//!
//! Owns the id-keyed registry of rendered markers and reconciles it against
//! the authoritative pin collection. Popup actions are real DOM nodes with
//! closures attached at construction time, tied to the marker they belong to.

use std::collections::HashMap;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::bindings::{js_object, MapGl, Marker, Popup};
use super::plan::{pin_labels_feature_collection, plan_marker_sync, MarkerOp};
use crate::models::Pin;

const PIN_LABEL_SOURCE: &str = "pin-labels";
const MARKER_COLOR: &str = "#2563eb";

/// A rendered marker plus the closures backing its popup buttons. Dropping
/// the handle releases both.
struct MarkerHandle {
    marker: Marker,
    _handlers: Vec<Closure<dyn FnMut()>>,
}

/// Callbacks a marker popup can trigger
pub struct MarkerActions<E, D>
where
    E: Fn(Pin) + Clone + 'static,
    D: Fn(String) + Clone + 'static,
{
    pub on_edit: E,
    pub on_delete: D,
}

#[derive(Default)]
pub struct MarkerRegistry {
    markers: HashMap<String, MarkerHandle>,
}

impl MarkerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rendered_ids(&self) -> Vec<String> {
        self.markers.keys().cloned().collect()
    }

    /// Reconcile rendered markers and the label layer with `pins`.
    pub fn sync<E, D>(&mut self, map: &MapGl, pins: &[Pin], actions: &MarkerActions<E, D>)
    where
        E: Fn(Pin) + Clone + 'static,
        D: Fn(String) + Clone + 'static,
    {
        for op in plan_marker_sync(&self.rendered_ids(), pins) {
            match op {
                MarkerOp::Remove(id) => {
                    if let Some(handle) = self.markers.remove(&id) {
                        handle.marker.remove();
                    }
                }
                MarkerOp::Add(pin) => {
                    let handle = build_marker(map, &pin, actions);
                    self.markers.insert(pin.id.clone(), handle);
                }
                MarkerOp::Refresh(pin) => {
                    if let Some(handle) = self.markers.get_mut(&pin.id) {
                        refresh_marker(handle, &pin, actions);
                    }
                }
            }
        }

        sync_label_layer(map, pins);
    }
}

fn build_marker<E, D>(map: &MapGl, pin: &Pin, actions: &MarkerActions<E, D>) -> MarkerHandle
where
    E: Fn(Pin) + Clone + 'static,
    D: Fn(String) + Clone + 'static,
{
    let marker = Marker::new(&js_object(&serde_json::json!({ "color": MARKER_COLOR })));
    marker.set_lng_lat(&js_object(&serde_json::json!([pin.lng, pin.lat])));

    let popup = Popup::new(&js_object(&serde_json::json!({ "offset": 12 })));
    let mut handlers = Vec::new();
    if let Some(content) = build_popup_content(pin, actions, &mut handlers) {
        popup.set_dom_content(&content);
    }
    marker.set_popup(&popup);
    marker.add_to(map);

    MarkerHandle {
        marker,
        _handlers: handlers,
    }
}

fn refresh_marker<E, D>(handle: &mut MarkerHandle, pin: &Pin, actions: &MarkerActions<E, D>)
where
    E: Fn(Pin) + Clone + 'static,
    D: Fn(String) + Clone + 'static,
{
    // Coordinates never change in practice, but resetting them is cheap
    handle
        .marker
        .set_lng_lat(&js_object(&serde_json::json!([pin.lng, pin.lat])));

    let mut handlers = Vec::new();
    if let Some(content) = build_popup_content(pin, actions, &mut handlers) {
        let popup = Popup::new(&js_object(&serde_json::json!({ "offset": 12 })));
        popup.set_dom_content(&content);
        handle.marker.set_popup(&popup);
    }
    handle._handlers = handlers;
}

/// Build the popup DOM: title, coordinates, assignee/family lines and the
/// edit/delete buttons with their closures attached directly.
fn build_popup_content<E, D>(
    pin: &Pin,
    actions: &MarkerActions<E, D>,
    handlers: &mut Vec<Closure<dyn FnMut()>>,
) -> Option<web_sys::Element>
where
    E: Fn(Pin) + Clone + 'static,
    D: Fn(String) + Clone + 'static,
{
    let document = web_sys::window()?.document()?;
    let root = document.create_element("div").ok()?;
    root.set_class_name("pin-popup");

    let title = document.create_element("div").ok()?;
    title.set_class_name("pin-popup-title");
    title.set_text_content(Some(&pin.title));
    root.append_child(&title).ok()?;

    let coords = document.create_element("div").ok()?;
    coords.set_class_name("pin-popup-coords");
    coords.set_text_content(Some(&format!("{:.5}, {:.5}", pin.lat, pin.lng)));
    root.append_child(&coords).ok()?;

    let assignees = document.create_element("div").ok()?;
    assignees.set_class_name("pin-popup-line");
    let assignees_text = if pin.assignees.is_empty() {
        "None assigned".to_string()
    } else {
        pin.assignees.join(", ")
    };
    assignees.set_text_content(Some(&format!("Assignees: {}", assignees_text)));
    root.append_child(&assignees).ok()?;

    let families = document.create_element("div").ok()?;
    families.set_class_name("pin-popup-line");
    let families_text = if pin.target_families.is_empty() {
        "No target families".to_string()
    } else {
        pin.target_families.join(", ")
    };
    families.set_text_content(Some(&format!("Target Families: {}", families_text)));
    root.append_child(&families).ok()?;

    let buttons = document.create_element("div").ok()?;
    buttons.set_class_name("pin-popup-actions");

    let edit_btn = document.create_element("button").ok()?;
    edit_btn.set_class_name("pin-popup-edit");
    edit_btn.set_text_content(Some("Edit"));
    let edit_pin = pin.clone();
    let on_edit = actions.on_edit.clone();
    let edit_handler = Closure::<dyn FnMut()>::new(move || on_edit(edit_pin.clone()));
    edit_btn
        .add_event_listener_with_callback("click", edit_handler.as_ref().unchecked_ref())
        .ok()?;
    handlers.push(edit_handler);
    buttons.append_child(&edit_btn).ok()?;

    let delete_btn = document.create_element("button").ok()?;
    delete_btn.set_class_name("pin-popup-delete");
    delete_btn.set_text_content(Some("Delete"));
    let delete_id = pin.id.clone();
    let on_delete = actions.on_delete.clone();
    let delete_handler = Closure::<dyn FnMut()>::new(move || on_delete(delete_id.clone()));
    delete_btn
        .add_event_listener_with_callback("click", delete_handler.as_ref().unchecked_ref())
        .ok()?;
    handlers.push(delete_handler);
    buttons.append_child(&delete_btn).ok()?;

    root.append_child(&buttons).ok()?;
    Some(root)
}

/// Rebuild the pin-label source from scratch; create source and layer on
/// first use.
fn sync_label_layer(map: &MapGl, pins: &[Pin]) {
    let collection = pin_labels_feature_collection(pins);

    if let Some(source) = map.get_source(PIN_LABEL_SOURCE) {
        source.set_data(&js_object(&collection));
        return;
    }

    map.add_source(
        PIN_LABEL_SOURCE,
        &js_object(&serde_json::json!({
            "type": "geojson",
            "data": collection
        })),
    );
    map.add_layer(&js_object(&serde_json::json!({
        "id": PIN_LABEL_SOURCE,
        "type": "symbol",
        "source": PIN_LABEL_SOURCE,
        "layout": {
            "text-field": ["get", "title"],
            "text-size": 11,
            "text-anchor": "top",
            "text-offset": [0, 1.5],
            "text-allow-overlap": false,
            "text-ignore-placement": false
        },
        "paint": {
            "text-color": "#1e40af",
            "text-halo-color": "#ffffff",
            "text-halo-width": 2,
            "text-halo-blur": 1
        }
    })));
}
