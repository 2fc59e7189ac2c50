//! Barangay Boundary Overlay
//!
//! Fetches the static boundary feature collection once and renders
//! fill/outline/label layers plus hover highlighting. A failure here leaves
//! the map usable without the overlay.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::bindings::{js_object, MapGl, MapMouseEvent};
use crate::config::{BOUNDARY_GEOJSON_URL, BOUNDARY_NAME_PROPERTY};
use crate::models::Barangay;

const BOUNDARY_SOURCE: &str = "malolos-barangays";

/// Boundary data failed to fetch or parse
#[derive(Debug)]
pub enum OverlayError {
    Fetch(String),
    Malformed(String),
}

impl std::fmt::Display for OverlayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OverlayError::Fetch(msg) => write!(f, "boundary data unavailable: {}", msg),
            OverlayError::Malformed(msg) => write!(f, "boundary data malformed: {}", msg),
        }
    }
}

async fn fetch_boundaries() -> Result<serde_json::Value, OverlayError> {
    let response = gloo_net::http::Request::get(BOUNDARY_GEOJSON_URL)
        .send()
        .await
        .map_err(|err| OverlayError::Fetch(err.to_string()))?;
    if !response.ok() {
        return Err(OverlayError::Fetch(format!("status {}", response.status())));
    }
    let data: serde_json::Value = response
        .json()
        .await
        .map_err(|err| OverlayError::Malformed(err.to_string()))?;
    if data["type"] != "FeatureCollection" || !data["features"].is_array() {
        return Err(OverlayError::Malformed(
            "expected a FeatureCollection".into(),
        ));
    }
    Ok(data)
}

fn install_layers(map: &MapGl, data: &serde_json::Value) {
    map.add_source(
        BOUNDARY_SOURCE,
        &js_object(&serde_json::json!({
            "type": "geojson",
            "data": data
        })),
    );

    map.add_layer(&js_object(&serde_json::json!({
        "id": "barangays-fill",
        "type": "fill",
        "source": BOUNDARY_SOURCE,
        "paint": {
            "fill-color": [
                "case",
                ["boolean", ["feature-state", "hover"], false],
                "#ff6b6b",
                "#4ecdc4"
            ],
            "fill-opacity": 0.6
        }
    })));

    map.add_layer(&js_object(&serde_json::json!({
        "id": "barangays-outline",
        "type": "line",
        "source": BOUNDARY_SOURCE,
        "paint": {
            "line-color": "#2c3e50",
            "line-width": 2
        }
    })));

    map.add_layer(&js_object(&serde_json::json!({
        "id": "barangays-labels",
        "type": "symbol",
        "source": BOUNDARY_SOURCE,
        "layout": {
            "text-field": ["get", BOUNDARY_NAME_PROPERTY],
            "text-size": 12,
            "text-anchor": "center"
        },
        "paint": {
            "text-color": "#2c3e50",
            "text-halo-color": "#ffffff",
            "text-halo-width": 1
        }
    })));
}

fn wire_hover(map: Rc<MapGl>) {
    let hovered: Rc<RefCell<Option<JsValue>>> = Rc::new(RefCell::new(None));

    let clear_hover = {
        let map = map.clone();
        let hovered = hovered.clone();
        move || {
            if let Some(id) = hovered.borrow_mut().take() {
                map.set_feature_state(
                    &js_object(&serde_json::json!({ "source": BOUNDARY_SOURCE }))
                        .tap_set("id", &id),
                    &js_object(&serde_json::json!({ "hover": false })),
                );
            }
        }
    };

    let on_move = {
        let map = map.clone();
        let hovered = hovered.clone();
        let clear_hover = clear_hover.clone();
        Closure::<dyn FnMut(MapMouseEvent)>::new(move |ev: MapMouseEvent| {
            let Some(features) = ev.features() else {
                return;
            };
            let Some(feature) = features.get(0).dyn_into::<js_sys::Object>().ok() else {
                return;
            };
            let id = js_sys::Reflect::get(&feature, &JsValue::from_str("id")).ok();
            let Some(id) = id.filter(|v| !v.is_undefined() && !v.is_null()) else {
                return;
            };
            clear_hover();
            map.set_feature_state(
                &js_object(&serde_json::json!({ "source": BOUNDARY_SOURCE })).tap_set("id", &id),
                &js_object(&serde_json::json!({ "hover": true })),
            );
            *hovered.borrow_mut() = Some(id);
        })
    };
    map.on_layer("mousemove", "barangays-fill", on_move.as_ref().unchecked_ref());
    on_move.forget();

    let on_leave = {
        let map = map.clone();
        Closure::<dyn FnMut(MapMouseEvent)>::new(move |_ev: MapMouseEvent| {
            clear_hover();
            let _ = map.get_canvas().style().set_property("cursor", "");
        })
    };
    map.on_layer(
        "mouseleave",
        "barangays-fill",
        on_leave.as_ref().unchecked_ref(),
    );
    on_leave.forget();

    let on_enter = {
        let map = map.clone();
        Closure::<dyn FnMut(MapMouseEvent)>::new(move |_ev: MapMouseEvent| {
            let _ = map.get_canvas().style().set_property("cursor", "pointer");
        })
    };
    map.on_layer(
        "mouseenter",
        "barangays-fill",
        on_enter.as_ref().unchecked_ref(),
    );
    on_enter.forget();
}

fn wire_selection<F>(map: &MapGl, on_select: F)
where
    F: Fn(Barangay) + 'static,
{
    let on_click = Closure::<dyn FnMut(MapMouseEvent)>::new(move |ev: MapMouseEvent| {
        let Some(features) = ev.features() else {
            return;
        };
        let feature = features.get(0);
        let Ok(props) = js_sys::Reflect::get(&feature, &JsValue::from_str("properties")) else {
            return;
        };
        if let Ok(barangay) = serde_wasm_bindgen::from_value::<Barangay>(props) {
            if !barangay.name.is_empty() {
                on_select(barangay);
            }
        }
    });
    map.on_layer("click", "barangays-fill", on_click.as_ref().unchecked_ref());
    on_click.forget();
}

/// Fetch the boundary collection and install overlay layers and handlers.
pub async fn install_boundary_overlay<F>(map: Rc<MapGl>, on_select: F) -> Result<(), OverlayError>
where
    F: Fn(Barangay) + 'static,
{
    let data = fetch_boundaries().await?;
    install_layers(&map, &data);
    wire_selection(&map, on_select);
    wire_hover(map);
    Ok(())
}

/// Small helper: set one dynamic property on an already-built object.
trait TapSet {
    fn tap_set(self, key: &str, value: &JsValue) -> JsValue;
}

impl TapSet for JsValue {
    fn tap_set(self, key: &str, value: &JsValue) -> JsValue {
        let _ = js_sys::Reflect::set(&self, &JsValue::from_str(key), value);
        self
    }
}
