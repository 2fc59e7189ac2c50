//! MapLibre GL Bindings
//!
//! Minimal wasm-bindgen surface over the MapLibre GL JS global loaded by the
//! page. Option objects are built as plain JSON and converted with a
//! JSON-compatible serializer so they arrive as object literals.

use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = maplibregl, js_name = Map)]
    pub type MapGl;

    #[wasm_bindgen(constructor, js_namespace = maplibregl, js_class = "Map")]
    pub fn new(options: &JsValue) -> MapGl;

    #[wasm_bindgen(method)]
    pub fn on(this: &MapGl, event: &str, listener: &js_sys::Function);

    /// Layer-scoped variant of `on`
    #[wasm_bindgen(method, js_name = on)]
    pub fn on_layer(this: &MapGl, event: &str, layer: &str, listener: &js_sys::Function);

    #[wasm_bindgen(method, js_name = addSource)]
    pub fn add_source(this: &MapGl, id: &str, source: &JsValue);

    #[wasm_bindgen(method, js_name = getSource)]
    pub fn get_source(this: &MapGl, id: &str) -> Option<GeoJsonSource>;

    #[wasm_bindgen(method, js_name = addLayer)]
    pub fn add_layer(this: &MapGl, layer: &JsValue);

    #[wasm_bindgen(method, js_name = getCanvas)]
    pub fn get_canvas(this: &MapGl) -> web_sys::HtmlElement;

    #[wasm_bindgen(method, js_name = setFeatureState)]
    pub fn set_feature_state(this: &MapGl, target: &JsValue, state: &JsValue);

    #[wasm_bindgen(method)]
    pub fn unproject(this: &MapGl, point: &JsValue) -> LngLat;

    #[wasm_bindgen(method, js_name = flyTo)]
    pub fn fly_to(this: &MapGl, options: &JsValue);

    #[wasm_bindgen(method)]
    pub fn remove(this: &MapGl);

    // ------------------------------------------------------------------

    #[wasm_bindgen(js_namespace = maplibregl, js_name = Marker)]
    pub type Marker;

    #[wasm_bindgen(constructor, js_namespace = maplibregl, js_class = "Marker")]
    pub fn new(options: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = setLngLat)]
    pub fn set_lng_lat(this: &Marker, lng_lat: &JsValue);

    #[wasm_bindgen(method, js_name = setPopup)]
    pub fn set_popup(this: &Marker, popup: &Popup);

    #[wasm_bindgen(method, js_name = getPopup)]
    pub fn get_popup(this: &Marker) -> Option<Popup>;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &Marker, map: &MapGl);

    #[wasm_bindgen(method)]
    pub fn remove(this: &Marker);

    // ------------------------------------------------------------------

    #[wasm_bindgen(js_namespace = maplibregl, js_name = Popup)]
    pub type Popup;

    #[wasm_bindgen(constructor, js_namespace = maplibregl, js_class = "Popup")]
    pub fn new(options: &JsValue) -> Popup;

    #[wasm_bindgen(method, js_name = setDOMContent)]
    pub fn set_dom_content(this: &Popup, content: &web_sys::Node);

    // ------------------------------------------------------------------

    /// GeoJSON source handle returned by `getSource`
    pub type GeoJsonSource;

    #[wasm_bindgen(method, js_name = setData)]
    pub fn set_data(this: &GeoJsonSource, data: &JsValue);

    // ------------------------------------------------------------------

    pub type LngLat;

    #[wasm_bindgen(method, getter)]
    pub fn lng(this: &LngLat) -> f64;

    #[wasm_bindgen(method, getter)]
    pub fn lat(this: &LngLat) -> f64;

    // ------------------------------------------------------------------

    /// Map-level mouse event (layer-scoped listeners receive the hit
    /// features as well)
    pub type MapMouseEvent;

    #[wasm_bindgen(method, getter = lngLat)]
    pub fn lng_lat(this: &MapMouseEvent) -> LngLat;

    #[wasm_bindgen(method, getter)]
    pub fn features(this: &MapMouseEvent) -> Option<js_sys::Array>;
}

/// Serialize a JSON value into a JS object literal.
pub fn js_object(value: &serde_json::Value) -> JsValue {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value.serialize(&serializer).unwrap_or(JsValue::NULL)
}
