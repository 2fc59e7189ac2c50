//! Map View
//!
//! Owns the MapLibre instance: boundary overlay, marker synchronization and
//! press-gesture handling. Markers re-render only as a function of the pin
//! collection, never ahead of it.

use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use longpress::{bind_press_handlers, PressConfig};

use crate::config::MAP_REGION;
use crate::context::use_pin_context;
use crate::map::bindings::{js_object, MapGl};
use crate::map::marker_sync::{MarkerActions, MarkerRegistry};
use crate::models::{Barangay, Pin};
use crate::store::MapStateStoreFields;

const MAP_CONTAINER_ID: &str = "map";

fn map_options() -> JsValue {
    let ((sw_lng, sw_lat), (ne_lng, ne_lat)) = MAP_REGION.max_bounds;
    js_object(&serde_json::json!({
        "container": MAP_CONTAINER_ID,
        "style": MAP_REGION.style_url,
        "center": [MAP_REGION.center.0, MAP_REGION.center.1],
        "zoom": MAP_REGION.zoom,
        "maxBounds": [[sw_lng, sw_lat], [ne_lng, ne_lat]],
        "minZoom": MAP_REGION.min_zoom,
        "maxZoom": MAP_REGION.max_zoom
    }))
}

/// Presses must start on the map canvas itself, not on markers or controls
/// layered above it.
fn press_on_canvas(ev: &web_sys::Event) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .map(|el| el.tag_name() == "CANVAS")
        .unwrap_or(false)
}

#[component]
pub fn MapView(
    /// Open the creation dialog at a map coordinate
    #[prop(into)]
    on_request_pin: Callback<(f64, f64)>,
    /// Open the dialog in edit mode from a marker popup
    #[prop(into)]
    on_edit_pin: Callback<Pin>,
    /// A barangay polygon was clicked
    #[prop(into)]
    on_select_barangay: Callback<Barangay>,
    /// Fly-to requests from the pin list
    focus: ReadSignal<Option<(f64, f64)>>,
) -> impl IntoView {
    let ctx = use_pin_context();

    let map_handle: StoredValue<Option<Rc<MapGl>>, LocalStorage> = StoredValue::new_local(None);
    let registry: StoredValue<MarkerRegistry, LocalStorage> =
        StoredValue::new_local(MarkerRegistry::new());
    let (map_ready, set_map_ready) = signal(false);

    // Create the map once the container exists
    Effect::new(move |_| {
        if map_handle.with_value(|m| m.is_some()) {
            return;
        }
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(container) = document.get_element_by_id(MAP_CONTAINER_ID) else {
            return;
        };

        let map = Rc::new(MapGl::new(&map_options()));

        let on_load = Closure::<dyn FnMut()>::new(move || set_map_ready.set(true));
        map.on("load", on_load.as_ref().unchecked_ref());
        on_load.forget();

        // Tap and long-press share the gating: only act while add-pin mode
        // is armed, then hand the pressed coordinate to the dialog.
        let request_pin = {
            let map = map.clone();
            let container = container.clone();
            move |x: i32, y: i32| {
                if !ctx.store.adding_pin().get_untracked() {
                    return;
                }
                let rect = container.get_bounding_client_rect();
                let point = serde_json::json!([
                    f64::from(x) - rect.left(),
                    f64::from(y) - rect.top()
                ]);
                let lng_lat = map.unproject(&js_object(&point));
                on_request_pin.run((lng_lat.lng(), lng_lat.lat()));
            }
        };
        bind_press_handlers(
            &container,
            PressConfig::default(),
            press_on_canvas,
            request_pin.clone(),
            request_pin,
        );

        map_handle.set_value(Some(map));
    });

    // Boundary overlay once the style has loaded
    #[cfg(target_arch = "wasm32")]
    Effect::new(move |_| {
        if !map_ready.get() {
            return;
        }
        let Some(map) = map_handle.with_value(|m| m.clone()) else {
            return;
        };
        leptos::task::spawn_local(async move {
            let select = move |barangay: Barangay| on_select_barangay.run(barangay);
            if let Err(err) = crate::map::overlay::install_boundary_overlay(map, select).await {
                web_sys::console::error_1(&format!("Boundary overlay skipped: {}", err).into());
            }
        });
    });

    // Marker + label sync whenever the collection changes
    Effect::new(move |_| {
        let pins = ctx.store.pins().get();
        if !map_ready.get() {
            return;
        }
        let Some(map) = map_handle.with_value(|m| m.clone()) else {
            return;
        };
        let actions = MarkerActions {
            on_edit: move |pin| on_edit_pin.run(pin),
            on_delete: move |id: String| ctx.remove(id),
        };
        registry.update_value(|reg| reg.sync(&map, &pins, &actions));
    });

    // Crosshair cursor while add-pin mode is armed
    Effect::new(move |_| {
        let adding = ctx.store.adding_pin().get();
        map_handle.with_value(|m| {
            if let Some(map) = m {
                let cursor = if adding { "crosshair" } else { "" };
                let _ = map.get_canvas().style().set_property("cursor", cursor);
            }
        });
    });

    // Fly to a pin selected in the list
    Effect::new(move |_| {
        let Some((lng, lat)) = focus.get() else {
            return;
        };
        map_handle.with_value(|m| {
            if let Some(map) = m {
                map.fly_to(&js_object(&serde_json::json!({
                    "center": [lng, lat],
                    "zoom": 15.0
                })));
            }
        });
    });

    view! { <div id=MAP_CONTAINER_ID class="map-container"></div> }
}
