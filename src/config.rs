//! Map Region & Store Configuration
//!
//! The rendered region is fixed (Malolos, Bulacan). Store credentials are
//! injected at build time since the WASM bundle has no process environment.

/// Viewport constraints for the fixed region
pub struct MapRegion {
    pub center: (f64, f64),
    pub zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// ((south-west lng, lat), (north-east lng, lat))
    pub max_bounds: ((f64, f64), (f64, f64)),
    pub style_url: &'static str,
}

pub const MAP_REGION: MapRegion = MapRegion {
    center: (120.8114, 14.8433),
    zoom: 11.0,
    min_zoom: 11.0,
    max_zoom: 18.0,
    max_bounds: ((120.75, 14.75), (120.90, 14.90)),
    style_url: "https://tiles.openfreemap.org/styles/positron",
};

/// Static boundary feature collection served next to the bundle
pub const BOUNDARY_GEOJSON_URL: &str = "/malolos.geojson";

/// Feature property carrying the barangay name
pub const BOUNDARY_NAME_PROPERTY: &str = "adm4_en";

/// Visit analytics endpoint on our own backend
pub const VISIT_LOG_ENDPOINT: &str = "/api/log-visit";

/// Base URL of the hosted record store
pub fn store_url() -> &'static str {
    option_env!("BMAP_STORE_URL").unwrap_or("http://127.0.0.1:54321")
}

/// Anonymous API key for the hosted record store
pub fn store_key() -> &'static str {
    option_env!("BMAP_STORE_KEY").unwrap_or("")
}
