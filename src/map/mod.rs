//! Map Integration
//!
//! MapLibre GL bindings plus the logic that keeps markers, labels and the
//! boundary overlay in line with application state.

pub mod bindings;
pub mod marker_sync;
#[cfg(target_arch = "wasm32")]
pub mod overlay;
pub mod plan;
