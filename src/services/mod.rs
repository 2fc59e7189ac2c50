//! Data Access Services
//!
//! Thin async wrappers around the hosted record store and the visit
//! analytics endpoint. The store contract is a trait so tests can run
//! against an in-memory implementation.

mod pin_store;

#[cfg(target_arch = "wasm32")]
mod rest;
#[cfg(target_arch = "wasm32")]
mod visit;

#[cfg(test)]
mod memory;
#[cfg(test)]
mod tests;

pub use pin_store::{PinFields, PinStore, StoreError, StoreResult, SENTINEL_PIN_ID};

#[cfg(target_arch = "wasm32")]
pub use rest::RestPinStore;
#[cfg(target_arch = "wasm32")]
pub use visit::report_visit;

#[cfg(test)]
pub use memory::MemoryPinStore;
