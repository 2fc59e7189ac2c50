//! Map State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The pin
//! collection here is the authoritative client-side copy; markers and the
//! label layer are derived from it, never the other way around.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Pin;

/// Global map state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct MapState {
    /// Authoritative pin collection
    pub pins: Vec<Pin>,
    /// Add-pin mode: while active, taps and long-presses on the map open
    /// the creation dialog
    pub adding_pin: bool,
}

/// Type alias for the store
pub type MapStore = Store<MapState>;

/// Get the map store from context
pub fn use_map_store() -> MapStore {
    expect_context::<MapStore>()
}

// ========================
// Collection Helpers
// ========================
// Plain functions over the pin list so the reconciliation rules stay
// independent of the reactive wrapper.

/// Replace the matching pin in place, preserving its position
pub fn replace_pin(pins: &mut [Pin], updated: Pin) {
    if let Some(slot) = pins.iter_mut().find(|p| p.id == updated.id) {
        *slot = updated;
    }
}

/// Remove a pin by id
pub fn remove_pin(pins: &mut Vec<Pin>, id: &str) {
    pins.retain(|p| p.id != id);
}

/// Id set of the collection, for reconciliation checks
pub fn pin_ids(pins: &[Pin]) -> Vec<String> {
    pins.iter().map(|p| p.id.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pin(id: &str, title: &str) -> Pin {
        Pin {
            id: id.into(),
            title: title.into(),
            lng: 120.8,
            lat: 14.8,
            assignees: vec![],
            target_families: vec![],
        }
    }

    #[test]
    fn replace_preserves_position() {
        let mut pins = vec![pin("a", "one"), pin("b", "two"), pin("c", "three")];
        replace_pin(&mut pins, pin("b", "renamed"));
        assert_eq!(pins[1].id, "b");
        assert_eq!(pins[1].title, "renamed");
        assert_eq!(pin_ids(&pins), ["a", "b", "c"]);
    }

    #[test]
    fn replace_of_unknown_id_is_a_noop() {
        let mut pins = vec![pin("a", "one")];
        replace_pin(&mut pins, pin("zz", "ghost"));
        assert_eq!(pin_ids(&pins), ["a"]);
        assert_eq!(pins[0].title, "one");
    }

    #[test]
    fn remove_drops_only_the_target() {
        let mut pins = vec![pin("a", "one"), pin("b", "two")];
        remove_pin(&mut pins, "a");
        assert_eq!(pin_ids(&pins), ["b"]);
        remove_pin(&mut pins, "missing");
        assert_eq!(pin_ids(&pins), ["b"]);
    }
}
