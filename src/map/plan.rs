//! Marker Sync Planning
//!
//! Pure diff between the rendered marker set and the authoritative pin
//! collection. The wasm side applies the resulting operations; keeping the
//! diff here keeps it testable off the browser.

use std::collections::HashSet;

use serde_json::json;

use crate::models::Pin;

/// One reconciliation step
#[derive(Debug, Clone, PartialEq)]
pub enum MarkerOp {
    /// Drop the marker rendered for an id no longer in the collection
    Remove(String),
    /// Create a marker for a pin that has none
    Add(Pin),
    /// Refresh popup content and coordinates of an existing marker
    Refresh(Pin),
}

/// Compute the operations that bring `rendered` in line with `pins`.
pub fn plan_marker_sync(rendered: &[String], pins: &[Pin]) -> Vec<MarkerOp> {
    let live: HashSet<&str> = pins.iter().map(|p| p.id.as_str()).collect();
    let existing: HashSet<&str> = rendered.iter().map(|s| s.as_str()).collect();

    let mut ops: Vec<MarkerOp> = rendered
        .iter()
        .filter(|id| !live.contains(id.as_str()))
        .map(|id| MarkerOp::Remove(id.clone()))
        .collect();

    for pin in pins {
        if existing.contains(pin.id.as_str()) {
            ops.push(MarkerOp::Refresh(pin.clone()));
        } else {
            ops.push(MarkerOp::Add(pin.clone()));
        }
    }
    ops
}

/// Feature collection backing the pin-label symbol layer. Rebuilt wholesale
/// on every change (replace-data semantics).
pub fn pin_labels_feature_collection(pins: &[Pin]) -> serde_json::Value {
    json!({
        "type": "FeatureCollection",
        "features": pins
            .iter()
            .map(|pin| {
                json!({
                    "type": "Feature",
                    "geometry": {
                        "type": "Point",
                        "coordinates": [pin.lng, pin.lat]
                    },
                    "properties": {
                        "id": pin.id,
                        "title": pin.title
                    }
                })
            })
            .collect::<Vec<_>>()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pin(id: &str) -> Pin {
        Pin {
            id: id.into(),
            title: format!("pin {}", id),
            lng: 120.8,
            lat: 14.8,
            assignees: vec![],
            target_families: vec![],
        }
    }

    #[test]
    fn new_pin_yields_exactly_one_add() {
        let rendered = vec!["a".to_string()];
        let pins = vec![pin("a"), pin("b")];
        let ops = plan_marker_sync(&rendered, &pins);

        let adds: Vec<_> = ops
            .iter()
            .filter(|op| matches!(op, MarkerOp::Add(_)))
            .collect();
        assert_eq!(adds.len(), 1);
        assert!(ops.contains(&MarkerOp::Add(pin("b"))));
        assert!(ops.contains(&MarkerOp::Refresh(pin("a"))));
    }

    #[test]
    fn vanished_pin_yields_a_remove() {
        let rendered = vec!["a".to_string(), "b".to_string()];
        let pins = vec![pin("b")];
        let ops = plan_marker_sync(&rendered, &pins);

        assert!(ops.contains(&MarkerOp::Remove("a".into())));
        assert!(!ops.iter().any(|op| matches!(op, MarkerOp::Add(_))));
    }

    #[test]
    fn empty_collection_removes_everything() {
        let rendered = vec!["a".to_string(), "b".to_string()];
        let ops = plan_marker_sync(&rendered, &[]);
        assert_eq!(
            ops,
            vec![MarkerOp::Remove("a".into()), MarkerOp::Remove("b".into())]
        );
    }

    #[test]
    fn nothing_rendered_nothing_live_is_a_noop() {
        assert!(plan_marker_sync(&[], &[]).is_empty());
    }

    #[test]
    fn label_collection_carries_one_feature_per_pin() {
        let fc = pin_labels_feature_collection(&[pin("a"), pin("b")]);
        let features = fc["features"].as_array().unwrap();
        assert_eq!(features.len(), 2);
        assert_eq!(features[0]["properties"]["title"], "pin a");
        assert_eq!(features[1]["geometry"]["coordinates"][0], 120.8);
    }
}
