//! Frontend Models
//!
//! Pin and barangay data structures plus the wire shape of the hosted store.

use serde::{Deserialize, Serialize};

/// A user-created point of interest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pin {
    pub id: String,
    pub title: String,
    pub lng: f64,
    pub lat: f64,
    pub assignees: Vec<String>,
    pub target_families: Vec<String>,
}

/// Row shape of the hosted `pins` table. The array columns are nullable on
/// the backend, so they arrive as `Option` and are default-filled on mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PinRecord {
    pub id: String,
    pub title: String,
    pub lng: f64,
    pub lat: f64,
    pub assignees: Option<Vec<String>>,
    pub target_families: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl From<PinRecord> for Pin {
    fn from(record: PinRecord) -> Self {
        Pin {
            id: record.id,
            title: record.title,
            lng: record.lng,
            lat: record.lat,
            assignees: record.assignees.unwrap_or_default(),
            target_families: record.target_families.unwrap_or_default(),
        }
    }
}

/// Barangay attributes shown in the info panel, read from the boundary
/// feature properties.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Barangay {
    #[serde(rename = "adm4_en", default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub population: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_maps_to_pin() {
        let record = PinRecord {
            id: "abc".into(),
            title: "Barangay Office".into(),
            lng: 120.81,
            lat: 14.84,
            assignees: Some(vec!["Juan".into()]),
            target_families: Some(vec!["Family A".into()]),
            created_at: Some("2024-01-01T00:00:00Z".into()),
            updated_at: None,
        };

        let pin = Pin::from(record);
        assert_eq!(pin.id, "abc");
        assert_eq!(pin.assignees, vec!["Juan".to_string()]);
        assert_eq!(pin.target_families, vec!["Family A".to_string()]);
    }

    #[test]
    fn null_array_columns_default_to_empty() {
        let record = PinRecord {
            id: "abc".into(),
            title: "Plaza".into(),
            lng: 120.8,
            lat: 14.8,
            assignees: None,
            target_families: None,
            created_at: None,
            updated_at: None,
        };

        let pin = Pin::from(record);
        assert!(pin.assignees.is_empty());
        assert!(pin.target_families.is_empty());
    }
}
