//! Visit record models.
//!
//! A visit is an append-only log entry; there is no update or delete path.

use serde::{Deserialize, Serialize};

/// Client-observed environment attributes. The caller IP is resolved
/// server-side and merged in before storing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LocationData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screen_resolution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewport: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
}

/// POST body of the visit-logging endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VisitPayload {
    #[serde(default)]
    pub user_agent: Option<String>,
    #[serde(default)]
    pub device_type: Option<String>,
    #[serde(default)]
    pub browser: Option<String>,
    #[serde(default)]
    pub os: Option<String>,
    #[serde(default)]
    pub page_url: Option<String>,
    #[serde(default)]
    pub referrer: Option<String>,
    #[serde(default)]
    pub location_data: Option<LocationData>,
}

/// Row shape of the hosted `visits` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct VisitRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub ip_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browser: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_data: Option<LocationData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referrer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl VisitRecord {
    /// Build the stored record from a payload and the resolved caller IP.
    pub fn from_payload(payload: VisitPayload, ip: String) -> Self {
        let mut location = payload.location_data.unwrap_or_default();
        location.ip_address = Some(ip.clone());
        Self {
            id: None,
            ip_address: ip,
            user_agent: payload.user_agent,
            device_type: payload.device_type,
            browser: payload.browser,
            os: payload.os,
            location_data: Some(location),
            page_url: payload.page_url,
            referrer: payload.referrer,
            created_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolved_ip_is_merged_into_location_data() {
        let payload = VisitPayload {
            user_agent: Some("agent".into()),
            location_data: Some(LocationData {
                timezone: Some("Asia/Manila".into()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let record = VisitRecord::from_payload(payload, "1.2.3.4".into());
        assert_eq!(record.ip_address, "1.2.3.4");
        let location = record.location_data.unwrap();
        assert_eq!(location.ip_address.as_deref(), Some("1.2.3.4"));
        assert_eq!(location.timezone.as_deref(), Some("Asia/Manila"));
    }

    #[test]
    fn missing_location_data_still_carries_the_ip() {
        let record = VisitRecord::from_payload(VisitPayload::default(), "unknown".into());
        assert_eq!(record.ip_address, "unknown");
        assert_eq!(
            record.location_data.unwrap().ip_address.as_deref(),
            Some("unknown")
        );
    }
}
