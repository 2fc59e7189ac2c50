//! Visit logging endpoints.
//!
//! POST /api/log-visit resolves the caller IP from forwarding headers,
//! merges it into the payload and appends the record to the hosted store.
//! GET /api/visits exists for offline inspection only.

use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::models::{VisitPayload, VisitRecord};
use crate::store::StoreError;
use crate::AppState;

const DEFAULT_VISITS_LIMIT: usize = 100;

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Store(err.to_string())
    }
}

/// Resolve the caller IP: first entry of `x-forwarded-for`, else
/// `x-real-ip`, else "unknown".
pub fn client_ip(headers: &HeaderMap) -> String {
    let forwarded = headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|value| !value.is_empty());
    if let Some(ip) = forwarded {
        return ip.to_string();
    }

    headers
        .get("x-real-ip")
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| "unknown".to_string())
}

/// POST /api/log-visit
pub async fn log_visit(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<VisitPayload>,
) -> Result<Json<Value>, AppError> {
    let ip = client_ip(&headers);
    let record = VisitRecord::from_payload(payload, ip);

    let stored = state.visits.insert_visit(record).await?;
    tracing::debug!(ip = %stored.ip_address, "visit logged");

    Ok(Json(json!({ "success": true, "data": stored })))
}

#[derive(Debug, Deserialize)]
pub struct VisitsQuery {
    pub limit: Option<usize>,
}

/// GET /api/visits
pub async fn list_visits(
    State(state): State<AppState>,
    Query(query): Query<VisitsQuery>,
) -> Result<Json<Vec<VisitRecord>>, AppError> {
    let limit = query.limit.unwrap_or(DEFAULT_VISITS_LIMIT);
    let visits = state.visits.list_visits(limit).await?;
    Ok(Json(visits))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(pairs: &[(&str, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_str(value).unwrap());
        }
        map
    }

    #[test]
    fn no_forwarding_headers_resolves_to_unknown() {
        assert_eq!(client_ip(&HeaderMap::new()), "unknown");
    }

    #[test]
    fn forwarded_for_takes_the_first_entry() {
        let map = headers(&[("x-forwarded-for", "203.0.113.7, 10.0.0.1, 10.0.0.2")]);
        assert_eq!(client_ip(&map), "203.0.113.7");
    }

    #[test]
    fn real_ip_is_the_fallback() {
        let map = headers(&[("x-real-ip", "198.51.100.4")]);
        assert_eq!(client_ip(&map), "198.51.100.4");

        let both = headers(&[
            ("x-forwarded-for", "203.0.113.7"),
            ("x-real-ip", "198.51.100.4"),
        ]);
        assert_eq!(client_ip(&both), "203.0.113.7");
    }

    #[test]
    fn empty_forwarded_for_falls_through() {
        let map = headers(&[("x-forwarded-for", ""), ("x-real-ip", "198.51.100.4")]);
        assert_eq!(client_ip(&map), "198.51.100.4");
    }
}
