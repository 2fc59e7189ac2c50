//! REST Pin Store
//!
//! PostgREST-style access to the hosted `pins` table.

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Serialize;

use super::pin_store::{PinFields, PinStore, StoreError, StoreResult, SENTINEL_PIN_ID};
use crate::models::{Pin, PinRecord};

/// Insert payload for a new row; the store fills id and timestamps
#[derive(Serialize)]
struct NewPinRecord<'a> {
    title: &'a str,
    lng: f64,
    lat: f64,
    assignees: &'a [String],
    target_families: &'a [String],
}

pub struct RestPinStore {
    base_url: String,
    api_key: String,
}

impl RestPinStore {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    fn table_url(&self, query: &str) -> String {
        format!("{}/rest/v1/pins{}", self.base_url, query)
    }

    fn authed(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("apikey", &self.api_key)
            .header("Authorization", &format!("Bearer {}", self.api_key))
    }

    async fn check(&self, response: Response) -> StoreResult<Response> {
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        let message = response.text().await.unwrap_or_default();
        Err(StoreError::Rejected { status, message })
    }

    /// Decode a `return=representation` body and pull out the single row.
    async fn single_row(&self, response: Response, id_hint: &str) -> StoreResult<Pin> {
        let rows: Vec<PinRecord> = response
            .json()
            .await
            .map_err(|err| StoreError::Decode(err.to_string()))?;
        rows.into_iter()
            .next()
            .map(Pin::from)
            .ok_or_else(|| StoreError::NotFound(id_hint.to_string()))
    }
}

#[async_trait(?Send)]
impl PinStore for RestPinStore {
    async fn list_pins(&self) -> StoreResult<Vec<Pin>> {
        let request = self
            .authed(Request::get(
                &self.table_url("?select=*&order=created_at.desc"),
            ))
            .build()
            .map_err(|err| StoreError::Network(err.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|err| StoreError::Network(err.to_string()))?;
        let response = self.check(response).await?;
        let rows: Vec<PinRecord> = response
            .json()
            .await
            .map_err(|err| StoreError::Decode(err.to_string()))?;
        Ok(rows.into_iter().map(Pin::from).collect())
    }

    async fn create_pin(
        &self,
        title: &str,
        lng: f64,
        lat: f64,
        assignees: &[String],
        target_families: &[String],
    ) -> StoreResult<Pin> {
        let body = NewPinRecord {
            title,
            lng,
            lat,
            assignees,
            target_families,
        };
        let request = self
            .authed(Request::post(&self.table_url("")))
            .header("Prefer", "return=representation")
            .json(&body)
            .map_err(|err| StoreError::Network(err.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|err| StoreError::Network(err.to_string()))?;
        let response = self.check(response).await?;
        self.single_row(response, "<new>").await
    }

    async fn update_pin(&self, id: &str, fields: PinFields) -> StoreResult<Pin> {
        let request = self
            .authed(Request::patch(&self.table_url(&format!("?id=eq.{}", id))))
            .header("Prefer", "return=representation")
            .json(&fields)
            .map_err(|err| StoreError::Network(err.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|err| StoreError::Network(err.to_string()))?;
        let response = self.check(response).await?;
        // Zero matched rows come back as an empty representation
        self.single_row(response, id).await
    }

    async fn delete_pin(&self, id: &str) -> StoreResult<()> {
        let request = self
            .authed(Request::delete(&self.table_url(&format!("?id=eq.{}", id))))
            .build()
            .map_err(|err| StoreError::Network(err.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|err| StoreError::Network(err.to_string()))?;
        self.check(response).await.map(|_| ())
    }

    async fn delete_all_pins(&self) -> StoreResult<()> {
        let request = self
            .authed(Request::delete(&self.table_url(&format!(
                "?id=neq.{}",
                SENTINEL_PIN_ID
            ))))
            .build()
            .map_err(|err| StoreError::Network(err.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|err| StoreError::Network(err.to_string()))?;
        self.check(response).await.map(|_| ())
    }
}
