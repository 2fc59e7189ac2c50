//! Visit store layer.
//!
//! Append-only access to the hosted `visits` table behind a trait so tests
//! can run against an in-memory implementation.

use async_trait::async_trait;

use crate::models::VisitRecord;

/// Errors raised by the hosted record store.
#[derive(Debug)]
pub enum StoreError {
    /// The request never completed
    Transport(String),
    /// The store answered with a non-success status
    Rejected { status: u16, message: String },
    /// The response body could not be decoded
    Decode(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Transport(msg) => write!(f, "store unreachable: {}", msg),
            StoreError::Rejected { status, message } => {
                write!(f, "store rejected request ({}): {}", status, message)
            }
            StoreError::Decode(msg) => write!(f, "malformed store response: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        StoreError::Transport(err.to_string())
    }
}

/// Append-only surface of the hosted `visits` table.
#[async_trait]
pub trait VisitStore: Send + Sync {
    /// Insert one visit and return the stored record.
    async fn insert_visit(&self, record: VisitRecord) -> Result<VisitRecord, StoreError>;

    /// Newest visits first, up to `limit`.
    async fn list_visits(&self, limit: usize) -> Result<Vec<VisitRecord>, StoreError>;
}

/// PostgREST-style implementation against the hosted store.
pub struct RestVisitStore {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RestVisitStore {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    fn table_url(&self, query: &str) -> String {
        format!("{}/rest/v1/visits{}", self.base_url, query)
    }

    async fn check(&self, response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status().as_u16();
        let message = response.text().await.unwrap_or_default();
        Err(StoreError::Rejected { status, message })
    }
}

#[async_trait]
impl VisitStore for RestVisitStore {
    async fn insert_visit(&self, record: VisitRecord) -> Result<VisitRecord, StoreError> {
        let response = self
            .http
            .post(self.table_url(""))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=representation")
            .json(&[record])
            .send()
            .await?;
        let response = self.check(response).await?;
        let mut rows: Vec<VisitRecord> = response
            .json()
            .await
            .map_err(|err| StoreError::Decode(err.to_string()))?;
        rows.pop()
            .ok_or_else(|| StoreError::Decode("empty representation".into()))
    }

    async fn list_visits(&self, limit: usize) -> Result<Vec<VisitRecord>, StoreError> {
        let response = self
            .http
            .get(self.table_url(&format!(
                "?select=*&order=created_at.desc&limit={}",
                limit
            )))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await?;
        let response = self.check(response).await?;
        response
            .json()
            .await
            .map_err(|err| StoreError::Decode(err.to_string()))
    }
}

#[cfg(test)]
pub mod test_support {
    //! In-memory stores for the integration tests.

    use std::sync::Mutex;

    use super::*;

    /// Append-only store backed by a Vec.
    #[derive(Default)]
    pub struct MemoryVisitStore {
        rows: Mutex<Vec<VisitRecord>>,
    }

    impl MemoryVisitStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn len(&self) -> usize {
            self.rows.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl VisitStore for MemoryVisitStore {
        async fn insert_visit(&self, record: VisitRecord) -> Result<VisitRecord, StoreError> {
            let mut rows = self.rows.lock().unwrap();
            let mut stored = record;
            stored.id = Some(format!("visit-{}", rows.len() + 1));
            stored.created_at = Some(chrono::Utc::now().to_rfc3339());
            rows.push(stored.clone());
            Ok(stored)
        }

        async fn list_visits(&self, limit: usize) -> Result<Vec<VisitRecord>, StoreError> {
            let rows = self.rows.lock().unwrap();
            Ok(rows.iter().rev().take(limit).cloned().collect())
        }
    }

    /// Store that fails every call, for the error-path tests.
    pub struct FailingVisitStore;

    #[async_trait]
    impl VisitStore for FailingVisitStore {
        async fn insert_visit(&self, _record: VisitRecord) -> Result<VisitRecord, StoreError> {
            Err(StoreError::Transport("store is down".into()))
        }

        async fn list_visits(&self, _limit: usize) -> Result<Vec<VisitRecord>, StoreError> {
            Err(StoreError::Transport("store is down".into()))
        }
    }
}
