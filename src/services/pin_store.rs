//! Pin Store Contract
//!
//! CRUD against the hosted `pins` table. Implementations do not cache and
//! do not retry; last write wins.

use async_trait::async_trait;
use serde::Serialize;

use crate::models::Pin;

/// Reserved row id the backing store keeps out of bulk deletes
pub const SENTINEL_PIN_ID: &str = "00000000-0000-0000-0000-000000000000";

/// Errors raised by the hosted record store
#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    /// The request never completed (network, serialization of the request)
    Network(String),
    /// The store answered with a non-success status
    Rejected { status: u16, message: String },
    /// No row matched the targeted id
    NotFound(String),
    /// The response body could not be decoded
    Decode(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Network(msg) => write!(f, "store unreachable: {}", msg),
            StoreError::Rejected { status, message } => {
                write!(f, "store rejected request ({}): {}", status, message)
            }
            StoreError::NotFound(id) => write!(f, "no pin with id {}", id),
            StoreError::Decode(msg) => write!(f, "malformed store response: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

pub type StoreResult<T> = Result<T, StoreError>;

/// Partial update payload. Coordinates are immutable after creation, so they
/// are deliberately absent here.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PinFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignees: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_families: Option<Vec<String>>,
}

/// CRUD surface of the hosted `pins` table
#[async_trait(?Send)]
pub trait PinStore {
    /// All pins, newest first. Never returns partial results.
    async fn list_pins(&self) -> StoreResult<Vec<Pin>>;

    /// Persist a new pin and return it with its server-assigned id.
    async fn create_pin(
        &self,
        title: &str,
        lng: f64,
        lat: f64,
        assignees: &[String],
        target_families: &[String],
    ) -> StoreResult<Pin>;

    /// Partial update of title/assignees/target families.
    async fn update_pin(&self, id: &str, fields: PinFields) -> StoreResult<Pin>;

    /// Delete one pin by id.
    async fn delete_pin(&self, id: &str) -> StoreResult<()>;

    /// Delete every pin except the reserved sentinel row.
    async fn delete_all_pins(&self) -> StoreResult<()>;
}
