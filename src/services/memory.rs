//! In-Memory Pin Store
//!
//! Test double mirroring the hosted store's observable behavior: ordered
//! select (newest first), insert-returning-record, update-by-id, delete,
//! and delete-all-except-sentinel.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use super::pin_store::{PinFields, PinStore, StoreError, StoreResult, SENTINEL_PIN_ID};
use crate::models::Pin;

#[derive(Default)]
pub struct MemoryPinStore {
    /// Rows in insertion order (oldest first)
    rows: RefCell<Vec<Pin>>,
    next_id: Cell<u64>,
    /// When set, every call fails with a network error
    offline: Cell<bool>,
}

impl MemoryPinStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.set(offline);
    }

    pub fn ids(&self) -> Vec<String> {
        self.rows.borrow().iter().map(|p| p.id.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.borrow().len()
    }

    pub fn get(&self, id: &str) -> Option<Pin> {
        self.rows.borrow().iter().find(|p| p.id == id).cloned()
    }

    fn guard(&self) -> StoreResult<()> {
        if self.offline.get() {
            Err(StoreError::Network("offline".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait(?Send)]
impl PinStore for MemoryPinStore {
    async fn list_pins(&self) -> StoreResult<Vec<Pin>> {
        self.guard()?;
        let mut pins = self.rows.borrow().clone();
        pins.reverse();
        Ok(pins)
    }

    async fn create_pin(
        &self,
        title: &str,
        lng: f64,
        lat: f64,
        assignees: &[String],
        target_families: &[String],
    ) -> StoreResult<Pin> {
        self.guard()?;
        let n = self.next_id.get() + 1;
        self.next_id.set(n);
        let pin = Pin {
            id: format!("pin-{}", n),
            title: title.to_string(),
            lng,
            lat,
            assignees: assignees.to_vec(),
            target_families: target_families.to_vec(),
        };
        self.rows.borrow_mut().push(pin.clone());
        Ok(pin)
    }

    async fn update_pin(&self, id: &str, fields: PinFields) -> StoreResult<Pin> {
        self.guard()?;
        let mut rows = self.rows.borrow_mut();
        let row = rows
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        if let Some(title) = fields.title {
            row.title = title;
        }
        if let Some(assignees) = fields.assignees {
            row.assignees = assignees;
        }
        if let Some(families) = fields.target_families {
            row.target_families = families;
        }
        Ok(row.clone())
    }

    async fn delete_pin(&self, id: &str) -> StoreResult<()> {
        self.guard()?;
        self.rows.borrow_mut().retain(|p| p.id != id);
        Ok(())
    }

    async fn delete_all_pins(&self) -> StoreResult<()> {
        self.guard()?;
        self.rows.borrow_mut().retain(|p| p.id == SENTINEL_PIN_ID);
        Ok(())
    }
}
