//! # Storage Layer
//!
//! This module defines the storage abstraction for rolo. The [`RecordStore`]
//! trait lets commands work against any ordered collection of unique person
//! records.
//!
//! ## Identity
//!
//! Each record receives a stable [`RecordId`] when it is added. Lookups by
//! name are a convenience on top of that: once a command has found its target
//! it addresses the record by id, so the name is never used to decide *which*
//! slot a mutation touches.
//!
//! ## Uniqueness
//!
//! Uniqueness is full-record equality, not name equality. Two people called
//! "John Doe" with different phone numbers may coexist; two identical records
//! may not. [`RecordStore::find_by_name`] therefore returns the *first* match
//! in insertion order.
//!
//! ## Atomic Replace
//!
//! [`RecordStore::replace`] swaps a record in place. It validates everything
//! before touching the collection, so there is no state in which the old
//! record has been removed but the new one is missing.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: a plain ordered `Vec`. Used directly in tests.
//! - [`fs::FileStore`]: an in-memory store persisted to a JSON file after
//!   every mutation.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── rolo.toml           # Configuration (optional)
//! └── addressbook.json    # {"records": [{"id": ..., "record": {...}}, ...]}
//! ```

use crate::error::Result;
use crate::model::PersonRecord;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod fs;
pub mod memory;

/// Stable surrogate identifier assigned at insertion.
pub type RecordId = Uuid;

/// A record together with the id the store assigned to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRecord {
    pub id: RecordId,
    pub record: PersonRecord,
}

impl StoredRecord {
    pub fn new(record: PersonRecord) -> Self {
        Self {
            id: Uuid::new_v4(),
            record,
        }
    }
}

/// Abstract interface for person record storage.
pub trait RecordStore {
    /// All records in insertion order.
    fn records(&self) -> &[StoredRecord];

    /// Insert a record. Fails with `DuplicatePerson` if an equal record exists.
    fn add(&mut self, record: PersonRecord) -> Result<RecordId>;

    /// Remove a record by id. Fails with `RecordNotFound` if absent.
    fn remove(&mut self, id: &RecordId) -> Result<PersonRecord>;

    /// Replace the record stored under `id`, keeping its position and id.
    ///
    /// Fails with `RecordNotFound` if the id is absent, or `DuplicatePerson`
    /// if the replacement equals another stored record. On failure the store
    /// is left untouched. Returns the record that was replaced.
    fn replace(&mut self, id: &RecordId, record: PersonRecord) -> Result<PersonRecord>;

    /// First record whose full name equals `full_name` exactly.
    fn find_by_name(&self, full_name: &str) -> Option<&StoredRecord> {
        self.records()
            .iter()
            .find(|stored| stored.record.name().full_name() == full_name)
    }

    fn get(&self, id: &RecordId) -> Option<&StoredRecord> {
        self.records().iter().find(|stored| &stored.id == id)
    }

    fn contains(&self, record: &PersonRecord) -> bool {
        self.records().iter().any(|stored| &stored.record == record)
    }

    fn len(&self) -> usize {
        self.records().len()
    }

    fn is_empty(&self) -> bool {
        self.records().is_empty()
    }
}
