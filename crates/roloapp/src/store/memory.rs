use super::{RecordId, RecordStore, StoredRecord};
use crate::error::{Result, RoloError};
use crate::model::PersonRecord;
use std::collections::HashSet;
use tracing::debug;

/// Ordered in-memory record store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    records: Vec<StoredRecord>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from previously persisted entries.
    ///
    /// Rejects input that breaks the store invariants: repeated ids or
    /// repeated records.
    pub fn from_records(records: Vec<StoredRecord>) -> Result<Self> {
        let mut ids = HashSet::new();
        for (i, stored) in records.iter().enumerate() {
            if !ids.insert(stored.id) {
                return Err(RoloError::Store(format!("Duplicate record id {}", stored.id)));
            }
            if records[..i].iter().any(|prev| prev.record == stored.record) {
                return Err(RoloError::DuplicatePerson(
                    stored.record.name().to_string(),
                ));
            }
        }
        Ok(Self { records })
    }

    fn position(&self, id: &RecordId) -> Result<usize> {
        self.records
            .iter()
            .position(|stored| &stored.id == id)
            .ok_or(RoloError::RecordNotFound(*id))
    }
}

impl RecordStore for InMemoryStore {
    fn records(&self) -> &[StoredRecord] {
        &self.records
    }

    fn add(&mut self, record: PersonRecord) -> Result<RecordId> {
        if self.contains(&record) {
            return Err(RoloError::DuplicatePerson(record.name().to_string()));
        }
        let stored = StoredRecord::new(record);
        let id = stored.id;
        debug!(%id, person = %stored.record.name(), "record added");
        self.records.push(stored);
        Ok(id)
    }

    fn remove(&mut self, id: &RecordId) -> Result<PersonRecord> {
        let pos = self.position(id)?;
        let stored = self.records.remove(pos);
        debug!(%id, person = %stored.record.name(), "record removed");
        Ok(stored.record)
    }

    fn replace(&mut self, id: &RecordId, record: PersonRecord) -> Result<PersonRecord> {
        let pos = self.position(id)?;
        let clashes = self
            .records
            .iter()
            .enumerate()
            .any(|(i, stored)| i != pos && stored.record == record);
        if clashes {
            return Err(RoloError::DuplicatePerson(record.name().to_string()));
        }
        debug!(%id, person = %record.name(), "record replaced");
        Ok(std::mem::replace(&mut self.records[pos].record, record))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::PersonInput;

    pub fn person(name: &str, phone: &str) -> PersonInput {
        PersonInput::new(
            name,
            phone,
            "someone@example.com",
            "311, Clementi Ave 2, #02-25",
        )
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_person(self, name: &str, phone: &str) -> Self {
            self.with_input(person(name, phone))
        }

        pub fn with_input(mut self, input: PersonInput) -> Self {
            let record = input.build().unwrap();
            self.store.add(record).unwrap();
            self
        }

        pub fn with_people(mut self, count: usize) -> Self {
            for i in 0..count {
                let record = person(&format!("Person {}", i + 1), &format!("{}", 9000 + i))
                    .build()
                    .unwrap();
                self.store.add(record).unwrap();
            }
            self
        }
    }
}
