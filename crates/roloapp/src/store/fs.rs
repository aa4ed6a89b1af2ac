use super::memory::InMemoryStore;
use super::{RecordId, RecordStore, StoredRecord};
use crate::error::{Result, RoloError};
use crate::model::PersonRecord;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Default)]
struct DataFile {
    #[serde(default)]
    records: Vec<StoredRecord>,
}

/// Record store persisted to a single JSON file.
///
/// Every mutation runs against a copy of the in-memory collection, the copy
/// is written out, and only then does it become the live state. A failed
/// write leaves both memory and disk as they were.
pub struct FileStore {
    path: PathBuf,
    inner: InMemoryStore,
}

impl FileStore {
    /// Opens the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let inner = if path.is_file() {
            let content = fs::read_to_string(&path).map_err(RoloError::Io)?;
            let data: DataFile =
                serde_json::from_str(&content).map_err(RoloError::Serialization)?;
            InMemoryStore::from_records(data.records)?
        } else {
            InMemoryStore::new()
        };
        debug!(path = %path.display(), count = inner.len(), "store opened");
        Ok(Self { path, inner })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, store: &InMemoryStore) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(RoloError::Io)?;
            }
        }

        let data = DataFile {
            records: store.records().to_vec(),
        };
        let content = serde_json::to_string_pretty(&data).map_err(RoloError::Serialization)?;

        // Atomic write
        let tmp_name = format!(".addressbook-{}.tmp", Uuid::new_v4());
        let tmp_path = match self.path.parent() {
            Some(parent) => parent.join(tmp_name),
            None => PathBuf::from(tmp_name),
        };
        fs::write(&tmp_path, content).map_err(RoloError::Io)?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(RoloError::Io(e));
        }

        info!(path = %self.path.display(), count = store.len(), "store saved");
        Ok(())
    }

    fn commit<T>(&mut self, apply: impl FnOnce(&mut InMemoryStore) -> Result<T>) -> Result<T> {
        let mut next = self.inner.clone();
        let out = apply(&mut next)?;
        self.persist(&next)?;
        self.inner = next;
        Ok(out)
    }
}

impl RecordStore for FileStore {
    fn records(&self) -> &[StoredRecord] {
        self.inner.records()
    }

    fn add(&mut self, record: PersonRecord) -> Result<RecordId> {
        self.commit(|store| store.add(record))
    }

    fn remove(&mut self, id: &RecordId) -> Result<PersonRecord> {
        self.commit(|store| store.remove(id))
    }

    fn replace(&mut self, id: &RecordId, record: PersonRecord) -> Result<PersonRecord> {
        self.commit(|store| store.replace(id, record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::person;
    use tempfile::TempDir;

    #[test]
    fn test_open_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path().join("addressbook.json")).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_mutations_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("addressbook.json");

        let mut store = FileStore::open(&path).unwrap();
        let john = store.add(person("John Doe", "98765432").build().unwrap()).unwrap();
        store.add(person("Jane Doe", "12345678").build().unwrap()).unwrap();
        store
            .replace(&john, person("John Doe", "91234567").build().unwrap())
            .unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.len(), 2);
        assert_eq!(reopened.records()[0].id, john);
        assert_eq!(reopened.records()[0].record.phone().value(), "91234567");
        assert_eq!(reopened.records()[1].record.name().full_name(), "Jane Doe");
    }

    #[test]
    fn test_remove_is_persisted() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("addressbook.json");

        let mut store = FileStore::open(&path).unwrap();
        let id = store.add(person("John Doe", "1").build().unwrap()).unwrap();
        store.remove(&id).unwrap();

        assert!(FileStore::open(&path).unwrap().is_empty());
    }

    #[test]
    fn test_failed_write_leaves_store_unchanged() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let mut store = FileStore::open(blocker.join("addressbook.json")).unwrap();
        let result = store.add(person("John Doe", "1").build().unwrap());

        assert!(matches!(result, Err(RoloError::Io(_))));
        assert!(store.is_empty());
    }

    #[test]
    fn test_failed_rename_cleans_up_temp_file() {
        let dir = TempDir::new().unwrap();
        // A non-empty directory where the data file should be
        let path = dir.path().join("addressbook.json");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "").unwrap();

        let mut store = FileStore::open(&path).unwrap();
        let result = store.add(person("John Doe", "1").build().unwrap());

        assert!(matches!(result, Err(RoloError::Io(_))));
        assert!(store.is_empty());
        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .filter(|name| name.to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty(), "temp files left: {:?}", leftovers);
    }

    #[test]
    fn test_failed_mutation_does_not_write() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("addressbook.json");

        let mut store = FileStore::open(&path).unwrap();
        let result = store.remove(&Uuid::new_v4());

        assert!(matches!(result, Err(RoloError::RecordNotFound(_))));
        assert!(!path.exists());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("addressbook.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            FileStore::open(&path),
            Err(RoloError::Serialization(_))
        ));
    }

    #[test]
    fn test_invalid_field_in_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("addressbook.json");
        let json = r#"{"records": [{
            "id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
            "record": {
                "name": "John_Doe",
                "phone": {"value": "1"},
                "email": {"value": "j@x.com"},
                "address": {"value": "Somewhere"}
            }
        }]}"#;
        fs::write(&path, json).unwrap();

        assert!(FileStore::open(&path).is_err());
    }
}
