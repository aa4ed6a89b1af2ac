use crate::api::RoloApi;
use crate::init::{initialize_in, RoloContext};
use crate::store::fs::FileStore;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    // We keep _temp_dir to ensure the directory is not dropped until the test is done
    pub _temp_dir: TempDir,
    pub ctx: RoloContext,
    pub root: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        let ctx = initialize_in(&root, None).expect("failed to initialize context");
        Self {
            _temp_dir: temp_dir,
            ctx,
            root,
        }
    }

    pub fn api(&mut self) -> &mut RoloApi<FileStore> {
        &mut self.ctx.api
    }

    /// Reopens the data file from disk, as a fresh process would.
    pub fn reopen(&self) -> FileStore {
        FileStore::open(self.ctx.api.store().path()).expect("failed to reopen store")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::person;
    use crate::store::RecordStore;

    #[test]
    fn session_is_persisted_between_runs() {
        let mut env = TestEnv::new();
        env.api().add_person(&person("John Doe", "98765432")).unwrap();
        env.api()
            .modify_person(&person("John Doe", "91234567"))
            .unwrap();

        let store = env.reopen();
        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0].record.phone().value(), "91234567");
        assert!(env.root.join("addressbook.json").exists());
    }
}
