//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for all rolo operations, regardless of the UI in front of it.
//!
//! The facade dispatches to the command modules and returns their structured
//! results. It holds no business logic and performs no terminal I/O.
//!
//! ## Generic Over RecordStore
//!
//! `RoloApi<S: RecordStore>` works with any store:
//! - Production: `RoloApi<FileStore>`
//! - Testing: `RoloApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::model::PersonInput;
use crate::store::RecordStore;

/// The main API facade for rolo operations.
pub struct RoloApi<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> RoloApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn add_person(&mut self, input: &PersonInput) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, input)
    }

    pub fn delete_person(&mut self, full_name: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, full_name)
    }

    pub fn find_persons<K: AsRef<str>>(&self, keywords: &[K]) -> Result<commands::CmdResult> {
        commands::find::run(&self.store, keywords)
    }

    pub fn list_persons(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn modify_person(&mut self, input: &PersonInput) -> Result<commands::CmdResult> {
        commands::modify::run(&mut self.store, input)
    }
}
