//! # Command Layer
//!
//! This module contains the **core business logic** of rolo. Each command lives in its
//! own submodule and implements plain Rust functions over the domain types.
//!
//! ## Role and Responsibilities
//!
//! Commands:
//! - Validate raw input into domain types
//! - Operate on a [`RecordStore`](crate::store::RecordStore) passed in by the caller
//! - Return a structured [`CmdResult`] with affected records and messages
//! - Are completely UI-agnostic
//!
//! ## What Commands Do NOT Do
//!
//! - **Any terminal I/O**: no stdout, stderr or colours
//! - **Argument parsing**: that's the CLI layer's job
//! - **Exit codes**: return `Result`, let the caller decide
//!
//! ## Testing Strategy
//!
//! Command tests use [`InMemoryStore`](crate::store::memory::InMemoryStore) and
//! the store fixtures, and check both the returned messages and the store
//! contents afterwards.
//!
//! ## Command Modules
//!
//! - [`add`]: Add a person
//! - [`delete`]: Delete a person by full name
//! - [`find`]: List persons whose name contains a keyword
//! - [`list`]: List every person
//! - [`modify`]: Replace a person's record wholesale

use crate::model::PersonRecord;
use serde::Serialize;

pub mod add;
pub mod delete;
pub mod find;
pub mod list;
pub mod modify;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<PersonRecord>,
    pub listed_records: Vec<PersonRecord>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_records(mut self, records: Vec<PersonRecord>) -> Self {
        self.listed_records = records;
        self
    }

    /// True if any message was reported at error level.
    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}

pub(crate) fn persons_listed(count: usize) -> String {
    format!("{} persons listed!", count)
}
