//! # Rolo Architecture
//!
//! Rolo is a **UI-agnostic contact book library**. The `rolo` binary is one
//! client of it; nothing in here knows about terminals.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (crates/rolo)                                          │
//! │  - Parses arguments, renders output, sets up logging        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation, lookup, substitution                         │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecordStore trait                                        │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Records Are Replaced, Never Edited
//!
//! A [`model::PersonRecord`] has no setters. The `modify` command builds a
//! complete new record, finds the stored person with the same full name, and
//! swaps the new record into that slot in one step.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`PersonRecord`, `Name`, contact fields)
//! - [`tags`]: Tags and tag sets
//! - [`validation`]: Field validators
//! - [`config`]: Configuration management
//! - [`init`]: Context setup for UI clients
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod store;
pub mod tags;
pub mod validation;

#[cfg(test)]
pub mod test_utils;
