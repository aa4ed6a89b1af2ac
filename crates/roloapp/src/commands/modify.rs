//! Replace a stored person with a freshly built record.
//!
//! The target is found by full name: the first stored record whose name equals
//! the replacement's name. It is then swapped out in place through
//! [`RecordStore::replace`]. A lone match that is already identical to the
//! replacement counts as "not found", so repeating a modify changes nothing.
//!
//! A changed name is not a rename. The new name matches no stored record, so
//! the command reports "not found" and leaves the store alone.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{PersonInput, PersonRecord};
use crate::store::{RecordStore, StoredRecord};
use tracing::{debug, info, warn};

fn success_message(name: &str) -> String {
    format!("{} has been modified successfully!", name)
}

fn not_found_message(name: &str) -> String {
    format!(
        "Person: {} does not exist at all. Please use the add command to add this person.",
        name
    )
}

fn edit_failure_message(removed: &str, replacement: &str) -> String {
    format!(
        "Wrong person was modified! Removed: {} for {}",
        removed, replacement
    )
}

/// A validated, ready-to-run modification.
#[derive(Debug, Clone)]
pub struct ModifyCommand {
    replacement: PersonRecord,
}

impl ModifyCommand {
    /// Validates `input` into the replacement record.
    /// Fails with a validation error naming the first malformed field.
    pub fn new(input: &PersonInput) -> Result<Self> {
        Ok(Self {
            replacement: input.build()?,
        })
    }

    pub fn replacement(&self) -> &PersonRecord {
        &self.replacement
    }

    fn find_target<'a, S: RecordStore>(&self, store: &'a S) -> Option<&'a StoredRecord> {
        let name = self.replacement.name().full_name();
        let mut matches = store
            .records()
            .iter()
            .filter(|stored| stored.record.name().full_name() == name);
        let first = matches.next()?;
        if first.record == self.replacement && matches.next().is_none() {
            return None;
        }
        Some(first)
    }

    /// Runs the modification. Never fails: every outcome is a message.
    pub fn execute<S: RecordStore>(&self, store: &mut S) -> CmdResult {
        let name = self.replacement.name().full_name();
        let mut result = CmdResult::default();

        let (target_id, target_name) = match self.find_target(store) {
            Some(stored) => (stored.id, stored.record.name().to_string()),
            None => {
                warn!(person = name, "no record to modify");
                result.add_message(CmdMessage::error(not_found_message(name)));
                return result;
            }
        };
        debug!(id = %target_id, person = name, "modify target found");

        match store.replace(&target_id, self.replacement.clone()) {
            Ok(_) => {
                info!(id = %target_id, person = name, "record modified");
                result.add_message(CmdMessage::success(success_message(name)));
                result.affected_records.push(self.replacement.clone());
            }
            Err(e) => {
                warn!(id = %target_id, person = name, error = %e, "record substitution failed");
                result.add_message(CmdMessage::error(edit_failure_message(
                    &target_name,
                    name,
                )));
            }
        }

        result
    }
}

pub fn run<S: RecordStore>(store: &mut S, input: &PersonInput) -> Result<CmdResult> {
    let command = ModifyCommand::new(input)?;
    Ok(command.execute(store))
}
