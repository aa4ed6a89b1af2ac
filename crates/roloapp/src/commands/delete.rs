use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RoloError};
use crate::model::normalize_name;
use crate::store::RecordStore;
use tracing::info;

/// Deletes the first person whose full name is exactly `full_name`.
pub fn run<S: RecordStore>(store: &mut S, full_name: &str) -> Result<CmdResult> {
    let full_name = normalize_name(full_name);
    let id = store
        .find_by_name(&full_name)
        .map(|stored| stored.id)
        .ok_or_else(|| RoloError::PersonNotFound(full_name.clone()))?;

    let removed = store.remove(&id)?;
    info!(%id, person = %removed.name(), "person deleted");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Deleted Person: {}",
        removed.name()
    )));
    result.affected_records.push(removed);
    Ok(result)
}
