use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::PersonInput;
use crate::store::RecordStore;
use tracing::info;

pub fn run<S: RecordStore>(store: &mut S, input: &PersonInput) -> Result<CmdResult> {
    let record = input.build()?;
    let id = store.add(record.clone())?;
    info!(%id, person = %record.name(), "person added");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "New person added: {}",
        record.name()
    )));
    result.affected_records.push(record);
    Ok(result)
}
