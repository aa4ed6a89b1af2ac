use crate::commands::{persons_listed, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::RecordStore;

pub fn run<S: RecordStore>(store: &S) -> Result<CmdResult> {
    let records = store
        .records()
        .iter()
        .map(|stored| stored.record.clone())
        .collect();
    let mut result = CmdResult::default().with_listed_records(records);
    result.add_message(CmdMessage::info(persons_listed(result.listed_records.len())));
    Ok(result)
}
