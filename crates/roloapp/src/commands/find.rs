use crate::commands::{persons_listed, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::RecordStore;
use std::collections::HashSet;
use tracing::debug;

/// Lists persons whose name contains any of `keywords` as a whole word.
/// Matching is case-sensitive.
pub fn run<S: RecordStore, K: AsRef<str>>(store: &S, keywords: &[K]) -> Result<CmdResult> {
    let keywords: HashSet<&str> = keywords
        .iter()
        .flat_map(|k| k.as_ref().split_whitespace())
        .collect();

    let matches: Vec<_> = store
        .records()
        .iter()
        .filter(|stored| stored.record.name().words().any(|w| keywords.contains(w)))
        .map(|stored| stored.record.clone())
        .collect();
    debug!(keywords = keywords.len(), found = matches.len(), "find");

    let mut result = CmdResult::default().with_listed_records(matches);
    result.add_message(CmdMessage::info(persons_listed(result.listed_records.len())));
    Ok(result)
}
