use super::OperationRef;
use crate::change::{Change, ChangeSet};
use crate::model::Operation;
use crate::pointer::format_location;

// Only the set of status codes is compared; bodies are left alone.

pub fn detect_removed_responses(
    op: OperationRef<'_>,
    old: &Operation,
    new: &Operation,
    changes: &mut ChangeSet,
) {
    changes.extend(old.responses.iter().filter_map(|(code, response)| {
        if new.responses.contains_key(code) {
            return None;
        }
        Some(Change::major(
            format!("Response removed: {op} -> {code}"),
            format_location(response, &op.location(&["responses", code.as_str()])),
        ))
    }));
}

pub fn detect_new_responses(
    op: OperationRef<'_>,
    old: &Operation,
    new: &Operation,
    changes: &mut ChangeSet,
) {
    changes.extend(new.responses.iter().filter_map(|(code, response)| {
        if old.responses.contains_key(code) {
            return None;
        }
        Some(Change::minor(
            format!("New response code added: {op} -> {code}"),
            format_location(response, &op.location(&["responses", code.as_str()])),
        ))
    }));
}
