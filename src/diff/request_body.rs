use super::OperationRef;
use crate::change::{Change, ChangeSet};
use crate::model::{Operation, RefOr};
use crate::pointer::format_location;

pub fn detect_request_body_breaks(
    op: OperationRef<'_>,
    old: &Operation,
    new: &Operation,
    changes: &mut ChangeSet,
) {
    let Some(RefOr::Inline(old_body)) = &old.request_body else {
        return;
    };
    let fallback = op.location(&["requestBody"]);

    match &new.request_body {
        None if old_body.required => changes.push(Change::major(
            format!("Required request body removed: {op}"),
            format_location(old_body, &fallback),
        )),
        Some(RefOr::Inline(new_body)) if !old_body.required && new_body.required => {
            changes.push(Change::major(
                format!("Request body became required: {op}"),
                format_location(new_body, &fallback),
            ))
        }
        _ => {}
    }
}
