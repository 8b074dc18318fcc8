use super::OperationRef;
use crate::change::{Change, ChangeSet};
use crate::model::{Document, Operation, RefOr};
use crate::pointer::{build_path, format_location};
use crate::walk;

fn text(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn example(value: &Option<serde_json::Value>) -> Option<&serde_json::Value> {
    value.as_ref().filter(|v| match v {
        serde_json::Value::Null => false,
        serde_json::Value::String(s) => !s.is_empty(),
        _ => true,
    })
}

/// Text differs and is present on both sides.
fn reworded(old: &Option<String>, new: &Option<String>) -> bool {
    matches!((text(old), text(new)), (Some(a), Some(b)) if a != b)
}

/// Changes to the API description and to operation descriptions and
/// summaries. Text that is added or dropped is not reported.
pub fn detect_documentation_changes(old: &Document, new: &Document, changes: &mut ChangeSet) {
    if reworded(&old.info.description, &new.info.description) {
        changes.push(
            Change::patch("API description changed", build_path(&["info", "description"]))
                .unlocated(),
        );
    }

    for (path, method, old_op, new_op) in walk::shared_operations(old, new) {
        let op = OperationRef::new(path, method);
        let location = format_location(new_op, &op.location(&[]));

        if reworded(&old_op.description, &new_op.description) {
            changes.push(Change::patch(
                format!("Operation description changed: {op}"),
                location.clone(),
            ));
        }
        if reworded(&old_op.summary, &new_op.summary) {
            changes.push(Change::patch(
                format!("Operation summary changed: {op}"),
                location,
            ));
        }
    }
}

pub fn detect_example_changes(old: &Document, new: &Document, changes: &mut ChangeSet) {
    for (path, method, old_op, new_op) in walk::shared_operations(old, new) {
        detect_parameter_example_changes(OperationRef::new(path, method), old_op, new_op, changes);
    }
}

/// Parameters are paired by their position in the list, not by
/// `(name, location)`; a pair is only compared when the names agree.
fn detect_parameter_example_changes(
    op: OperationRef<'_>,
    old: &Operation,
    new: &Operation,
    changes: &mut ChangeSet,
) {
    let fallback = op.location(&["parameters"]);

    let pairs = old.parameters.iter().zip(&new.parameters);
    changes.extend(pairs.filter_map(|pair| match pair {
        (RefOr::Inline(old_p), RefOr::Inline(new_p)) if old_p.name == new_p.name => {
            match (example(&old_p.example), example(&new_p.example)) {
                (Some(a), Some(b)) if a != b => Some(Change::patch(
                    format!("Parameter example changed: {op} -> {}", old_p.name),
                    format_location(new_p, &fallback),
                )),
                _ => None,
            }
        }
        _ => None,
    }));
}
