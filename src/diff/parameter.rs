use super::OperationRef;
use crate::change::{Change, ChangeSet};
use crate::model::{Operation, Parameter, RefOr};
use crate::pointer::format_location;

fn inline_params(params: &[RefOr<Parameter>]) -> impl Iterator<Item = &Parameter> + Clone {
    params.iter().filter_map(RefOr::as_inline)
}

fn find<'a>(params: &'a [RefOr<Parameter>], wanted: &Parameter) -> Option<&'a Parameter> {
    inline_params(params).find(|p| p.key() == wanted.key())
}

/// Removed required parameters and optional parameters that became required.
///
/// Parameters are matched on `(name, location)`; `$ref` parameters are
/// ignored on both sides.
pub fn detect_parameter_breaks(
    op: OperationRef<'_>,
    old: &Operation,
    new: &Operation,
    changes: &mut ChangeSet,
) {
    let fallback = op.location(&["parameters"]);

    changes.extend(inline_params(&old.parameters).filter_map(|old_p| {
        match find(&new.parameters, old_p) {
            Some(new_p) if !old_p.required && new_p.required => Some(Change::major(
                format!(
                    "Parameter became required: {op} -> {} ({})",
                    old_p.name, old_p.location
                ),
                format_location(new_p, &fallback),
            )),
            Some(_) => None,
            None if old_p.required => Some(Change::major(
                format!(
                    "Required parameter removed: {op} -> {} ({})",
                    old_p.name, old_p.location
                ),
                format_location(old_p, &fallback),
            )),
            None => None,
        }
    }));
}

/// Parameters introduced as optional. A new required parameter is not
/// reported here.
pub fn detect_new_parameters(
    op: OperationRef<'_>,
    old: &Operation,
    new: &Operation,
    changes: &mut ChangeSet,
) {
    let fallback = op.location(&["parameters"]);

    changes.extend(inline_params(&new.parameters).filter_map(|new_p| {
        if find(&old.parameters, new_p).is_some() || new_p.required {
            return None;
        }
        Some(Change::minor(
            format!(
                "New optional parameter added: {op} -> {} ({})",
                new_p.name, new_p.location
            ),
            format_location(new_p, &fallback),
        ))
    }));
}
