use crate::change::{Change, ChangeSet};
use crate::model::Document;
use crate::pointer::{build_path, format_location};
use crate::walk;

pub fn detect_removed_endpoints(old: &Document, new: &Document, changes: &mut ChangeSet) {
    changes.extend(walk::paths(old).filter_map(|(path, item)| {
        if new.paths.contains_key(path) {
            None
        } else {
            let location = format_location(item, &build_path(&["paths", path]));
            Some(Change::major(format!("Endpoint removed: {path}"), location))
        }
    }));
}

pub fn detect_removed_operations(old: &Document, new: &Document, changes: &mut ChangeSet) {
    changes.extend(
        walk::paths_and_operations(old).filter_map(|(path, method, op, _)| {
            let new_item = new.paths.get(path)?;
            if new_item.operation(method).is_some() {
                return None;
            }
            let location = format_location(op, &build_path(&["paths", path, method.key()]));
            Some(Change::major(
                format!("Operation removed: {method} {path}"),
                location,
            ))
        }),
    );
}

pub fn detect_new_endpoints(old: &Document, new: &Document, changes: &mut ChangeSet) {
    changes.extend(walk::paths(new).filter_map(|(path, item)| {
        if old.paths.contains_key(path) {
            None
        } else {
            let location = format_location(item, &build_path(&["paths", path]));
            Some(Change::minor(format!("New endpoint added: {path}"), location))
        }
    }));
}

pub fn detect_new_operations(old: &Document, new: &Document, changes: &mut ChangeSet) {
    changes.extend(
        walk::paths_and_operations(new).filter_map(|(path, method, op, _)| {
            let old_item = old.paths.get(path)?;
            if old_item.operation(method).is_some() {
                return None;
            }
            let location = format_location(op, &build_path(&["paths", path, method.key()]));
            Some(Change::minor(
                format!("New operation added: {method} {path}"),
                location,
            ))
        }),
    );
}
