//! Read-only traversal of paths and operations in document order.

use crate::model::{Document, Method, Operation, PathItem};

/// Paths in the order they appear in the document.
pub fn paths(doc: &Document) -> impl Iterator<Item = (&str, &PathItem)> + Clone {
    doc.paths.iter().map(|(path, item)| (path.as_str(), item))
}

/// Operations present on `item`, in [`Method::ALL`] order.
pub fn operations(item: &PathItem) -> impl Iterator<Item = (Method, &Operation)> + Clone {
    Method::ALL
        .into_iter()
        .filter_map(move |method| item.operation(method).map(|op| (method, op)))
}

/// Every `(path, method, operation, path item)` of the document.
pub fn paths_and_operations(
    doc: &Document,
) -> impl Iterator<Item = (&str, Method, &Operation, &PathItem)> + Clone {
    paths(doc).flat_map(|(path, item)| {
        operations(item).map(move |(method, op)| (path, method, op, item))
    })
}

/// Operations present in both documents under the same path and method,
/// in the order of `old`.
pub(crate) fn shared_operations<'a>(
    old: &'a Document,
    new: &'a Document,
) -> impl Iterator<Item = (&'a str, Method, &'a Operation, &'a Operation)> {
    paths_and_operations(old).filter_map(move |(path, method, old_op, _)| {
        new.paths
            .get(path)
            .and_then(|item| item.operation(method))
            .map(|new_op| (path, method, old_op, new_op))
    })
}
