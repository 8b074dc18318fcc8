//! Backward-compatibility comparison of two documents.
//!
//! [`compare`] runs every comparator in a fixed sequence and collects their
//! output into one [`ChangeSet`]:
//!
//! 1. removals: endpoints, operations, then per operation the parameter,
//!    response and request body breaks, then schema breaks;
//! 2. additions: endpoints, operations, per-operation parameters and
//!    responses, schemas, schema properties;
//! 3. documentation and example edits.
//!
//! Within each bucket the order of the report follows this sequence and the
//! document order of paths, methods and schemas, so two runs over the same
//! inputs produce identical reports.

use std::fmt;
use tracing::debug;

use crate::change::ChangeSet;
use crate::model::{Document, Method};
use crate::pointer::build_path;
use crate::walk;

pub mod documentation;
pub mod endpoint;
pub mod parameter;
pub mod request_body;
pub mod response;
pub mod schema;

/// Identifies one operation when building messages and locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationRef<'a> {
    pub path: &'a str,
    pub method: Method,
}

impl<'a> OperationRef<'a> {
    pub fn new(path: &'a str, method: Method) -> Self {
        Self { path, method }
    }

    /// Manually built location below this operation, used when a node
    /// carries no position.
    pub fn location(&self, tail: &[&str]) -> String {
        let mut segments = vec!["paths", self.path, self.method.key()];
        segments.extend_from_slice(tail);
        build_path(&segments)
    }
}

impl fmt::Display for OperationRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

/// Compare two documents and classify every difference.
pub fn compare(old: &Document, new: &Document) -> ChangeSet {
    let mut changes = ChangeSet::new();

    endpoint::detect_removed_endpoints(old, new, &mut changes);
    endpoint::detect_removed_operations(old, new, &mut changes);
    for (path, method, old_op, new_op) in walk::shared_operations(old, new) {
        let op = OperationRef::new(path, method);
        parameter::detect_parameter_breaks(op, old_op, new_op, &mut changes);
        response::detect_removed_responses(op, old_op, new_op, &mut changes);
        request_body::detect_request_body_breaks(op, old_op, new_op, &mut changes);
    }
    schema::detect_schema_breaks(old, new, &mut changes);
    debug!(major = changes.major().len(), "breaking changes collected");

    endpoint::detect_new_endpoints(old, new, &mut changes);
    endpoint::detect_new_operations(old, new, &mut changes);
    for (path, method, old_op, new_op) in walk::shared_operations(old, new) {
        let op = OperationRef::new(path, method);
        parameter::detect_new_parameters(op, old_op, new_op, &mut changes);
        response::detect_new_responses(op, old_op, new_op, &mut changes);
    }
    schema::detect_new_schemas(old, new, &mut changes);
    schema::detect_new_properties(old, new, &mut changes);
    debug!(minor = changes.minor().len(), "additions collected");

    documentation::detect_documentation_changes(old, new, &mut changes);
    documentation::detect_example_changes(old, new, &mut changes);
    debug!(patch = changes.patch().len(), "documentation changes collected");

    changes
}
