//! Human-readable locations for document nodes.
//!
//! Positions are stored as JSON pointers (RFC 6901) and rendered as dotted
//! paths: `/paths/~1users/get` becomes `paths./users.get`.

use crate::model::Positioned;

/// Dotted location of `node`, or `fallback` when the node has no position.
pub fn format_location<N: Positioned + ?Sized>(node: &N, fallback: &str) -> String {
    match node.position() {
        Some(pointer) => readable(pointer),
        None => fallback.to_string(),
    }
}

/// Joins the non-empty segments with dots.
pub fn build_path(segments: &[&str]) -> String {
    segments
        .iter()
        .filter(|s| !s.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(".")
}

fn readable(pointer: &str) -> String {
    let dotted = pointer
        .trim_start_matches('/')
        .replace('/', ".")
        .replace("~1", "/")
        .replace("~0", "~");
    if dotted.is_empty() {
        "root".to_string()
    } else {
        dotted
    }
}

/// Appends one escaped reference token to a JSON pointer.
pub(crate) fn child(parent: &str, segment: &str) -> String {
    let escaped = segment.replace('~', "~0").replace('/', "~1");
    format!("{parent}/{escaped}")
}
