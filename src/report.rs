//! Rendering a [`ChangeSet`] for people and for machines.

use serde::Serialize;
use std::fmt::Write;

use crate::change::{Change, ChangeSet};

/// The three buckets as plain strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub major: Vec<String>,
    pub minor: Vec<String>,
    pub patch: Vec<String>,
}

impl From<&ChangeSet> for Report {
    fn from(changes: &ChangeSet) -> Self {
        fn lines(bucket: &[Change]) -> Vec<String> {
            bucket.iter().map(Change::to_string).collect()
        }
        Self {
            major: lines(changes.major()),
            minor: lines(changes.minor()),
            patch: lines(changes.patch()),
        }
    }
}

/// Recommended semantic version bump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Bump {
    Major,
    Minor,
    Patch,
    None,
}

impl Bump {
    pub fn for_changes(changes: &ChangeSet) -> Self {
        if changes.has_major() {
            Bump::Major
        } else if changes.has_minor() {
            Bump::Minor
        } else if changes.has_patch() {
            Bump::Patch
        } else {
            Bump::None
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    report: &'a Report,
    bump: Bump,
}

pub fn render_json(changes: &ChangeSet) -> serde_json::Result<String> {
    let report = Report::from(changes);
    serde_json::to_string_pretty(&JsonReport {
        report: &report,
        bump: Bump::for_changes(changes),
    })
}

fn section(out: &mut String, title: &str, bucket: &[Change]) {
    if bucket.is_empty() {
        return;
    }
    let _ = writeln!(out, "{title} ({})", bucket.len());
    for change in bucket {
        let _ = writeln!(out, " * {change}");
    }
    out.push('\n');
}

/// Text report listing each non-empty bucket and the recommended bump.
pub fn render_text(changes: &ChangeSet) -> String {
    let mut out = String::new();

    if changes.is_empty() {
        out.push_str("No changes detected between the two specifications!\n");
        return out;
    }

    let _ = writeln!(out, "Total changes detected: {}\n", changes.len());
    section(&mut out, "MAJOR - Breaking Changes", changes.major());
    section(
        &mut out,
        "MINOR - Backward Compatible Additions",
        changes.minor(),
    );
    section(
        &mut out,
        "PATCH - Documentation/Metadata Changes",
        changes.patch(),
    );

    out.push_str("Version Bump Recommendation\n");
    let advice = match Bump::for_changes(changes) {
        Bump::Major => [
            "MAJOR version bump required (X.0.0)",
            "Breaking changes detected that are incompatible with previous versions.",
            "Example: 1.2.3 -> 2.0.0",
        ],
        Bump::Minor => [
            "MINOR version bump recommended (x.Y.0)",
            "New backward-compatible functionality added.",
            "Example: 1.2.3 -> 1.3.0",
        ],
        Bump::Patch => [
            "PATCH version bump recommended (x.y.Z)",
            "Only documentation or metadata changes detected.",
            "Example: 1.2.3 -> 1.2.4",
        ],
        Bump::None => return out,
    };
    for line in advice {
        let _ = writeln!(out, "{line}");
    }
    out.push_str("\nAccording to Semantic Versioning (https://semver.org/)\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ChangeSet {
        let mut changes = ChangeSet::new();
        changes.push(Change::minor("New endpoint added: /orders", "paths./orders"));
        changes.push(Change::patch("Operation summary changed: GET /orders", "paths./orders.get"));
        changes
    }

    #[test]
    fn report_keeps_bucket_order() {
        let mut changes = sample();
        changes.push(Change::minor("New schema added: Order", "components.schemas.Order"));
        let report = Report::from(&changes);
        assert!(report.major.is_empty());
        assert_eq!(
            report.minor,
            [
                "New endpoint added: /orders (at: paths./orders)",
                "New schema added: Order (at: components.schemas.Order)",
            ]
        );
        assert_eq!(
            report.patch,
            ["Operation summary changed: GET /orders (at: paths./orders.get)"]
        );
    }

    #[test]
    fn bump_follows_highest_severity() {
        assert_eq!(Bump::for_changes(&ChangeSet::new()), Bump::None);
        assert_eq!(Bump::for_changes(&sample()), Bump::Minor);

        let mut patch_only = ChangeSet::new();
        patch_only.push(Change::patch("Operation summary changed: GET /orders", "paths./orders.get"));
        assert_eq!(Bump::for_changes(&patch_only), Bump::Patch);

        let mut changes = sample();
        changes.push(Change::major("Endpoint removed: /users", "paths./users"));
        assert_eq!(Bump::for_changes(&changes), Bump::Major);
    }

    #[test]
    fn text_lists_non_empty_buckets() {
        let text = render_text(&sample());
        assert!(text.contains("Total changes detected: 2"));
        assert!(!text.contains("MAJOR - Breaking Changes"));
        assert!(text.contains("MINOR - Backward Compatible Additions (1)"));
        assert!(text.contains(" * New endpoint added: /orders (at: paths./orders)"));
        assert!(text.contains("PATCH - Documentation/Metadata Changes (1)"));
        assert!(text.contains("MINOR version bump recommended (x.Y.0)"));
    }

    #[test]
    fn text_for_no_changes() {
        assert_eq!(
            render_text(&ChangeSet::new()),
            "No changes detected between the two specifications!\n"
        );
    }

    #[test]
    fn json_includes_buckets_and_bump() {
        let json = render_json(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["bump"], "minor");
        assert_eq!(value["major"], serde_json::json!([]));
        assert_eq!(value["minor"][0], "New endpoint added: /orders (at: paths./orders)");
    }
}
