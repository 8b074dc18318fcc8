//! Backward-compatibility checks for OpenAPI descriptions.
//!
//! Every difference between an old and a new document is classified by its
//! semantic-versioning impact: breaking (MAJOR), additive (MINOR) or
//! documentation only (PATCH).
//!
//! ```no_run
//! let old = std::fs::read_to_string("old.yaml").unwrap();
//! let new = std::fs::read_to_string("new.yaml").unwrap();
//! let changes = apicompat::compare_sources(&old, &new).unwrap();
//! if changes.has_major() {
//!     eprintln!("{}", apicompat::report::render_text(&changes));
//! }
//! ```

pub mod change;
pub mod diff;
pub mod git;
pub mod loader;
pub mod model;
pub mod pointer;
pub mod report;
pub mod walk;

use thiserror::Error;

pub use change::{Change, ChangeSet, Severity};
pub use diff::compare;
pub use model::Document;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to parse OpenAPI spec: {0}")]
    Parse(#[from] loader::ParseError),
    #[error(transparent)]
    Load(#[from] loader::LoadError),
    #[error(transparent)]
    Git(#[from] git::GitError),
}

/// Parse two raw documents and compare them. Nothing is compared unless
/// both parse.
pub fn compare_sources(old: &str, new: &str) -> Result<ChangeSet, Error> {
    let old = loader::parse_document(old)?;
    let new = loader::parse_document(new)?;
    Ok(compare(&old, &new))
}
