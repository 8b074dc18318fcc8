//! Reading API descriptions from disk or from raw text.

use openapiv3::OpenAPI;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::model::Document;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid YAML: {0}")]
    Yaml(#[source] serde_yml::Error),
    #[error("invalid JSON: {0}")]
    Json(#[source] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Yaml,
}

impl Format {
    /// Format implied by the file extension, if any.
    fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("json") {
            Some(Format::Json)
        } else if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") {
            Some(Format::Yaml)
        } else {
            None
        }
    }

    fn parse(self, content: &str) -> Result<OpenAPI, ParseError> {
        match self {
            Format::Json => serde_json::from_str(content).map_err(ParseError::Json),
            Format::Yaml => serde_yml::from_str(content).map_err(ParseError::Yaml),
        }
    }
}

/// JSON first, then YAML. The YAML error is the one reported.
fn sniff(content: &str) -> Result<OpenAPI, ParseError> {
    Format::Json
        .parse(content)
        .or_else(|_| Format::Yaml.parse(content))
}

/// Parse raw text of unknown format into a [`Document`].
pub fn parse_document(content: &str) -> Result<Document, ParseError> {
    sniff(content).map(|spec| Document::from_openapi(&spec))
}

/// Read and parse a document, choosing the format from the file extension
/// when it is known.
pub fn load_file(path: &Path) -> Result<Document, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let parsed = match Format::from_path(path) {
        Some(format) => format.parse(&content),
        None => sniff(&content),
    };
    let spec = parsed.map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), paths = spec.paths.paths.len(), "loaded document");
    Ok(Document::from_openapi(&spec))
}
