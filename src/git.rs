//! Fetching document text from a git repository at a given revision.
//!
//! Shells out to the `git` CLI; nothing here is used by the comparison
//! itself.

use std::path::Path;
use std::process::{Command, Output};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum GitError {
    #[error("Failed to run git: {0} (is git installed?)")]
    Spawn(#[source] std::io::Error),
    #[error("Invalid commit ID: {0}")]
    InvalidRevision(String),
    #[error("Failed to list files in commit \"{rev}\": {stderr}")]
    ListFiles { rev: String, stderr: String },
    #[error("Failed to get file \"{file}\" from commit \"{rev}\": {stderr}")]
    FileAtRevision {
        file: String,
        rev: String,
        stderr: String,
    },
}

fn git(repo: &Path, args: &[&str]) -> Result<Output, GitError> {
    debug!(repo = %repo.display(), ?args, "running git");
    Command::new("git")
        .args(args)
        .current_dir(repo)
        .output()
        .map_err(GitError::Spawn)
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).trim().to_string()
}

/// Fails unless `rev` names an object in `repo`.
pub fn validate_revision(repo: &Path, rev: &str) -> Result<(), GitError> {
    let output = git(repo, &["cat-file", "-t", rev])?;
    if output.status.success() {
        Ok(())
    } else {
        Err(GitError::InvalidRevision(rev.to_string()))
    }
}

/// Content of `file` as of `rev`.
pub fn file_at_revision(repo: &Path, rev: &str, file: &str) -> Result<String, GitError> {
    let output = git(repo, &["show", &format!("{rev}:{file}")])?;
    if !output.status.success() {
        return Err(GitError::FileAtRevision {
            file: file.to_string(),
            rev: rev.to_string(),
            stderr: stderr(&output),
        });
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

fn is_spec_file(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    [".yaml", ".yml", ".json"]
        .iter()
        .any(|ext| lower.ends_with(ext))
}

/// Files at `rev` that could hold an API description (`.yaml`, `.yml`, `.json`).
pub fn find_spec_files(repo: &Path, rev: &str) -> Result<Vec<String>, GitError> {
    let output = git(repo, &["ls-tree", "-r", "--name-only", rev])?;
    if !output.status.success() {
        return Err(GitError::ListFiles {
            rev: rev.to_string(),
            stderr: stderr(&output),
        });
    }
    Ok(String::from_utf8_lossy(&output.stdout)
        .lines()
        .filter(|line| is_spec_file(line))
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests;
