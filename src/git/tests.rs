use super::*;
use std::fs;
use tempfile::TempDir;

fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

fn run_git(root: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(["-c", "user.name=test", "-c", "user.email=test@example.com"])
        .args(args)
        .current_dir(root)
        .output()
        .expect("run git");
    assert!(output.status.success(), "git {:?} failed", args);
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Repository with two commits touching `api/openapi.yaml`.
fn repo_with_history() -> (TempDir, String, String) {
    let temp = TempDir::new().expect("temp dir");
    let root = temp.path();
    run_git(root, &["init", "-q"]);

    fs::create_dir_all(root.join("api")).unwrap();
    fs::write(root.join("api/openapi.yaml"), "version: one\n").unwrap();
    fs::write(root.join("README.md"), "docs\n").unwrap();
    run_git(root, &["add", "."]);
    run_git(root, &["commit", "-q", "-m", "first"]);
    let first = run_git(root, &["rev-parse", "HEAD"]);

    fs::write(root.join("api/openapi.yaml"), "version: two\n").unwrap();
    fs::write(root.join("api/extra.JSON"), "{}\n").unwrap();
    run_git(root, &["add", "."]);
    run_git(root, &["commit", "-q", "-m", "second"]);
    let second = run_git(root, &["rev-parse", "HEAD"]);

    (temp, first, second)
}

#[test]
fn spec_file_extensions() {
    assert!(is_spec_file("openapi.yaml"));
    assert!(is_spec_file("spec/api.YML"));
    assert!(is_spec_file("api.json"));
    assert!(!is_spec_file("README.md"));
    assert!(!is_spec_file("yaml"));
}

#[test]
fn validates_known_and_unknown_revisions() {
    if !git_available() {
        return;
    }
    let (temp, first, _) = repo_with_history();
    assert!(validate_revision(temp.path(), &first).is_ok());

    let err = validate_revision(temp.path(), "deadbeefdeadbeef").unwrap_err();
    assert!(matches!(err, GitError::InvalidRevision(ref rev) if rev == "deadbeefdeadbeef"));
    assert_eq!(err.to_string(), "Invalid commit ID: deadbeefdeadbeef");
}

#[test]
fn reads_file_at_each_revision() {
    if !git_available() {
        return;
    }
    let (temp, first, second) = repo_with_history();
    assert_eq!(
        file_at_revision(temp.path(), &first, "api/openapi.yaml").unwrap(),
        "version: one\n"
    );
    assert_eq!(
        file_at_revision(temp.path(), &second, "api/openapi.yaml").unwrap(),
        "version: two\n"
    );
}

#[test]
fn missing_file_reports_git_error_text() {
    if !git_available() {
        return;
    }
    let (temp, first, _) = repo_with_history();
    let err = file_at_revision(temp.path(), &first, "api/extra.JSON").unwrap_err();
    match &err {
        GitError::FileAtRevision { file, rev, stderr } => {
            assert_eq!(file, "api/extra.JSON");
            assert_eq!(rev, &first);
            assert!(!stderr.is_empty());
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("Failed to get file \"api/extra.JSON\""));
}

#[test]
fn lists_spec_files_at_revision() {
    if !git_available() {
        return;
    }
    let (temp, first, second) = repo_with_history();
    assert_eq!(
        find_spec_files(temp.path(), &first).unwrap(),
        ["api/openapi.yaml"]
    );
    assert_eq!(
        find_spec_files(temp.path(), &second).unwrap(),
        ["api/extra.JSON", "api/openapi.yaml"]
    );
    assert!(matches!(
        find_spec_files(temp.path(), "nope"),
        Err(GitError::ListFiles { .. })
    ));
}
