use anyhow::{Context, bail};
use apicompat::{ChangeSet, compare, compare_sources, git, loader, report};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Check OpenAPI specifications for backward compatibility breaking changes.
///
/// Exits with status 1 when breaking (MAJOR) changes are found.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Old spec file, or old revision with --git
    old: String,
    /// New spec file, or new revision with --git
    new: String,
    /// Git repository to read both revisions from
    #[arg(short, long, value_name = "REPO")]
    git: Option<PathBuf>,
    /// Spec file path inside the repository (required with --git)
    #[arg(short, long, value_name = "PATH")]
    file: Option<String>,
    /// Output format
    #[arg(long, value_enum, default_value = "text", env = "APICOMPAT_FORMAT")]
    format: OutputFormat,
}

fn run_file_mode(old: &str, new: &str) -> anyhow::Result<(ChangeSet, String)> {
    let (old_path, new_path) = (Path::new(old), Path::new(new));
    if !old_path.exists() {
        bail!("Old spec file not found: {old}");
    }
    if !new_path.exists() {
        bail!("New spec file not found: {new}");
    }

    let old_doc = loader::load_file(old_path)?;
    let new_doc = loader::load_file(new_path)?;
    let header = format!("Old: {old}\nNew: {new}\n");
    Ok((compare(&old_doc, &new_doc), header))
}

fn run_git_mode(
    repo: &Path,
    old: &str,
    new: &str,
    file: Option<&str>,
) -> anyhow::Result<(ChangeSet, String)> {
    if !repo.is_dir() {
        bail!("Git repository not found: {}", repo.display());
    }

    git::validate_revision(repo, old)?;
    git::validate_revision(repo, new)?;

    let Some(file) = file else {
        let candidates = git::find_spec_files(repo, new).unwrap_or_else(|e| {
            debug!(error = %e, "could not list spec files");
            Vec::new()
        });
        debug!(?candidates, "spec files at new revision");
        let hint = if candidates.is_empty() {
            String::new()
        } else {
            format!(" Candidates: {}", candidates.join(", "))
        };
        bail!(
            "The --file option is required when using git mode. \
             Specify the path to the OpenAPI spec file within the repository.{hint}"
        );
    };

    let old_content = git::file_at_revision(repo, old, file)?;
    let new_content = git::file_at_revision(repo, new, file)?;
    let changes = compare_sources(&old_content, &new_content)?;
    let header = format!(
        "Repository: {}\nOld commit: {old}\nNew commit: {new}\nFile: {file}\n",
        repo.display()
    );
    Ok((changes, header))
}

fn run(cli: Cli) -> anyhow::Result<bool> {
    let (changes, header) = match &cli.git {
        Some(repo) => run_git_mode(repo, &cli.old, &cli.new, cli.file.as_deref())?,
        None => run_file_mode(&cli.old, &cli.new)?,
    };
    info!(
        major = changes.major().len(),
        minor = changes.minor().len(),
        patch = changes.patch().len(),
        "comparison finished"
    );

    match cli.format {
        OutputFormat::Text => {
            println!("OpenAPI Compatibility Check\n\n{header}");
            print!("{}", report::render_text(&changes));
        }
        OutputFormat::Json => {
            let json = report::render_json(&changes).context("serialize report")?;
            println!("{json}");
        }
    }

    Ok(!changes.has_major())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
