//! GitHub CLI agent.
//!
//! Every remote mutation is delegated to the authenticated `gh`
//! binary. Bulk upserts stage values in a temporary dotenv-formatted
//! file which is removed on every exit path, including invocation
//! failure.

use std::collections::BTreeMap;
use std::io::Write;
use std::process::Command;

use serde::Deserialize;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::core::agent::{Agent, ItemKind};
use crate::core::dotenv;
use crate::core::repo::Repo;
use crate::error::{Error, Result};

/// Binary name of the GitHub CLI.
pub const GH_BIN: &str = "gh";

/// Fail unless the GitHub CLI is on PATH.
pub fn require_installed() -> Result<()> {
    which::which(GH_BIN).map_err(|_| Error::GhNotFound)?;
    Ok(())
}

/// Fail unless `gh auth status` reports an authenticated session.
pub fn require_auth() -> Result<()> {
    let output = Command::new(GH_BIN).args(["auth", "status"]).output()?;
    if !output.status.success() {
        debug!(
            stderr = %String::from_utf8_lossy(&output.stderr).trim(),
            "gh auth status failed"
        );
        return Err(Error::NotAuthenticated);
    }
    Ok(())
}

/// GitHub CLI agent, holding the immutable invocation flags for one run.
///
/// With `dry_run` set, mutating calls print the would-be invocation and
/// perform nothing; read-only calls (listing) still execute. With
/// `verbose` set, invocations are printed before executing.
#[derive(Debug, Clone, Copy, Default)]
pub struct GhCli {
    dry_run: bool,
    verbose: bool,
}

impl GhCli {
    pub fn new(dry_run: bool, verbose: bool) -> Self {
        Self { dry_run, verbose }
    }

    /// Run a mutating gh invocation, honoring dry-run and verbose.
    fn run_mutating(&self, args: &[&str]) -> Result<()> {
        if self.dry_run {
            println!("[dry-run] {} {}", GH_BIN, args.join(" "));
            return Ok(());
        }
        if self.verbose {
            println!("[run] {} {}", GH_BIN, args.join(" "));
        }
        run_capture(args)?;
        Ok(())
    }

    /// Run a read-only gh invocation and capture stdout.
    fn run_query(&self, args: &[&str]) -> Result<Vec<u8>> {
        if self.verbose {
            println!("[run] {} {}", GH_BIN, args.join(" "));
        }
        run_capture(args)
    }
}

/// Run gh capturing stdout, wrapping failures with the exit status
/// and captured stderr.
fn run_capture(args: &[&str]) -> Result<Vec<u8>> {
    debug!(?args, "invoking gh");
    let output = Command::new(GH_BIN).args(args).output()?;
    if !output.status.success() {
        return Err(Error::Command {
            command: format!("{} {}", GH_BIN, args.join(" ")),
            detail: format!(
                "{}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            ),
        });
    }
    Ok(output.stdout)
}

/// Write values to a temporary dotenv-formatted staging file.
///
/// Created with owner-only permissions; deleted when the handle drops.
fn staging_file(values: &BTreeMap<String, String>) -> Result<NamedTempFile> {
    let mut file = tempfile::Builder::new()
        .prefix("gh-env-sync_")
        .suffix(".env")
        .tempfile()?;
    file.write_all(dotenv::serialize(values).as_bytes())?;
    file.flush()?;
    Ok(file)
}

#[derive(Deserialize)]
struct NameItem {
    name: String,
}

impl Agent for GhCli {
    fn ensure_environment(&self, repo: &Repo, env: &str) -> Result<()> {
        // PUT /repos/{owner}/{repo}/environments/{environment_name}
        let endpoint = format!("repos/{repo}/environments/{env}");
        self.run_mutating(&["api", "-X", "PUT", &endpoint])
    }

    fn set_values(
        &self,
        kind: ItemKind,
        repo: &Repo,
        env: Option<&str>,
        values: &BTreeMap<String, String>,
    ) -> Result<()> {
        // Staging file is removed when `file` drops, even if the
        // invocation fails.
        let file = staging_file(values)?;
        let path = file.path().to_string_lossy().into_owned();
        let repo = repo.to_string();

        let mut args = vec![kind.noun(), "set", "-f", path.as_str(), "-R", repo.as_str()];
        if let Some(env) = env {
            args.extend(["--env", env]);
        }
        self.run_mutating(&args)
    }

    fn list_names(&self, kind: ItemKind, repo: &Repo, env: Option<&str>) -> Result<Vec<String>> {
        let repo = repo.to_string();
        let mut args = vec![kind.noun(), "list", "--json", "name", "-R", repo.as_str()];
        if let Some(env) = env {
            args.extend(["--env", env]);
        }

        let stdout = self.run_query(&args)?;
        let items: Vec<NameItem> = serde_json::from_slice(&stdout)?;
        Ok(items.into_iter().map(|it| it.name).collect())
    }

    fn delete(&self, kind: ItemKind, name: &str, repo: &Repo, env: Option<&str>) -> Result<()> {
        let repo = repo.to_string();
        let mut args = vec![kind.noun(), "delete", name, "-R", repo.as_str()];
        if let Some(env) = env {
            args.extend(["--env", env]);
        }
        self.run_mutating(&args)
    }
}
