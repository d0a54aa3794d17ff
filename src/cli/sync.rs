//! The sync command: parse the dotenv file, classify entries, push
//! them to GitHub, and optionally prune remote entries missing from
//! the file.

use tracing::info;

use crate::cli::{output, Cli};
use crate::core::repo::Repo;
use crate::core::sync::{delete_missing, upsert, Target};
use crate::core::{classify, dotenv, gh};
use crate::error::Result;

/// Fallback dotenv file path.
const DEFAULT_FILE: &str = ".env";

/// Fallback secret-detection prefix.
const DEFAULT_SECRET_PREFIX: &str = "SECURED_";

/// Run the sync sequence. Fail-fast: the first error aborts the run.
pub fn execute(cli: &Cli) -> Result<()> {
    // clap supplies defaults for omitted flags; explicit empty values
    // fall back too.
    let file = non_empty_or(&cli.file, DEFAULT_FILE);
    let prefix = non_empty_or(&cli.secret_prefix, DEFAULT_SECRET_PREFIX);

    gh::require_installed()?;
    gh::require_auth()?;

    let repo: Repo = match &cli.repo {
        Some(spec) => spec.parse()?,
        None => crate::core::repo::detect()?,
    };

    info!(repo = %repo, file, "syncing");

    let entries = dotenv::parse_file(file)?;
    let classified = classify::classify(&entries, prefix, cli.keep_prefix)?;

    if cli.verbose {
        output::kv("repo", &repo);
        output::kv("file", output::path(file));
        match &cli.environment {
            Some(env) => output::kv("scope", format!("environment {env}")),
            None => output::kv("scope", "repository"),
        }
        output::kv("secrets", classified.secrets.len());
        output::kv("variables", classified.variables.len());
    }

    let agent = gh::GhCli::new(cli.dry_run, cli.verbose);
    let target = Target {
        repo: &repo,
        env: cli.environment.as_deref(),
    };

    upsert(&agent, &target, &classified)?;

    if cli.delete_missing {
        // Dry-run performs no deletion, so no gate is needed there.
        if !cli.yes && !cli.dry_run {
            output::warn("--delete-missing will remove remote secrets/variables absent from the file");
            output::hint(&format!("pass {} to skip this prompt", output::cmd("--yes")));
            let confirmed = dialoguer::Confirm::new()
                .with_prompt("Continue?")
                .default(false)
                .interact()?;
            if !confirmed {
                output::warn("aborted");
                return Ok(());
            }
        }

        let deleted = delete_missing(&agent, &target, &classified)?;
        if deleted.is_empty() {
            output::dimmed("nothing to delete");
        } else if !cli.dry_run {
            for (kind, name) in &deleted {
                output::list_item(&format!("deleted {} {}", kind.noun(), name));
            }
        }
    }

    output::success(&format!(
        "synced {} secrets and {} variables to {}",
        classified.secrets.len(),
        classified.variables.len(),
        repo
    ));
    Ok(())
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}
