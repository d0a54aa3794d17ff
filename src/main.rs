//! gh-env-sync - Sync .env files to GitHub Actions secrets and variables.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use gh_env_sync::cli::output;
use gh_env_sync::cli::{execute, Cli};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("GH_ENV_SYNC_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("gh_env_sync=debug")
        } else {
            EnvFilter::new("gh_env_sync=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    if let Err(e) = execute(cli) {
        // Format error with suggestion if available
        let suggestion = match &e {
            gh_env_sync::error::Error::GhNotFound => {
                Some("install the GitHub CLI: https://cli.github.com/")
            }
            gh_env_sync::error::Error::NotAuthenticated => Some("run: gh auth login"),
            gh_env_sync::error::Error::RepoDetect(_) => {
                Some("pass the repository explicitly: -R owner/repo")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
