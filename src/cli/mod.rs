//! Command-line interface.

pub mod output;
pub mod sync;

use clap::{CommandFactory, Parser};
use clap_complete::Shell;

use crate::error::Result;

/// Sync a local .env file into GitHub Actions configuration.
#[derive(Parser)]
#[command(
    name = "gh-env-sync",
    about = "Sync .env to GitHub Actions variables and secrets (repo or environment scope)",
    version
)]
pub struct Cli {
    /// GitHub Actions environment name (repository scope when omitted)
    #[arg(short = 'e', long)]
    pub environment: Option<String>,

    /// dotenv file path
    #[arg(short = 'f', long, default_value = ".env")]
    pub file: String,

    /// prefix used to detect secrets
    #[arg(short = 's', long, default_value = "SECURED_")]
    pub secret_prefix: String,

    /// delete remote secrets/variables not present in the dotenv file
    #[arg(short = 'd', long)]
    pub delete_missing: bool,

    /// print actions without executing
    #[arg(long)]
    pub dry_run: bool,

    /// skip confirmation prompts
    #[arg(long)]
    pub yes: bool,

    /// repository in owner/repo format (auto-detected from the git remote)
    #[arg(short = 'R', long, env = "GH_REPO")]
    pub repo: Option<String>,

    /// keep the secret prefix in the remote secret name (default strips it)
    #[arg(long)]
    pub keep_prefix: bool,

    /// verbose output
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// generate shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

/// Execute the CLI.
pub fn execute(cli: Cli) -> Result<()> {
    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
        return Ok(());
    }

    sync::execute(&cli)
}
