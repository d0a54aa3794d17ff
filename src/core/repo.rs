//! Repository identity: owner/name pair and git remote detection.

use std::fmt;
use std::process::Command;
use std::str::FromStr;

use tracing::debug;

use crate::error::{Error, Result};

/// A GitHub repository, `owner/name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repo {
    pub owner: String,
    pub name: String,
}

impl fmt::Display for Repo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl FromStr for Repo {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split('/').collect();
        match parts.as_slice() {
            [owner, name] if !owner.is_empty() && !name.is_empty() => Ok(Repo {
                owner: owner.to_string(),
                name: name.to_string(),
            }),
            _ => Err(Error::RepoDetect(format!(
                "expected owner/repo, got {s:?}"
            ))),
        }
    }
}

/// Parse a GitHub remote URL into owner/repo.
///
/// Supports:
/// - `git@github.com:owner/repo.git`
/// - `https://github.com/owner/repo.git`
/// - `https://github.com/owner/repo`
pub fn parse_remote_url(url: &str) -> Result<Repo> {
    let url = url.trim();
    let url = url.strip_suffix(".git").unwrap_or(url);

    let path = if let Some(rest) = url.strip_prefix("git@github.com:") {
        rest
    } else if let Some(rest) = url.strip_prefix("https://github.com/") {
        rest
    } else {
        return Err(Error::RepoDetect(format!("unsupported origin url: {url}")));
    };

    path.parse()
}

/// Read the default remote URL via git and extract owner/repo.
pub fn detect() -> Result<Repo> {
    let output = Command::new("git")
        .args(["remote", "get-url", "origin"])
        .output()?;

    if !output.status.success() {
        return Err(Error::RepoDetect(format!(
            "git remote get-url origin failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }

    let url = String::from_utf8_lossy(&output.stdout).trim().to_string();
    debug!(url = %url, "detected origin remote");
    parse_remote_url(&url)
}
