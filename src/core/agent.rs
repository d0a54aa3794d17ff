//! Remote store capability.
//!
//! A narrow seam over the GitHub CLI so the sync sequence can run
//! against a recording fake in unit tests, without spawning any
//! external process.

use std::collections::BTreeMap;

use crate::core::repo::Repo;
use crate::error::Result;

/// Kind of remote item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Secret,
    Variable,
}

impl ItemKind {
    /// The gh subcommand noun for this kind.
    pub fn noun(self) -> &'static str {
        match self {
            ItemKind::Secret => "secret",
            ItemKind::Variable => "variable",
        }
    }
}

/// Remote operations the sync sequence needs.
///
/// Implemented by [`GhCli`](crate::core::gh::GhCli) in production.
/// All operations are scoped to a repository, and to an environment
/// when `env` is present.
pub trait Agent {
    /// Idempotently create or update a deployment environment.
    fn ensure_environment(&self, repo: &Repo, env: &str) -> Result<()>;

    /// Bulk-upsert values of the given kind from a key/value map.
    fn set_values(
        &self,
        kind: ItemKind,
        repo: &Repo,
        env: Option<&str>,
        values: &BTreeMap<String, String>,
    ) -> Result<()>;

    /// List existing remote names of the given kind.
    fn list_names(&self, kind: ItemKind, repo: &Repo, env: Option<&str>) -> Result<Vec<String>>;

    /// Delete one remote item by name.
    fn delete(&self, kind: ItemKind, name: &str, repo: &Repo, env: Option<&str>) -> Result<()>;
}
