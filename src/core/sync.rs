//! The sync sequence: upsert classified entries, then optionally
//! delete remote entries missing from the local file.
//!
//! Linear and fail-fast. The first error aborts the remaining steps;
//! completed steps are not rolled back.

use tracing::{debug, info};

use crate::core::agent::{Agent, ItemKind};
use crate::core::classify::Classified;
use crate::core::repo::Repo;
use crate::error::Result;

/// Target scope for one run.
#[derive(Debug, Clone, Copy)]
pub struct Target<'a> {
    pub repo: &'a Repo,
    pub env: Option<&'a str>,
}

/// Push classified entries to the remote store.
///
/// Ensures the environment exists first (when scoped to one), then
/// bulk-upserts each non-empty map.
pub fn upsert(agent: &dyn Agent, target: &Target, entries: &Classified) -> Result<()> {
    if let Some(env) = target.env {
        info!(env, "ensuring environment");
        agent.ensure_environment(target.repo, env)?;
    }

    if !entries.secrets.is_empty() {
        info!(count = entries.secrets.len(), "setting secrets");
        agent.set_values(ItemKind::Secret, target.repo, target.env, &entries.secrets)?;
    }
    if !entries.variables.is_empty() {
        info!(count = entries.variables.len(), "setting variables");
        agent.set_values(
            ItemKind::Variable,
            target.repo,
            target.env,
            &entries.variables,
        )?;
    }

    Ok(())
}

/// Delete remote entries absent from the desired maps.
///
/// Lists existing names per kind, diffs against the classified local
/// names, and deletes each extra one. Stops on the first delete
/// error. Returns the deleted (kind, name) pairs.
pub fn delete_missing(
    agent: &dyn Agent,
    target: &Target,
    entries: &Classified,
) -> Result<Vec<(ItemKind, String)>> {
    let mut deleted = Vec::new();

    for (kind, desired) in [
        (ItemKind::Secret, &entries.secrets),
        (ItemKind::Variable, &entries.variables),
    ] {
        let existing = agent.list_names(kind, target.repo, target.env)?;
        for name in existing {
            if desired.contains_key(&name) {
                continue;
            }
            debug!(kind = kind.noun(), name = %name, "deleting");
            agent.delete(kind, &name, target.repo, target.env)?;
            deleted.push((kind, name));
        }
    }

    Ok(deleted)
}
