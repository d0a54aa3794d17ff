//! Splitting parsed entries into secrets and variables.
//!
//! A key is a secret when it starts with the configured prefix
//! (default `SECURED_`). The prefix is stripped from the remote
//! secret name unless `keep_prefix` is set; plain variables are
//! never touched by the prefix.

use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// Entries routed to their remote destinations, keyed by remote name.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Classified {
    pub secrets: BTreeMap<String, String>,
    pub variables: BTreeMap<String, String>,
}

impl Classified {
    /// True when there is nothing to push.
    pub fn is_empty(&self) -> bool {
        self.secrets.is_empty() && self.variables.is_empty()
    }
}

/// Classify parsed entries by the secret prefix.
///
/// Two local keys mapping to the same remote name (e.g. `SECURED_FOO`
/// and `FOO` with the default prefix) is almost always a
/// prefix-stripping accident, so it fails with
/// [`Error::DuplicateName`] instead of silently overwriting.
pub fn classify(
    entries: &BTreeMap<String, String>,
    prefix: &str,
    keep_prefix: bool,
) -> Result<Classified> {
    let mut out = Classified::default();
    // Remote name -> local key that produced it, across both categories.
    let mut origins: BTreeMap<String, String> = BTreeMap::new();

    for (key, value) in entries {
        let is_secret = key.starts_with(prefix);
        let name = if is_secret && !keep_prefix {
            key[prefix.len()..].to_string()
        } else {
            key.clone()
        };

        if let Some(first) = origins.insert(name.clone(), key.clone()) {
            return Err(Error::DuplicateName {
                name,
                first,
                second: key.clone(),
            });
        }

        if is_secret {
            out.secrets.insert(name, value.clone());
        } else {
            out.variables.insert(name, value.clone());
        }
    }

    Ok(out)
}
