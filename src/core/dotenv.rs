//! Dotenv file parsing and staging-file serialization.
//!
//! Accepted shape: `KEY=VALUE` per line, optionally prefixed with
//! `export `. Blank lines and `#` comment lines are skipped. Values
//! may be wrapped in one layer of single or double quotes. Inline
//! comments are stripped only when introduced by `" #"` so values
//! containing bare `#` (URL fragments, passwords) survive.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{Error, Result};

/// Parse a dotenv file into a key/value map.
///
/// Duplicate keys keep the last occurrence.
///
/// # Errors
///
/// Returns `Error::Io` if the file cannot be read, `Error::Parse` for
/// a line without `=` (citing the 1-based line number and the line
/// text), and `Error::EmptyKey` when the trimmed key is empty.
pub fn parse_file(path: impl AsRef<Path>) -> Result<BTreeMap<String, String>> {
    let contents = std::fs::read_to_string(path)?;
    parse_str(&contents)
}

/// Parse dotenv-formatted text. Same rules as [`parse_file`].
pub fn parse_str(contents: &str) -> Result<BTreeMap<String, String>> {
    let mut out = BTreeMap::new();

    for (idx, raw) in contents.lines().enumerate() {
        let line_no = idx + 1;
        let mut line = raw.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // allow: export KEY=VALUE
        if let Some(rest) = line.strip_prefix("export ") {
            line = rest.trim();
        }

        // Strip inline comment only when preceded by a space
        if let Some(pos) = line.find(" #") {
            line = line[..pos].trim();
        }

        let Some((key, value)) = line.split_once('=') else {
            return Err(Error::Parse {
                line: line_no,
                text: line.to_string(),
            });
        };

        let key = key.trim();
        let value = unquote(value.trim());

        if key.is_empty() {
            return Err(Error::EmptyKey { line: line_no });
        }

        out.insert(key.to_string(), value.to_string());
    }

    Ok(out)
}

/// Strip exactly one layer of matching surrounding quotes.
fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if (first == b'"' && last == b'"') || (first == b'\'' && last == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Serialize a map as `KEY=VALUE` lines, no quoting.
///
/// This is the staging-file format fed to `gh secret set -f` /
/// `gh variable set -f`.
pub fn serialize(entries: &BTreeMap<String, String>) -> String {
    let mut out = String::new();
    for (key, value) in entries {
        out.push_str(key);
        out.push('=');
        out.push_str(value);
        out.push('\n');
    }
    out
}
