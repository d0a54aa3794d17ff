//! gh-env-sync - Sync .env files to GitHub Actions secrets and variables.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── output        # Terminal output helpers
//! │   └── sync          # The sync command (orchestrator)
//! └── core/             # Core library components
//!     ├── dotenv        # .env parsing and staging-file serialization
//!     ├── classify      # Secret/variable split by key prefix
//!     ├── repo          # owner/repo identity + git remote detection
//!     ├── agent         # Remote store trait (test-double seam)
//!     ├── gh            # GitHub CLI agent implementation
//!     └── sync          # Upsert / delete-missing sequence
//! ```
//!
//! All remote mutation is delegated to the authenticated `gh` CLI.
//! Keys matching a configurable prefix (default `SECURED_`) become
//! Actions secrets; everything else becomes plain variables.

pub mod cli;
pub mod core;
pub mod error;
