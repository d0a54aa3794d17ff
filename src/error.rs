use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("GitHub CLI (gh) not found on PATH")]
    GhNotFound,

    #[error("gh is not authenticated")]
    NotAuthenticated,

    #[error("unable to detect repository: {0}")]
    RepoDetect(String),

    #[error("invalid dotenv line {line}: {text:?}")]
    Parse { line: usize, text: String },

    #[error("empty key at line {line}")]
    EmptyKey { line: usize },

    #[error("keys {first:?} and {second:?} both map to remote name {name:?}")]
    DuplicateName {
        name: String,
        first: String,
        second: String,
    },

    #[error("{command} failed: {detail}")]
    Command { command: String, detail: String },

    #[error("parse gh list output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
