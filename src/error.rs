use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("not a git repository or git not installed: {0}")]
    NotARepository(String),
    #[error("version control error: {0}")]
    VersionControl(String),
    #[error("failed to encode language model request: {0}")]
    Request(#[source] serde_json::Error),
    #[error("failed to make API request: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("API request failed with status {status}: {body}")]
    Api {
        status: u16,
        body: serde_json::Value,
    },
    #[error("API request failed with status {status}, could not decode error body: {source}")]
    ApiErrorBody {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to decode language model response: {0}")]
    Envelope(#[source] serde_json::Error),
    #[error("language model response contained no choices or empty content")]
    EmptyResponse,
    #[error("failed to decode commit message from language model content: {0}")]
    CommitMessage(#[source] serde_json::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
