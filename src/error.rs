use legalease_common::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LegalEaseError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Unknown document type: {0}")]
    UnknownDocumentType(String),

    #[error("Not available here: {0}")]
    InvalidAction(&'static str),

    #[error("{0} is already in progress")]
    OperationInFlight(&'static str),

    #[error("No file selected for upload")]
    NoCandidate,

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Save failed: {0}")]
    Save(String),

    #[error("Prompt error: {0}")]
    Prompt(String),

    #[error("{0}")]
    OperationFailed(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] legalease_common::Error),
}

pub type Result<T> = std::result::Result<T, LegalEaseError>;
