// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("URL cannot be empty")]
    EmptyUrl,

    #[error("This URL already exists in your vault: {0}")]
    DuplicateUrl(String),

    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    #[error("Entry id is ambiguous: {0}")]
    AmbiguousEntry(String),

    #[error("Invalid sort key: {0}")]
    InvalidSortKey(String),

    #[error("Invalid column: {0}")]
    InvalidColumn(String),

    #[error("Vocabulary operation failed: {0}")]
    Vocabulary(String),

    #[error("Cannot fetch title: {0}")]
    CannotFetchTitle(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    Other(String),
}

impl DomainError {
    /// Prefix the message with context; variants carrying structured data are folded into `Other`
    pub fn context<C: Into<String>>(self, context: C) -> Self {
        match self {
            DomainError::Vocabulary(msg) => {
                DomainError::Vocabulary(format!("{}: {}", context.into(), msg))
            }
            DomainError::CannotFetchTitle(msg) => {
                DomainError::CannotFetchTitle(format!("{}: {}", context.into(), msg))
            }
            DomainError::Serialization(msg) => {
                DomainError::Serialization(format!("{}: {}", context.into(), msg))
            }
            DomainError::Other(msg) => DomainError::Other(format!("{}: {}", context.into(), msg)),
            err => DomainError::Other(format!("{}: {}", context.into(), err)),
        }
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        DomainError::Serialization(e.to_string())
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
