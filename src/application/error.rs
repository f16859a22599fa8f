// src/application/error.rs
use crate::domain::error::DomainError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("{0}")]
    Other(String),
}

impl ApplicationError {
    pub fn context<C: Into<String>>(self, context: C) -> Self {
        match self {
            ApplicationError::Other(msg) => {
                ApplicationError::Other(format!("{}: {}", context.into(), msg))
            }
            ApplicationError::Domain(err) => ApplicationError::Domain(err.context(context)),
            ApplicationError::Validation(msg) => {
                ApplicationError::Validation(format!("{}: {}", context.into(), msg))
            }
        }
    }

    /// True if the operation was rejected because the URL is already stored
    pub fn is_duplicate(&self) -> bool {
        matches!(self, ApplicationError::Domain(DomainError::DuplicateUrl(_)))
    }
}

impl From<std::io::Error> for ApplicationError {
    fn from(err: std::io::Error) -> Self {
        ApplicationError::Domain(DomainError::Io(err))
    }
}

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_duplicate_domain_error_then_is_duplicate() {
        let err: ApplicationError = DomainError::DuplicateUrl("https://a.example".into()).into();
        assert!(err.is_duplicate());
        assert!(!ApplicationError::Validation("x".into()).is_duplicate());
    }

    #[test]
    fn given_validation_error_when_context_then_prefixed() {
        let err = ApplicationError::Validation("empty".into()).context("add");
        assert_eq!(err.to_string(), "Validation failed: add: empty");
    }
}
