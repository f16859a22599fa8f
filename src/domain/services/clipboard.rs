// src/domain/services/clipboard.rs
use crate::domain::error::DomainResult;

pub trait ClipboardService: std::fmt::Debug + Send + Sync {
    fn copy_to_clipboard(&self, text: &str) -> DomainResult<()>;
}
