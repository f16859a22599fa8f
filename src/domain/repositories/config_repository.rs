// src/domain/repositories/config_repository.rs
use crate::domain::app_config::AppConfig;
use crate::domain::error::DomainResult;

/// Repository trait for the category/tag vocabulary
pub trait ConfigRepository: std::fmt::Debug + Send + Sync {
    /// Load the vocabulary; a missing store is initialized with the default vocabulary
    fn load(&self) -> AppConfig;

    fn save(&self, config: &AppConfig) -> DomainResult<()>;
}
