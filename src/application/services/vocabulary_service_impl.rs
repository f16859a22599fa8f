// src/application/services/vocabulary_service_impl.rs
use std::sync::Arc;

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::services::vocabulary_service::VocabularyService;
use crate::domain::app_config::AppConfig;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::repositories::config_repository::ConfigRepository;
use tracing::{info, instrument};

#[derive(Debug)]
pub struct VocabularyServiceImpl<R: ConfigRepository> {
    repository: Arc<R>,
}

impl<R: ConfigRepository> VocabularyServiceImpl<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    fn update<F>(&self, change: F) -> ApplicationResult<AppConfig>
    where
        F: FnOnce(&mut AppConfig) -> DomainResult<()>,
    {
        let mut config = self.repository.load();
        change(&mut config).map_err(|e| match e {
            DomainError::Vocabulary(msg) => ApplicationError::Validation(msg),
            other => ApplicationError::Domain(other),
        })?;
        self.repository
            .save(&config)
            .map_err(|e| ApplicationError::from(e).context("Vocabulary not updated"))?;
        Ok(config)
    }
}

impl<R: ConfigRepository> VocabularyService for VocabularyServiceImpl<R> {
    #[instrument(skip(self), level = "debug")]
    fn get_config(&self) -> AppConfig {
        self.repository.load()
    }

    #[instrument(skip(self), level = "debug")]
    fn add_category(&self, name: &str) -> ApplicationResult<AppConfig> {
        let config = self.update(|c| c.add_category(name))?;
        info!("Added category '{}'", name.trim());
        Ok(config)
    }

    #[instrument(skip(self), level = "debug")]
    fn remove_category(&self, name: &str) -> ApplicationResult<AppConfig> {
        let config = self.update(|c| c.remove_category(name))?;
        info!("Removed category '{}'", name.trim());
        Ok(config)
    }

    #[instrument(skip(self), level = "debug")]
    fn add_tag(&self, name: &str) -> ApplicationResult<AppConfig> {
        let config = self.update(|c| c.add_tag(name))?;
        info!("Added tag '{}'", name.trim());
        Ok(config)
    }

    #[instrument(skip(self), level = "debug")]
    fn remove_tag(&self, name: &str) -> ApplicationResult<AppConfig> {
        let config = self.update(|c| c.remove_tag(name))?;
        info!("Removed tag '{}'", name.trim());
        Ok(config)
    }
}
