// src/application/services/vocabulary_service.rs
use crate::application::error::ApplicationResult;
use crate::domain::app_config::AppConfig;
use std::fmt::Debug;

/// Service interface for the category and tag vocabulary.
///
/// Changes affect only the lists offered for new and edited entries; stored entries are
/// never rewritten.
pub trait VocabularyService: Send + Sync + Debug {
    fn get_config(&self) -> AppConfig;

    fn add_category(&self, name: &str) -> ApplicationResult<AppConfig>;

    fn remove_category(&self, name: &str) -> ApplicationResult<AppConfig>;

    fn add_tag(&self, name: &str) -> ApplicationResult<AppConfig>;

    fn remove_tag(&self, name: &str) -> ApplicationResult<AppConfig>;
}
