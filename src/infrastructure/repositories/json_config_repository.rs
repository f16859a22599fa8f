// src/infrastructure/repositories/json_config_repository.rs
use crate::domain::app_config::AppConfig;
use crate::domain::error::DomainResult;
use crate::domain::repositories::config_repository::ConfigRepository;
use crate::infrastructure::json_store::JsonFileStore;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

pub const CONFIG_FILE: &str = "config.json";

/// Vocabulary stored in `config.json`
#[derive(Debug, Clone)]
pub struct JsonConfigRepository {
    store: JsonFileStore,
}

impl JsonConfigRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            store: JsonFileStore::new(path),
        }
    }

    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(CONFIG_FILE))
    }

    pub fn path(&self) -> &Path {
        self.store.path()
    }
}

impl ConfigRepository for JsonConfigRepository {
    #[instrument(level = "debug", skip(self))]
    fn load(&self) -> AppConfig {
        if !self.store.exists() {
            let config = AppConfig::with_default_vocabulary();
            info!("No vocabulary file, writing defaults to {}", self.path().display());
            if let Err(e) = self.store.save(&config) {
                warn!("Failed to write default vocabulary: {}", e);
            }
            return config;
        }

        match self.store.load::<AppConfig>() {
            Ok(config) => {
                let config = config.unwrap_or_default();
                debug!(
                    "Loaded {} categories, {} tags",
                    config.categories.len(),
                    config.tags.len()
                );
                config
            }
            Err(e) => {
                warn!("Failed to load vocabulary, using defaults: {}", e);
                self.store.quarantine();
                AppConfig::with_default_vocabulary()
            }
        }
    }

    #[instrument(level = "debug", skip(self, config))]
    fn save(&self, config: &AppConfig) -> DomainResult<()> {
        self.store
            .save(config)
            .map_err(|e| e.context("Failed to save vocabulary"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn given_first_run_when_load_then_default_vocabulary_written() {
        let dir = TempDir::new().unwrap();
        let repo = JsonConfigRepository::in_dir(dir.path());

        let config = repo.load();

        assert_eq!(config, AppConfig::with_default_vocabulary());
        let written = fs::read_to_string(repo.path()).unwrap();
        assert!(written.contains("\"categories\""));
        assert!(written.contains("Neo4j"));
    }

    #[test]
    fn given_corrupt_file_when_load_then_defaults_and_quarantined() {
        let dir = TempDir::new().unwrap();
        let repo = JsonConfigRepository::in_dir(dir.path());
        fs::write(repo.path(), "categories = nope").unwrap();

        assert_eq!(repo.load(), AppConfig::with_default_vocabulary());
        assert_eq!(fs::read_to_string(repo.path()).unwrap(), "categories = nope");
        let backup = dir.path().join("config.json.corrupt");
        assert_eq!(fs::read_to_string(backup).unwrap(), "categories = nope");
    }

    #[test]
    fn given_null_document_when_load_then_empty_vocabulary() {
        let dir = TempDir::new().unwrap();
        let repo = JsonConfigRepository::in_dir(dir.path());
        fs::write(repo.path(), "null").unwrap();

        assert_eq!(repo.load(), AppConfig::default());
    }

    #[test]
    fn given_saved_vocabulary_when_load_then_round_trips() {
        let dir = TempDir::new().unwrap();
        let repo = JsonConfigRepository::in_dir(dir.path());
        let config = AppConfig {
            categories: vec!["Reading".to_string()],
            tags: vec![],
        };

        repo.save(&config).unwrap();

        assert_eq!(repo.load(), config);
    }
}
