// src/infrastructure/di/service_container.rs
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::services::entry_service::EntryService;
use crate::application::services::view_service::ViewService;
use crate::application::services::vocabulary_service::VocabularyService;
use crate::application::{EntryServiceImpl, ViewServiceImpl, VocabularyServiceImpl};
use crate::config::Settings;
use crate::domain::services::clipboard::ClipboardService;
use crate::domain::services::title_fetcher::TitleFetcher;
use crate::infrastructure::clipboard::SystemClipboard;
use crate::infrastructure::http::HttpTitleFetcher;
use crate::infrastructure::repositories::json_config_repository::JsonConfigRepository;
use crate::infrastructure::repositories::json_entry_repository::JsonEntryRepository;
use crate::infrastructure::repositories::json_view_state_repository::JsonViewStateRepository;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Production service container: the one place where services are wired together
pub struct ServiceContainer {
    pub data_dir: PathBuf,

    // Core services
    pub entry_service: Arc<dyn EntryService>,
    pub vocabulary_service: Arc<dyn VocabularyService>,
    pub view_service: Arc<dyn ViewService>,

    // Utility services
    pub clipboard_service: Arc<dyn ClipboardService>,
}

impl ServiceContainer {
    /// Create all services from settings, using the network and the system clipboard
    pub fn new(settings: &Settings) -> ApplicationResult<Self> {
        let title_fetcher = HttpTitleFetcher::new(&settings.fetch)
            .map_err(|e| ApplicationError::from(e).context("Cannot create title fetcher"))?;
        Ok(Self::with_services(
            &settings.data_path(),
            Arc::new(title_fetcher),
            Arc::new(SystemClipboard::new()),
        ))
    }

    /// Create the services for a data directory with explicit outbound dependencies
    pub fn with_services(
        data_dir: &Path,
        title_fetcher: Arc<dyn TitleFetcher>,
        clipboard_service: Arc<dyn ClipboardService>,
    ) -> Self {
        debug!("Using data directory {}", data_dir.display());

        let entry_repository = Arc::new(JsonEntryRepository::in_dir(data_dir));
        let config_repository = Arc::new(JsonConfigRepository::in_dir(data_dir));
        let view_repository = Arc::new(JsonViewStateRepository::in_dir(data_dir));

        Self {
            data_dir: data_dir.to_path_buf(),
            entry_service: Arc::new(EntryServiceImpl::new(entry_repository, title_fetcher)),
            vocabulary_service: Arc::new(VocabularyServiceImpl::new(config_repository)),
            view_service: Arc::new(ViewServiceImpl::new(view_repository)),
            clipboard_service,
        }
    }
}

impl std::fmt::Debug for ServiceContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContainer")
            .field("data_dir", &self.data_dir)
            .field("entry_service", &"Arc<dyn EntryService>")
            .field("vocabulary_service", &"Arc<dyn VocabularyService>")
            .field("view_service", &"Arc<dyn ViewService>")
            .field("clipboard_service", &"Arc<dyn ClipboardService>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entry::EntryDraft;
    use crate::domain::query::EntryQuery;
    use crate::infrastructure::clipboard::RecordingClipboard;
    use tempfile::TempDir;

    #[derive(Debug)]
    struct NoTitle;

    impl TitleFetcher for NoTitle {
        fn fetch_title(&self, _url: &str) -> String {
            String::new()
        }
    }

    #[test]
    fn given_data_dir_when_wired_then_services_share_files() {
        let dir = TempDir::new().unwrap();
        let container = ServiceContainer::with_services(
            dir.path(),
            Arc::new(NoTitle),
            Arc::new(RecordingClipboard::new()),
        );

        let draft = EntryDraft {
            url: "https://example.com".to_string(),
            ..EntryDraft::default()
        };
        container.entry_service.add_entry(draft, true).unwrap();

        let again = ServiceContainer::with_services(
            dir.path(),
            Arc::new(NoTitle),
            Arc::new(RecordingClipboard::new()),
        );
        assert_eq!(again.entry_service.list_entries(&EntryQuery::new()).unwrap().len(), 1);
        assert!(dir.path().join("urls.json").exists());
    }

    #[test]
    fn given_default_settings_when_new_then_builds() {
        let dir = TempDir::new().unwrap();
        let settings = Settings {
            data_dir: dir.path().to_string_lossy().into_owned(),
            ..Settings::default()
        };
        let container = ServiceContainer::new(&settings).unwrap();
        assert_eq!(container.data_dir, dir.path());
    }
}
