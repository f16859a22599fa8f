// src/infrastructure/repositories/json_entry_repository.rs
use crate::domain::entry::BookmarkEntry;
use crate::domain::error::DomainResult;
use crate::domain::repositories::entry_repository::EntryRepository;
use crate::infrastructure::json_store::JsonFileStore;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, warn};

pub const ENTRIES_FILE: &str = "urls.json";

/// Entry list stored as a JSON array in `urls.json`
#[derive(Debug, Clone)]
pub struct JsonEntryRepository {
    store: JsonFileStore,
}

impl JsonEntryRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            store: JsonFileStore::new(path),
        }
    }

    /// Repository for `urls.json` inside the data directory
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(ENTRIES_FILE))
    }

    pub fn path(&self) -> &Path {
        self.store.path()
    }
}

impl EntryRepository for JsonEntryRepository {
    #[instrument(level = "debug", skip(self))]
    fn load(&self) -> Vec<BookmarkEntry> {
        match self.store.load::<Vec<BookmarkEntry>>() {
            Ok(entries) => {
                let entries = entries.unwrap_or_default();
                debug!("Loaded {} entries", entries.len());
                entries
            }
            Err(e) => {
                warn!("Failed to load entries, starting empty: {}", e);
                if self.store.exists() {
                    self.store.quarantine();
                }
                Vec::new()
            }
        }
    }

    #[instrument(level = "debug", skip(self, entries), fields(count = entries.len()))]
    fn save(&self, entries: &[BookmarkEntry]) -> DomainResult<()> {
        self.store
            .save(entries)
            .map_err(|e| e.context("Failed to save entries"))
    }
}
