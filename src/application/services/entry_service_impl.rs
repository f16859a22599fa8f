// src/application/services/entry_service_impl.rs
use std::sync::Arc;

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::services::entry_service::EntryService;
use crate::domain::entry::{BookmarkEntry, EntryDraft, FetchedTitle};
use crate::domain::error::DomainError;
use crate::domain::query::EntryQuery;
use crate::domain::repositories::entry_repository::EntryRepository;
use crate::domain::services::title_fetcher::TitleFetcher;
use crate::domain::validation::validate_draft;
use tracing::{debug, info, instrument};
use uuid::Uuid;

/// Shortest id prefix accepted as a selector
pub const MIN_PREFIX_LEN: usize = 4;

#[derive(Debug)]
pub struct EntryServiceImpl<R: EntryRepository> {
    repository: Arc<R>,
    title_fetcher: Arc<dyn TitleFetcher>,
}

impl<R: EntryRepository> EntryServiceImpl<R> {
    pub fn new(repository: Arc<R>, title_fetcher: Arc<dyn TitleFetcher>) -> Self {
        Self {
            repository,
            title_fetcher,
        }
    }
}

/// Position of the entry a selector names: a full id, or a unique id prefix
fn position_of(entries: &[BookmarkEntry], selector: &str) -> ApplicationResult<usize> {
    let selector = selector.trim();

    if let Ok(id) = Uuid::parse_str(selector) {
        return entries
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| DomainError::EntryNotFound(selector.to_string()).into());
    }

    let prefix: String = selector
        .chars()
        .filter(|c| *c != '-')
        .collect::<String>()
        .to_lowercase();
    if prefix.len() < MIN_PREFIX_LEN {
        return Err(ApplicationError::Validation(format!(
            "Entry id '{}' is too short, use at least {} characters",
            selector, MIN_PREFIX_LEN
        )));
    }

    let mut matches = entries
        .iter()
        .enumerate()
        .filter(|(_, e)| e.id.simple().to_string().starts_with(&prefix))
        .map(|(i, _)| i);

    match (matches.next(), matches.next()) {
        (Some(index), None) => Ok(index),
        (None, _) => Err(DomainError::EntryNotFound(selector.to_string()).into()),
        (Some(_), Some(_)) => Err(DomainError::AmbiguousEntry(selector.to_string()).into()),
    }
}

impl<R: EntryRepository> EntryService for EntryServiceImpl<R> {
    #[instrument(skip(self), level = "debug")]
    fn list_entries(&self, query: &EntryQuery) -> ApplicationResult<Vec<BookmarkEntry>> {
        let entries = self.repository.load();
        let visible = query.apply(&entries);
        debug!("{} of {} entries visible", visible.len(), entries.len());
        Ok(visible)
    }

    #[instrument(skip(self), level = "debug")]
    fn get_entry(&self, selector: &str) -> ApplicationResult<BookmarkEntry> {
        let mut entries = self.repository.load();
        let index = position_of(&entries, selector)?;
        Ok(entries.swap_remove(index))
    }

    #[instrument(skip(self, draft), level = "debug", fields(url = %draft.url, fetch_title = %fetch_title))]
    fn add_entry(&self, draft: EntryDraft, fetch_title: bool) -> ApplicationResult<BookmarkEntry> {
        let mut draft = draft.normalized();
        let mut entries = self.repository.load();
        validate_draft(&draft, &entries, None)?;

        if fetch_title && draft.title.is_empty() {
            let fetched = self.fetch_title(&draft.url);
            if !draft.apply_fetched_title(&fetched) {
                debug!("No title found for {}", draft.url);
            }
        }

        let entry = BookmarkEntry::create(draft);
        entries.push(entry.clone());
        self.repository
            .save(&entries)
            .map_err(|e| ApplicationError::from(e).context("Entry not added"))?;

        info!("Added entry {}", entry.id);
        Ok(entry)
    }

    #[instrument(skip(self, draft), level = "debug", fields(url = %draft.url))]
    fn edit_entry(&self, selector: &str, draft: EntryDraft) -> ApplicationResult<BookmarkEntry> {
        let draft = draft.normalized();
        let mut entries = self.repository.load();
        let index = position_of(&entries, selector)?;
        validate_draft(&draft, &entries, Some(entries[index].id))?;

        let revised = entries[index].revise(draft);
        entries[index] = revised.clone();
        self.repository
            .save(&entries)
            .map_err(|e| ApplicationError::from(e).context("Entry not updated"))?;

        info!("Updated entry {}", revised.id);
        Ok(revised)
    }

    #[instrument(skip(self), level = "debug")]
    fn delete_entry(&self, selector: &str) -> ApplicationResult<BookmarkEntry> {
        let mut entries = self.repository.load();
        let index = position_of(&entries, selector)?;
        let removed = entries.remove(index);
        self.repository
            .save(&entries)
            .map_err(|e| ApplicationError::from(e).context("Entry not deleted"))?;

        info!("Deleted entry {}", removed.id);
        Ok(removed)
    }

    #[instrument(skip(self), level = "debug")]
    fn fetch_title(&self, url: &str) -> FetchedTitle {
        let url = url.trim();
        FetchedTitle {
            url: url.to_string(),
            title: self.title_fetcher.fetch_title(url),
        }
    }
}
