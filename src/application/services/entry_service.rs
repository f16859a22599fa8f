// src/application/services/entry_service.rs
use crate::application::error::ApplicationResult;
use crate::domain::entry::{BookmarkEntry, EntryDraft, FetchedTitle};
use crate::domain::query::EntryQuery;
use std::fmt::Debug;

/// Service interface for entry operations
pub trait EntryService: Send + Sync + Debug {
    /// Entries matching the query, in the query's sort order
    fn list_entries(&self, query: &EntryQuery) -> ApplicationResult<Vec<BookmarkEntry>>;

    /// Look up an entry by full id or by an unambiguous id prefix of at least 4 characters
    fn get_entry(&self, selector: &str) -> ApplicationResult<BookmarkEntry>;

    /// Validate and append a new entry.
    ///
    /// With `fetch_title` set and a blank draft title, the page title is fetched first.
    fn add_entry(&self, draft: EntryDraft, fetch_title: bool) -> ApplicationResult<BookmarkEntry>;

    /// Replace the editable fields of an entry, keeping its position in the list
    fn edit_entry(&self, selector: &str, draft: EntryDraft) -> ApplicationResult<BookmarkEntry>;

    /// Remove an entry and return it
    fn delete_entry(&self, selector: &str) -> ApplicationResult<BookmarkEntry>;

    /// Fetch the page title for a URL; empty when unavailable
    fn fetch_title(&self, url: &str) -> FetchedTitle;
}
