// src/domain/entry.rs
use crate::domain::app_config::AppConfig;
use chrono::{SecondsFormat, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use uuid::Uuid;

/// Current time as stored in `dateSaved` / `lastModified`
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Reads a JSON `null` as the type's default instead of failing the whole document
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One saved bookmark record.
///
/// `id` and `date_saved` are assigned by [`BookmarkEntry::create`] and carried over
/// unchanged by [`BookmarkEntry::revise`].
#[derive(Builder, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[builder(setter(into))]
#[serde(rename_all = "camelCase")]
pub struct BookmarkEntry {
    #[builder(default = "Uuid::new_v4()")]
    #[serde(alias = "Id", default = "Uuid::new_v4")]
    pub id: Uuid,

    #[builder(default)]
    #[serde(alias = "Url", default, deserialize_with = "null_as_default")]
    pub url: String,

    #[builder(default)]
    #[serde(alias = "Title", default, deserialize_with = "null_as_default")]
    pub title: String,

    #[builder(default = "now_timestamp()")]
    #[serde(alias = "DateSaved", default, deserialize_with = "null_as_default")]
    pub date_saved: String,

    #[builder(default)]
    #[serde(alias = "Category", default, deserialize_with = "null_as_default")]
    pub category: String,

    #[builder(default)]
    #[serde(alias = "Tags", default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,

    #[builder(default)]
    #[serde(alias = "Comment", default, deserialize_with = "null_as_default")]
    pub comment: String,

    #[builder(default = "now_timestamp()")]
    #[serde(alias = "LastModified", default, deserialize_with = "null_as_default")]
    pub last_modified: String,
}

impl BookmarkEntry {
    /// Creates a new entry from a draft with a fresh id and both timestamps set to now
    pub fn create(draft: EntryDraft) -> Self {
        let now = now_timestamp();
        Self {
            id: Uuid::new_v4(),
            url: draft.url,
            title: draft.title,
            date_saved: now.clone(),
            category: draft.category,
            tags: draft.tags,
            comment: draft.comment,
            last_modified: now,
        }
    }

    /// Replaces the editable fields, keeping `id` and `date_saved`
    pub fn revise(&self, draft: EntryDraft) -> Self {
        Self {
            id: self.id,
            url: draft.url,
            title: draft.title,
            date_saved: self.date_saved.clone(),
            category: draft.category,
            tags: draft.tags,
            comment: draft.comment,
            last_modified: now_timestamp(),
        }
    }

    /// Tags joined the way they are displayed and compared
    pub fn joined_tags(&self) -> String {
        self.tags.join(", ")
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Short form of the id used in listings
    pub fn short_id(&self) -> String {
        self.id.simple().to_string()[..8].to_string()
    }
}

impl fmt::Display for BookmarkEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {} ({})",
            self.short_id(),
            self.title,
            self.url,
            self.joined_tags()
        )
    }
}

impl fmt::Debug for BookmarkEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BookmarkEntry")
            .field("id", &self.id)
            .field("url", &self.url)
            .field("title", &self.title)
            .field("date_saved", &self.date_saved)
            .field("category", &self.category)
            .field("tags", &self.tags)
            .field("comment", &self.comment)
            .field("last_modified", &self.last_modified)
            .finish()
    }
}

/// Result of a title fetch, tied to the URL it was fetched for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedTitle {
    pub url: String,
    pub title: String,
}

/// Editable form of an entry, used by the add and edit flows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryDraft {
    pub url: String,
    pub title: String,
    pub category: String,
    pub tags: Vec<String>,
    pub comment: String,
}

impl EntryDraft {
    /// Blank draft with the first configured category preselected
    pub fn for_new(config: &AppConfig) -> Self {
        Self {
            category: config.categories.first().cloned().unwrap_or_default(),
            ..Default::default()
        }
    }

    /// Trims every text field and drops blank tags
    pub fn normalized(self) -> Self {
        Self {
            url: self.url.trim().to_string(),
            title: self.title.trim().to_string(),
            category: self.category.trim().to_string(),
            tags: self
                .tags
                .iter()
                .map(|t| t.trim())
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect(),
            comment: self.comment.trim().to_string(),
        }
    }

    pub fn from_entry(entry: &BookmarkEntry) -> Self {
        Self {
            url: entry.url.clone(),
            title: entry.title.clone(),
            category: entry.category.clone(),
            tags: entry.tags.clone(),
            comment: entry.comment.clone(),
        }
    }

    /// Applies a fetch result if it still belongs to this draft.
    ///
    /// A result fetched for a URL the draft no longer holds is discarded, and an empty
    /// title never replaces one already present. Returns whether the title changed.
    pub fn apply_fetched_title(&mut self, fetched: &FetchedTitle) -> bool {
        if fetched.url.trim() != self.url.trim() {
            return false;
        }
        if fetched.title.is_empty() {
            return false;
        }
        self.title = fetched.title.clone();
        true
    }
}
