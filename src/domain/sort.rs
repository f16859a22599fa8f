// src/domain/sort.rs
use crate::domain::entry::BookmarkEntry;
use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Sort direction enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Columns an entry list can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    Title,
    Url,
    Category,
    Comment,
    DateSaved,
    Tags,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::Title,
        SortKey::Url,
        SortKey::Category,
        SortKey::Tags,
        SortKey::Comment,
        SortKey::DateSaved,
    ];

    /// Column header text
    pub fn header(&self) -> &'static str {
        match self {
            SortKey::Title => "Title",
            SortKey::Url => "URL",
            SortKey::Category => "Category",
            SortKey::Comment => "Comment",
            SortKey::DateSaved => "Date Saved",
            SortKey::Tags => "Tags",
        }
    }

    /// Compares two entries on this key, ascending
    pub fn compare(&self, a: &BookmarkEntry, b: &BookmarkEntry) -> Ordering {
        match self {
            SortKey::Title => compare_ignore_case(&a.title, &b.title),
            SortKey::Url => compare_ignore_case(&a.url, &b.url),
            SortKey::Category => compare_ignore_case(&a.category, &b.category),
            SortKey::Comment => compare_ignore_case(&a.comment, &b.comment),
            SortKey::DateSaved => a.date_saved.cmp(&b.date_saved),
            SortKey::Tags => compare_ignore_case(&a.joined_tags(), &b.joined_tags()),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header())
    }
}

impl FromStr for SortKey {
    type Err = DomainError;

    /// Accepts the column header ("Date Saved") or its kebab form ("date-saved"), any case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "title" => Ok(SortKey::Title),
            "url" => Ok(SortKey::Url),
            "category" => Ok(SortKey::Category),
            "comment" => Ok(SortKey::Comment),
            "datesaved" | "date" => Ok(SortKey::DateSaved),
            "tags" => Ok(SortKey::Tags),
            _ => Err(DomainError::InvalidSortKey(s.to_string())),
        }
    }
}

/// Ordinal comparison on upper-cased text
fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.to_uppercase().cmp(&b.to_uppercase())
}

/// Active sort column and direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOrder {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortOrder {
    /// Most recently saved first
    fn default() -> Self {
        Self {
            key: SortKey::DateSaved,
            direction: SortDirection::Descending,
        }
    }
}

impl SortOrder {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Header click: the same column flips direction, another column starts ascending
    pub fn toggle(self, key: SortKey) -> Self {
        if self.key == key {
            Self::new(key, self.direction.reversed())
        } else {
            Self::new(key, SortDirection::Ascending)
        }
    }

    /// Stable sort; equal entries keep their relative order in both directions
    pub fn sort(&self, entries: &mut [BookmarkEntry]) {
        let key = self.key;
        match self.direction {
            SortDirection::Ascending => entries.sort_by(|a, b| key.compare(a, b)),
            SortDirection::Descending => entries.sort_by(|a, b| key.compare(b, a)),
        }
    }
}
