// src/domain/repositories/entry_repository.rs
use crate::domain::entry::BookmarkEntry;
use crate::domain::error::DomainResult;

/*
   The whole entry list is the unit of persistence: it is read wholesale and every
   mutation rewrites it wholesale.
*/
/// Repository trait for the entry list
pub trait EntryRepository: std::fmt::Debug + Send + Sync {
    /// Load all entries in stored order; never fails, unreadable data yields an empty list
    fn load(&self) -> Vec<BookmarkEntry>;

    /// Replace the stored list atomically
    fn save(&self, entries: &[BookmarkEntry]) -> DomainResult<()>;
}
