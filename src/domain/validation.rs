// src/domain/validation.rs
use crate::domain::entry::{BookmarkEntry, EntryDraft};
use crate::domain::error::{DomainError, DomainResult};
use uuid::Uuid;

/// Case-insensitive URL equality used for duplicate detection
pub fn same_url(a: &str, b: &str) -> bool {
    a.to_uppercase() == b.to_uppercase()
}

/// Finds another entry holding the same URL, ignoring the entry being edited
pub fn find_duplicate<'a>(
    entries: &'a [BookmarkEntry],
    url: &str,
    editing: Option<Uuid>,
) -> Option<&'a BookmarkEntry> {
    entries
        .iter()
        .find(|e| same_url(&e.url, url) && editing != Some(e.id))
}

/// Checks a draft before it is saved: the URL must be non-blank and unique
pub fn validate_draft(
    draft: &EntryDraft,
    entries: &[BookmarkEntry],
    editing: Option<Uuid>,
) -> DomainResult<()> {
    if draft.url.trim().is_empty() {
        return Err(DomainError::EmptyUrl);
    }
    if let Some(existing) = find_duplicate(entries, &draft.url, editing) {
        return Err(DomainError::DuplicateUrl(existing.url.clone()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entry::BookmarkEntryBuilder;

    fn entry(url: &str) -> BookmarkEntry {
        BookmarkEntryBuilder::default().url(url).build().unwrap()
    }

    fn draft(url: &str) -> EntryDraft {
        EntryDraft {
            url: url.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn given_same_url_different_case_when_adding_then_rejected_as_duplicate() {
        let entries = vec![entry("https://Example.com/Page")];
        let result = validate_draft(&draft("https://example.COM/page"), &entries, None);
        assert!(matches!(result, Err(DomainError::DuplicateUrl(url)) if url == "https://Example.com/Page"));
    }

    #[test]
    fn given_entry_keeping_own_url_when_editing_then_not_a_duplicate() {
        let entries = vec![entry("https://example.com"), entry("https://other.example")];
        let own_id = entries[0].id;
        assert!(validate_draft(&draft("https://EXAMPLE.com"), &entries, Some(own_id)).is_ok());
    }

    #[test]
    fn given_edit_to_url_of_other_entry_when_editing_then_rejected() {
        let entries = vec![entry("https://example.com"), entry("https://other.example")];
        let own_id = entries[0].id;
        assert!(validate_draft(&draft("https://other.example"), &entries, Some(own_id)).is_err());
    }

    #[test]
    fn given_blank_url_when_validating_then_rejected() {
        assert!(matches!(
            validate_draft(&draft("   "), &[], None),
            Err(DomainError::EmptyUrl)
        ));
    }

    #[test]
    fn given_url_with_surrounding_text_when_checking_duplicate_then_requires_exact_match() {
        let entries = vec![entry("https://example.com")];
        assert!(find_duplicate(&entries, "https://example.com/", None).is_none());
    }
}
