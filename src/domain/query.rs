// src/domain/query.rs
use crate::domain::entry::BookmarkEntry;
use crate::domain::sort::SortOrder;
use std::marker::PhantomData;

/*
   Filters are expressed as specifications: each one checks a single criterion and they
   are combined with AND into the predicate that decides which entries are visible.
*/

/// The Specification trait defines a predicate that determines if an entity matches criteria
pub trait Specification<T> {
    /// Check if an entity satisfies this specification
    fn is_satisfied_by(&self, entity: &T) -> bool;
}

/// Combines specifications with logical AND
pub struct AndSpecification<T, A, B>
where
    A: Specification<T>,
    B: Specification<T>,
{
    spec_a: A,
    spec_b: B,
    _marker: PhantomData<T>,
}

impl<T, A, B> AndSpecification<T, A, B>
where
    A: Specification<T>,
    B: Specification<T>,
{
    pub fn new(spec_a: A, spec_b: B) -> Self {
        Self {
            spec_a,
            spec_b,
            _marker: PhantomData,
        }
    }
}

impl<T, A, B> Specification<T> for AndSpecification<T, A, B>
where
    A: Specification<T>,
    B: Specification<T>,
{
    fn is_satisfied_by(&self, entity: &T) -> bool {
        self.spec_a.is_satisfied_by(entity) && self.spec_b.is_satisfied_by(entity)
    }
}

/// Case-insensitive substring search over title, URL, comment and tags.
/// A blank query matches everything.
pub struct TextSearchSpecification {
    query: String,
}

impl TextSearchSpecification {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

impl Specification<BookmarkEntry> for TextSearchSpecification {
    fn is_satisfied_by(&self, entry: &BookmarkEntry) -> bool {
        if self.query.trim().is_empty() {
            return true;
        }

        let needle = self.query.to_lowercase();
        let contains = |haystack: &str| haystack.to_lowercase().contains(&needle);

        contains(&entry.title)
            || contains(&entry.url)
            || contains(&entry.comment)
            || entry.tags.iter().any(|t| contains(t))
    }
}

/// Category selection; `All` is the "no filter" sentinel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub const ALL_LABEL: &'static str = "All";

    /// `"All"` (any case) or an empty string means no filter
    pub fn parse(value: &str) -> Self {
        if value.is_empty() || value.eq_ignore_ascii_case(Self::ALL_LABEL) {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }
}

/// Exact, case-sensitive category match
pub struct CategorySpecification {
    filter: CategoryFilter,
}

impl CategorySpecification {
    pub fn new(filter: CategoryFilter) -> Self {
        Self { filter }
    }
}

impl Specification<BookmarkEntry> for CategorySpecification {
    fn is_satisfied_by(&self, entry: &BookmarkEntry) -> bool {
        match &self.filter {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => entry.category == *category,
        }
    }
}

/// Conjunctive tag filter: every selected tag must be present (case-sensitive)
pub struct AllTagsSpecification {
    tags: Vec<String>,
}

impl AllTagsSpecification {
    pub fn new(tags: Vec<String>) -> Self {
        Self { tags }
    }
}

impl Specification<BookmarkEntry> for AllTagsSpecification {
    fn is_satisfied_by(&self, entry: &BookmarkEntry) -> bool {
        self.tags.iter().all(|tag| entry.has_tag(tag))
    }
}

/// Extension trait to make combining specifications more readable
pub trait SpecificationExt<T>: Specification<T> {
    /// Combine with another specification using AND
    fn and<S: Specification<T>>(self, other: S) -> AndSpecification<T, Self, S>
    where
        Self: Sized,
    {
        AndSpecification::new(self, other)
    }
}

impl<T, S> SpecificationExt<T> for S where S: Specification<T> {}

/// Filter criteria plus sort order; produces the visible, ordered subset of entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryQuery {
    pub text: String,
    pub category: CategoryFilter,
    pub tags: Vec<String>,
    pub sort: SortOrder,
    pub limit: Option<usize>,
}

impl EntryQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// All criteria combined with AND
    pub fn specification(&self) -> impl Specification<BookmarkEntry> {
        TextSearchSpecification::new(self.text.clone())
            .and(CategorySpecification::new(self.category.clone()))
            .and(AllTagsSpecification::new(self.tags.clone()))
    }

    /// Filters, sorts and truncates; the input order is the tie-breaker
    pub fn apply(&self, entries: &[BookmarkEntry]) -> Vec<BookmarkEntry> {
        let spec = self.specification();
        let mut visible: Vec<BookmarkEntry> = entries
            .iter()
            .filter(|e| spec.is_satisfied_by(e))
            .cloned()
            .collect();

        self.sort.sort(&mut visible);

        if let Some(limit) = self.limit {
            visible.truncate(limit);
        }
        visible
    }
}
