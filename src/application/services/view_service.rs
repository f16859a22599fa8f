// src/application/services/view_service.rs
use crate::domain::layout::{ColumnLayoutEntry, ResolvedColumn};
use crate::domain::sort::{SortKey, SortOrder};
use std::fmt::Debug;

/// Service interface for the persisted list view: sort state and column layout
pub trait ViewService: Send + Sync + Debug {
    /// Sort order selected by the last header click, or the default
    fn sort_order(&self) -> SortOrder;

    /// Header click on `key`; persists and returns the new order
    fn click_column(&self, key: SortKey) -> SortOrder;

    /// Columns to display, in order
    fn columns(&self) -> Vec<ResolvedColumn>;

    /// Replace the saved layout; an empty layout restores the default
    fn save_columns(&self, layout: &[ColumnLayoutEntry]);
}
