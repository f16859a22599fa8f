// src/domain/layout.rs
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::sort::{SortKey, SortOrder};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Persisted position and width of one list column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnLayoutEntry {
    #[serde(alias = "Key", default)]
    pub key: String,
    #[serde(alias = "Order", default)]
    pub order: i32,
    #[serde(alias = "Width", default)]
    pub width: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnLayoutState {
    #[serde(alias = "Columns", default)]
    pub columns: Vec<ColumnLayoutEntry>,
}

/// Persisted list view state: the sort selected by the last header click
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    #[serde(default)]
    pub sort: SortOrder,
}

/// A column as displayed: which field, and an optional fixed width in characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedColumn {
    pub key: SortKey,
    pub width: Option<usize>,
}

/// Default column order of the entry list
pub const DEFAULT_COLUMNS: [SortKey; 6] = SortKey::ALL;

/// Widest column the table will draw, in characters
pub const MAX_COLUMN_WIDTH: usize = 500;

/// Saved width in characters, if finite and within `1..=MAX_COLUMN_WIDTH`
pub fn column_width(width: f64) -> Option<usize> {
    if !width.is_finite() {
        return None;
    }
    let rounded = width.round();
    (1.0..=MAX_COLUMN_WIDTH as f64)
        .contains(&rounded)
        .then_some(rounded as usize)
}

/// Orders the known columns by a saved layout.
///
/// Saved entries come first in `order`, matched case-insensitively by header; unknown keys
/// and repeats are skipped. Known columns missing from the layout follow in default order.
/// Widths outside `1..=MAX_COLUMN_WIDTH` are ignored.
pub fn resolve_columns(saved: &[ColumnLayoutEntry]) -> Vec<ResolvedColumn> {
    let mut ordered: Vec<&ColumnLayoutEntry> = saved.iter().collect();
    ordered.sort_by_key(|c| c.order);

    let mut used = HashSet::new();
    let mut columns = Vec::with_capacity(DEFAULT_COLUMNS.len());

    for entry in ordered {
        let Some(key) = column_for_header(&entry.key) else {
            continue;
        };
        if !used.insert(key) {
            continue;
        }
        columns.push(ResolvedColumn {
            key,
            width: entry.width.and_then(column_width),
        });
    }

    for key in DEFAULT_COLUMNS {
        if used.insert(key) {
            columns.push(ResolvedColumn { key, width: None });
        }
    }

    columns
}

fn column_for_header(header: &str) -> Option<SortKey> {
    DEFAULT_COLUMNS
        .into_iter()
        .find(|k| k.header().eq_ignore_ascii_case(header.trim()))
}

/// Normalizes a layout before it is written: blank keys dropped, ordered by `order`
pub fn normalize_layout(columns: Vec<ColumnLayoutEntry>) -> Vec<ColumnLayoutEntry> {
    let mut columns: Vec<_> = columns
        .into_iter()
        .filter(|c| !c.key.trim().is_empty())
        .collect();
    columns.sort_by_key(|c| c.order);
    columns
}

/// Parses a layout spec such as `"Title:40,URL,Date Saved:20"`
pub fn parse_layout_spec(spec: &str) -> DomainResult<Vec<ColumnLayoutEntry>> {
    let mut columns = Vec::new();
    for (index, part) in spec
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .enumerate()
    {
        let (name, width) = match part.rsplit_once(':') {
            Some((name, width)) => {
                let width = width
                    .trim()
                    .parse::<f64>()
                    .ok()
                    .filter(|w| column_width(*w).is_some())
                    .ok_or_else(|| DomainError::InvalidColumn(part.to_string()))?;
                (name.trim(), Some(width))
            }
            None => (part, None),
        };
        let key = column_for_header(name)
            .or_else(|| name.parse::<SortKey>().ok())
            .ok_or_else(|| DomainError::InvalidColumn(name.to_string()))?;
        columns.push(ColumnLayoutEntry {
            key: key.header().to_string(),
            order: index as i32,
            width,
        });
    }
    Ok(columns)
}
