// src/domain/repositories/view_state_repository.rs
use crate::domain::layout::{ColumnLayoutEntry, ViewState};

/// Best-effort persistence of list view state: reads fall back to defaults, writes never fail
pub trait ViewStateRepository: std::fmt::Debug + Send + Sync {
    fn load_view_state(&self) -> ViewState;

    fn save_view_state(&self, state: &ViewState);

    fn load_columns(&self) -> Vec<ColumnLayoutEntry>;

    fn save_columns(&self, columns: &[ColumnLayoutEntry]);
}
