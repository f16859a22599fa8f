// src/infrastructure/repositories/json_view_state_repository.rs
use crate::domain::layout::{normalize_layout, ColumnLayoutEntry, ColumnLayoutState, ViewState};
use crate::domain::repositories::view_state_repository::ViewStateRepository;
use crate::infrastructure::json_store::JsonFileStore;
use std::path::Path;
use tracing::{debug, instrument};

pub const VIEW_STATE_FILE: &str = "view-state.json";
pub const COLUMNS_FILE: &str = "columns.json";

/// Sort state and column layout; all errors are logged and swallowed
#[derive(Debug, Clone)]
pub struct JsonViewStateRepository {
    view_state: JsonFileStore,
    columns: JsonFileStore,
}

impl JsonViewStateRepository {
    pub fn in_dir(data_dir: &Path) -> Self {
        Self {
            view_state: JsonFileStore::new(data_dir.join(VIEW_STATE_FILE)),
            columns: JsonFileStore::new(data_dir.join(COLUMNS_FILE)),
        }
    }
}

impl ViewStateRepository for JsonViewStateRepository {
    #[instrument(level = "trace", skip(self))]
    fn load_view_state(&self) -> ViewState {
        self.view_state
            .load::<ViewState>()
            .unwrap_or_else(|e| {
                debug!("Ignoring unreadable view state: {}", e);
                None
            })
            .unwrap_or_default()
    }

    #[instrument(level = "trace", skip(self))]
    fn save_view_state(&self, state: &ViewState) {
        if let Err(e) = self.view_state.save(state) {
            debug!("Failed to save view state: {}", e);
        }
    }

    #[instrument(level = "trace", skip(self))]
    fn load_columns(&self) -> Vec<ColumnLayoutEntry> {
        self.columns
            .load::<ColumnLayoutState>()
            .unwrap_or_else(|e| {
                debug!("Ignoring unreadable column layout: {}", e);
                None
            })
            .map(|state| state.columns)
            .unwrap_or_default()
    }

    #[instrument(level = "trace", skip(self, columns))]
    fn save_columns(&self, columns: &[ColumnLayoutEntry]) {
        let state = ColumnLayoutState {
            columns: normalize_layout(columns.to_vec()),
        };
        if let Err(e) = self.columns.save(&state) {
            debug!("Failed to save column layout: {}", e);
        }
    }
}
