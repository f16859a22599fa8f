// src/application/services/view_service_impl.rs
use std::sync::Arc;

use crate::application::services::view_service::ViewService;
use crate::domain::layout::{resolve_columns, ColumnLayoutEntry, ResolvedColumn, ViewState};
use crate::domain::repositories::view_state_repository::ViewStateRepository;
use crate::domain::sort::{SortKey, SortOrder};
use tracing::{debug, instrument};

#[derive(Debug)]
pub struct ViewServiceImpl<R: ViewStateRepository> {
    repository: Arc<R>,
}

impl<R: ViewStateRepository> ViewServiceImpl<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R: ViewStateRepository> ViewService for ViewServiceImpl<R> {
    fn sort_order(&self) -> SortOrder {
        self.repository.load_view_state().sort
    }

    #[instrument(skip(self), level = "debug")]
    fn click_column(&self, key: SortKey) -> SortOrder {
        let sort = self.sort_order().toggle(key);
        self.repository.save_view_state(&ViewState { sort });
        debug!("Sorting by {} {:?}", sort.key, sort.direction);
        sort
    }

    fn columns(&self) -> Vec<ResolvedColumn> {
        resolve_columns(&self.repository.load_columns())
    }

    #[instrument(skip(self, layout), level = "debug")]
    fn save_columns(&self, layout: &[ColumnLayoutEntry]) {
        self.repository.save_columns(layout);
    }
}
