pub mod config_repository;
pub mod entry_repository;
pub mod view_state_repository;
