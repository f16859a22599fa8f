pub mod json_config_repository;
pub mod json_entry_repository;
pub mod json_view_state_repository;
