pub mod app_config;
pub mod entry;
pub mod error;
pub mod layout;
pub mod query;
pub mod repositories;
pub mod services;
pub mod sort;
pub mod validation;
