pub mod clipboard;
pub mod di;
pub mod http;
pub mod json_store;
pub mod repositories;
