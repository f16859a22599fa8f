// src/application/mod.rs
pub mod error;
pub mod services;

pub use services::entry_service_impl::EntryServiceImpl;
pub use services::view_service_impl::ViewServiceImpl;
pub use services::vocabulary_service_impl::VocabularyServiceImpl;
