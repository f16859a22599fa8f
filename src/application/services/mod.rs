// src/application/services/mod.rs
pub mod entry_service;
pub mod entry_service_impl;
pub mod view_service;
pub mod view_service_impl;
pub mod vocabulary_service;
pub mod vocabulary_service_impl;
