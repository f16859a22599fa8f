pub mod clipboard;
pub mod title_fetcher;
