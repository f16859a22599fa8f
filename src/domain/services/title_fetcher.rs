// src/domain/services/title_fetcher.rs

/// Looks up the `<title>` of a web page.
///
/// Fetching is best-effort: every failure yields an empty string.
pub trait TitleFetcher: std::fmt::Debug + Send + Sync {
    fn fetch_title(&self, url: &str) -> String;
}
