// src/infrastructure/http.rs
use crate::config::FetchSettings;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::services::title_fetcher::TitleFetcher;
use encoding_rs::{CoderResult, Decoder, Encoding, UTF_8};
use regex::Regex;
use reqwest::header::CONTENT_TYPE;
use std::io::{self, Read};
use std::sync::OnceLock;
use std::time::Duration;
use tracing::{debug, instrument, trace, warn};

/// Bytes requested from the response body per read
pub const CHUNK_SIZE: usize = 4096;

static TITLE_RE: OnceLock<Regex> = OnceLock::new();

fn title_regex() -> &'static Regex {
    TITLE_RE.get_or_init(|| {
        Regex::new(r"(?is)<title[^>]*>(.*?)</title>").expect("compile title regex")
    })
}

/// First `<title>` element of an HTML fragment, entity-decoded and trimmed
pub fn extract_title(html: &str) -> Option<String> {
    title_regex().captures(html).and_then(|caps| caps.get(1)).map(|m| {
        html_escape::decode_html_entities(m.as_str())
            .trim()
            .to_string()
    })
}

/// Charset parameter of a `Content-Type` header value, quotes stripped
pub fn charset_from_content_type(content_type: &str) -> Option<String> {
    content_type.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        if !name.trim().eq_ignore_ascii_case("charset") {
            return None;
        }
        let value = value.trim().trim_matches(|c| c == '"' || c == '\'').trim();
        (!value.is_empty()).then(|| value.to_string())
    })
}

/// Encoding named by the header, UTF-8 when absent or unknown
fn encoding_for(content_type: Option<&str>) -> &'static Encoding {
    content_type
        .and_then(charset_from_content_type)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

fn decode_chunk(decoder: &mut Decoder, mut src: &[u8], last: bool) -> String {
    let capacity = decoder
        .max_utf8_buffer_length(src.len())
        .unwrap_or(src.len() * 3 + 16);
    let mut out = String::with_capacity(capacity);
    loop {
        let (result, read, _) = decoder.decode_to_string(src, &mut out, last);
        src = &src[read..];
        match result {
            CoderResult::InputEmpty => return out,
            CoderResult::OutputFull => out.reserve(src.len() * 3 + 16),
        }
    }
}

/// Reads `reader` incrementally and returns the first page title found.
///
/// The body is decoded with `encoding` (a byte-order mark takes precedence) and searched
/// after every chunk. At most `max_chars` decoded characters are examined; an empty string
/// means no title within that window.
pub fn scan_for_title<R: Read>(
    mut reader: R,
    encoding: &'static Encoding,
    max_chars: usize,
) -> io::Result<String> {
    let mut decoder = encoding.new_decoder();
    let mut buf = [0u8; CHUNK_SIZE];
    let mut text = String::new();
    let mut chars = 0usize;

    loop {
        let n = reader.read(&mut buf)?;
        let last = n == 0;
        let decoded = decode_chunk(&mut decoder, &buf[..n], last);

        let remaining = max_chars - chars;
        let decoded_chars = decoded.chars().count();
        let capped = decoded_chars >= remaining;
        if capped {
            text.extend(decoded.chars().take(remaining));
            chars = max_chars;
        } else {
            text.push_str(&decoded);
            chars += decoded_chars;
        }

        if let Some(title) = extract_title(&text) {
            return Ok(title);
        }
        if last || capped {
            trace!("No title within {} characters", chars);
            return Ok(String::new());
        }
    }
}

/// Title fetcher backed by a blocking reqwest client
#[derive(Debug, Clone)]
pub struct HttpTitleFetcher {
    client: reqwest::blocking::Client,
    max_chars: usize,
}

impl HttpTitleFetcher {
    pub fn new(settings: &FetchSettings) -> DomainResult<Self> {
        if settings.accept_invalid_certs {
            warn!("TLS certificate validation is disabled for title fetches");
        }
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs.max(1)))
            .user_agent(settings.user_agent.clone())
            .danger_accept_invalid_certs(settings.accept_invalid_certs)
            .build()
            .map_err(|e| DomainError::Other(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            max_chars: settings.max_chars,
        })
    }

    fn try_fetch_title(&self, url: &str) -> DomainResult<String> {
        let response = self
            .client
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| DomainError::CannotFetchTitle(e.to_string()))?;

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let encoding = encoding_for(content_type.as_deref());
        debug!("Decoding {} as {}", response.url(), encoding.name());

        scan_for_title(response, encoding, self.max_chars)
            .map_err(|e| DomainError::CannotFetchTitle(e.to_string()))
    }
}

impl TitleFetcher for HttpTitleFetcher {
    #[instrument(level = "debug", skip(self))]
    fn fetch_title(&self, url: &str) -> String {
        match self.try_fetch_title(url) {
            Ok(title) => {
                debug!("Fetched title: {:?}", title);
                title
            }
            Err(e) => {
                debug!("Title fetch failed: {}", e);
                String::new()
            }
        }
    }
}
