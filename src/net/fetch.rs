use std::time::Duration;

use url::Url;

use crate::content::{parse_records, PromptRecord};

/// Error during fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub message: String,
    /// HTTP status, when the server answered with a non-success code.
    pub status: Option<u16>,
}

impl FetchError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
        }
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status {
            Some(status) => write!(f, "HTTP error! status: {} ({})", status, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for FetchError {}

/// Whether `source` should go over HTTP rather than the filesystem.
pub fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Append a `t=<stamp>` query parameter to force revalidation.
pub fn cache_busted(source: &str, stamp: u64) -> Result<Url, FetchError> {
    let mut url = Url::parse(source).map_err(|e| FetchError::new(format!("Invalid URL: {}", e)))?;
    url.query_pairs_mut().append_pair("t", &stamp.to_string());
    Ok(url)
}

pub(crate) fn client(timeout: Duration) -> Result<reqwest::blocking::Client, FetchError> {
    reqwest::blocking::Client::builder()
        .user_agent(concat!("prompt-carousel/", env!("CARGO_PKG_VERSION")))
        .timeout(timeout)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| FetchError::new(format!("Client error: {}", e)))
}

/// Fetch raw bytes from a URL or a local path (blocking).
///
/// `cache_bust` is only applied to remote sources.
pub fn fetch_bytes(source: &str, cache_bust: Option<u64>) -> Result<Vec<u8>, FetchError> {
    if !is_remote(source) {
        return std::fs::read(source)
            .map_err(|e| FetchError::new(format!("Failed to read {}: {}", source, e)));
    }

    let url = match cache_bust {
        Some(stamp) => cache_busted(source, stamp)?,
        None => Url::parse(source).map_err(|e| FetchError::new(format!("Invalid URL: {}", e)))?,
    };

    let response = client(Duration::from_secs(10))?
        .get(url.as_str())
        .send()
        .map_err(|e| FetchError::new(format!("Request failed: {}", e)))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError {
            message: format!("GET {}", source),
            status: Some(status.as_u16()),
        });
    }

    let bytes = response
        .bytes()
        .map_err(|e| FetchError::new(format!("Failed to read body: {}", e)))?;
    Ok(bytes.to_vec())
}

/// Fetch the content resource and decode its records (blocking).
pub fn fetch_prompts(source: &str) -> Result<Vec<PromptRecord>, FetchError> {
    let body = fetch_bytes(source, None)?;
    let text = String::from_utf8(body)
        .map_err(|e| FetchError::new(format!("Content is not UTF-8: {}", e)))?;
    let records = parse_records(&text)
        .map_err(|e| FetchError::new(format!("Invalid prompt data: {}", e)))?;
    log::info!("Loaded {} prompt record(s) from {}", records.len(), source);
    Ok(records)
}
