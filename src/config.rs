//! Retrieval configuration with sensible defaults.
//!
//! [`RetrievalConfig`] controls where content is fetched from, the
//! per-source time windows, and HTTP behaviour. The store URL and key
//! have no usable defaults and must be supplied by the caller.

use crate::error::RetrievalError;
use url::Url;

/// Configuration for a context retrieval operation.
#[derive(Debug, Clone)]
pub struct RetrievalConfig {
    /// Base URL of the hosted headline/post store (REST interface).
    pub store_url: String,
    /// API key for the store, sent as both `apikey` and bearer token.
    pub store_api_key: String,
    /// Base URL of the external news search API.
    pub news_api_url: String,
    /// API key for the external news search API. If `None`, the
    /// external source is skipped and contributes no items.
    pub news_api_key: Option<String>,
    /// Recency window for the recent-news source, in hours.
    pub recent_window_hours: u64,
    /// Lookback window for the historical-news source, in days.
    pub historical_window_days: u64,
    /// Maximum number of social posts to fetch per question.
    pub social_post_limit: usize,
    /// Per-request HTTP timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            store_url: String::new(),
            store_api_key: String::new(),
            news_api_url: "https://newsapi.org".into(),
            news_api_key: None,
            recent_window_hours: 24,
            historical_window_days: 7,
            social_post_limit: 20,
            timeout_seconds: 8,
        }
    }
}

impl RetrievalConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `store_url` must be a non-empty, parseable URL
    /// - `news_api_url` must be a parseable URL
    /// - `recent_window_hours`, `historical_window_days`,
    ///   `social_post_limit` and `timeout_seconds` must be greater than 0
    pub fn validate(&self) -> Result<(), RetrievalError> {
        if self.store_url.is_empty() {
            return Err(RetrievalError::Config("store_url must not be empty".into()));
        }
        if Url::parse(&self.store_url).is_err() {
            return Err(RetrievalError::Config(format!(
                "store_url is not a valid URL: {}",
                self.store_url
            )));
        }
        if Url::parse(&self.news_api_url).is_err() {
            return Err(RetrievalError::Config(format!(
                "news_api_url is not a valid URL: {}",
                self.news_api_url
            )));
        }
        if self.recent_window_hours == 0 {
            return Err(RetrievalError::Config(
                "recent_window_hours must be greater than 0".into(),
            ));
        }
        if self.historical_window_days == 0 {
            return Err(RetrievalError::Config(
                "historical_window_days must be greater than 0".into(),
            ));
        }
        if self.social_post_limit == 0 {
            return Err(RetrievalError::Config(
                "social_post_limit must be greater than 0".into(),
            ));
        }
        if self.timeout_seconds == 0 {
            return Err(RetrievalError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}
