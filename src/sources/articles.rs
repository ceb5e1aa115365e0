//! Headline store clients for recent and historical news.
//!
//! Both sources read the same `news_headlines` table through the
//! store's REST interface, filtered to completed neutralizations and a
//! per-source recency window, newest first. Neutralized fields win over
//! the originals when present.

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

use crate::config::RetrievalConfig;
use crate::error::RetrievalError;
use crate::http;
use crate::source::ContentSource;
use crate::types::{CandidateItem, SourceKind};

/// Neutralized headlines published within the recent window.
pub struct RecentNewsSource;

/// Neutralized headlines from the wider historical window.
///
/// Overlaps the recent window; the ranker's recency penalty and the
/// recent source's higher base score keep fresh coverage on top.
pub struct HistoricalNewsSource;

impl ContentSource for RecentNewsSource {
    async fn fetch(
        &self,
        _question: &str,
        config: &RetrievalConfig,
    ) -> Result<Vec<CandidateItem>, RetrievalError> {
        let window_start = Utc::now() - Duration::hours(config.recent_window_hours as i64);
        fetch_headlines(SourceKind::RecentNews, window_start, config).await
    }

    fn kind(&self) -> SourceKind {
        SourceKind::RecentNews
    }
}

impl ContentSource for HistoricalNewsSource {
    async fn fetch(
        &self,
        _question: &str,
        config: &RetrievalConfig,
    ) -> Result<Vec<CandidateItem>, RetrievalError> {
        let window_start = Utc::now() - Duration::days(config.historical_window_days as i64);
        fetch_headlines(SourceKind::HistoricalNews, window_start, config).await
    }

    fn kind(&self) -> SourceKind {
        SourceKind::HistoricalNews
    }
}

/// One row of the store's `news_headlines` table. Unknown columns are
/// ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct HeadlineRecord {
    neutral_title: Option<String>,
    original_title: Option<String>,
    neutral_description: Option<String>,
    original_description: Option<String>,
    neutral_summary: Option<String>,
    url: String,
    source_name: String,
    published_at: DateTime<Utc>,
}

async fn fetch_headlines(
    kind: SourceKind,
    window_start: DateTime<Utc>,
    config: &RetrievalConfig,
) -> Result<Vec<CandidateItem>, RetrievalError> {
    tracing::trace!(%kind, %window_start, "fetching headlines");

    let client = http::build_client(config)?;
    let endpoint = format!(
        "{}/rest/v1/news_headlines",
        config.store_url.trim_end_matches('/')
    );

    let query: Vec<(&str, String)> = vec![
        ("select", "*".into()),
        ("neutralization_status", "eq.completed".into()),
        ("published_at", format!("gte.{}", window_start.to_rfc3339())),
        ("order", "published_at.desc".into()),
    ];

    let response = client
        .get(&endpoint)
        .query(&query)
        .header("apikey", &config.store_api_key)
        .bearer_auth(&config.store_api_key)
        .send()
        .await
        .map_err(|e| RetrievalError::Http(format!("headline store request failed: {e}")))?
        .error_for_status()
        .map_err(|e| RetrievalError::Http(format!("headline store HTTP error: {e}")))?;

    let records: Vec<HeadlineRecord> = response
        .json()
        .await
        .map_err(|e| RetrievalError::Parse(format!("headline store response: {e}")))?;

    tracing::debug!(%kind, count = records.len(), "headlines fetched");
    Ok(records
        .into_iter()
        .map(|record| headline_to_item(kind, record))
        .collect())
}

/// Map a store row to a candidate item, preferring neutralized fields.
///
/// Extracted as a separate function for testability with synthetic rows.
pub(crate) fn headline_to_item(kind: SourceKind, record: HeadlineRecord) -> CandidateItem {
    CandidateItem {
        kind,
        title: record
            .neutral_title
            .or(record.original_title)
            .unwrap_or_default(),
        body: record
            .neutral_description
            .or(record.original_description)
            .unwrap_or_default(),
        summary: record.neutral_summary,
        url: record.url,
        source: record.source_name,
        published_at: record.published_at,
        engagement: None,
    }
}
