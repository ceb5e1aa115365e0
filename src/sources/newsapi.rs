//! External news search API client.
//!
//! Queries the provider's `everything` endpoint with the raw question.
//! This source is strictly best-effort: a missing API key, HTTP failure
//! or unparseable response yields an **empty list**, never an error, so
//! external coverage can only ever add to a ranking.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::config::RetrievalConfig;
use crate::error::RetrievalError;
use crate::http;
use crate::source::ContentSource;
use crate::types::{CandidateItem, SourceKind};

/// Third-party articles from the external news search API.
pub struct ExternalSearchSource;

impl ContentSource for ExternalSearchSource {
    async fn fetch(
        &self,
        question: &str,
        config: &RetrievalConfig,
    ) -> Result<Vec<CandidateItem>, RetrievalError> {
        let Some(api_key) = config.news_api_key.as_deref() else {
            tracing::debug!("no news API key configured; skipping external source");
            return Ok(Vec::new());
        };

        match request_articles(question, api_key, config).await {
            Ok(items) => Ok(items),
            Err(err) => {
                tracing::warn!(error = %err, "news API request failed; continuing without external articles");
                Ok(Vec::new())
            }
        }
    }

    fn kind(&self) -> SourceKind {
        SourceKind::ExternalArticle
    }
}

#[derive(Debug, Deserialize)]
struct NewsApiResponse {
    #[serde(default)]
    articles: Vec<NewsApiArticle>,
}

/// One article from the provider. Fields other than `url` are nullable.
#[derive(Debug, Deserialize)]
pub(crate) struct NewsApiArticle {
    title: Option<String>,
    description: Option<String>,
    url: String,
    source: NewsApiSourceName,
    #[serde(rename = "publishedAt")]
    published_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct NewsApiSourceName {
    name: Option<String>,
}

async fn request_articles(
    question: &str,
    api_key: &str,
    config: &RetrievalConfig,
) -> Result<Vec<CandidateItem>, RetrievalError> {
    tracing::trace!("querying external news API");

    let client = http::build_client(config)?;
    let endpoint = format!(
        "{}/v2/everything",
        config.news_api_url.trim_end_matches('/')
    );

    let response = client
        .get(&endpoint)
        .query(&[
            ("q", question),
            ("language", "en"),
            ("sortBy", "publishedAt"),
        ])
        .header("X-Api-Key", api_key)
        .send()
        .await
        .map_err(|e| RetrievalError::Http(format!("news API request failed: {e}")))?
        .error_for_status()
        .map_err(|e| RetrievalError::Http(format!("news API HTTP error: {e}")))?;

    let parsed: NewsApiResponse = response
        .json()
        .await
        .map_err(|e| RetrievalError::Parse(format!("news API response: {e}")))?;

    tracing::debug!(count = parsed.articles.len(), "external articles fetched");
    Ok(parsed.articles.into_iter().map(article_to_item).collect())
}

/// Map a provider article to a candidate item.
pub(crate) fn article_to_item(article: NewsApiArticle) -> CandidateItem {
    CandidateItem {
        kind: SourceKind::ExternalArticle,
        title: article.title.unwrap_or_default(),
        body: article.description.unwrap_or_default(),
        summary: None,
        url: article.url,
        source: article.source.name.unwrap_or_else(|| "unknown".into()),
        published_at: article.published_at,
        engagement: None,
    }
}
