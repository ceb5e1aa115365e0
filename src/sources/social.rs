//! Social post store client.
//!
//! Reads the `x_posts` table through the store's REST interface:
//! not-deleted posts, newest first, capped at the configured limit.
//! Neutralized post content wins over the raw content when present.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::config::RetrievalConfig;
use crate::error::RetrievalError;
use crate::http;
use crate::source::ContentSource;
use crate::types::{CandidateItem, EngagementMetrics, SourceKind};

/// Social posts from tracked accounts.
pub struct SocialPostSource;

impl ContentSource for SocialPostSource {
    async fn fetch(
        &self,
        _question: &str,
        config: &RetrievalConfig,
    ) -> Result<Vec<CandidateItem>, RetrievalError> {
        tracing::trace!(limit = config.social_post_limit, "fetching social posts");

        let client = http::build_client(config)?;
        let endpoint = format!("{}/rest/v1/x_posts", config.store_url.trim_end_matches('/'));

        let query: Vec<(&str, String)> = vec![
            ("select", "*".into()),
            ("deleted_at", "is.null".into()),
            ("order", "posted_at.desc".into()),
            ("limit", config.social_post_limit.to_string()),
        ];

        let response = client
            .get(&endpoint)
            .query(&query)
            .header("apikey", &config.store_api_key)
            .bearer_auth(&config.store_api_key)
            .send()
            .await
            .map_err(|e| RetrievalError::Http(format!("post store request failed: {e}")))?
            .error_for_status()
            .map_err(|e| RetrievalError::Http(format!("post store HTTP error: {e}")))?;

        let records: Vec<PostRecord> = response
            .json()
            .await
            .map_err(|e| RetrievalError::Parse(format!("post store response: {e}")))?;

        tracing::debug!(count = records.len(), "social posts fetched");
        Ok(records.into_iter().map(post_to_item).collect())
    }

    fn kind(&self) -> SourceKind {
        SourceKind::SocialPost
    }
}

/// One row of the store's `x_posts` table. Unknown columns are ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct PostRecord {
    post_id: String,
    author_username: String,
    content: String,
    neutral_content: Option<String>,
    posted_at: DateTime<Utc>,
    likes_count: u64,
    retweets_count: u64,
    replies_count: u64,
}

/// Map a post row to a candidate item.
///
/// The title is synthesized from the author handle for display; the
/// relevance scorer matches against the body only.
pub(crate) fn post_to_item(record: PostRecord) -> CandidateItem {
    CandidateItem {
        kind: SourceKind::SocialPost,
        title: format!("Post from @{}", record.author_username),
        body: record.neutral_content.unwrap_or(record.content),
        summary: None,
        url: format!("https://twitter.com/i/web/status/{}", record.post_id),
        source: "X (Twitter)".into(),
        published_at: record.posted_at,
        engagement: Some(EngagementMetrics {
            like_count: record.likes_count,
            share_count: record.retweets_count,
            reply_count: record.replies_count,
        }),
    }
}
