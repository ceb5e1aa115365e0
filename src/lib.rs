//! # tracker-context
//!
//! Relevance-ranked context retrieval for the Tracker news chat
//! assistant.
//!
//! Given a free-text question, this crate pulls candidate content from
//! four heterogeneous sources — recently neutralized headlines,
//! historical headlines, social posts, and an external news search API —
//! scores each item by keyword/entity overlap plus source-specific
//! bonuses and penalties, and returns the top ranked items for
//! inclusion in a downstream language-model prompt.
//!
//! ## Design
//!
//! - Sources are fetched concurrently; a failed source is treated as
//!   empty and never aborts the ranking
//! - Scoring and ranking are pure functions over in-memory batches and
//!   an injected timestamp, so results are deterministic under test
//! - Items must score strictly above a fixed threshold, and at most
//!   five survive, sorted by final score with stable tie order
//! - No caching: candidate items are fetched fresh per question and
//!   scores live only for the duration of one call
//!
//! ## Security
//!
//! - Store API keys never appear in errors or logs
//! - Questions are logged at trace level only
//! - This is a library, not a server — no network listeners

pub mod config;
pub mod context;
pub mod error;
pub mod http;
pub mod neutrality;
pub mod query;
pub mod ranker;
mod retrieval;
pub mod scoring;
pub mod source;
pub mod sources;
pub mod types;

pub use config::RetrievalConfig;
pub use context::format_context;
pub use error::{Result, RetrievalError};
pub use neutrality::{neutrality_label, neutrality_score, NeutralityMetrics};
pub use query::{extract_key_terms, QueryTerms};
pub use ranker::{rank, SourceBatches, MAX_CONTEXT_ITEMS, SCORE_THRESHOLD};
pub use scoring::{relevance_score, score_item};
pub use source::ContentSource;
pub use types::{CandidateItem, EngagementMetrics, ScoredItem, SourceKind};

/// Gather ranked context for a question across all configured sources.
///
/// Fetches the four sources concurrently, scores every candidate item
/// against the question's extracted terms and entities, and returns at
/// most [`MAX_CONTEXT_ITEMS`] items sorted by final score descending.
/// Sources that fail or return nothing simply contribute no items; an
/// empty result is valid and means the downstream prompt builder should
/// produce a qualified answer.
///
/// # Errors
///
/// Returns [`RetrievalError::Config`] if `config` is invalid, or
/// [`RetrievalError::Http`] if the HTTP client cannot be constructed.
/// Individual source failures are logged and do not surface here.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> tracker_context::Result<()> {
/// let config = tracker_context::RetrievalConfig {
///     store_url: "https://store.example.com".into(),
///     store_api_key: "service-key".into(),
///     ..Default::default()
/// };
/// let ranked = tracker_context::gather_context("What about the tariffs?", &config).await?;
/// let prompt_context = tracker_context::format_context(&ranked);
/// println!("{prompt_context}");
/// # Ok(())
/// # }
/// ```
pub async fn gather_context(
    question: &str,
    config: &RetrievalConfig,
) -> Result<Vec<ScoredItem>> {
    config.validate()?;
    retrieval::fetch_and_rank(question, config).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn gather_context_rejects_empty_store_url() {
        let config = RetrievalConfig::default();
        let result = gather_context("test", &config).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("store_url"));
    }

    #[tokio::test]
    async fn gather_context_rejects_zero_timeout() {
        let config = RetrievalConfig {
            store_url: "https://store.example.com".into(),
            timeout_seconds: 0,
            ..Default::default()
        };
        let result = gather_context("test", &config).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("timeout_seconds"));
    }
}
