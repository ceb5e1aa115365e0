//! Retrieval orchestrator: concurrent source fan-out, then pure ranking.
//!
//! Fetches all four sources concurrently, converts any per-source
//! failure into an empty batch at warn level, and hands the batches to
//! the pure [`rank`](crate::ranker::rank) pipeline with a single `now`
//! captured at scoring time.

use chrono::Utc;

use crate::config::RetrievalConfig;
use crate::error::RetrievalError;
use crate::query::extract_key_terms;
use crate::ranker::{rank, SourceBatches};
use crate::source::ContentSource;
use crate::sources::{
    ExternalSearchSource, HistoricalNewsSource, RecentNewsSource, SocialPostSource,
};
use crate::types::{CandidateItem, ScoredItem, SourceKind};

/// Fetch, score and rank context for one question.
///
/// # Pipeline
///
/// 1. Extract key terms and entities from the question
/// 2. Fetch all four sources concurrently
/// 3. Log per-source failures at warn level; treat them as empty batches
/// 4. Run the pure ranking pipeline against a single captured `now`
///
/// All sources empty or failed is a valid outcome: the result is an
/// empty ranking, never an error.
///
/// # Errors
///
/// Only configuration problems surface here (via
/// [`gather_context`](crate::gather_context), which validates first);
/// source failures never do.
pub(crate) async fn fetch_and_rank(
    question: &str,
    config: &RetrievalConfig,
) -> Result<Vec<ScoredItem>, RetrievalError> {
    tracing::trace!(question, "gathering chat context");

    let query = extract_key_terms(question);
    tracing::debug!(
        terms = query.terms.len(),
        entities = query.entities.len(),
        "extracted query terms"
    );

    let (recent, historical, social, external) = futures::join!(
        RecentNewsSource.fetch(question, config),
        HistoricalNewsSource.fetch(question, config),
        SocialPostSource.fetch(question, config),
        ExternalSearchSource.fetch(question, config),
    );

    let batches = SourceBatches {
        recent: items_or_empty(SourceKind::RecentNews, recent),
        historical: items_or_empty(SourceKind::HistoricalNews, historical),
        social: items_or_empty(SourceKind::SocialPost, social),
        external: items_or_empty(SourceKind::ExternalArticle, external),
    };

    Ok(rank(batches, &query, Utc::now()))
}

/// Collapse a source outcome into its items, logging failures.
fn items_or_empty(
    kind: SourceKind,
    outcome: Result<Vec<CandidateItem>, RetrievalError>,
) -> Vec<CandidateItem> {
    match outcome {
        Ok(items) => {
            tracing::debug!(%kind, count = items.len(), "source returned items");
            items
        }
        Err(err) => {
            tracing::warn!(%kind, error = %err, "source fetch failed; treating as empty");
            Vec::new()
        }
    }
}
