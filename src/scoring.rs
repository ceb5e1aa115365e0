//! Relevance scoring and per-source score assignment.
//!
//! Each candidate item's final score is:
//!
//! ```text
//! final_score = base_score + relevance_score + type_adjustment
//! ```
//!
//! where `base_score` is fixed per source kind, `relevance_score` counts
//! keyword/entity overlap with the question, and `type_adjustment` is a
//! recency penalty for historical news or an engagement bonus for social
//! posts. The constants are heuristic tuning values.

use chrono::{DateTime, Utc};

use crate::query::QueryTerms;
use crate::types::{CandidateItem, ScoredItem, SourceKind};

/// Points per keyword occurrence in the content.
pub const TERM_MATCH_WEIGHT: f64 = 0.5;

/// Points per entity occurrence in the content. Entities (named people,
/// places, organisations) are weighted well above plain keywords.
pub const ENTITY_MATCH_WEIGHT: f64 = 2.0;

/// Score lost per fractional day of age for historical news.
pub const AGE_PENALTY_PER_DAY: f64 = 0.2;

/// Divisor converting raw like+share counts into bonus points.
pub const ENGAGEMENT_DIVISOR: f64 = 1000.0;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Score keyword/entity overlap between content and the question.
///
/// Terms are counted as non-overlapping occurrences in the lowercased
/// content at [`TERM_MATCH_WEIGHT`] each; entities are counted
/// case-insensitively at [`ENTITY_MATCH_WEIGHT`] each. There is no
/// normalisation by content length; longer content with more repeated
/// matches scores higher.
pub fn relevance_score(content: &str, query: &QueryTerms) -> f64 {
    let lowered = content.to_lowercase();

    let term_score: f64 = query
        .terms
        .iter()
        .map(|term| lowered.matches(term.as_str()).count() as f64 * TERM_MATCH_WEIGHT)
        .sum();

    let entity_score: f64 = query
        .entities
        .iter()
        .map(|entity| {
            let needle = entity.to_lowercase();
            lowered.matches(needle.as_str()).count() as f64 * ENTITY_MATCH_WEIGHT
        })
        .sum();

    term_score + entity_score
}

/// Score a single candidate item against the question.
///
/// `now` is injected rather than read from the wall clock so that the
/// historical-news recency penalty is deterministic under test.
pub fn score_item(item: CandidateItem, query: &QueryTerms, now: DateTime<Utc>) -> ScoredItem {
    let relevance = relevance_score(&item.match_text(), query);
    let base = item.kind.base_score();

    let adjustment = match item.kind {
        SourceKind::RecentNews | SourceKind::ExternalArticle => 0.0,
        SourceKind::HistoricalNews => {
            let age_days = (now - item.published_at).num_milliseconds() as f64 / MILLIS_PER_DAY;
            -(age_days * AGE_PENALTY_PER_DAY)
        }
        SourceKind::SocialPost => item.engagement.as_ref().map_or(0.0, |metrics| {
            (metrics.like_count + metrics.share_count) as f64 / ENGAGEMENT_DIVISOR
        }),
    };

    ScoredItem {
        base_score: base,
        relevance_score: relevance,
        final_score: base + relevance + adjustment,
        item,
    }
}
