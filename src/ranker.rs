//! Pure ranking pipeline: score, merge, filter, sort, truncate.
//!
//! Operates entirely on in-memory batches and the injected `now`; no
//! I/O, no side effects. An unavailable source is represented as an
//! empty batch, so a partial fetch never aborts the ranking.

use chrono::{DateTime, Utc};

use crate::query::QueryTerms;
use crate::scoring::score_item;
use crate::types::{CandidateItem, ScoredItem};

/// Items must score strictly above this to appear in the output.
pub const SCORE_THRESHOLD: f64 = 2.0;

/// Maximum number of items returned to the prompt builder.
pub const MAX_CONTEXT_ITEMS: usize = 5;

/// Candidate items grouped by source, in fixed merge order.
#[derive(Debug, Clone, Default)]
pub struct SourceBatches {
    /// Neutralized headlines from the recent window.
    pub recent: Vec<CandidateItem>,
    /// Neutralized headlines from the historical window.
    pub historical: Vec<CandidateItem>,
    /// Social posts from tracked accounts.
    pub social: Vec<CandidateItem>,
    /// Third-party articles from the external search API.
    pub external: Vec<CandidateItem>,
}

impl SourceBatches {
    /// Total candidate count across all batches.
    pub fn len(&self) -> usize {
        self.recent.len() + self.historical.len() + self.social.len() + self.external.len()
    }

    /// Returns true if every batch is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Rank candidate batches against a question's extracted terms.
///
/// # Pipeline
///
/// 1. Score every item, preserving per-batch order
/// 2. Concatenate batches in fixed order: recent, historical, social, external
/// 3. Retain items with `final_score >` [`SCORE_THRESHOLD`]
/// 4. Stable-sort descending by `final_score` (ties keep merge order)
/// 5. Truncate to [`MAX_CONTEXT_ITEMS`]
///
/// Deterministic for a given candidate set, query and `now`.
pub fn rank(batches: SourceBatches, query: &QueryTerms, now: DateTime<Utc>) -> Vec<ScoredItem> {
    let SourceBatches {
        recent,
        historical,
        social,
        external,
    } = batches;

    let mut scored: Vec<ScoredItem> = recent
        .into_iter()
        .chain(historical)
        .chain(social)
        .chain(external)
        .map(|item| score_item(item, query, now))
        .filter(|scored| scored.final_score > SCORE_THRESHOLD)
        .collect();

    // Vec::sort_by is stable, which the tie-order contract relies on.
    scored.sort_by(|a, b| {
        b.final_score
            .partial_cmp(&a.final_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored.truncate(MAX_CONTEXT_ITEMS);

    tracing::debug!(count = scored.len(), "ranked context items");
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EngagementMetrics, SourceKind};
    use chrono::{Duration, TimeZone};

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 26, 12, 0, 0).unwrap()
    }

    fn make_item(kind: SourceKind, body: &str) -> CandidateItem {
        CandidateItem {
            kind,
            title: String::new(),
            body: body.to_string(),
            summary: None,
            url: format!("https://example.com/{}", body.len()),
            source: "Example".into(),
            published_at: fixed_now(),
            engagement: None,
        }
    }

    fn terms(words: &[&str]) -> QueryTerms {
        QueryTerms {
            terms: words.iter().map(|w| (*w).to_string()).collect(),
            entities: Vec::new(),
        }
    }

    #[test]
    fn empty_batches_rank_empty() {
        let ranked = rank(SourceBatches::default(), &terms(&["tariff"]), fixed_now());
        assert!(ranked.is_empty());
    }

    #[test]
    fn output_sorted_descending() {
        // Scores 10, 7, 9 → expect 10, 9, 7.
        let batches = SourceBatches {
            recent: vec![
                // 5 + 10×0.5 = 10
                make_item(SourceKind::RecentNews, &"tariff ".repeat(10)),
                // 5 + 4×0.5 = 7
                make_item(SourceKind::RecentNews, &"tariff ".repeat(4)),
                // 5 + 8×0.5 = 9
                make_item(SourceKind::RecentNews, &"tariff ".repeat(8)),
            ],
            ..Default::default()
        };
        let ranked = rank(batches, &terms(&["tariff"]), fixed_now());
        assert_eq!(ranked.len(), 3);
        assert!((ranked[0].final_score - 10.0).abs() < f64::EPSILON);
        assert!((ranked[1].final_score - 9.0).abs() < f64::EPSILON);
        assert!((ranked[2].final_score - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn low_scores_filtered_out() {
        let batches = SourceBatches {
            // External base is 2.0; with no matches, 2.0 is not > 2.0.
            external: vec![make_item(SourceKind::ExternalArticle, "unrelated")],
            ..Default::default()
        };
        let ranked = rank(batches, &terms(&["tariff"]), fixed_now());
        assert!(ranked.is_empty());
    }

    #[test]
    fn threshold_is_strictly_greater_than() {
        // One external item barely above threshold, one exactly at it.
        let above = make_item(SourceKind::ExternalArticle, "tariff");
        let at = make_item(SourceKind::ExternalArticle, "unrelated");
        let batches = SourceBatches {
            external: vec![above, at],
            ..Default::default()
        };
        let ranked = rank(batches, &terms(&["tariff"]), fixed_now());
        assert_eq!(ranked.len(), 1);
        assert!((ranked[0].final_score - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn stale_historical_item_excluded() {
        let now = fixed_now();
        let mut item = make_item(SourceKind::HistoricalNews, "unrelated");
        item.published_at = now - Duration::days(10);
        let batches = SourceBatches {
            historical: vec![item],
            ..Default::default()
        };
        // 3.0 − 2.0 = 1.0 ≤ 2.0 → excluded.
        let ranked = rank(batches, &terms(&["tariff"]), now);
        assert!(ranked.is_empty());
    }

    #[test]
    fn truncates_to_top_five() {
        let batches = SourceBatches {
            recent: (0..7)
                .map(|i| make_item(SourceKind::RecentNews, &"tariff ".repeat(i + 1)))
                .collect(),
            ..Default::default()
        };
        let ranked = rank(batches, &terms(&["tariff"]), fixed_now());
        assert_eq!(ranked.len(), MAX_CONTEXT_ITEMS);
        // Top 5 by score: repeats 7..3 → 8.5, 8.0, 7.5, 7.0, 6.5.
        assert!((ranked[0].final_score - 8.5).abs() < f64::EPSILON);
        assert!((ranked[4].final_score - 6.5).abs() < f64::EPSILON);
    }

    #[test]
    fn ties_keep_merge_order() {
        // A recent item and a social post with equal final scores: the
        // recent batch is merged first, so it must rank first.
        let recent = make_item(SourceKind::RecentNews, "unrelated");
        let mut social = make_item(SourceKind::SocialPost, "unrelated");
        social.engagement = Some(EngagementMetrics {
            like_count: 1000,
            share_count: 0,
            reply_count: 0,
        });
        let batches = SourceBatches {
            recent: vec![recent],
            social: vec![social],
            ..Default::default()
        };
        let ranked = rank(batches, &QueryTerms::default(), fixed_now());
        assert_eq!(ranked.len(), 2);
        assert!((ranked[0].final_score - 5.0).abs() < f64::EPSILON);
        assert!((ranked[1].final_score - 5.0).abs() < f64::EPSILON);
        assert_eq!(ranked[0].item.kind, SourceKind::RecentNews);
        assert_eq!(ranked[1].item.kind, SourceKind::SocialPost);
    }

    #[test]
    fn mixed_sources_rank_together() {
        let now = fixed_now();
        let mut historical = make_item(SourceKind::HistoricalNews, "tariff tariff tariff");
        historical.published_at = now - Duration::days(2);
        let batches = SourceBatches {
            recent: vec![make_item(SourceKind::RecentNews, "tariff")],
            historical: vec![historical],
            social: vec![make_item(SourceKind::SocialPost, "tariff tariff")],
            external: vec![make_item(SourceKind::ExternalArticle, "tariff")],
        };
        let ranked = rank(batches, &terms(&["tariff"]), now);
        assert_eq!(ranked.len(), 4);
        for window in ranked.windows(2) {
            assert!(window[0].final_score >= window[1].final_score);
        }
        // recent: 5.5, social: 5.0, historical: 3 + 1.5 − 0.4 = 4.1, external: 2.5
        assert_eq!(ranked[0].item.kind, SourceKind::RecentNews);
        assert_eq!(ranked[1].item.kind, SourceKind::SocialPost);
        assert_eq!(ranked[2].item.kind, SourceKind::HistoricalNews);
        assert_eq!(ranked[3].item.kind, SourceKind::ExternalArticle);
    }

    #[test]
    fn batches_len_and_is_empty() {
        let mut batches = SourceBatches::default();
        assert!(batches.is_empty());
        batches.social.push(make_item(SourceKind::SocialPost, "x"));
        assert_eq!(batches.len(), 1);
        assert!(!batches.is_empty());
    }
}
