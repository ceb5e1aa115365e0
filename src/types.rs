//! Core types for candidate content items and ranked context.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four content sources a chat context can draw on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceKind {
    /// Neutralized headlines published within the recent window (24h).
    RecentNews,
    /// Neutralized headlines from the wider historical window (7d).
    HistoricalNews,
    /// Social media posts from tracked accounts.
    SocialPost,
    /// Third-party articles from the external news search API.
    ExternalArticle,
}

impl SourceKind {
    /// Returns the snake_case name of this source kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::RecentNews => "recent_news",
            Self::HistoricalNews => "historical_news",
            Self::SocialPost => "social_post",
            Self::ExternalArticle => "external_article",
        }
    }

    /// Returns the fixed base score contributed by this source kind.
    ///
    /// Recent coverage outranks social posts, which outrank historical
    /// coverage, which outranks external search results.
    pub fn base_score(&self) -> f64 {
        match self {
            Self::RecentNews => 5.0,
            Self::HistoricalNews => 3.0,
            Self::SocialPost => 4.0,
            Self::ExternalArticle => 2.0,
        }
    }

    /// Returns all source kinds in their fixed merge order.
    pub fn all() -> &'static [SourceKind] {
        &[
            Self::RecentNews,
            Self::HistoricalNews,
            Self::SocialPost,
            Self::ExternalArticle,
        ]
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Engagement counts attached to social posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementMetrics {
    /// Number of likes.
    pub like_count: u64,
    /// Number of shares/reposts.
    pub share_count: u64,
    /// Number of replies.
    pub reply_count: u64,
}

/// One piece of content considered for inclusion in a chat answer's context.
///
/// Candidate items are fetched fresh per question and carry no scores;
/// scoring happens in a single pass over the merged batches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateItem {
    /// Which source produced this item.
    pub kind: SourceKind,
    /// Display title. For social posts this is synthesized from the
    /// author handle.
    pub title: String,
    /// Main text: article description or post content, neutralized
    /// where available.
    pub body: String,
    /// Optional longer neutral summary (articles only).
    pub summary: Option<String>,
    /// Canonical URL of the item.
    pub url: String,
    /// Human-readable source name (publication or platform).
    pub source: String,
    /// Publication timestamp.
    pub published_at: DateTime<Utc>,
    /// Engagement counts, present for social posts.
    pub engagement: Option<EngagementMetrics>,
}

impl CandidateItem {
    /// Returns the text that relevance matching runs against.
    ///
    /// Articles match on title, body and summary. Social posts match on
    /// the post body only — their title is synthesized from the author
    /// handle and would distort term counts.
    pub fn match_text(&self) -> String {
        match self.kind {
            SourceKind::SocialPost => self.body.clone(),
            _ => {
                let mut text = format!("{} {}", self.title, self.body);
                if let Some(summary) = &self.summary {
                    text.push(' ');
                    text.push_str(summary);
                }
                text
            }
        }
    }
}

/// A candidate item with its computed ranking scores.
///
/// Lives only for the duration of one ranking call; scores are never
/// cached or persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredItem {
    /// The underlying content item.
    pub item: CandidateItem,
    /// Fixed per-kind base score.
    pub base_score: f64,
    /// Keyword/entity overlap score.
    pub relevance_score: f64,
    /// `base_score + relevance_score + kind-specific adjustment`.
    pub final_score: f64,
}
