//! Formatting ranked items into a prompt context string.
//!
//! The downstream prompt builder embeds this string verbatim in the
//! system prompt. Each item renders as one text block; blocks are
//! joined by blank lines. Empty input renders an empty string — the
//! prompt builder is responsible for the "no context" wording.

use crate::types::ScoredItem;

/// Render ranked items as prompt context blocks.
pub fn format_context(items: &[ScoredItem]) -> String {
    items
        .iter()
        .map(format_block)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Render a single item:
///
/// ```text
/// [2026-08-25 12:00 UTC] Senate advances tariff measure
/// The chamber voted 52-48 to advance the measure.
/// Summary: ...            (articles with a summary)
/// Engagement: 1500 likes, 300 shares   (social posts)
/// Source: Example Wire
/// URL: https://example.com/article
/// Relevance Score: 7.50
/// ```
fn format_block(scored: &ScoredItem) -> String {
    let item = &scored.item;
    let mut block = format!(
        "[{}] {}\n{}",
        item.published_at.format("%Y-%m-%d %H:%M UTC"),
        item.title,
        item.body
    );
    if let Some(summary) = &item.summary {
        block.push_str(&format!("\nSummary: {summary}"));
    }
    if let Some(metrics) = &item.engagement {
        block.push_str(&format!(
            "\nEngagement: {} likes, {} shares",
            metrics.like_count, metrics.share_count
        ));
    }
    block.push_str(&format!(
        "\nSource: {}\nURL: {}\nRelevance Score: {:.2}",
        item.source, item.url, scored.final_score
    ));
    block
}
