//! Term and entity extraction from a free-text question.
//!
//! Produces the two match lists the relevance scorer runs with:
//!
//! - `terms` — lowercased keywords of length > 2 with stop words removed
//! - `entities` — capitalized word sequences from the original-case
//!   question (e.g. "Mike Pence"), which score higher per match
//!
//! Both lists are deduplicated with insertion order preserved. An empty
//! question yields empty lists; there are no error cases.

use regex::Regex;

/// Stop words excluded from the term list.
const STOP_WORDS: &[&str] = &[
    "the", "and", "or", "but", "in", "on", "at", "to", "for", "with", "about",
];

/// One or more capitalized words joined by whitespace, matched against
/// the original-case question.
const ENTITY_PATTERN: &str = r"[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*";

/// Extracted search terms and entities for one question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryTerms {
    /// Deduplicated lowercase keywords, insertion order preserved.
    pub terms: Vec<String>,
    /// Deduplicated original-case entity phrases, insertion order preserved.
    pub entities: Vec<String>,
}

impl QueryTerms {
    /// Returns true if neither terms nor entities were extracted.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty() && self.entities.is_empty()
    }
}

/// Extract key terms and entities from a question.
///
/// Terms: the question is lowercased, every character outside
/// `[a-z0-9_]` and whitespace is replaced by a space, and the remaining
/// tokens are kept if longer than 2 characters and not stop words.
///
/// Entities: capitalized word sequences are taken from the
/// **original-case** question, so casing must survive any upstream
/// sanitisation for entity matching to work.
pub fn extract_key_terms(question: &str) -> QueryTerms {
    let cleaned: String = question
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    let mut terms: Vec<String> = Vec::new();
    for token in cleaned.split_whitespace() {
        if token.len() > 2
            && !STOP_WORDS.contains(&token)
            && !terms.iter().any(|t| t == token)
        {
            terms.push(token.to_string());
        }
    }

    let mut entities: Vec<String> = Vec::new();
    if let Ok(entity_re) = Regex::new(ENTITY_PATTERN) {
        for found in entity_re.find_iter(question) {
            let entity = found.as_str().to_string();
            if !entities.contains(&entity) {
                entities.push(entity);
            }
        }
    }

    QueryTerms { terms, entities }
}
