//! Trait definition for pluggable content sources.
//!
//! Each source (recent news, historical news, social posts, external
//! search) implements [`ContentSource`] to provide a uniform interface
//! for fetching candidate items for one question.

use crate::config::RetrievalConfig;
use crate::error::RetrievalError;
use crate::types::{CandidateItem, SourceKind};

/// A pluggable content source.
///
/// Implementors fetch candidate items for a question from one backing
/// service and map the service's records into [`CandidateItem`] values.
/// Each source handles its own request construction, authentication and
/// response parsing.
///
/// All implementations must be `Send + Sync` for concurrent fan-out.
pub trait ContentSource: Send + Sync {
    /// Fetch candidate items for a question.
    ///
    /// # Errors
    ///
    /// Returns [`RetrievalError`] if the request fails or the response
    /// cannot be parsed. The orchestrator treats any error as an empty
    /// source — a failing source never aborts the overall ranking.
    fn fetch(
        &self,
        question: &str,
        config: &RetrievalConfig,
    ) -> impl std::future::Future<Output = Result<Vec<CandidateItem>, RetrievalError>> + Send;

    /// Returns which [`SourceKind`] this source produces.
    fn kind(&self) -> SourceKind;
}
