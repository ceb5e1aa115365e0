//! Error types for the tracker-context crate.
//!
//! All errors use stable string messages suitable for display and
//! programmatic handling. Store API keys never appear in error messages.

/// Errors that can occur during context retrieval.
///
/// Note that a failing content source is **not** an error at the crate
/// boundary: the orchestrator treats it as an empty source and proceeds,
/// so an all-sources-failed ranking is simply empty output.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    /// Invalid retrieval configuration.
    #[error("config error: {0}")]
    Config(String),

    /// An HTTP request to a content source failed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Failed to parse a content source response body.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Convenience type alias for tracker-context results.
pub type Result<T> = std::result::Result<T, RetrievalError>;
