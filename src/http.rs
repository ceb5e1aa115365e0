//! Shared HTTP client construction for content source requests.

use crate::config::RetrievalConfig;
use crate::error::RetrievalError;
use std::time::Duration;

/// User-Agent sent with every source request.
const USER_AGENT: &str = concat!("tracker-context/", env!("CARGO_PKG_VERSION"));

/// Build a [`reqwest::Client`] for content source requests.
///
/// The client has the configured timeout, a crate-identifying
/// User-Agent, and a bounded redirect policy.
///
/// # Errors
///
/// Returns [`RetrievalError::Http`] if the client cannot be constructed.
pub fn build_client(config: &RetrievalConfig) -> Result<reqwest::Client, RetrievalError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(USER_AGENT)
        .redirect(reqwest::redirect::Policy::limited(5))
        .build()
        .map_err(|e| RetrievalError::Http(format!("failed to build HTTP client: {e}")))
}
