//! Concrete content source clients.
//!
//! Three backing services supply the four sources: the hosted
//! headline/post store (recent news, historical news, social posts)
//! and the external news search API (external articles).

pub mod articles;
pub mod newsapi;
pub mod social;

pub use articles::{HistoricalNewsSource, RecentNewsSource};
pub use newsapi::ExternalSearchSource;
pub use social::SocialPostSource;
