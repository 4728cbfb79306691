//! RSS sentiment classification for feedsent.
//!
//! Fetches feed entries, scores each title, description, and combined text
//! with one of three interchangeable backends (a VADER-style lexicon scorer,
//! a TextBlob-style polarity scorer, and an SST-2 classifier served over
//! HTTP), then tallies the labels into fixed-order histograms for charting.

pub mod backend;
pub mod error;
pub mod feed;
pub mod model;
pub mod pipeline;
pub mod preprocess;
pub mod types;

use std::time::Duration;

pub use backend::{Backends, SentimentBackend, TeiClassifier};
pub use error::SentimentError;
pub use feed::{FeedFetcher, DEFAULT_ARTICLE_LIMIT, MAX_FEED_BYTES};
pub use model::SentimentModel;
pub use pipeline::{aggregate, run_feed_sentiment, tally};
pub use types::{Article, ArticleSentiment, ChartData, Histogram, Label, SentimentResult};

/// Default half-width of the neutral band.
pub const DEFAULT_NEUTRAL_THRESHOLD: f64 = 0.05;

/// Build the shared outbound HTTP client used for feed and classifier calls.
///
/// # Errors
///
/// Returns [`SentimentError::Http`] if the TLS backend cannot be initialised.
pub fn build_http_client(
    timeout_secs: u64,
    user_agent: &str,
) -> Result<reqwest::Client, SentimentError> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .user_agent(user_agent)
        .build()?;
    Ok(client)
}
