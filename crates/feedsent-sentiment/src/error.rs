use thiserror::Error;

#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("invalid model: '{0}' is not one of VADER, TextBlob, HappyTransformer")]
    InvalidModel(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("classifier error: {0}")]
    Classifier(String),

    #[error("classifier backend is not configured")]
    ClassifierUnavailable,

    #[error("unsupported feed source '{0}': only http and https URLs are accepted")]
    UnsupportedSource(String),

    #[error("feed body exceeds {0} bytes")]
    FeedTooLarge(usize),

    #[error("feed read error: {0}")]
    FeedRead(#[from] std::io::Error),

    #[error("feed parse error: {0}")]
    FeedParse(#[from] feed_rs::parser::ParseFeedError),
}
