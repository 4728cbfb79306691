//! RSS/Atom feed fetcher.

use feed_rs::model::Entry;
use tokio::io::AsyncReadExt;

use crate::error::SentimentError;
use crate::types::Article;

/// Number of articles taken from a feed when the caller does not say.
pub const DEFAULT_ARTICLE_LIMIT: usize = 50;

/// Largest feed document read, remote or local. Bigger bodies are rejected.
pub const MAX_FEED_BYTES: usize = 5 * 1024 * 1024;

/// Fetches feeds over HTTP(S), and from the local filesystem when enabled.
#[derive(Debug, Clone)]
pub struct FeedFetcher {
    client: reqwest::Client,
    allow_local: bool,
}

impl FeedFetcher {
    /// A fetcher that only accepts `http://` and `https://` sources.
    #[must_use]
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            allow_local: false,
        }
    }

    /// A fetcher that also reads sources without an http(s) scheme as file
    /// paths. Only for trusted callers such as the CLI.
    #[must_use]
    pub fn with_local_files(client: reqwest::Client) -> Self {
        Self {
            client,
            allow_local: true,
        }
    }

    /// Fetch up to `limit` articles from `source`, in feed order.
    ///
    /// Never fails: a rejected, unreachable, oversized, or unparsable source
    /// is logged and yields an empty list.
    pub async fn fetch(&self, source: &str, limit: usize) -> Vec<Article> {
        match self.try_fetch(source, limit).await {
            Ok(articles) => {
                tracing::debug!(source, count = articles.len(), "fetched feed");
                articles
            }
            Err(e) => {
                tracing::warn!(source, error = %e, "feed unavailable; treating as empty");
                Vec::new()
            }
        }
    }

    /// Like [`FeedFetcher::fetch`] but surfaces the failure.
    ///
    /// `source` is fetched over HTTP when it has an `http://` or `https://`
    /// scheme. Anything else is read as a file path (a `file://` prefix is
    /// stripped) if this fetcher allows local files, and rejected otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::UnsupportedSource`] for a local source on a
    /// remote-only fetcher, [`SentimentError::Http`] on network failure or a
    /// non-success status, [`SentimentError::FeedRead`] if a local file cannot
    /// be read, [`SentimentError::FeedTooLarge`] past [`MAX_FEED_BYTES`], and
    /// [`SentimentError::FeedParse`] if the document is not a feed.
    pub async fn try_fetch(
        &self,
        source: &str,
        limit: usize,
    ) -> Result<Vec<Article>, SentimentError> {
        let body = if is_remote(source) {
            self.read_remote(source).await?
        } else if self.allow_local {
            let path = source.strip_prefix("file://").unwrap_or(source);
            read_local(path).await?
        } else {
            return Err(SentimentError::UnsupportedSource(source.to_string()));
        };
        parse_articles(&body, limit)
    }

    async fn read_remote(&self, url: &str) -> Result<Vec<u8>, SentimentError> {
        let mut response = self.client.get(url).send().await?.error_for_status()?;
        if response
            .content_length()
            .is_some_and(|len| len > MAX_FEED_BYTES as u64)
        {
            return Err(SentimentError::FeedTooLarge(MAX_FEED_BYTES));
        }

        let mut body = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            if body.len() + chunk.len() > MAX_FEED_BYTES {
                return Err(SentimentError::FeedTooLarge(MAX_FEED_BYTES));
            }
            body.extend_from_slice(&chunk);
        }
        Ok(body)
    }
}

async fn read_local(path: &str) -> Result<Vec<u8>, SentimentError> {
    let file = tokio::fs::File::open(path).await?;
    let mut body = Vec::new();
    file.take(MAX_FEED_BYTES as u64 + 1)
        .read_to_end(&mut body)
        .await?;
    if body.len() > MAX_FEED_BYTES {
        return Err(SentimentError::FeedTooLarge(MAX_FEED_BYTES));
    }
    Ok(body)
}

fn is_remote(source: &str) -> bool {
    let lower = source.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Parse a feed document and keep the first `limit` entries.
///
/// # Errors
///
/// Returns [`SentimentError::FeedParse`] if `body` is not RSS, Atom, or JSON Feed.
pub fn parse_articles(body: &[u8], limit: usize) -> Result<Vec<Article>, SentimentError> {
    let feed = feed_rs::parser::parse(body)?;
    Ok(feed
        .entries
        .into_iter()
        .take(limit)
        .map(article_from_entry)
        .collect())
}

/// Missing fields become empty strings. The description prefers the
/// summary and falls back to the content body.
fn article_from_entry(entry: Entry) -> Article {
    let title = entry.title.map(|t| t.content).unwrap_or_default();
    let description = entry
        .summary
        .map(|t| t.content)
        .or_else(|| entry.content.and_then(|c| c.body))
        .unwrap_or_default();
    Article { title, description }
}
