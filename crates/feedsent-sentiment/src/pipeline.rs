//! Feed → classify → tally orchestration.

use crate::backend::{Backends, SentimentBackend};
use crate::error::SentimentError;
use crate::feed::FeedFetcher;
use crate::model::SentimentModel;
use crate::types::{Article, ArticleSentiment, ChartData};

/// Classify every article's title, description, and combined text.
///
/// Calls run sequentially with the same backend. The first backend error
/// aborts the batch.
///
/// # Errors
///
/// Propagates any [`SentimentError`] from the backend unchanged.
pub async fn aggregate(
    backend: &dyn SentimentBackend,
    articles: &[Article],
) -> Result<Vec<ArticleSentiment>, SentimentError> {
    let mut sentiments = Vec::with_capacity(articles.len());
    for article in articles {
        let title_label = backend.classify(&article.title).await?.label;
        let description_label = backend.classify(&article.description).await?.label;
        let both_label = backend.classify(&article.combined_text()).await?.label;
        sentiments.push(ArticleSentiment {
            title_label,
            description_label,
            both_label,
        });
    }
    Ok(sentiments)
}

/// Count labels per field into fixed-order histograms. `Unknown` is dropped.
#[must_use]
pub fn tally(sentiments: &[ArticleSentiment]) -> ChartData {
    let mut chart = ChartData::default();
    for s in sentiments {
        chart.titles.record(s.title_label);
        chart.descriptions.record(s.description_label);
        chart.both.record(s.both_label);
    }
    chart
}

/// Fetch up to `limit` articles from `feed_url` and chart their sentiment.
///
/// An unavailable feed yields all-zero histograms.
///
/// # Errors
///
/// Propagates backend errors from [`aggregate`].
pub async fn run_feed_sentiment(
    fetcher: &FeedFetcher,
    backends: &Backends,
    model: SentimentModel,
    feed_url: &str,
    limit: usize,
) -> Result<ChartData, SentimentError> {
    let articles = fetcher.fetch(feed_url, limit).await;
    tracing::info!(
        model = %model,
        feed = feed_url,
        articles = articles.len(),
        "classifying feed"
    );

    let sentiments = aggregate(backends.get(model), &articles).await?;
    Ok(tally(&sentiments))
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::types::{Label, SentimentResult};

    /// Returns labels from a fixed script, one per call.
    struct Scripted {
        labels: std::sync::Mutex<std::vec::IntoIter<Label>>,
    }

    impl Scripted {
        fn new(labels: Vec<Label>) -> Self {
            Self {
                labels: std::sync::Mutex::new(labels.into_iter()),
            }
        }
    }

    #[async_trait]
    impl SentimentBackend for Scripted {
        fn model(&self) -> SentimentModel {
            SentimentModel::HappyTransformer
        }

        async fn classify(&self, _text: &str) -> Result<SentimentResult, SentimentError> {
            let label = self
                .labels
                .lock()
                .expect("lock")
                .next()
                .ok_or_else(|| SentimentError::Classifier("script exhausted".to_string()))?;
            Ok(SentimentResult { label, score: 0.9 })
        }
    }

    #[tokio::test]
    async fn aggregate_classifies_three_fields_per_article() {
        let backend = Scripted::new(vec![
            Label::Positive,
            Label::Negative,
            Label::Unknown,
            Label::Negative,
            Label::Negative,
            Label::Positive,
        ]);
        let articles = vec![Article::new("a", "b"), Article::new("c", "d")];
        let sentiments = aggregate(&backend, &articles).await.expect("aggregate");
        assert_eq!(
            sentiments,
            vec![
                ArticleSentiment {
                    title_label: Label::Positive,
                    description_label: Label::Negative,
                    both_label: Label::Unknown,
                },
                ArticleSentiment {
                    title_label: Label::Negative,
                    description_label: Label::Negative,
                    both_label: Label::Positive,
                },
            ]
        );
    }

    #[tokio::test]
    async fn aggregate_propagates_backend_errors() {
        let backend = Scripted::new(vec![Label::Positive]);
        let result = aggregate(&backend, &[Article::new("a", "b")]).await;
        assert!(matches!(result, Err(SentimentError::Classifier(_))));
    }

    #[test]
    fn tally_drops_unknown_and_never_exceeds_n() {
        let sentiments = vec![
            ArticleSentiment {
                title_label: Label::Positive,
                description_label: Label::Unknown,
                both_label: Label::Neutral,
            },
            ArticleSentiment {
                title_label: Label::Unknown,
                description_label: Label::Unknown,
                both_label: Label::Negative,
            },
            ArticleSentiment {
                title_label: Label::Positive,
                description_label: Label::Negative,
                both_label: Label::Neutral,
            },
        ];
        let chart = tally(&sentiments);
        assert_eq!(chart.titles.data(), [2, 0, 0]);
        assert_eq!(chart.descriptions.data(), [0, 1, 0]);
        assert_eq!(chart.both.data(), [0, 1, 2]);

        let unknown_titles = sentiments
            .iter()
            .filter(|s| s.title_label == Label::Unknown)
            .count();
        assert_eq!(chart.titles.total(), sentiments.len() - unknown_titles);
    }

    #[test]
    fn tally_of_nothing_is_all_zero() {
        let chart = tally(&[]);
        assert_eq!(chart, ChartData::default());
        assert_eq!(chart.both.data(), [0, 0, 0]);
    }
}
