//! Command handlers for the CLI. Results are printed to stdout as JSON.

use feedsent_core::AppConfig;
use feedsent_sentiment::{
    build_http_client, preprocess::preprocess_text, run_feed_sentiment, Backends, FeedFetcher,
    SentimentModel, SentimentResult, TeiClassifier,
};
use serde_json::{json, Value};

pub(crate) fn run_models() {
    for name in SentimentModel::names() {
        println!("{name}");
    }
}

/// Classify `text` with `model` and print `{label, prediction}`.
///
/// # Errors
///
/// Returns an error if the model name is unknown, the HTTP client cannot be
/// built, or the classifier backend fails.
pub(crate) async fn run_classify(
    config: &AppConfig,
    model: &str,
    text: &str,
) -> anyhow::Result<()> {
    let client = build_http_client(config.request_timeout_secs, &config.user_agent)?;
    let backends = backends_with_client(config, &client);
    let result = backends.classify(model, text).await?;
    tracing::debug!(model, label = %result.label, score = result.score, "classified text");
    println!("{}", serde_json::to_string_pretty(&prediction_json(result))?);
    Ok(())
}

/// Fetch `url`, classify up to `limit` entries, and print the chart data.
///
/// # Errors
///
/// Returns an error if the model name is unknown or a classification fails.
/// An unreachable feed is not an error; it produces all-zero histograms.
pub(crate) async fn run_feed(
    config: &AppConfig,
    model: &str,
    url: &str,
    limit: Option<usize>,
) -> anyhow::Result<()> {
    let model: SentimentModel = model.parse()?;
    let client = build_http_client(config.request_timeout_secs, &config.user_agent)?;
    let backends = backends_with_client(config, &client);
    let fetcher = FeedFetcher::with_local_files(client);
    let limit = limit.unwrap_or(config.article_limit);
    tracing::info!(model = %model, limit, source = url, "charting feed sentiment");

    let chart = run_feed_sentiment(&fetcher, &backends, model, url, limit).await?;
    println!("{}", serde_json::to_string_pretty(&chart)?);
    Ok(())
}

pub(crate) fn run_preprocess(text: &str) {
    println!("{}", preprocess_text(text));
}

fn backends_with_client(config: &AppConfig, client: &reqwest::Client) -> Backends {
    let classifier = config
        .classifier_url
        .as_deref()
        .map(|url| TeiClassifier::new(client.clone(), url));
    Backends::new(config.neutral_threshold, classifier)
}

pub(crate) fn prediction_json(result: SentimentResult) -> Value {
    json!({
        "label": result.label,
        "prediction": result.score,
    })
}
