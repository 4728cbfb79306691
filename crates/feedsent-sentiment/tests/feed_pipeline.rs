//! End-to-end tests for fetch → classify → tally against a mocked feed server.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use feedsent_sentiment::{
    run_feed_sentiment, Backends, FeedFetcher, SentimentError, SentimentModel, TeiClassifier,
    DEFAULT_ARTICLE_LIMIT, DEFAULT_NEUTRAL_THRESHOLD, MAX_FEED_BYTES,
};

const TWO_ENTRY_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Daily News</title>
    <link>https://news.example.com</link>
    <description>Headlines</description>
    <item>
      <title>Great news today</title>
      <link>https://news.example.com/1</link>
      <description>Everything is wonderful</description>
    </item>
    <item>
      <title>Terrible disaster strikes</title>
      <link>https://news.example.com/2</link>
      <description>Everyone is devastated</description>
    </item>
  </channel>
</rss>"#;

fn numbered_feed(n: usize) -> String {
    let items: String = (1..=n)
        .map(|i| format!("<item><title>Story {i}</title><description>Body {i}</description></item>"))
        .collect();
    format!(r#"<?xml version="1.0"?><rss version="2.0"><channel><title>N</title>{items}</channel></rss>"#)
}

async fn serve_feed(body: String) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rss"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/rss+xml")
                .set_body_string(body),
        )
        .mount(&server)
        .await;
    server
}

fn fetcher() -> FeedFetcher {
    FeedFetcher::new(reqwest::Client::new())
}

#[tokio::test]
async fn vader_charts_two_entry_feed() {
    let server = serve_feed(TWO_ENTRY_FEED.to_string()).await;
    let backends = Backends::new(DEFAULT_NEUTRAL_THRESHOLD, None);

    let chart = run_feed_sentiment(
        &fetcher(),
        &backends,
        SentimentModel::Vader,
        &format!("{}/rss", server.uri()),
        DEFAULT_ARTICLE_LIMIT,
    )
    .await
    .expect("pipeline");

    assert_eq!(chart.titles.data(), [1, 1, 0]);
    assert_eq!(chart.descriptions.data(), [1, 1, 0]);
    assert_eq!(chart.both.data(), [1, 1, 0]);

    let json = serde_json::to_value(&chart).expect("serialize");
    assert_eq!(
        json["titles"],
        json!({ "labels": ["Positive", "Negative", "Neutral"], "data": [1, 1, 0] })
    );
}

#[tokio::test]
async fn fetch_respects_limit_and_order() {
    let server = serve_feed(numbered_feed(10)).await;
    let url = format!("{}/rss", server.uri());

    let all = fetcher().fetch(&url, 50).await;
    assert_eq!(all.len(), 10);
    assert_eq!(all[0].title, "Story 1");
    assert_eq!(all[9].title, "Story 10");

    let first_three = fetcher().fetch(&url, 3).await;
    let titles: Vec<&str> = first_three.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["Story 1", "Story 2", "Story 3"]);
}

#[tokio::test]
async fn missing_feed_yields_all_zero_chart() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let chart = run_feed_sentiment(
        &fetcher(),
        &Backends::new(DEFAULT_NEUTRAL_THRESHOLD, None),
        SentimentModel::TextBlob,
        &format!("{}/gone", server.uri()),
        DEFAULT_ARTICLE_LIMIT,
    )
    .await
    .expect("pipeline");

    assert_eq!(chart.titles.data(), [0, 0, 0]);
    assert_eq!(chart.descriptions.data(), [0, 0, 0]);
    assert_eq!(chart.both.data(), [0, 0, 0]);
}

#[tokio::test]
async fn try_fetch_surfaces_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = fetcher()
        .try_fetch(&format!("{}/rss", server.uri()), 50)
        .await
        .unwrap_err();
    assert!(matches!(err, SentimentError::Http(_)), "got {err:?}");
}

#[tokio::test]
async fn oversized_remote_body_yields_empty_articles() {
    let mut body = numbered_feed(3);
    body.push_str(&" ".repeat(MAX_FEED_BYTES));
    let server = serve_feed(body).await;
    let url = format!("{}/rss", server.uri());

    let err = fetcher().try_fetch(&url, 50).await.unwrap_err();
    assert!(matches!(err, SentimentError::FeedTooLarge(_)), "got {err:?}");
    assert!(fetcher().fetch(&url, 50).await.is_empty());
}

#[tokio::test]
async fn body_at_the_cap_is_accepted() {
    let mut body = numbered_feed(3);
    let padding = MAX_FEED_BYTES - body.len();
    body.push_str(&" ".repeat(padding));
    let server = serve_feed(body).await;

    let articles = fetcher().fetch(&format!("{}/rss", server.uri()), 50).await;
    assert_eq!(articles.len(), 3);
}

#[tokio::test]
async fn unparsable_feed_yields_empty_articles() {
    let server = serve_feed("<html><body>not a feed</body></html>".to_string()).await;
    let articles = fetcher().fetch(&format!("{}/rss", server.uri()), 50).await;
    assert!(articles.is_empty());
}

#[tokio::test]
async fn unknown_labels_are_excluded_from_histograms() {
    let feed = serve_feed(numbered_feed(2)).await;
    let tei = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{ "label": "LABEL_2", "score": 0.7 }])),
        )
        .mount(&tei)
        .await;

    let backends = Backends::new(
        DEFAULT_NEUTRAL_THRESHOLD,
        Some(TeiClassifier::new(reqwest::Client::new(), &tei.uri())),
    );
    let chart = run_feed_sentiment(
        &fetcher(),
        &backends,
        SentimentModel::HappyTransformer,
        &format!("{}/rss", feed.uri()),
        DEFAULT_ARTICLE_LIMIT,
    )
    .await
    .expect("pipeline");

    assert_eq!(chart.titles.total(), 0);
    assert_eq!(chart.descriptions.total(), 0);
    assert_eq!(chart.both.data(), [0, 0, 0]);
}

#[tokio::test]
async fn classifier_failure_fails_the_whole_feed() {
    let feed = serve_feed(numbered_feed(2)).await;
    let tei = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&tei)
        .await;

    let backends = Backends::new(
        DEFAULT_NEUTRAL_THRESHOLD,
        Some(TeiClassifier::new(reqwest::Client::new(), &tei.uri())),
    );
    let result = run_feed_sentiment(
        &fetcher(),
        &backends,
        SentimentModel::HappyTransformer,
        &format!("{}/rss", feed.uri()),
        DEFAULT_ARTICLE_LIMIT,
    )
    .await;
    assert!(matches!(result, Err(SentimentError::Classifier(_))));
}
