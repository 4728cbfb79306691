mod api;
mod middleware;

use std::sync::Arc;

use feedsent_sentiment::{build_http_client, Backends, FeedFetcher, TeiClassifier};
use tracing_subscriber::EnvFilter;

use crate::api::{build_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = feedsent_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let client = build_http_client(config.request_timeout_secs, &config.user_agent)?;
    let classifier = config
        .classifier_url
        .as_deref()
        .map(|url| TeiClassifier::new(client.clone(), url));
    if classifier.is_none() {
        tracing::warn!("FEEDSENT_CLASSIFIER_URL not set; HappyTransformer requests will fail");
    }

    let state = AppState {
        backends: Arc::new(Backends::new(config.neutral_threshold, classifier)),
        fetcher: FeedFetcher::new(client),
        article_limit: config.article_limit,
    };
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "feedsent server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
