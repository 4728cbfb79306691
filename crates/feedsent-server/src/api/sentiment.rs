use axum::{extract::State, Extension, Json};
use feedsent_sentiment::{run_feed_sentiment, ChartData, Label, SentimentModel};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{map_sentiment_error, ApiError, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct PredictRequest {
    pub text: String,
    pub model: String,
}

#[derive(Debug, Serialize)]
pub(super) struct PredictResponse {
    pub label: Label,
    pub prediction: f64,
}

#[derive(Debug, Deserialize)]
pub(super) struct FeedRequest {
    pub feed_url: String,
    pub model: String,
}

pub(super) async fn predict_sentiment(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, ApiError> {
    let result = state
        .backends
        .classify(&body.model, &body.text)
        .await
        .map_err(|e| map_sentiment_error(req_id.0, &e))?;

    Ok(Json(PredictResponse {
        label: result.label,
        prediction: result.score,
    }))
}

pub(super) async fn predict_sentiments_from_rss(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<FeedRequest>,
) -> Result<Json<ChartData>, ApiError> {
    let model: SentimentModel = body
        .model
        .parse()
        .map_err(|e| map_sentiment_error(req_id.0.clone(), &e))?;

    let chart = run_feed_sentiment(
        &state.fetcher,
        &state.backends,
        model,
        &body.feed_url,
        state.article_limit,
    )
    .await
    .map_err(|e| map_sentiment_error(req_id.0, &e))?;

    Ok(Json(chart))
}
