mod sentiment;

use std::sync::Arc;

use axum::{
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use feedsent_sentiment::{Backends, FeedFetcher, SentimentError, SentimentModel};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::request_id;

#[derive(Clone)]
pub struct AppState {
    pub backends: Arc<Backends>,
    pub fetcher: FeedFetcher,
    pub article_limit: usize,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct ModelsData {
    models: Vec<&'static str>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "invalid_model" => StatusCode::BAD_REQUEST,
            "classifier_error" => StatusCode::BAD_GATEWAY,
            "classifier_unavailable" => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

pub(super) fn map_sentiment_error(request_id: String, error: &SentimentError) -> ApiError {
    match error {
        SentimentError::InvalidModel(_) => {
            ApiError::new(request_id, "invalid_model", error.to_string())
        }
        SentimentError::ClassifierUnavailable => {
            ApiError::new(request_id, "classifier_unavailable", error.to_string())
        }
        SentimentError::Classifier(_) | SentimentError::Http(_) => {
            tracing::error!(error = %error, "classifier request failed");
            ApiError::new(request_id, "classifier_error", error.to_string())
        }
        SentimentError::UnsupportedSource(_)
        | SentimentError::FeedTooLarge(_)
        | SentimentError::FeedRead(_)
        | SentimentError::FeedParse(_) => {
            tracing::error!(error = %error, "unexpected feed error");
            ApiError::new(request_id, "internal_error", "feed processing failed")
        }
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static("x-request-id")])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/predict-sentiment", post(sentiment::predict_sentiment))
        .route(
            "/predict-sentiments-from-rss",
            post(sentiment::predict_sentiments_from_rss),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn index() -> Json<ModelsData> {
    Json(ModelsData {
        models: SentimentModel::names(),
    })
}

async fn health() -> Json<HealthData> {
    Json(HealthData { status: "ok" })
}
