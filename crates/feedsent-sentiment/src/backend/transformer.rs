//! SST-2 sentiment classifier served by a TEI (Text Embeddings Inference) server.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::SentimentBackend;
use crate::error::SentimentError;
use crate::model::SentimentModel;
use crate::types::{Label, SentimentResult};

/// One `(label, score)` pair returned by TEI's `/predict`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Prediction {
    pub label: String,
    pub score: f64,
}

#[derive(Serialize)]
struct PredictRequest<'a> {
    inputs: &'a str,
}

/// TEI answers with one object, a flat list, or a list per input.
#[derive(Deserialize)]
#[serde(untagged)]
enum PredictResponse {
    Single(Prediction),
    Flat(Vec<Prediction>),
    Batched(Vec<Vec<Prediction>>),
}

impl PredictResponse {
    fn into_predictions(self) -> Vec<Prediction> {
        match self {
            PredictResponse::Single(p) => vec![p],
            PredictResponse::Flat(ps) => ps,
            PredictResponse::Batched(batches) => batches.into_iter().next().unwrap_or_default(),
        }
    }
}

/// TEI HTTP client for a sequence-classification model.
#[derive(Debug, Clone)]
pub struct TeiClassifier {
    client: reqwest::Client,
    url: String,
}

impl TeiClassifier {
    /// Create a classifier that posts to `{base_url}/predict`.
    #[must_use]
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            url: format!("{}/predict", base_url.trim_end_matches('/')),
        }
    }

    /// Return the highest-scoring prediction for `text`.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Http`] if the request cannot be sent and
    /// [`SentimentError::Classifier`] on a non-success status, an unparsable
    /// body, or an empty prediction list.
    pub async fn predict(&self, text: &str) -> Result<Prediction, SentimentError> {
        let response = self
            .client
            .post(&self.url)
            .json(&PredictRequest { inputs: text })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SentimentError::Classifier(format!(
                "TEI returned status {status}"
            )));
        }

        let body = response.text().await?;
        let parsed: PredictResponse = serde_json::from_str(&body)
            .map_err(|e| SentimentError::Classifier(format!("TEI response parse error: {e}")))?;

        parsed
            .into_predictions()
            .into_iter()
            .max_by(|a, b| a.score.total_cmp(&b.score))
            .ok_or_else(|| SentimentError::Classifier("TEI returned no predictions".to_string()))
    }
}

/// `HappyTransformer` backend. Only ever yields Positive, Negative, or Unknown.
#[derive(Debug, Clone)]
pub struct TransformerBackend {
    classifier: Option<TeiClassifier>,
}

impl TransformerBackend {
    #[must_use]
    pub fn new(classifier: Option<TeiClassifier>) -> Self {
        Self { classifier }
    }
}

#[async_trait]
impl SentimentBackend for TransformerBackend {
    fn model(&self) -> SentimentModel {
        SentimentModel::HappyTransformer
    }

    async fn classify(&self, text: &str) -> Result<SentimentResult, SentimentError> {
        let classifier = self
            .classifier
            .as_ref()
            .ok_or(SentimentError::ClassifierUnavailable)?;
        let prediction = classifier.predict(text).await?;
        let label = label_for(&prediction.label);
        tracing::debug!(
            model = "HappyTransformer",
            raw_label = %prediction.label,
            score = prediction.score,
            %label,
            "classified text"
        );
        Ok(SentimentResult {
            label,
            score: prediction.score,
        })
    }
}

fn label_for(raw: &str) -> Label {
    match raw {
        "POSITIVE" => Label::Positive,
        "NEGATIVE" => Label::Negative,
        _ => Label::Unknown,
    }
}
