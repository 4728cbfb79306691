//! Sentiment backends and the model-keyed registry that dispatches to them.

mod textblob;
mod transformer;
mod vader;

use async_trait::async_trait;

use crate::error::SentimentError;
use crate::model::SentimentModel;
use crate::types::SentimentResult;

pub use textblob::{polarity_score, TextBlobBackend};
pub use transformer::{Prediction, TeiClassifier, TransformerBackend};
pub use vader::{compound_score, VaderBackend};

/// A scoring engine that turns text into a label and a continuous score.
#[async_trait]
pub trait SentimentBackend: Send + Sync {
    /// The model this backend implements.
    fn model(&self) -> SentimentModel;

    /// Classify `text`.
    ///
    /// # Errors
    ///
    /// Lexicon-based backends never fail. The classifier backend returns
    /// [`SentimentError::Classifier`] or [`SentimentError::Http`] when the
    /// inference server misbehaves.
    async fn classify(&self, text: &str) -> Result<SentimentResult, SentimentError>;
}

/// All three backends, constructed once and shared read-only.
pub struct Backends {
    vader: VaderBackend,
    textblob: TextBlobBackend,
    transformer: TransformerBackend,
}

impl Backends {
    /// `threshold` is shared by the VADER and `TextBlob` backends. Without a
    /// classifier, `HappyTransformer` requests fail with
    /// [`SentimentError::ClassifierUnavailable`].
    #[must_use]
    pub fn new(threshold: f64, classifier: Option<TeiClassifier>) -> Self {
        Self {
            vader: VaderBackend::new(threshold),
            textblob: TextBlobBackend::new(threshold),
            transformer: TransformerBackend::new(classifier),
        }
    }

    #[must_use]
    pub fn get(&self, model: SentimentModel) -> &dyn SentimentBackend {
        match model {
            SentimentModel::Vader => &self.vader,
            SentimentModel::TextBlob => &self.textblob,
            SentimentModel::HappyTransformer => &self.transformer,
        }
    }

    /// Classify `text` with the model named `model_name`.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::InvalidModel`] for names outside the
    /// supported set, otherwise whatever the selected backend returns.
    pub async fn classify(
        &self,
        model_name: &str,
        text: &str,
    ) -> Result<SentimentResult, SentimentError> {
        let model: SentimentModel = model_name.parse()?;
        self.get(model).classify(text).await
    }
}
