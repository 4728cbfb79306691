//! The closed set of selectable sentiment models.

use std::str::FromStr;

use crate::error::SentimentError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentimentModel {
    Vader,
    TextBlob,
    HappyTransformer,
}

impl SentimentModel {
    /// All models in display order.
    pub const ALL: [SentimentModel; 3] = [
        SentimentModel::Vader,
        SentimentModel::TextBlob,
        SentimentModel::HappyTransformer,
    ];

    /// Wire name accepted by the API and CLI.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SentimentModel::Vader => "VADER",
            SentimentModel::TextBlob => "TextBlob",
            SentimentModel::HappyTransformer => "HappyTransformer",
        }
    }

    #[must_use]
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|m| m.as_str()).collect()
    }
}

impl std::fmt::Display for SentimentModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SentimentModel {
    type Err = SentimentError;

    /// Exact, case-sensitive match on the wire name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| SentimentError::InvalidModel(s.to_string()))
    }
}
