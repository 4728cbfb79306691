use serde::{Deserialize, Serialize};

/// Discrete sentiment label.
///
/// `Unknown` is a valid classification outcome but never a reported
/// histogram bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    Positive,
    Negative,
    Neutral,
    Unknown,
}

impl Label {
    /// Labels reported in every histogram, in chart order.
    pub const REPORTED: [Label; 3] = [Label::Positive, Label::Negative, Label::Neutral];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Label::Positive => "Positive",
            Label::Negative => "Negative",
            Label::Neutral => "Neutral",
            Label::Unknown => "Unknown",
        }
    }

    fn bucket(self) -> Option<usize> {
        Label::REPORTED.iter().position(|&l| l == self)
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of a single classification call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentResult {
    pub label: Label,
    /// Backend-specific score: VADER compound, `TextBlob` polarity, or
    /// classifier confidence.
    pub score: f64,
}

/// One feed entry reduced to the two fields that get classified.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Article {
    pub title: String,
    pub description: String,
}

impl Article {
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Title and description joined by a single space.
    #[must_use]
    pub fn combined_text(&self) -> String {
        format!("{} {}", self.title, self.description)
    }
}

/// Labels for one article. The three labels are computed independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ArticleSentiment {
    pub title_label: Label,
    pub description_label: Label,
    pub both_label: Label,
}

/// Fixed-order label counts: always `[Positive, Negative, Neutral]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Histogram {
    labels: [Label; 3],
    data: [usize; 3],
}

impl Default for Histogram {
    fn default() -> Self {
        Self {
            labels: Label::REPORTED,
            data: [0; 3],
        }
    }
}

impl Histogram {
    /// Count one occurrence of `label`. `Unknown` is dropped.
    pub fn record(&mut self, label: Label) {
        if let Some(idx) = label.bucket() {
            self.data[idx] += 1;
        }
    }

    #[must_use]
    pub fn data(&self) -> [usize; 3] {
        self.data
    }

    /// Sum of the reported buckets.
    #[must_use]
    pub fn total(&self) -> usize {
        self.data.iter().sum()
    }
}

/// Chart payload for a whole feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChartData {
    pub titles: Histogram,
    pub descriptions: Histogram,
    pub both: Histogram,
}
