//! TextBlob-style polarity scorer.

use async_trait::async_trait;

use super::SentimentBackend;
use crate::error::SentimentError;
use crate::model::SentimentModel;
use crate::types::{Label, SentimentResult};

/// Word polarities in `[-1.0, 1.0]`, mostly adjectives.
const POLARITY: &[(&str, f64)] = &[
    ("amazing", 0.6),
    ("angry", -0.5),
    ("awesome", 1.0),
    ("awful", -1.0),
    ("bad", -0.7),
    ("beautiful", 0.85),
    ("best", 1.0),
    ("better", 0.5),
    ("boring", -1.0),
    ("brilliant", 0.9),
    ("broken", -0.4),
    ("calm", 0.3),
    ("cheap", 0.4),
    ("clean", 0.37),
    ("clear", 0.1),
    ("cool", 0.35),
    ("cruel", -1.0),
    ("dangerous", -0.6),
    ("dead", -0.2),
    ("deadly", -0.2),
    ("delicious", 1.0),
    ("delighted", 0.7),
    ("devastating", -0.6),
    ("difficult", -0.5),
    ("dirty", -0.6),
    ("disappointing", -0.6),
    ("disastrous", -0.8),
    ("dumb", -0.375),
    ("easy", 0.43),
    ("effective", 0.6),
    ("enjoyable", 0.4),
    ("evil", -1.0),
    ("excellent", 1.0),
    ("exciting", 0.3),
    ("fair", 0.7),
    ("false", -0.4),
    ("famous", 0.5),
    ("fantastic", 0.4),
    ("fine", 0.42),
    ("free", 0.4),
    ("fresh", 0.3),
    ("friendly", 0.375),
    ("fun", 0.3),
    ("funny", 0.25),
    ("glad", 0.5),
    ("good", 0.7),
    ("gorgeous", 0.7),
    ("great", 0.8),
    ("happy", 0.8),
    ("hard", -0.29),
    ("healthy", 0.5),
    ("helpful", 0.3),
    ("honest", 0.6),
    ("horrible", -1.0),
    ("hot", 0.25),
    ("important", 0.4),
    ("impressive", 1.0),
    ("incredible", 0.9),
    ("interesting", 0.5),
    ("kind", 0.6),
    ("lame", -0.5),
    ("lazy", -0.25),
    ("love", 0.5),
    ("lovely", 0.5),
    ("lucky", 0.33),
    ("mad", -0.625),
    ("magnificent", 1.0),
    ("nasty", -1.0),
    ("negative", -0.3),
    ("nice", 0.6),
    ("outstanding", 0.5),
    ("painful", -0.7),
    ("perfect", 1.0),
    ("pleasant", 0.73),
    ("pleased", 0.5),
    ("poor", -0.4),
    ("popular", 0.6),
    ("positive", 0.23),
    ("pretty", 0.25),
    ("proud", 0.8),
    ("rich", 0.375),
    ("rude", -0.3),
    ("sad", -0.5),
    ("safe", 0.5),
    ("scary", -0.5),
    ("serious", -0.33),
    ("sick", -0.71),
    ("silly", -0.5),
    ("smart", 0.21),
    ("strange", -0.05),
    ("strong", 0.43),
    ("stupid", -0.8),
    ("successful", 0.75),
    ("superb", 1.0),
    ("terrible", -1.0),
    ("terrific", 1.0),
    ("tragic", -0.75),
    ("true", 0.35),
    ("ugly", -0.7),
    ("unfair", -0.5),
    ("unhappy", -0.6),
    ("unpleasant", -0.55),
    ("upset", -0.5),
    ("useful", 0.3),
    ("useless", -0.5),
    ("violent", -0.8),
    ("weak", -0.375),
    ("weird", -0.5),
    ("wonderful", 1.0),
    ("worse", -0.4),
    ("worst", -1.0),
    ("wrong", -0.5),
];

/// Adverbs that scale the polarity of the word that follows.
const INTENSIFIERS: &[(&str, f64)] = &[
    ("absolutely", 1.5),
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("quite", 1.1),
    ("really", 1.3),
    ("so", 1.3),
    ("too", 1.3),
    ("totally", 1.3),
    ("truly", 1.3),
    ("very", 1.3),
    ("fairly", 0.8),
    ("rather", 0.9),
    ("slightly", 0.7),
    ("somewhat", 0.8),
];

const NEGATIONS: &[&str] = &["not", "never", "no", "n't", "without"];

/// A negation reaches at most this many tokens ahead.
const NEGATION_WINDOW: usize = 3;

const EXCLAMATION_FACTOR: f64 = 1.25;
const NEGATION_FACTOR: f64 = -0.5;

/// `TextBlob` backend. Labels are boundary-exclusive at `±threshold`.
#[derive(Debug, Clone)]
pub struct TextBlobBackend {
    threshold: f64,
}

impl TextBlobBackend {
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

#[async_trait]
impl SentimentBackend for TextBlobBackend {
    fn model(&self) -> SentimentModel {
        SentimentModel::TextBlob
    }

    async fn classify(&self, text: &str) -> Result<SentimentResult, SentimentError> {
        let score = polarity_score(text);
        let label = label_for(score, self.threshold);
        tracing::debug!(model = "TextBlob", score, %label, "classified text");
        Ok(SentimentResult { label, score })
    }
}

fn label_for(polarity: f64, threshold: f64) -> Label {
    if polarity > threshold {
        Label::Positive
    } else if polarity < -threshold {
        Label::Negative
    } else {
        Label::Neutral
    }
}

fn lookup(table: &[(&str, f64)], word: &str) -> Option<f64> {
    table
        .iter()
        .find(|(w, _)| *w == word)
        .map(|&(_, value)| value)
}

/// Split into lowercase word tokens and `!` marks. Contractions ending in
/// `n't` yield a separate `n't` token.
fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    let flush = |current: &mut String, tokens: &mut Vec<String>| {
        let taken = std::mem::take(current);
        let word = taken.trim_matches('\'');
        if word.is_empty() {
            return;
        }
        match word.strip_suffix("n't") {
            Some(stem) if !stem.is_empty() => {
                tokens.push(stem.to_string());
                tokens.push("n't".to_string());
            }
            _ => tokens.push(word.to_string()),
        }
    };

    for ch in text.chars() {
        if ch.is_alphanumeric() || ch == '\'' {
            current.extend(ch.to_lowercase());
        } else {
            flush(&mut current, &mut tokens);
            if ch == '!' {
                tokens.push("!".to_string());
            }
        }
    }
    flush(&mut current, &mut tokens);
    tokens
}

/// Mean polarity of all assessed words in `text`, in `[-1.0, 1.0]`.
///
/// Returns `0.0` when no word in the text carries polarity.
#[must_use]
pub fn polarity_score(text: &str) -> f64 {
    let mut assessments: Vec<f64> = Vec::new();
    let mut multiplier = 1.0_f64;
    let mut negation_ttl = 0_usize;

    for token in tokenize(text) {
        if token == "!" {
            if let Some(last) = assessments.last_mut() {
                *last *= EXCLAMATION_FACTOR;
            }
            continue;
        }

        if NEGATIONS.contains(&token.as_str()) {
            negation_ttl = NEGATION_WINDOW;
            continue;
        }

        if let Some(intensity) = lookup(INTENSIFIERS, &token) {
            multiplier *= intensity;
            continue;
        }

        if let Some(polarity) = lookup(POLARITY, &token) {
            let mut value = polarity * multiplier;
            if negation_ttl > 0 {
                value *= NEGATION_FACTOR;
            }
            assessments.push(value);
            negation_ttl = 0;
        } else {
            negation_ttl = negation_ttl.saturating_sub(1);
        }
        multiplier = 1.0;
    }

    if assessments.is_empty() {
        return 0.0;
    }

    #[allow(clippy::cast_precision_loss)]
    let mean = assessments.iter().sum::<f64>() / assessments.len() as f64;
    mean.clamp(-1.0, 1.0)
}
