//! VADER-style lexicon scorer.
//!
//! Sums rule-adjusted word valences from an embedded lexicon and normalizes
//! the total into a compound score in `[-1.0, 1.0]`.

use std::collections::HashMap;
use std::sync::LazyLock;

use async_trait::async_trait;

use super::SentimentBackend;
use crate::error::SentimentError;
use crate::model::SentimentModel;
use crate::types::{Label, SentimentResult};

/// Tab-separated `word<TAB>valence` lines. Valences are roughly in `[-4, 4]`.
const RAW_LEXICON: &str = include_str!("vader_lexicon.txt");

static LEXICON: LazyLock<HashMap<&'static str, f64>> =
    LazyLock::new(|| parse_lexicon(RAW_LEXICON));

const B_INCR: f64 = 0.293;
const B_DECR: f64 = -0.293;
const C_INCR: f64 = 0.733;
const N_SCALAR: f64 = -0.74;
const NORMALIZE_ALPHA: f64 = 15.0;

const NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "dont", "hadnt",
    "hasnt", "havent", "isnt", "mightnt", "mustnt", "neither", "neednt", "never", "none", "nope",
    "nor", "not", "nothing", "nowhere", "oughtnt", "shant", "shouldnt", "uhuh", "wasnt", "werent",
    "without", "wont", "wouldnt", "rarely", "seldom", "despite",
];

const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", B_INCR),
    ("amazingly", B_INCR),
    ("awfully", B_INCR),
    ("completely", B_INCR),
    ("considerably", B_INCR),
    ("decidedly", B_INCR),
    ("deeply", B_INCR),
    ("enormously", B_INCR),
    ("entirely", B_INCR),
    ("especially", B_INCR),
    ("exceptionally", B_INCR),
    ("extremely", B_INCR),
    ("greatly", B_INCR),
    ("highly", B_INCR),
    ("hugely", B_INCR),
    ("incredibly", B_INCR),
    ("intensely", B_INCR),
    ("more", B_INCR),
    ("most", B_INCR),
    ("particularly", B_INCR),
    ("purely", B_INCR),
    ("quite", B_INCR),
    ("really", B_INCR),
    ("remarkably", B_INCR),
    ("so", B_INCR),
    ("substantially", B_INCR),
    ("thoroughly", B_INCR),
    ("totally", B_INCR),
    ("tremendously", B_INCR),
    ("truly", B_INCR),
    ("unbelievably", B_INCR),
    ("unusually", B_INCR),
    ("utterly", B_INCR),
    ("very", B_INCR),
    ("almost", B_DECR),
    ("barely", B_DECR),
    ("hardly", B_DECR),
    ("kinda", B_DECR),
    ("less", B_DECR),
    ("little", B_DECR),
    ("marginally", B_DECR),
    ("occasionally", B_DECR),
    ("partly", B_DECR),
    ("scarcely", B_DECR),
    ("slightly", B_DECR),
    ("somewhat", B_DECR),
    ("sorta", B_DECR),
];

/// VADER backend. Labels are boundary-inclusive at `±threshold`.
#[derive(Debug, Clone)]
pub struct VaderBackend {
    threshold: f64,
}

impl VaderBackend {
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

#[async_trait]
impl SentimentBackend for VaderBackend {
    fn model(&self) -> SentimentModel {
        SentimentModel::Vader
    }

    async fn classify(&self, text: &str) -> Result<SentimentResult, SentimentError> {
        let score = compound_score(text);
        let label = label_for(score, self.threshold);
        tracing::debug!(model = "VADER", score, %label, "classified text");
        Ok(SentimentResult { label, score })
    }
}

fn label_for(compound: f64, threshold: f64) -> Label {
    if compound >= threshold {
        Label::Positive
    } else if compound <= -threshold {
        Label::Negative
    } else {
        Label::Neutral
    }
}

fn parse_lexicon(raw: &'static str) -> HashMap<&'static str, f64> {
    raw.lines()
        .filter_map(|line| {
            let (word, valence) = line.split_once('\t')?;
            Some((word.trim(), valence.trim().parse().ok()?))
        })
        .collect()
}

/// Compound sentiment of `text` in `[-1.0, 1.0]`, rounded to four decimals.
///
/// Returns `0.0` for empty text or text with no lexicon words.
#[must_use]
pub fn compound_score(text: &str) -> f64 {
    let words: Vec<&str> = text.split_whitespace().map(strip_punctuation).collect();
    let lowered: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
    let cap_diff = has_cap_differential(&words);

    let mut sentiments = Vec::with_capacity(words.len());
    for (i, word) in words.iter().enumerate() {
        let lower = lowered[i].as_str();
        let kind_of = lower == "kind" && lowered.get(i + 1).is_some_and(|next| next == "of");
        if booster(lower).is_some() || kind_of {
            sentiments.push(0.0);
            continue;
        }
        sentiments.push(word_valence(word, i, &words, &lowered, cap_diff));
    }

    apply_but_rule(&lowered, &mut sentiments);

    if sentiments.is_empty() {
        return 0.0;
    }

    let mut sum: f64 = sentiments.iter().sum();
    let amplifier = punctuation_emphasis(text);
    if sum > 0.0 {
        sum += amplifier;
    } else if sum < 0.0 {
        sum -= amplifier;
    }

    let compound = (sum / (sum * sum + NORMALIZE_ALPHA).sqrt()).clamp(-1.0, 1.0);
    (compound * 10_000.0).round() / 10_000.0
}

fn word_valence(word: &str, i: usize, words: &[&str], lowered: &[String], cap_diff: bool) -> f64 {
    let Some(&base) = LEXICON.get(lowered[i].as_str()) else {
        return 0.0;
    };
    let mut valence = base;

    let preceded_by_no = (i > 0 && lowered[i - 1] == "no")
        || (i > 1 && lowered[i - 2] == "no")
        || (i > 2 && lowered[i - 3] == "no" && matches!(lowered[i - 1].as_str(), "or" | "nor"));
    if preceded_by_no {
        valence = base * N_SCALAR;
    }

    if cap_diff && is_all_caps(word) {
        valence += if valence > 0.0 { C_INCR } else { -C_INCR };
    }

    for start in 0..3 {
        if i <= start {
            break;
        }
        let prev = i - (start + 1);
        if LEXICON.contains_key(lowered[prev].as_str()) {
            continue;
        }
        let mut scalar = scalar_inc_dec(words[prev], &lowered[prev], valence, cap_diff);
        if start == 1 {
            scalar *= 0.95;
        } else if start == 2 {
            scalar *= 0.9;
        }
        valence += scalar;
        valence = negation_check(valence, lowered, start, i);
    }

    least_check(valence, lowered, i)
}

fn booster(lower: &str) -> Option<f64> {
    BOOSTERS
        .iter()
        .find(|(word, _)| *word == lower)
        .map(|&(_, scalar)| scalar)
}

fn scalar_inc_dec(word: &str, lower: &str, valence: f64, cap_diff: bool) -> f64 {
    let Some(mut scalar) = booster(lower) else {
        return 0.0;
    };
    if valence < 0.0 {
        scalar = -scalar;
    }
    if cap_diff && is_all_caps(word) {
        scalar += if valence > 0.0 { C_INCR } else { -C_INCR };
    }
    scalar
}

fn is_negated(lower: &str) -> bool {
    NEGATIONS.contains(&lower) || lower.contains("n't")
}

fn negation_check(valence: f64, lowered: &[String], start: usize, i: usize) -> f64 {
    let intensifies = |w: &str| matches!(w, "so" | "this");
    match start {
        0 if is_negated(&lowered[i - 1]) => valence * N_SCALAR,
        1 => {
            if lowered[i - 2] == "never" && intensifies(&lowered[i - 1]) {
                valence * 1.25
            } else if lowered[i - 2] == "without" && lowered[i - 1] == "doubt" {
                valence
            } else if is_negated(&lowered[i - 2]) {
                valence * N_SCALAR
            } else {
                valence
            }
        }
        2 => {
            if lowered[i - 3] == "never"
                && (intensifies(&lowered[i - 2]) || intensifies(&lowered[i - 1]))
            {
                valence * 1.25
            } else if lowered[i - 3] == "without"
                && (lowered[i - 2] == "doubt" || lowered[i - 1] == "doubt")
            {
                valence
            } else if is_negated(&lowered[i - 3]) {
                valence * N_SCALAR
            } else {
                valence
            }
        }
        _ => valence,
    }
}

/// "least" flips the following word unless part of "at least" / "very least".
fn least_check(valence: f64, lowered: &[String], i: usize) -> f64 {
    if i > 0 && lowered[i - 1] == "least" {
        let idiom = i > 1 && matches!(lowered[i - 2].as_str(), "at" | "very");
        if !idiom {
            return valence * N_SCALAR;
        }
    }
    valence
}

/// Sentiment before the first "but" is halved, after it amplified by 1.5.
fn apply_but_rule(lowered: &[String], sentiments: &mut [f64]) {
    let Some(but_idx) = lowered.iter().position(|w| w == "but") else {
        return;
    };
    for (idx, sentiment) in sentiments.iter_mut().enumerate() {
        if idx < but_idx {
            *sentiment *= 0.5;
        } else if idx > but_idx {
            *sentiment *= 1.5;
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(4);
    let questions = text.matches('?').count();

    #[allow(clippy::cast_precision_loss)]
    let ep = exclamations as f64 * 0.292;
    #[allow(clippy::cast_precision_loss)]
    let qm = match questions {
        0 | 1 => 0.0,
        2..=3 => questions as f64 * 0.18,
        _ => 0.96,
    };
    ep + qm
}

/// Strip surrounding ASCII punctuation unless that leaves two chars or fewer
/// (keeps emoticons and short tokens like `:)` intact).
fn strip_punctuation(token: &str) -> &str {
    let stripped = token.trim_matches(|c: char| c.is_ascii_punctuation());
    if stripped.chars().count() <= 2 {
        token
    } else {
        stripped
    }
}

fn is_all_caps(word: &str) -> bool {
    word.chars().any(char::is_alphabetic) && !word.chars().any(char::is_lowercase)
}

/// True when some, but not all, words are ALL CAPS.
fn has_cap_differential(words: &[&str]) -> bool {
    let caps = words.iter().filter(|w| is_all_caps(w)).count();
    caps > 0 && caps < words.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexicon_file_parses_completely() {
        let lines = RAW_LEXICON.lines().filter(|l| !l.trim().is_empty()).count();
        assert_eq!(LEXICON.len(), lines, "every lexicon line should parse once");
    }

    #[test]
    fn empty_text_scores_zero() {
        assert!(compound_score("").abs() < f64::EPSILON);
        assert!(compound_score("   ").abs() < f64::EPSILON);
    }

    #[test]
    fn unknown_words_score_zero() {
        assert!(compound_score("the quick brown fox").abs() < f64::EPSILON);
    }

    #[test]
    fn headline_polarity() {
        assert!(compound_score("Great news today") >= 0.05);
        assert!(compound_score("Everything is wonderful") >= 0.05);
        assert!(compound_score("Terrible disaster strikes") <= -0.05);
        assert!(compound_score("Everyone is devastated") <= -0.05);
    }

    #[test]
    fn negation_flips_sign() {
        assert!(compound_score("this is good") > 0.0);
        assert!(compound_score("this is not good") < 0.0);
        assert!(compound_score("this isn't good") < 0.0);
    }

    #[test]
    fn booster_strengthens() {
        assert!(compound_score("very good") > compound_score("good"));
        assert!(compound_score("slightly good") < compound_score("good"));
    }

    #[test]
    fn caps_emphasis_needs_mixed_case() {
        assert!(compound_score("the news is GREAT") > compound_score("the news is great"));
    }

    #[test]
    fn exclamation_amplifies() {
        assert!(compound_score("good!!") > compound_score("good"));
    }

    #[test]
    fn but_shifts_weight_to_second_clause() {
        assert!(compound_score("the food was good but the service was terrible") < 0.0);
    }

    #[test]
    fn compound_stays_in_range() {
        let text = "great wonderful amazing love best excellent fantastic perfect happy joy";
        let score = compound_score(text);
        assert!(score > 0.9 && score <= 1.0, "got {score}");
    }

    #[test]
    fn punctuation_stripped_from_words() {
        assert!(compound_score("great!") > 0.0);
        assert_eq!(strip_punctuation(":)"), ":)");
    }

    #[test]
    fn threshold_is_inclusive() {
        assert_eq!(label_for(0.05, 0.05), Label::Positive);
        assert_eq!(label_for(-0.05, 0.05), Label::Negative);
        assert_eq!(label_for(0.049_9, 0.05), Label::Neutral);
        assert_eq!(label_for(-0.049_9, 0.05), Label::Neutral);
        assert_eq!(label_for(0.0, 0.05), Label::Neutral);
    }
}
