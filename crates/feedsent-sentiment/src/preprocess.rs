//! Text normalisation: lowercase, tokenize, drop stopwords, lemmatize.
//!
//! Not applied by any backend; classification always sees the raw text.

use std::sync::LazyLock;

use regex::Regex;

/// Words (with an optional clitic) and single punctuation marks.
static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z0-9]+(?:'[a-z]+)?|[^\sa-z0-9]").expect("valid regex"));

const STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// Plurals the suffix rules get wrong.
const IRREGULAR: &[(&str, &str)] = &[
    ("children", "child"),
    ("feet", "foot"),
    ("geese", "goose"),
    ("lives", "life"),
    ("men", "man"),
    ("mice", "mouse"),
    ("news", "news"),
    ("people", "person"),
    ("series", "series"),
    ("species", "species"),
    ("teeth", "tooth"),
    ("wives", "wife"),
    ("women", "woman"),
];

/// Noun suffix rules, most specific first.
const SUFFIX_RULES: &[(&str, &str)] = &[
    ("ies", "y"),
    ("sses", "ss"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("xes", "x"),
    ("zes", "z"),
    ("s", ""),
];

/// Lowercase `text` and split it into word and punctuation tokens.
///
/// Contractions are split the Penn Treebank way: `don't` becomes `do` + `n't`,
/// `it's` becomes `it` + `'s`.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut tokens = Vec::new();
    for m in TOKEN_RE.find_iter(&lower) {
        let word = m.as_str();
        if let Some(stem) = word.strip_suffix("n't").filter(|s| !s.is_empty()) {
            tokens.push(stem.to_string());
            tokens.push("n't".to_string());
        } else if let Some(idx) = word.find('\'') {
            tokens.push(word[..idx].to_string());
            tokens.push(word[idx..].to_string());
        } else {
            tokens.push(word.to_string());
        }
    }
    tokens
}

#[must_use]
pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(&token)
}

/// Reduce a noun to its singular form with suffix heuristics.
#[must_use]
pub fn lemmatize(token: &str) -> String {
    if let Some(&(_, lemma)) = IRREGULAR.iter().find(|(plural, _)| *plural == token) {
        return lemma.to_string();
    }
    if token.len() <= 3 || token.ends_with("ss") || token.ends_with("us") || token.ends_with("is")
    {
        return token.to_string();
    }
    for &(suffix, replacement) in SUFFIX_RULES {
        if let Some(stem) = token.strip_suffix(suffix) {
            return format!("{stem}{replacement}");
        }
    }
    token.to_string()
}

/// Tokenize, drop stopwords, lemmatize, and re-join with single spaces.
#[must_use]
pub fn preprocess_text(text: &str) -> String {
    tokenize(text)
        .into_iter()
        .filter(|t| !is_stopword(t))
        .map(|t| lemmatize(&t))
        .collect::<Vec<_>>()
        .join(" ")
}
