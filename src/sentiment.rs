//! Lexicon-based sentence tone scoring.
//!
//! The clarity check only needs a single number per sentence, so scoring is
//! hidden behind [`SentimentScorer`] and the default [`Lexicon`] can be
//! swapped for a stub or a different word list.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

/// Produces a comparative (per-token) valence for a piece of text.
pub trait SentimentScorer {
    fn score(&self, text: &str) -> f64;
}

impl<F> SentimentScorer for F
where
    F: Fn(&str) -> f64,
{
    fn score(&self, text: &str) -> f64 {
        self(text)
    }
}

// ---------------------------------------------------------------------------
// Word lists
// ---------------------------------------------------------------------------

// AFINN-style valences in -5..=5.
static AFINN: Lazy<HashMap<&'static str, i32>> = Lazy::new(|| {
    [
        // Positive
        ("admire", 3),
        ("amazing", 4),
        ("astonishing", 3),
        ("awesome", 4),
        ("beautiful", 3),
        ("beautifully", 3),
        ("best", 3),
        ("better", 2),
        ("breathtaking", 5),
        ("brilliant", 4),
        ("charming", 3),
        ("delight", 3),
        ("delightful", 3),
        ("easy", 1),
        ("effective", 2),
        ("efficient", 2),
        ("elegant", 2),
        ("enjoy", 2),
        ("excellent", 3),
        ("exceptional", 3),
        ("exciting", 3),
        ("fabulous", 4),
        ("fantastic", 4),
        ("flawless", 2),
        ("fun", 4),
        ("glad", 3),
        ("good", 3),
        ("gorgeous", 3),
        ("great", 3),
        ("greatest", 3),
        ("happy", 3),
        ("helpful", 2),
        ("ideal", 2),
        ("impressive", 3),
        ("improve", 2),
        ("improved", 2),
        ("improvement", 2),
        ("incredible", 4),
        ("innovative", 2),
        ("inspiring", 3),
        ("love", 3),
        ("lovely", 3),
        ("magnificent", 4),
        ("marvelous", 3),
        ("masterpiece", 4),
        ("nice", 3),
        ("outstanding", 5),
        ("perfect", 3),
        ("perfectly", 3),
        ("pleasant", 3),
        ("powerful", 2),
        ("remarkable", 2),
        ("robust", 2),
        ("spectacular", 4),
        ("splendid", 3),
        ("stunning", 4),
        ("success", 2),
        ("successful", 3),
        ("superb", 5),
        ("superior", 2),
        ("terrific", 4),
        ("thrilled", 5),
        ("ultimate", 3),
        ("unbeatable", 4),
        ("win", 4),
        ("wonderful", 4),
        ("wow", 4),
        // Negative
        ("angry", -3),
        ("annoying", -2),
        ("awful", -3),
        ("bad", -3),
        ("broken", -1),
        ("catastrophic", -4),
        ("clumsy", -2),
        ("confusing", -2),
        ("crap", -3),
        ("crash", -2),
        ("dangerous", -2),
        ("disaster", -2),
        ("disastrous", -3),
        ("disgusting", -3),
        ("dreadful", -3),
        ("fail", -2),
        ("failure", -2),
        ("frustrating", -2),
        ("garbage", -1),
        ("hate", -3),
        ("horrible", -3),
        ("horrific", -3),
        ("idiotic", -3),
        ("incompetent", -2),
        ("inferior", -2),
        ("lame", -2),
        ("mess", -2),
        ("messy", -2),
        ("miserable", -3),
        ("nightmare", -3),
        ("painful", -2),
        ("pathetic", -2),
        ("poor", -2),
        ("ridiculous", -3),
        ("sad", -2),
        ("stupid", -2),
        ("terrible", -3),
        ("ugly", -3),
        ("unacceptable", -2),
        ("useless", -2),
        ("worse", -3),
        ("worst", -3),
        ("worthless", -2),
        ("wrong", -2),
    ]
    .into_iter()
    .collect()
});

static NEGATORS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "not", "no", "never", "don't", "dont", "doesn't", "doesnt", "didn't", "didnt", "isn't",
        "isnt", "aren't", "arent", "wasn't", "wasnt", "weren't", "werent", "can't", "cant",
        "cannot", "won't", "wont", "shouldn't", "shouldnt", "wouldn't", "wouldnt",
    ]
    .into_iter()
    .collect()
});

// ---------------------------------------------------------------------------
// Lexicon scorer
// ---------------------------------------------------------------------------

/// Breakdown of a single scoring pass.
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentScore {
    /// Sum of token valences after negation.
    pub score: i32,
    /// `score` divided by the token count.
    pub comparative: f64,
    pub tokens: usize,
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

/// Word-list scorer. Defaults to the embedded AFINN-style list.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    overrides: HashMap<String, i32>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace word weights on top of the built-in list.
    pub fn with_overrides<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = (S, i32)>,
        S: Into<String>,
    {
        for (word, weight) in words {
            self.overrides.insert(word.into().to_lowercase(), weight);
        }
        self
    }

    /// Valence for a single lowercase token, if it carries one.
    pub fn weight(&self, token: &str) -> Option<i32> {
        self.overrides
            .get(token)
            .copied()
            .or_else(|| AFINN.get(token).copied())
    }

    pub fn analyze(&self, text: &str) -> SentimentScore {
        let tokens = tokenize(text);
        let mut score = 0;
        let mut positive = Vec::new();
        let mut negative = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            let Some(mut weight) = self.weight(token) else {
                continue;
            };
            if i > 0 && NEGATORS.contains(tokens[i - 1].as_str()) {
                weight = -weight;
            }
            if weight > 0 {
                positive.push(token.clone());
            } else if weight < 0 {
                negative.push(token.clone());
            }
            score += weight;
        }

        let comparative = if tokens.is_empty() {
            0.0
        } else {
            score as f64 / tokens.len() as f64
        };

        SentimentScore {
            score,
            comparative,
            tokens: tokens.len(),
            positive,
            negative,
        }
    }
}

impl SentimentScorer for Lexicon {
    fn score(&self, text: &str) -> f64 {
        self.analyze(text).comparative
    }
}

fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '\'' || *c == '-')
        .collect::<String>()
        .split_whitespace()
        .map(|t| t.trim_matches(|c| c == '\'' || c == '-').to_string())
        .filter(|t| !t.is_empty())
        .collect()
}
