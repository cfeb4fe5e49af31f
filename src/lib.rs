use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

mod error;
pub mod sentiment;

pub use error::{Error, Result};
pub use sentiment::{Lexicon, SentimentScore, SentimentScorer};

// ---------------------------------------------------------------------------
// Data structures
// ---------------------------------------------------------------------------

/// A document split into ATX headings and the body text under each one.
///
/// Text before the first heading belongs to no section. When the same
/// heading text appears twice, `headings` records both occurrences but
/// `sections` keeps only the body of the later one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    content: String,
    headings: Vec<String>,
    sections: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub structural_issues: Vec<String>,
    pub clarity_issues: Vec<String>,
    pub completeness_issues: Vec<String>,
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

pub const REQUIRED_SECTIONS: [&str; 4] = [
    "Overview",
    "Current Behavior",
    "Proposed Solution",
    "Clarifying Questions",
];

const DEFAULT_MAX_SENTENCE_WORDS: usize = 20;
const DEFAULT_SUBJECTIVITY_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Headings every document must contain, in reporting order.
    pub required_sections: Vec<String>,
    /// Sentences with more whitespace-separated words than this are flagged.
    pub max_sentence_words: usize,
    /// Sentences whose comparative sentiment exceeds this are flagged.
    pub subjectivity_threshold: f64,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            required_sections: REQUIRED_SECTIONS.iter().map(|s| s.to_string()).collect(),
            max_sentence_words: DEFAULT_MAX_SENTENCE_WORDS,
            subjectivity_threshold: DEFAULT_SUBJECTIVITY_THRESHOLD,
        }
    }
}

impl ValidatorConfig {
    pub fn with_required_sections<I, S>(mut self, sections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_sections = sections.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_max_sentence_words(mut self, words: usize) -> Self {
        self.max_sentence_words = words;
        self
    }

    pub fn with_subjectivity_threshold(mut self, threshold: f64) -> Self {
        self.subjectivity_threshold = threshold;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_sentence_words == 0 {
            return Err(Error::InvalidConfig(
                "max_sentence_words must be at least 1".to_string(),
            ));
        }
        if !self.subjectivity_threshold.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "subjectivity_threshold must be finite, got {}",
                self.subjectivity_threshold
            )));
        }
        if let Some(blank) = self.required_sections.iter().find(|s| s.trim().is_empty()) {
            return Err(Error::InvalidConfig(format!(
                "required section names must not be blank, got {blank:?}"
            )));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Compiled patterns
// ---------------------------------------------------------------------------

static HEADING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(#+)\s+(.*)").unwrap());

static SENTENCE_END_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[.!?]+["'\u{201D}\u{2019})\]]*(?:\s+|$)"#).unwrap());

static ABBREVIATIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "e.g", "i.e", "etc", "vs", "cf", "approx", "fig", "vol", "mr", "mrs", "ms", "dr",
        "prof", "sr", "jr", "inc", "ltd", "corp", "jan", "feb", "apr", "jun", "jul", "aug", "sep",
        "sept", "oct", "nov", "dec",
    ]
    .into_iter()
    .collect()
});

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

impl Document {
    pub fn parse(content: impl Into<String>) -> Self {
        let content = content.into();
        let mut headings = Vec::new();
        let mut sections = HashMap::new();
        let mut current: Option<(String, String)> = None;

        for line in content.split('\n') {
            if let Some(caps) = HEADING_RE.captures(line) {
                if let Some((heading, body)) = current.take() {
                    store_section(&mut sections, heading, body);
                }
                let heading = caps[2].trim().to_string();
                headings.push(heading.clone());
                current = Some((heading, String::new()));
            } else if let Some((_, body)) = current.as_mut() {
                body.push_str(line);
                body.push('\n');
            }
        }
        if let Some((heading, body)) = current {
            store_section(&mut sections, heading, body);
        }

        log::debug!(
            "parsed {} headings into {} sections",
            headings.len(),
            sections.len()
        );

        Self {
            content,
            headings,
            sections,
        }
    }

    /// The original text, unmodified.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn headings(&self) -> &[String] {
        &self.headings
    }

    pub fn sections(&self) -> &HashMap<String, String> {
        &self.sections
    }

    pub fn section(&self, heading: &str) -> Option<&str> {
        self.sections.get(heading).map(String::as_str)
    }
}

// Last occurrence of a heading wins.
fn store_section(sections: &mut HashMap<String, String>, heading: String, body: String) {
    if sections.contains_key(&heading) {
        log::warn!("duplicate heading {heading:?}: keeping the later section body");
    }
    sections.insert(heading, body);
}

// ---------------------------------------------------------------------------
// Sentence segmentation
// ---------------------------------------------------------------------------

/// Split prose into sentences.
///
/// Blank lines and heading lines close the current paragraph. A heading's
/// text is emitted as a sentence of its own, without the `#` marker.
/// Terminal punctuation is kept and inner whitespace is collapsed to single
/// spaces.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();

    for line in text.split('\n') {
        let trimmed = line.trim();
        if let Some(caps) = HEADING_RE.captures(line) {
            flush_paragraph(&mut paragraph, &mut sentences);
            push_sentence(caps[2].trim(), &mut sentences);
        } else if trimmed.is_empty() {
            flush_paragraph(&mut paragraph, &mut sentences);
        } else {
            paragraph.push(trimmed);
        }
    }
    flush_paragraph(&mut paragraph, &mut sentences);

    sentences
}

fn flush_paragraph(lines: &mut Vec<&str>, sentences: &mut Vec<String>) {
    if lines.is_empty() {
        return;
    }
    let paragraph = lines.join(" ");
    lines.clear();

    let mut start = 0;
    for m in SENTENCE_END_RE.find_iter(&paragraph) {
        let punct = m.as_str().trim_end();
        let only_periods = !punct.contains(['!', '?']);
        if only_periods && !is_period_boundary(&paragraph[start..m.start()], &paragraph[m.end()..])
        {
            continue;
        }
        push_sentence(&paragraph[start..m.start() + punct.len()], sentences);
        start = m.end();
    }
    push_sentence(&paragraph[start..], sentences);
}

fn is_period_boundary(before: &str, after: &str) -> bool {
    let Some(next) = after.chars().next() else {
        return true;
    };
    if next.is_lowercase() || next.is_ascii_digit() {
        return false;
    }

    let last = before
        .split_whitespace()
        .last()
        .unwrap_or("")
        .trim_start_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase();
    if last.chars().count() == 1 && last.chars().all(char::is_alphabetic) {
        return false;
    }
    !ABBREVIATIONS.contains(last.as_str())
}

fn push_sentence(raw: &str, sentences: &mut Vec<String>) {
    let sentence = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if !sentence.is_empty() {
        sentences.push(sentence);
    }
}

fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

// ---------------------------------------------------------------------------
// Checks
// ---------------------------------------------------------------------------

/// Report each required heading that never appears verbatim.
pub fn check_structure(headings: &[String], required: &[String]) -> Vec<String> {
    required
        .iter()
        .filter(|r| !headings.contains(*r))
        .map(|r| format!("Missing required section: {r}"))
        .collect()
}

/// Flag subjective or overly long sentences anywhere in `content`.
pub fn check_clarity<S>(content: &str, scorer: &S, config: &ValidatorConfig) -> Vec<String>
where
    S: SentimentScorer + ?Sized,
{
    let mut issues = Vec::new();

    for sentence in split_sentences(content) {
        let comparative = scorer.score(&sentence);
        let words = word_count(&sentence);
        log::trace!("sentence ({words} words, sentiment {comparative:.3}): {sentence}");

        if comparative > config.subjectivity_threshold {
            issues.push(format!("Potentially subjective language: \"{sentence}\""));
        }
        if words > config.max_sentence_words {
            issues.push(format!("Long sentence: \"{sentence}\""));
        }
    }

    issues
}

/// Report each required section that is absent or has a blank body.
pub fn check_completeness(sections: &HashMap<String, String>, required: &[String]) -> Vec<String> {
    required
        .iter()
        .filter(|r| sections.get(*r).map_or(true, |body| body.trim().is_empty()))
        .map(|r| format!("Incomplete section: {r}"))
        .collect()
}

// ---------------------------------------------------------------------------
// Validator
// ---------------------------------------------------------------------------

pub struct SpecValidator<S = Lexicon> {
    document: Document,
    config: ValidatorConfig,
    scorer: S,
}

impl SpecValidator<Lexicon> {
    /// Parse `text` once with the default configuration and lexicon.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            document: Document::parse(text),
            config: ValidatorConfig::default(),
            scorer: Lexicon::new(),
        }
    }
}

impl<S: SentimentScorer> SpecValidator<S> {
    /// Replace the configuration, rejecting values that would make the
    /// checks meaningless.
    pub fn with_config(mut self, config: ValidatorConfig) -> Result<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Swap the tone scorer used by the clarity check.
    pub fn with_scorer<T: SentimentScorer>(self, scorer: T) -> SpecValidator<T> {
        SpecValidator {
            document: self.document,
            config: self.config,
            scorer,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    pub fn analyze(&self) -> AnalysisResult {
        let required = &self.config.required_sections;

        let structural_issues = check_structure(self.document.headings(), required);
        let clarity_issues = check_clarity(self.document.content(), &self.scorer, &self.config);
        let completeness_issues = check_completeness(self.document.sections(), required);

        log::debug!(
            "analysis finished: {} structural, {} clarity, {} completeness issues",
            structural_issues.len(),
            clarity_issues.len(),
            completeness_issues.len()
        );

        AnalysisResult {
            structural_issues,
            clarity_issues,
            completeness_issues,
        }
    }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

impl AnalysisResult {
    pub fn total_issues(&self) -> usize {
        self.structural_issues.len() + self.clarity_issues.len() + self.completeness_issues.len()
    }

    pub fn is_clean(&self) -> bool {
        self.total_issues() == 0
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

impl fmt::Display for AnalysisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let groups = [
            ("Structural Issues:", &self.structural_issues),
            ("Clarity Issues:", &self.clarity_issues),
            ("Completeness Issues:", &self.completeness_issues),
        ];
        for (i, (title, issues)) in groups.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{title}")?;
            for issue in issues.iter() {
                writeln!(f, "- {issue}")?;
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Analyze `text` with the default configuration.
pub fn analyze(text: &str) -> AnalysisResult {
    SpecValidator::new(text).analyze()
}

/// Read a document from disk. Analysis itself only ever sees text.
pub fn read_document(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}
