//! Core data model: morpho-syntactic input types, configuration, and the
//! summary value returned by the engine.
//!
//! The input types mirror the interface delivered by the upstream tokenizer
//! and morphological analyzer; the engine reads them once per run and owns
//! none of them beyond the call.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::SummarizeError;

/// Default minimum relative support for the itemset miner.
pub const DEFAULT_MIN_SUPPORT: f64 = 0.01;

/// Default n-gram window range (inclusive on both ends).
pub const DEFAULT_NGRAM_RANGE: (usize, usize) = (2, 4);

/// Default bucket count for [`Summary::salience_distribution`].
pub const DEFAULT_SALIENCE_BUCKETS: usize = 10;

// ─── Input types ────────────────────────────────────────────────────────────

/// Part-of-speech taxonomy assigned by the upstream analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PosTag {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Determiner,
    Preposition,
    Conjunction,
    Numeral,
    Particle,
    Interjection,
    Punctuation,
    Unknown,
}

impl PosTag {
    /// Content words are the open classes: nouns, verbs, adjectives, adverbs.
    pub fn is_content_word(&self) -> bool {
        matches!(
            self,
            PosTag::Noun | PosTag::Verb | PosTag::Adjective | PosTag::Adverb
        )
    }
}

/// One morphological analysis of a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Morphology {
    /// Canonical dictionary form, exactly as delivered by the analyzer.
    pub lemma: String,
    /// Word-class assigned to this analysis.
    pub tag: PosTag,
}

impl Morphology {
    pub fn new(lemma: impl Into<String>, tag: PosTag) -> Self {
        Self {
            lemma: lemma.into(),
            tag,
        }
    }
}

/// A surface token with zero or more morphological analyses.
///
/// The engine consults only the *first* analysis; tokens without any are
/// skipped during lemma extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Surface form as it appeared in the text.
    pub form: String,
    /// Character offset in the source document (opaque to the engine).
    pub position: usize,
    /// Analyses ordered by analyzer confidence.
    pub morphologies: Vec<Morphology>,
}

impl Token {
    pub fn new(form: impl Into<String>, position: usize, morphologies: Vec<Morphology>) -> Self {
        Self {
            form: form.into(),
            position,
            morphologies,
        }
    }

    /// Convenience constructor for a token with a single analysis.
    pub fn word(form: impl Into<String>, lemma: impl Into<String>, tag: PosTag) -> Self {
        let form = form.into();
        Self {
            form,
            position: 0,
            morphologies: vec![Morphology::new(lemma, tag)],
        }
    }

    /// First analysis, if the analyzer produced any.
    pub fn first_morphology(&self) -> Option<&Morphology> {
        self.morphologies.first()
    }
}

/// One parsed sentence: an ordered token sequence plus its offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    pub tokens: Vec<Token>,
    /// Character offset in the source document (opaque to the engine).
    pub position: usize,
}

impl Sentence {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    pub fn with_position(mut self, position: usize) -> Self {
        self.position = position;
        self
    }
}

// ─── Configuration ──────────────────────────────────────────────────────────

/// Configuration for a [`Summarizer`](crate::summarizer::Summarizer).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizerConfig {
    /// Lemmas excluded from n-gram formation (exact string match).
    #[serde(default)]
    pub ignore_lemmas: FxHashSet<String>,

    /// Minimum relative support for the itemset miner, in `(0, 1]`.
    #[serde(default = "default_min_support")]
    pub min_support: f64,

    /// Inclusive `(min, max)` n-gram window sizes.
    #[serde(default = "default_ngram_range")]
    pub ngram_range: (usize, usize),
}

fn default_min_support() -> f64 {
    DEFAULT_MIN_SUPPORT
}

fn default_ngram_range() -> (usize, usize) {
    DEFAULT_NGRAM_RANGE
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            ignore_lemmas: FxHashSet::default(),
            min_support: DEFAULT_MIN_SUPPORT,
            ngram_range: DEFAULT_NGRAM_RANGE,
        }
    }
}

impl SummarizerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ignore-lemma set.
    pub fn with_ignore_lemmas(mut self, lemmas: impl Into<FxHashSet<String>>) -> Self {
        self.ignore_lemmas = lemmas.into();
        self
    }

    /// Set the miner's minimum relative support.
    pub fn with_min_support(mut self, min_support: f64) -> Self {
        self.min_support = min_support;
        self
    }

    /// Set the inclusive n-gram window range.
    pub fn with_ngram_range(mut self, min: usize, max: usize) -> Self {
        self.ngram_range = (min, max);
        self
    }

    /// Check the preconditions: `1 <= min <= max` and `0 < min_support <= 1`.
    pub fn validate(&self) -> Result<(), SummarizeError> {
        let (min, max) = self.ngram_range;
        if min < 1 || min > max {
            return Err(SummarizeError::InvalidNgramRange { min, max });
        }
        if !(self.min_support > 0.0 && self.min_support <= 1.0) {
            return Err(SummarizeError::InvalidMinSupport {
                value: self.min_support,
            });
        }
        Ok(())
    }
}

// ─── Output types ───────────────────────────────────────────────────────────

/// An itemset with its rendered text and normalized relevance score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredItemset {
    /// Human-readable rendering: n-grams joined by `", "`, terms by `" "`.
    pub text: String,
    /// Relevance in `[0, 1]`.
    pub score: f64,
}

/// A keyword derived from the relevant itemsets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredKeyword {
    pub keyword: String,
    /// `(mean of containing itemset scores)^(1/N)`.
    pub score: f64,
}

/// The summary value produced by one engine run.
///
/// `salience_scores` is aligned by index with the *input* sentence list;
/// sentences whose transaction was empty carry `0.0`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub salience_scores: Vec<f64>,
    /// Itemsets in miner order with normalized relevance scores.
    pub relevant_itemsets: Vec<ScoredItemset>,
    /// Keywords sorted by score descending (ties by keyword ascending).
    pub relevant_keywords: Vec<ScoredKeyword>,
}

impl Summary {
    /// A summary with all-zero salience and no itemsets or keywords.
    pub(crate) fn zero(num_sentences: usize) -> Self {
        Self {
            salience_scores: vec![0.0; num_sentences],
            relevant_itemsets: Vec::new(),
            relevant_keywords: Vec::new(),
        }
    }

    /// Bucket the salience vector into `buckets` equal-width bins over
    /// `[0, 1]` and return per-bucket fractions of the sentence count.
    ///
    /// A score `s` lands in bucket `max(0, ceil(s * buckets) - 1)`.
    pub fn salience_distribution(&self, buckets: usize) -> Vec<f64> {
        if buckets == 0 || self.salience_scores.is_empty() {
            return vec![0.0; buckets];
        }
        let mut counts = vec![0usize; buckets];
        for &s in &self.salience_scores {
            let bucket = ((s * buckets as f64).ceil() as isize - 1).max(0) as usize;
            counts[bucket.min(buckets - 1)] += 1;
        }
        let total = self.salience_scores.len() as f64;
        counts.into_iter().map(|c| c as f64 / total).collect()
    }

    /// Input-order indices of sentences whose salience is at least
    /// `threshold`: the "summary strength" selection applied by consumers.
    pub fn sentences_above(&self, threshold: f64) -> Vec<usize> {
        self.salience_scores
            .iter()
            .enumerate()
            .filter(|(_, &s)| s >= threshold)
            .map(|(i, _)| i)
            .collect()
    }

    /// The `n` highest-scoring keywords (already sorted descending).
    pub fn top_keywords(&self, n: usize) -> &[ScoredKeyword] {
        &self.relevant_keywords[..n.min(self.relevant_keywords.len())]
    }

    /// The `n` highest-scoring itemsets, sorted by score descending.
    pub fn top_itemsets(&self, n: usize) -> Vec<&ScoredItemset> {
        let mut indexed: Vec<&ScoredItemset> = self.relevant_itemsets.iter().collect();
        indexed.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        indexed.truncate(n);
        indexed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_word_classes() {
        assert!(PosTag::Noun.is_content_word());
        assert!(PosTag::Verb.is_content_word());
        assert!(PosTag::Adjective.is_content_word());
        assert!(PosTag::Adverb.is_content_word());
        assert!(!PosTag::Determiner.is_content_word());
        assert!(!PosTag::Punctuation.is_content_word());
        assert!(!PosTag::Pronoun.is_content_word());
    }

    #[test]
    fn test_config_defaults() {
        let cfg = SummarizerConfig::default();
        assert_eq!(cfg.min_support, DEFAULT_MIN_SUPPORT);
        assert_eq!(cfg.ngram_range, DEFAULT_NGRAM_RANGE);
        assert!(cfg.ignore_lemmas.is_empty());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_config_rejects_inverted_range() {
        let cfg = SummarizerConfig::new().with_ngram_range(4, 2);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_config_rejects_zero_min() {
        let cfg = SummarizerConfig::new().with_ngram_range(0, 3);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_config_rejects_bad_support() {
        assert!(SummarizerConfig::new()
            .with_min_support(0.0)
            .validate()
            .is_err());
        assert!(SummarizerConfig::new()
            .with_min_support(1.5)
            .validate()
            .is_err());
        assert!(SummarizerConfig::new()
            .with_min_support(f64::NAN)
            .validate()
            .is_err());
        assert!(SummarizerConfig::new()
            .with_min_support(1.0)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_config_deserialize_partial() {
        let cfg: SummarizerConfig = serde_json::from_str(r#"{ "min_support": 0.05 }"#).unwrap();
        assert_eq!(cfg.min_support, 0.05);
        assert_eq!(cfg.ngram_range, DEFAULT_NGRAM_RANGE);
        assert!(cfg.ignore_lemmas.is_empty());
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let cfg = SummarizerConfig::new()
            .with_ngram_range(2, 3)
            .with_min_support(0.2);
        let json = serde_json::to_string(&cfg).unwrap();
        let back: SummarizerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.ngram_range, (2, 3));
        assert_eq!(back.min_support, 0.2);
    }

    #[test]
    fn test_salience_distribution_buckets() {
        let summary = Summary {
            salience_scores: vec![0.0, 0.05, 0.95, 1.0],
            relevant_itemsets: Vec::new(),
            relevant_keywords: Vec::new(),
        };
        let dist = summary.salience_distribution(10);
        assert_eq!(dist.len(), 10);
        // 0.0 -> bucket 0, 0.05 -> bucket 0, 0.95 and 1.0 -> bucket 9
        assert_eq!(dist[0], 0.5);
        assert_eq!(dist[9], 0.5);
        let total: f64 = dist.iter().sum();
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_sentences_above_threshold() {
        let summary = Summary {
            salience_scores: vec![0.2, 0.9, 0.5, 1.0],
            relevant_itemsets: Vec::new(),
            relevant_keywords: Vec::new(),
        };
        assert_eq!(summary.sentences_above(0.5), vec![1, 2, 3]);
        assert_eq!(summary.sentences_above(1.0), vec![3]);
        assert_eq!(summary.sentences_above(0.0).len(), 4);
    }

    #[test]
    fn test_top_itemsets_sorted() {
        let summary = Summary {
            salience_scores: vec![1.0],
            relevant_itemsets: vec![
                ScoredItemset {
                    text: "low".into(),
                    score: 0.2,
                },
                ScoredItemset {
                    text: "high".into(),
                    score: 1.0,
                },
            ],
            relevant_keywords: Vec::new(),
        };
        let top = summary.top_itemsets(1);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].text, "high");
    }
}
