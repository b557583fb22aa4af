//! Pipeline orchestration and summary assembly.
//!
//! [`Summarizer::summarize`] runs the stages in order (lemma extraction,
//! n-gram indexing, closed-itemset mining, incidence-matrix construction,
//! truncated SVD, scoring) and assembles the final [`Summary`]. Each run
//! owns freshly allocated dictionaries; nothing is shared across calls.

use std::cmp::Ordering;

use rustc_hash::FxHashMap;

use crate::error::SummarizeError;
use crate::index::{NgramDictionary, NgramIndexer, TermDictionary, Transaction};
use crate::matrix::{truncated_svd, IncidenceMatrix};
use crate::mining::LcmMiner;
use crate::nlp::LemmaExtractor;
use crate::summarizer::scores::{normalize_max, relevant_singular_values, row_scores};
use crate::types::{ScoredItemset, ScoredKeyword, Sentence, SummarizerConfig, Summary};

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("summarizer_stage", stage = $name).entered();
    };
}

/// The extractive summarization engine.
#[derive(Debug, Clone, Default)]
pub struct Summarizer {
    config: SummarizerConfig,
}

impl Summarizer {
    /// Create an engine with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with an explicit configuration.
    ///
    /// The configuration is validated on each [`summarize`](Self::summarize)
    /// call, before any work is performed.
    pub fn with_config(config: SummarizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Compute per-sentence salience scores and relevant itemsets.
    ///
    /// Returns a zero summary (all-zero salience, no itemsets, no
    /// keywords) when filtering and n-gram enumeration leave nothing to
    /// mine; that is well-defined output, not an error.
    pub fn summarize(&self, sentences: &[Sentence]) -> Result<Summary, SummarizeError> {
        self.config.validate()?;
        if sentences.is_empty() {
            return Err(SummarizeError::EmptyInput);
        }

        trace_stage!("index");
        let extractor = LemmaExtractor::new(&self.config.ignore_lemmas);
        let (min_size, max_size) = self.config.ngram_range;
        let indexer = NgramIndexer::new(min_size, max_size);
        let mut terms = TermDictionary::new();
        let mut ngrams = NgramDictionary::new();

        let mut transactions: Vec<Transaction> = Vec::with_capacity(sentences.len());
        for sentence in sentences {
            let lemmas = extractor.extract(sentence);
            transactions.push(indexer.index_sentence(&lemmas, &mut terms, &mut ngrams));
        }

        // Column -> input-sentence mapping for the non-empty transactions;
        // empty-transaction sentences keep salience 0.0.
        let column_sentences: Vec<usize> = transactions
            .iter()
            .enumerate()
            .filter(|(_, t)| !t.is_empty())
            .map(|(i, _)| i)
            .collect();
        let nonempty: Vec<Transaction> =
            transactions.into_iter().filter(|t| !t.is_empty()).collect();
        if nonempty.is_empty() {
            return Ok(Summary::zero(sentences.len()));
        }

        trace_stage!("mine");
        let itemsets = LcmMiner::new(self.config.min_support).mine(&nonempty);
        if itemsets.is_empty() {
            return Ok(Summary::zero(sentences.len()));
        }

        trace_stage!("matrix");
        let matrix = IncidenceMatrix::build(&itemsets, &nonempty);

        trace_stage!("svd");
        let svd = truncated_svd(matrix.as_array())?;

        trace_stage!("score");
        let last = relevant_singular_values(&svd.singular_values);
        let mut itemset_scores = row_scores(&svd.u, &svd.singular_values, last);
        normalize_max(&mut itemset_scores);
        let mut column_salience = row_scores(&svd.v, &svd.singular_values, last);
        normalize_max(&mut column_salience);

        let mut salience_scores = vec![0.0; sentences.len()];
        for (column, &sentence_index) in column_sentences.iter().enumerate() {
            salience_scores[sentence_index] = column_salience[column];
        }

        let relevant_itemsets: Vec<ScoredItemset> = itemsets
            .iter()
            .zip(itemset_scores)
            .map(|(itemset, score)| ScoredItemset {
                text: render_itemset(&itemset.items, &ngrams, &terms),
                score,
            })
            .collect();
        let relevant_keywords = derive_keywords(&relevant_itemsets);

        Ok(Summary {
            salience_scores,
            relevant_itemsets,
            relevant_keywords,
        })
    }
}

/// Render an itemset: n-grams joined by `", "`, lemmas within an n-gram by
/// single spaces.
fn render_itemset(items: &[u32], ngrams: &NgramDictionary, terms: &TermDictionary) -> String {
    items
        .iter()
        .map(|&id| ngrams.render(id, terms))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Derive keywords from rendered itemsets.
///
/// Each whitespace-delimited token of an itemset's rendering (commas
/// treated as whitespace) contributes that itemset's score to the token's
/// score multiset; a keyword's final score is `mean^(1/N)` over its `N`
/// collected scores. Output is sorted by score descending, ties by keyword
/// ascending.
fn derive_keywords(itemsets: &[ScoredItemset]) -> Vec<ScoredKeyword> {
    let mut collected: FxHashMap<String, Vec<f64>> = FxHashMap::default();
    for itemset in itemsets {
        let flattened = itemset.text.replace(',', " ");
        for token in flattened.split_whitespace() {
            collected
                .entry(token.to_string())
                .or_default()
                .push(itemset.score);
        }
    }

    let mut keywords: Vec<ScoredKeyword> = collected
        .into_iter()
        .map(|(keyword, scores)| {
            let n = scores.len() as f64;
            let mean = scores.iter().sum::<f64>() / n;
            ScoredKeyword {
                keyword,
                score: mean.powf(1.0 / n),
            }
        })
        .collect();
    keywords.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.keyword.cmp(&b.keyword))
    });
    keywords
}
