//! Relevant-lemma extraction.
//!
//! Per sentence, the extractor walks tokens in source order, consults only
//! the first morphological analysis of each token, and keeps content-word
//! lemmas that are not on the configured ignore list. The output preserves
//! order and duplicates; an empty result is valid input for later stages.

use rustc_hash::FxHashSet;

use crate::types::Sentence;

/// Filters a sentence down to its relevant lemmas.
///
/// Ignore-list matching is exact and case-sensitive: lemmas are compared
/// byte-for-byte as delivered by the analyzer.
#[derive(Debug, Clone, Copy)]
pub struct LemmaExtractor<'a> {
    ignore: &'a FxHashSet<String>,
}

impl<'a> LemmaExtractor<'a> {
    pub fn new(ignore: &'a FxHashSet<String>) -> Self {
        Self { ignore }
    }

    /// Extract the ordered relevant lemmas of `sentence`.
    pub fn extract<'s>(&self, sentence: &'s Sentence) -> Vec<&'s str> {
        sentence
            .tokens
            .iter()
            .filter_map(|token| token.first_morphology())
            .filter(|m| m.tag.is_content_word())
            .map(|m| m.lemma.as_str())
            .filter(|lemma| !self.ignore.contains(*lemma))
            .collect()
    }
}
