//! Per-sentence n-gram enumeration.
//!
//! For each window length in the configured range, a window slides over the
//! sentence's term-id sequence and each distinct window becomes one n-gram
//! id in the sentence's transaction.

use std::collections::BTreeSet;

use super::dictionary::{NgramDictionary, TermDictionary};

/// A sentence's sorted, duplicate-free set of n-gram ids.
pub type Transaction = Vec<u32>;

/// Enumerates contiguous lemma n-grams per sentence.
#[derive(Debug, Clone, Copy)]
pub struct NgramIndexer {
    min_size: usize,
    max_size: usize,
}

impl NgramIndexer {
    /// Create an indexer for windows of `min_size..=max_size` terms.
    pub fn new(min_size: usize, max_size: usize) -> Self {
        Self { min_size, max_size }
    }

    /// Index one sentence's relevant lemmas, updating both dictionaries,
    /// and return its transaction.
    ///
    /// Lemmas are interned before the length check, so every relevant lemma
    /// gains a term id even when the sentence is too short to form windows.
    /// A window starting at `s` with length `len` is emitted iff
    /// `s + len < n`; the window ending exactly at the final term is never
    /// emitted. This bound is part of the scoring contract and must not be
    /// widened to `s + len <= n`.
    pub fn index_sentence(
        &self,
        lemmas: &[&str],
        terms: &mut TermDictionary,
        ngrams: &mut NgramDictionary,
    ) -> Transaction {
        let term_ids: Vec<u32> = lemmas.iter().map(|lemma| terms.intern(lemma)).collect();
        if term_ids.len() < self.min_size {
            return Transaction::new();
        }

        let mut seen: BTreeSet<u32> = BTreeSet::new();
        for len in self.min_size..=self.max_size {
            let mut start = 0;
            while start + len < term_ids.len() {
                seen.insert(ngrams.intern(&term_ids[start..start + len]));
                start += 1;
            }
        }
        seen.into_iter().collect()
    }
}
