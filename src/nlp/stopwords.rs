//! Ignore-list construction.
//!
//! This module builds ignore-lemma sets, optionally seeded from a
//! language's stopword list via the `stop-words` crate. The set is consumed
//! verbatim by [`LemmaExtractor`](super::LemmaExtractor): matching is exact
//! and case-sensitive, so callers supplying their own lists should add
//! lemmas in the casing the analyzer emits.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// Builder for the set of lemmas excluded from n-gram formation.
#[derive(Debug, Clone, Default)]
pub struct IgnoreLemmas {
    lemmas: FxHashSet<String>,
}

impl IgnoreLemmas {
    /// An empty ignore list (no filtering beyond content-word selection).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Seed the list with the stopwords of a language.
    ///
    /// Recognized codes: en, de, fr, es, it, pt, nl, ru, sv, no, da, fi,
    /// hu, tr, pl, ar. Unrecognized codes fall back to English.
    pub fn for_language(language: &str) -> Self {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            "hu" | "hungarian" => LANGUAGE::Hungarian,
            "tr" | "turkish" => LANGUAGE::Turkish,
            "pl" | "polish" => LANGUAGE::Polish,
            "ar" | "arabic" => LANGUAGE::Arabic,
            _ => LANGUAGE::English,
        };
        Self {
            lemmas: get(lang).into_iter().collect(),
        }
    }

    /// Build from an explicit list, stored verbatim.
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            lemmas: words.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Add lemmas to the list.
    pub fn add_lemmas(&mut self, words: &[&str]) {
        for word in words {
            self.lemmas.insert(word.to_string());
        }
    }

    /// Remove lemmas from the list.
    pub fn remove_lemmas(&mut self, words: &[&str]) {
        for word in words {
            self.lemmas.remove(*word);
        }
    }

    /// Check membership (exact match).
    pub fn contains(&self, lemma: &str) -> bool {
        self.lemmas.contains(lemma)
    }

    pub fn len(&self) -> usize {
        self.lemmas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lemmas.is_empty()
    }

    /// Consume the builder, yielding the set for
    /// [`SummarizerConfig::ignore_lemmas`](crate::types::SummarizerConfig).
    pub fn into_set(self) -> FxHashSet<String> {
        self.lemmas
    }
}

impl From<IgnoreLemmas> for FxHashSet<String> {
    fn from(value: IgnoreLemmas) -> Self {
        value.into_set()
    }
}
