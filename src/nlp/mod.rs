//! Lemma-level input filtering.
//!
//! This module selects the content-word lemmas that feed n-gram indexing
//! and provides ignore-list construction helpers.

pub mod lemma;
pub mod stopwords;

pub use lemma::LemmaExtractor;
pub use stopwords::IgnoreLemmas;
