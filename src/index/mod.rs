//! Term and n-gram indexing.
//!
//! Turns each sentence's relevant lemmas into a transaction: the sorted,
//! deduplicated set of n-gram ids occurring in the sentence. Both
//! dictionaries are freshly allocated per engine run and assign dense ids
//! on first sight.

pub mod dictionary;
pub mod ngram;

pub use dictionary::{NgramDictionary, TermDictionary};
pub use ngram::{NgramIndexer, Transaction};
