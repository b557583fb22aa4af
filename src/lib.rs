//! Extractive summarization core.
//!
//! Given pre-tokenized, morphologically annotated sentences, the engine
//! computes a salience score in `[0, 1]` for every input sentence and a
//! ranked list of relevant multi-word phrases ("itemsets"). The pipeline:
//!
//! 1. extract content-word lemmas per sentence ([`nlp`]),
//! 2. enumerate lemma n-grams and build per-sentence transactions
//!    ([`index`]),
//! 3. mine closed frequent itemsets over the transactions ([`mining`]),
//! 4. build the itemset × sentence incidence matrix and factorize it with
//!    a truncated SVD ([`matrix`]),
//! 5. derive itemset relevance and sentence salience from the singular
//!    vectors ([`summarizer`]).
//!
//! Callers apply their own salience threshold ("summary strength") to
//! select sentences; see [`Summary::sentences_above`].
//!
//! # Example
//!
//! ```
//! use rapid_salience::{PosTag, Sentence, Summarizer, SummarizerConfig, Token};
//!
//! let sentences = vec![
//!     Sentence::new(vec![
//!         Token::word("Cats", "cat", PosTag::Noun),
//!         Token::word("chase", "chase", PosTag::Verb),
//!         Token::word("mice", "mouse", PosTag::Noun),
//!         Token::word("daily", "daily", PosTag::Adverb),
//!     ]),
//!     Sentence::new(vec![
//!         Token::word("Cats", "cat", PosTag::Noun),
//!         Token::word("chase", "chase", PosTag::Verb),
//!         Token::word("mice", "mouse", PosTag::Noun),
//!     ]),
//! ];
//!
//! let summarizer = Summarizer::with_config(
//!     SummarizerConfig::new().with_ngram_range(2, 3),
//! );
//! let summary = summarizer.summarize(&sentences)?;
//!
//! assert_eq!(summary.salience_scores.len(), 2);
//! assert!(!summary.relevant_itemsets.is_empty());
//! # Ok::<(), rapid_salience::SummarizeError>(())
//! ```

pub mod error;
pub mod index;
pub mod matrix;
pub mod mining;
pub mod nlp;
pub mod summarizer;
pub mod types;

pub use error::SummarizeError;
pub use nlp::IgnoreLemmas;
pub use summarizer::Summarizer;
pub use types::{
    Morphology, PosTag, ScoredItemset, ScoredKeyword, Sentence, Summary, SummarizerConfig, Token,
    DEFAULT_MIN_SUPPORT, DEFAULT_NGRAM_RANGE, DEFAULT_SALIENCE_BUCKETS,
};
