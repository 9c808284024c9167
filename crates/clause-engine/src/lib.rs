//! Clause Engine - matching and scoring over an annotated contract corpus
//!
//! This crate provides:
//! - `Corpus` loading from the three dataset splits
//! - Clause matching against trigger keywords with a random fallback
//! - Multi-stage risk scoring from dataset annotations and keyword
//!   heuristics

pub mod corpus;
pub mod keywords;
pub mod matcher;
pub mod scorer;

pub use corpus::{Corpus, CorpusError, CorpusSources};
pub use matcher::{DocumentPicker, RandomPicker, EMPTY_CORPUS_CLAUSE, MATCH_ERROR_CLAUSE};
pub use scorer::NO_RISK_MESSAGE;

use contract_types::Finding;

/// ClauseEngine entry point. Holds the immutable corpus and the random
/// source for the matcher fallback; both operations are pure reads, so
/// a shared engine needs no locking.
pub struct ClauseEngine {
    corpus: Corpus,
    picker: Box<dyn DocumentPicker>,
}

impl ClauseEngine {
    pub fn new(corpus: Corpus) -> Self {
        Self::with_picker(corpus, Box::new(RandomPicker))
    }

    pub fn with_picker(corpus: Corpus, picker: Box<dyn DocumentPicker>) -> Self {
        Self { corpus, picker }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Retrieve a plausible existing clause for the given context.
    pub fn generate_clause(&self, context: &str) -> String {
        matcher::match_clause(&self.corpus, context, self.picker.as_ref())
    }

    /// Produce the ordered risk findings for a clause.
    pub fn analyze_risk(&self, clause: &str) -> Vec<Finding> {
        scorer::analyze(&self.corpus, clause)
    }
}
