//! Clause matching.
//!
//! The scan is document-order-first: each document is tested against
//! all trigger keywords (in priority order) before the next document is
//! considered. A document earlier in the corpus that matches a
//! lower-priority keyword therefore wins over a later document that
//! matches a higher-priority one. That nesting is intentional and load
//! bearing; do not flatten it into a keyword-first scan.

use rand::Rng;

use crate::corpus::Corpus;
use crate::keywords::TRIGGER_KEYWORDS;

/// Returned when the corpus is empty and no clause can be produced.
pub const EMPTY_CORPUS_CLAUSE: &str = "No clause generated (dataset empty)";

/// Returned if clause selection fails internally. The operation itself
/// never errors outward.
pub const MATCH_ERROR_CLAUSE: &str = "Internal error while generating clause";

/// Random-source abstraction for the fallback path, so tests can
/// substitute a deterministic pick. Implementations must be safe to
/// call from concurrent requests.
pub trait DocumentPicker: Send + Sync {
    /// Pick an index in `0..len`. Only called with `len > 0`.
    fn pick(&self, len: usize) -> usize;
}

/// Production picker backed by the thread-local RNG, one independent
/// draw per call.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPicker;

impl DocumentPicker for RandomPicker {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Select one document's text for the given context.
///
/// Consumes a single draw from `picker`, and only on the fallback path.
pub fn match_clause(corpus: &Corpus, context: &str, picker: &dyn DocumentPicker) -> String {
    let context = context.to_lowercase();

    for document in corpus.documents() {
        let text = document.text.to_lowercase();
        for keyword in TRIGGER_KEYWORDS {
            if context.contains(keyword) && text.contains(keyword) {
                return document.text.clone();
            }
        }
    }

    if corpus.is_empty() {
        return EMPTY_CORPUS_CLAUSE.to_string();
    }

    // A picker handing back an out-of-range index is the one internal
    // failure left after load-time validation; it becomes the sentinel,
    // never a panic.
    match corpus.document(picker.pick(corpus.len())) {
        Some(document) => document.text.clone(),
        None => MATCH_ERROR_CLAUSE.to_string(),
    }
}
