//! Risk scoring.
//!
//! Findings are produced in three fixed stages and never reordered or
//! deduplicated: dataset-annotation findings (corpus order, every
//! qualifying document contributes), then risky-phrase findings, then
//! safe-phrase findings, with a single fallback finding only when the
//! first two stages produced nothing.

use contract_types::{AnnotationChoice, Finding, FindingKind};

use crate::corpus::Corpus;
use crate::keywords::{DATASET_MATCH_THRESHOLD, RISKY_PHRASES, SAFE_PHRASES};

/// The single finding emitted when nothing else fired.
pub const NO_RISK_MESSAGE: &str = "No obvious risks found";

/// Produce the ordered list of risk/safety findings for a clause.
pub fn analyze(corpus: &Corpus, clause: &str) -> Vec<Finding> {
    let clause = clause.to_lowercase();
    let tokens: Vec<&str> = clause.split_whitespace().collect();

    let mut findings = Vec::new();

    // Stage 1: dataset alignment. A document qualifies when enough
    // clause tokens appear somewhere in its text; each of its stored
    // annotations then maps onto one finding by choice.
    for document in corpus.documents() {
        let text = document.text.to_lowercase();
        let match_count = tokens.iter().filter(|token| text.contains(**token)).count();
        if match_count < DATASET_MATCH_THRESHOLD {
            continue;
        }

        for set in &document.annotation_sets {
            for (key, annotation) in &set.annotations {
                match annotation.choice {
                    AnnotationChoice::Contradiction => findings.push(Finding::new(
                        FindingKind::DatasetRisk,
                        format!("Dataset risk: {key} = Contradiction"),
                    )),
                    AnnotationChoice::Entailment => findings.push(Finding::new(
                        FindingKind::DatasetSafe,
                        format!("Dataset safe: {key} = Entailment"),
                    )),
                    AnnotationChoice::Neutral => findings.push(Finding::new(
                        FindingKind::DatasetNeutral,
                        format!("Dataset neutral: {key} = Neutral"),
                    )),
                    AnnotationChoice::Unrecognized => {}
                }
            }
        }
    }

    // Stage 2: keyword heuristics, unconditionally after stage 1.
    for phrase in RISKY_PHRASES {
        if clause.contains(phrase) {
            findings.push(Finding::new(
                FindingKind::KeywordRisk,
                format!("Risk detected: contains '{phrase}'"),
            ));
        }
    }
    for phrase in SAFE_PHRASES {
        if clause.contains(phrase) {
            findings.push(Finding::new(
                FindingKind::KeywordSafe,
                format!("Safe clause: contains '{phrase}'"),
            ));
        }
    }

    // Stage 3: fallback, only when nothing fired at all.
    if findings.is_empty() {
        findings.push(Finding::new(FindingKind::NoRisk, NO_RISK_MESSAGE));
    }

    findings
}
