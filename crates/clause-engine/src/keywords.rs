//! Fixed keyword tables for clause matching and risk scoring.
//!
//! Order matters everywhere in this module: the matcher tests trigger
//! keywords per document in this priority order, and the scorer emits
//! keyword findings in list order.

/// Context/document co-occurrence terms for clause matching, in
/// priority order within a single document.
pub const TRIGGER_KEYWORDS: &[&str] = &["confidential", "terminate", "payment"];

/// Phrases that flag a clause as risky.
pub const RISKY_PHRASES: &[&str] = &[
    "terminate immediately",
    "without notice",
    "penalty",
    "indemnify",
    "unlimited liability",
    "breach",
];

/// Phrases that flag a clause as safe.
pub const SAFE_PHRASES: &[&str] = &["confidential", "payment", "notice period"];

/// Minimum clause-token overlap before a document's annotations are
/// consulted.
pub const DATASET_MATCH_THRESHOLD: usize = 5;
