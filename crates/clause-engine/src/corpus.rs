//! Corpus loading.
//!
//! The corpus is assembled once at startup from three JSON splits
//! (train, dev, test, concatenated in that order) and is immutable
//! afterwards. Loading never fails outward: a split that cannot be read
//! or parsed degrades the whole corpus to empty, logged, and the
//! service keeps running against the empty corpus.

use std::fs;
use std::path::{Path, PathBuf};

use contract_types::Document;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Paths to the three corpus splits.
#[derive(Debug, Clone)]
pub struct CorpusSources {
    pub train: PathBuf,
    pub dev: PathBuf,
    pub test: PathBuf,
}

impl CorpusSources {
    pub fn new(
        train: impl Into<PathBuf>,
        dev: impl Into<PathBuf>,
        test: impl Into<PathBuf>,
    ) -> Self {
        Self {
            train: train.into(),
            dev: dev.into(),
            test: test.into(),
        }
    }

    /// Conventional split filenames under a data directory.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self::new(
            dir.join("train.json"),
            dir.join("dev.json"),
            dir.join("test.json"),
        )
    }
}

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read corpus split {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse corpus split {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// The full ordered set of documents available for matching and
/// scoring. Read-only after construction.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_documents(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn document(&self, index: usize) -> Option<&Document> {
        self.documents.get(index)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Load all three splits. Any read or parse failure degrades the
    /// whole corpus to empty rather than aborting startup.
    pub fn load(sources: &CorpusSources) -> Self {
        match Self::try_load(sources) {
            Ok(corpus) => corpus,
            Err(err) => {
                warn!("corpus load failed, serving empty corpus: {err}");
                Self::empty()
            }
        }
    }

    fn try_load(sources: &CorpusSources) -> Result<Self, CorpusError> {
        let train = load_split(&sources.train)?;
        let dev = load_split(&sources.dev)?;
        let test = load_split(&sources.test)?;

        info!(
            train = train.len(),
            dev = dev.len(),
            test = test.len(),
            total = train.len() + dev.len() + test.len(),
            "corpus loaded"
        );

        let mut documents = train;
        documents.extend(dev);
        documents.extend(test);

        if let Some(doc) = documents.first() {
            let preview: String = doc.text.chars().take(150).collect();
            debug!(id = %doc.id, %preview, "sample document");
        }

        Ok(Self { documents })
    }
}

fn load_split(path: &Path) -> Result<Vec<Document>, CorpusError> {
    let raw = fs::read_to_string(path).map_err(|source| CorpusError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let value: serde_json::Value =
        serde_json::from_str(&raw).map_err(|source| CorpusError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(documents_from_value(value))
}

/// Accept either `{"documents": [...]}` or a bare array. Any other
/// shape is an empty split; individual elements that do not map onto
/// `Document` are skipped.
fn documents_from_value(value: serde_json::Value) -> Vec<Document> {
    let entries = match value {
        serde_json::Value::Object(mut object) => match object.remove("documents") {
            Some(serde_json::Value::Array(entries)) => entries,
            _ => Vec::new(),
        },
        serde_json::Value::Array(entries) => entries,
        _ => Vec::new(),
    };

    entries
        .into_iter()
        .filter_map(|entry| match serde_json::from_value::<Document>(entry) {
            Ok(document) => Some(document),
            Err(err) => {
                debug!("skipping malformed document: {err}");
                None
            }
        })
        .collect()
}
