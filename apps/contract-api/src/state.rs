//! Application state for the contract API

use clause_engine::{ClauseEngine, Corpus, CorpusSources};

pub struct AppState {
    pub engine: ClauseEngine,
}

impl AppState {
    /// Build state from the environment: `CONTRACT_DATA_DIR` points at
    /// the directory holding `train.json`, `dev.json`, `test.json`
    /// (default `data`). A missing or broken dataset still yields a
    /// working state over an empty corpus.
    pub fn from_env() -> Self {
        let data_dir =
            std::env::var("CONTRACT_DATA_DIR").unwrap_or_else(|_| "data".to_string());
        tracing::info!("Loading corpus from {}", data_dir);

        let corpus = Corpus::load(&CorpusSources::in_dir(&data_dir));
        Self::with_corpus(corpus)
    }

    pub fn with_corpus(corpus: Corpus) -> Self {
        Self {
            engine: ClauseEngine::new(corpus),
        }
    }
}
