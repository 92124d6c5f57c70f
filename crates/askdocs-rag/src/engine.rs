//! RAG engine implementation

use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;

use askdocs_core::{
    Error, GenerationOutcome, Result, Retrieved, TextGenerator, VectorStore,
};

use crate::loader::load_documents;
use crate::prompt::build_prompt;

/// Configuration for the RAG engine
#[derive(Debug, Clone)]
pub struct RagConfig {
    /// Directory scanned for plain-text documents at startup
    pub data_dir: PathBuf,
    /// Number of passages retrieved per query
    pub top_k: usize,
}

impl Default for RagConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            top_k: 3,
        }
    }
}

/// Engine gluing ingestion, retrieval, and generation together
pub struct RagEngine<V: VectorStore, G: TextGenerator> {
    vector_store: Arc<V>,
    generator: Arc<G>,
    config: RagConfig,
    initialized: bool,
}

impl<V: VectorStore, G: TextGenerator> RagEngine<V, G> {
    /// Create a new RAG engine
    pub fn new(vector_store: Arc<V>, generator: Arc<G>, config: RagConfig) -> Self {
        Self {
            vector_store,
            generator,
            config,
            initialized: false,
        }
    }

    /// Load documents and seed the store if it is empty
    ///
    /// The data folder is read on every run and a missing folder is fatal
    /// even when the store is already populated. Seeding happens exactly
    /// once per fresh store: a later run against a populated store skips
    /// indexing entirely, even if the data directory changed since the
    /// store was built. Returns the number of records seeded (zero when
    /// indexing was skipped).
    pub async fn initialize(&mut self) -> Result<usize> {
        if !self.vector_store.is_connected() {
            return Err(Error::VectorStore("Vector store not connected".to_string()));
        }

        let documents = load_documents(&self.config.data_dir)?;

        let seeded = if self.vector_store.is_empty().await? {
            tracing::info!("Indexing {} documents", documents.len());
            self.vector_store.seed(documents).await?
        } else {
            tracing::info!("Index already populated; skipping indexing");
            0
        };

        self.initialized = true;
        Ok(seeded)
    }

    /// Retrieve the most relevant passages for a query
    pub async fn retrieve(&self, query: &str) -> Result<Vec<Retrieved>> {
        if !self.initialized {
            return Err(Error::VectorStore("RAG engine not initialized".to_string()));
        }

        self.vector_store.search(query, self.config.top_k).await
    }

    /// Answer a query with a grounded generation
    ///
    /// Generation failures are carried as a value in the outcome rather than
    /// returned as an error, so the chat loop never tears down on a failed
    /// network call.
    pub async fn answer(&self, query: &str) -> Result<GenerationOutcome> {
        let retrieved = self.retrieve(query).await?;
        let passages: Vec<String> = retrieved.into_iter().map(|doc| doc.content).collect();
        let prompt = build_prompt(query, &passages);

        match self.generator.generate(&prompt).await {
            Ok(result) => Ok(GenerationOutcome::Answer(result.text)),
            Err(err) => {
                tracing::warn!("Generation failed: {}", err);
                Ok(GenerationOutcome::Failed(err.into()))
            }
        }
    }

    /// Statistics about the engine and its store
    pub async fn stats(&self) -> Result<serde_json::Value> {
        let count = self.vector_store.count().await?;

        Ok(json!({
            "initialized": self.initialized,
            "stored_records": count,
            "top_k": self.config.top_k,
            "model": self.generator.model_id(),
        }))
    }

    /// Check if the engine is ready to answer queries
    pub fn is_ready(&self) -> bool {
        self.initialized && self.vector_store.is_connected()
    }
}
