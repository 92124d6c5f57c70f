//! Disk-backed vector store

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use tokio::fs;

use askdocs_core::{Document, Embedder, Error, Result, Retrieved, RecordMetadata, VectorStore};

const STORE_FILE: &str = "records.json";
const STORE_VERSION: u32 = 1;

/// A record persisted in the collection
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredRecord {
    id: String,
    embedding: Vec<f32>,
    content: String,
    metadata: RecordMetadata,
}

#[derive(Serialize, Deserialize)]
struct PersistedState {
    version: u32,
    model: String,
    indexed_at: i64,
    records: HashMap<String, StoredRecord>,
}

/// Vector store persisted as a JSON collection on disk
///
/// The collection lives at a fixed directory, created on first connect and
/// reused as-is on later runs. Embeddings are computed by the injected
/// embedder; every write persists immediately. If the persisted records were
/// built with a different embedding model they are discarded on load, which
/// makes the store fresh again and forces a reseed.
pub struct PersistentVectorStore<E: Embedder> {
    path: PathBuf,
    embedder: Arc<E>,
    records: Arc<RwLock<HashMap<String, StoredRecord>>>,
    connected: bool,
}

impl<E: Embedder> PersistentVectorStore<E> {
    /// Create a store rooted at `path` (a directory)
    pub fn new(path: impl Into<PathBuf>, embedder: Arc<E>) -> Self {
        Self {
            path: path.into(),
            embedder,
            records: Arc::new(RwLock::new(HashMap::new())),
            connected: false,
        }
    }

    fn store_file(&self) -> PathBuf {
        self.path.join(STORE_FILE)
    }

    async fn persist(&self) -> Result<()> {
        let records = {
            let guard = self
                .records
                .read()
                .map_err(|e| Error::VectorStore(format!("Lock error: {}", e)))?;
            guard.clone()
        };

        let state = PersistedState {
            version: STORE_VERSION,
            model: self.embedder.model_name().to_string(),
            indexed_at: Utc::now().timestamp(),
            records,
        };

        let json = serde_json::to_string_pretty(&state)
            .map_err(|e| Error::Serialization(e.to_string()))?;

        fs::write(self.store_file(), json).await?;
        Ok(())
    }

    async fn load(&self) -> Result<()> {
        let file = self.store_file();
        if !file.exists() {
            return Ok(());
        }

        let json = fs::read_to_string(&file).await?;
        let state: PersistedState =
            serde_json::from_str(&json).map_err(|e| Error::Serialization(e.to_string()))?;

        if state.model != self.embedder.model_name() {
            tracing::warn!(
                "Embedding model changed from '{}' to '{}'; discarding {} stored records",
                state.model,
                self.embedder.model_name(),
                state.records.len()
            );
            return Ok(());
        }

        let mut guard = self
            .records
            .write()
            .map_err(|e| Error::VectorStore(format!("Lock error: {}", e)))?;
        *guard = state.records;

        tracing::info!("Loaded {} records from {}", guard.len(), file.display());
        Ok(())
    }

    fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
        if a.len() != b.len() {
            return 0.0;
        }

        let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
        let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
        let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }

        dot_product / (norm_a * norm_b)
    }
}

#[async_trait]
impl<E: Embedder> VectorStore for PersistentVectorStore<E> {
    async fn connect(&mut self) -> Result<()> {
        fs::create_dir_all(&self.path).await?;
        self.load().await?;
        self.connected = true;
        Ok(())
    }

    async fn is_empty(&self) -> Result<bool> {
        Ok(self.count().await? == 0)
    }

    async fn seed(&self, documents: Vec<Document>) -> Result<usize> {
        let mut staged = HashMap::new();

        for doc in documents {
            let embedding = self.embedder.embed(&doc.content).await?;
            let metadata = RecordMetadata::for_document(&doc);
            // Later documents with the same id silently overwrite earlier ones
            staged.insert(
                doc.id.clone(),
                StoredRecord {
                    id: doc.id,
                    embedding,
                    content: doc.content,
                    metadata,
                },
            );
        }

        let stored = {
            let mut guard = self
                .records
                .write()
                .map_err(|e| Error::VectorStore(format!("Lock error: {}", e)))?;
            guard.extend(staged);
            guard.len()
        };

        self.persist().await?;
        Ok(stored)
    }

    async fn search(&self, query: &str, top_k: usize) -> Result<Vec<Retrieved>> {
        let query_embedding = self.embedder.embed(query).await?;

        let guard = self
            .records
            .read()
            .map_err(|e| Error::VectorStore(format!("Lock error: {}", e)))?;

        let mut results: Vec<Retrieved> = guard
            .values()
            .map(|record| Retrieved {
                content: record.content.clone(),
                metadata: record.metadata.clone(),
                score: Self::cosine_similarity(&query_embedding, &record.embedding),
            })
            .collect();

        results.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        results.truncate(top_k);

        Ok(results)
    }

    async fn count(&self) -> Result<usize> {
        let guard = self
            .records
            .read()
            .map_err(|e| Error::VectorStore(format!("Lock error: {}", e)))?;
        Ok(guard.len())
    }

    fn is_connected(&self) -> bool {
        self.connected
    }
}

/// Open a store at `path` and load any persisted records
///
/// Convenience wrapper returning the connected handle, so callers never hold
/// a half-initialized store.
pub async fn open_store<E: Embedder>(
    path: &Path,
    embedder: Arc<E>,
) -> Result<PersistentVectorStore<E>> {
    let mut store = PersistentVectorStore::new(path, embedder);
    store.connect().await?;
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedder::HashEmbedder;
    use tempfile::tempdir;

    fn documents() -> Vec<Document> {
        vec![
            Document::new("refunds.txt", "Refunds are processed within 14 days."),
            Document::new("shipping.txt", "Standard shipping takes three business days."),
        ]
    }

    async fn connected_store(path: &Path) -> PersistentVectorStore<HashEmbedder> {
        open_store(path, Arc::new(HashEmbedder::new())).await.unwrap()
    }

    #[tokio::test]
    async fn test_seed_populates_fresh_store() {
        let dir = tempdir().unwrap();
        let store = connected_store(dir.path()).await;

        assert!(store.is_empty().await.unwrap());
        let stored = store.seed(documents()).await.unwrap();
        assert_eq!(stored, 2);
        assert_eq!(store.count().await.unwrap(), 2);
        assert!(!store.is_empty().await.unwrap());
    }

    #[tokio::test]
    async fn test_records_survive_reopen() {
        let dir = tempdir().unwrap();

        {
            let store = connected_store(dir.path()).await;
            store.seed(documents()).await.unwrap();
        }

        let reopened = connected_store(dir.path()).await;
        assert!(!reopened.is_empty().await.unwrap());
        assert_eq!(reopened.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_search_returns_at_most_count() {
        let dir = tempdir().unwrap();
        let store = connected_store(dir.path()).await;
        store.seed(documents()).await.unwrap();

        let results = store.search("anything at all", 10).await.unwrap();
        assert_eq!(results.len(), 2);
    }

    #[tokio::test]
    async fn test_search_empty_store_returns_nothing() {
        let dir = tempdir().unwrap();
        let store = connected_store(dir.path()).await;

        let results = store.search("refund policy", 3).await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_single_document_is_sole_result() {
        let dir = tempdir().unwrap();
        let store = connected_store(dir.path()).await;
        store
            .seed(vec![Document::new(
                "refunds.txt",
                "Refunds are processed within 14 days.",
            )])
            .await
            .unwrap();

        let results = store.search("What is the refund policy?", 3).await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].metadata.doc_id, "refunds.txt");
    }

    #[tokio::test]
    async fn test_nearest_document_ranks_first() {
        let dir = tempdir().unwrap();
        let store = connected_store(dir.path()).await;
        store.seed(documents()).await.unwrap();

        let results = store.search("How are refunds processed?", 2).await.unwrap();
        assert_eq!(results[0].metadata.doc_id, "refunds.txt");
    }

    #[tokio::test]
    async fn test_duplicate_ids_overwrite() {
        let dir = tempdir().unwrap();
        let store = connected_store(dir.path()).await;
        store
            .seed(vec![
                Document::new("policy.txt", "first version"),
                Document::new("policy.txt", "second version"),
            ])
            .await
            .unwrap();

        assert_eq!(store.count().await.unwrap(), 1);
        let results = store.search("version", 1).await.unwrap();
        assert_eq!(results[0].content, "second version");
    }

    #[tokio::test]
    async fn test_model_mismatch_discards_records() {
        let dir = tempdir().unwrap();

        {
            let store = connected_store(dir.path()).await;
            store.seed(documents()).await.unwrap();
        }

        let other_model = Arc::new(HashEmbedder::with_dimension(64));
        let reopened = open_store(dir.path(), other_model).await.unwrap();
        assert!(reopened.is_empty().await.unwrap());
    }
}
