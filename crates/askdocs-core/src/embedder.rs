//! Embedder trait

use async_trait::async_trait;

use crate::Result;

/// Trait for text embedders
///
/// An embedder maps a text string to a fixed-length numeric vector so that
/// semantically similar texts have nearby vectors. Implementations are
/// injected wherever embeddings are needed so tests can substitute
/// deterministic fakes.
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Compute the embedding vector for a text
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Length of the vectors this embedder produces
    fn dimension(&self) -> usize;

    /// Name of the embedding model, recorded with persisted vectors
    fn model_name(&self) -> &str;
}
