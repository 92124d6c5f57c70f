//! Deterministic local embedder

use async_trait::async_trait;

use askdocs_core::{Embedder, Result};

/// Feature-hashed bag-of-words embedder
///
/// Tokens are lowercased, split on non-alphanumeric boundaries, hashed into
/// a fixed number of signed buckets, and the resulting vector is L2
/// normalized. Deterministic given its input, which keeps retrieval tests
/// reproducible and the persisted index stable across runs.
pub struct HashEmbedder {
    dimension: usize,
    model_name: String,
}

impl HashEmbedder {
    pub const DEFAULT_DIMENSION: usize = 256;

    /// Create an embedder with the default dimension
    pub fn new() -> Self {
        Self::with_dimension(Self::DEFAULT_DIMENSION)
    }

    /// Create an embedder with an explicit dimension
    pub fn with_dimension(dimension: usize) -> Self {
        Self {
            dimension,
            model_name: format!("hash-bow-{}", dimension),
        }
    }

    fn embed_text(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.dimension];

        for token in text
            .to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|token| !token.is_empty())
        {
            let hash = fnv1a(token.as_bytes());
            let bucket = (hash % self.dimension as u64) as usize;
            // High hash bit decides the sign, spreading collisions apart
            let sign = if (hash >> 63) & 1 == 0 { 1.0 } else { -1.0 };
            vector[bucket] += sign;
        }

        let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for value in &mut vector {
                *value /= norm;
            }
        }

        vector
    }
}

impl Default for HashEmbedder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Embedder for HashEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        Ok(self.embed_text(text))
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}

/// FNV-1a, stable across platforms and compiler versions
fn fnv1a(bytes: &[u8]) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    let mut hash = OFFSET_BASIS;
    for byte in bytes {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(PRIME);
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cosine(a: &[f32], b: &[f32]) -> f32 {
        a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
    }

    #[tokio::test]
    async fn test_embedding_is_deterministic() {
        let embedder = HashEmbedder::new();
        let first = embedder.embed("refund policy for returns").await.unwrap();
        let second = embedder.embed("refund policy for returns").await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_embedding_dimension_and_norm() {
        let embedder = HashEmbedder::new();
        let vector = embedder.embed("shipping times and costs").await.unwrap();
        assert_eq!(vector.len(), HashEmbedder::DEFAULT_DIMENSION);

        let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
    }

    #[tokio::test]
    async fn test_empty_text_gives_zero_vector() {
        let embedder = HashEmbedder::new();
        let vector = embedder.embed("").await.unwrap();
        assert!(vector.iter().all(|v| *v == 0.0));
    }

    #[tokio::test]
    async fn test_similar_text_scores_higher() {
        let embedder = HashEmbedder::new();
        let query = embedder.embed("refund policy").await.unwrap();
        let near = embedder.embed("our refund policy takes 14 days").await.unwrap();
        let far = embedder.embed("kubernetes cluster node pools").await.unwrap();

        assert!(cosine(&query, &near) > cosine(&query, &far));
    }
}
