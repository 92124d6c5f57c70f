//! Vector store trait

use async_trait::async_trait;

use crate::{Document, Result, Retrieved};

/// Trait for persistent vector stores
///
/// A vector store owns a named, disk-backed collection of
/// (id, embedding, content, metadata) records and answers nearest-neighbor
/// queries by cosine similarity. Records are written once by a one-shot
/// seeding pass; this system never updates or deletes them.
#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Open or create the collection at its on-disk location
    async fn connect(&mut self) -> Result<()>;

    /// Whether the collection holds no records
    async fn is_empty(&self) -> Result<bool>;

    /// One-shot bulk insert: embed and store every document
    ///
    /// Only ever invoked when `is_empty()` is true at startup. Returns the
    /// number of records written. Writes persist to disk immediately.
    async fn seed(&self, documents: Vec<Document>) -> Result<usize>;

    /// Return the `top_k` nearest records for a query text, nearest first
    ///
    /// Returns fewer than `top_k` results when fewer records are stored.
    async fn search(&self, query: &str, top_k: usize) -> Result<Vec<Retrieved>>;

    /// Total number of stored records
    async fn count(&self) -> Result<usize>;

    /// Check if the store has been connected
    fn is_connected(&self) -> bool;
}
