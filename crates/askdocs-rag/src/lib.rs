//! RAG (Retrieval-Augmented Generation) engine for askdocs
//!
//! This crate provides document loading, a deterministic local embedder,
//! a disk-backed vector store, and the engine gluing retrieval to generation.

mod embedder;
mod engine;
mod loader;
mod prompt;
mod store;

pub use embedder::HashEmbedder;
pub use engine::{RagConfig, RagEngine};
pub use loader::load_documents;
pub use prompt::build_prompt;
pub use store::{PersistentVectorStore, open_store};

// Re-export core types for convenience
pub use askdocs_core::{
    Document, Embedder, Error, GenerationOutcome, RecordMetadata, Result, Retrieved,
    TextGenerator, VectorStore,
};
