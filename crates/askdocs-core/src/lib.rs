//! Core traits and types for askdocs
//!
//! This crate defines the fundamental traits and types used across the
//! askdocs system. It provides capability-facing interfaces for text
//! embedding, vector storage, and text generation, making the system
//! test-friendly and extensible.

pub mod document;
pub mod embedder;
pub mod error;
pub mod generation;
pub mod vector_store;

pub use document::{DEFAULT_CATEGORY, Document, RecordMetadata, Retrieved, SOURCE_TAG};
pub use embedder::Embedder;
pub use error::{Error, Result};
pub use generation::{
    FailureKind, GenerationFailure, GenerationOutcome, GenerationResult, TextGenerator,
};
pub use vector_store::VectorStore;
