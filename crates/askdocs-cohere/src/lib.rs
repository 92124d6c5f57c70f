//! Cohere chat API integration for askdocs
//!
//! This crate provides the Cohere implementation of the TextGenerator trait.

mod client;
mod config;

#[cfg(test)]
mod tests;

pub use client::CohereClient;
pub use config::CohereConfig;

// Re-export core types for convenience
pub use askdocs_core::{Error, GenerationResult, Result, TextGenerator};
