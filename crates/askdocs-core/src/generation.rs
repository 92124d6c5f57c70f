//! Text generation trait and types

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Error, Result};

/// Result of a successful text generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    pub text: String,
    pub model_id: String,
}

/// Why a generation request failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureKind {
    Network,
    Authentication,
    Timeout,
    Provider,
}

/// A generation failure carrying its cause
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationFailure {
    pub kind: FailureKind,
    pub cause: String,
}

impl fmt::Display for GenerationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error generating response: {}", self.cause)
    }
}

impl From<Error> for GenerationFailure {
    fn from(err: Error) -> Self {
        let kind = match &err {
            Error::Network(_) => FailureKind::Network,
            Error::Authentication(_) => FailureKind::Authentication,
            Error::Timeout(_) => FailureKind::Timeout,
            _ => FailureKind::Provider,
        };
        Self {
            kind,
            cause: err.to_string(),
        }
    }
}

/// Outcome of asking the generator for an answer
///
/// Failures are carried as a value rather than raised across the chat loop
/// boundary; the failure text is surfaced to the user as if it were the
/// answer.
#[derive(Debug, Clone)]
pub enum GenerationOutcome {
    Answer(String),
    Failed(GenerationFailure),
}

impl GenerationOutcome {
    /// Text shown to the user for this outcome
    pub fn display_text(&self) -> String {
        match self {
            GenerationOutcome::Answer(text) => text.clone(),
            GenerationOutcome::Failed(failure) => failure.to_string(),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, GenerationOutcome::Failed(_))
    }
}

/// Trait for hosted text-generation providers
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for a prompt using the provider's configured model
    async fn generate(&self, prompt: &str) -> Result<GenerationResult>;

    /// Get the model ID being used
    fn model_id(&self) -> &str;
}
