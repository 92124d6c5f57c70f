//! Cohere configuration

use serde::{Deserialize, Serialize};
use std::env;

use askdocs_core::{Error, Result};

/// Configuration for the Cohere chat client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CohereConfig {
    pub api_key: String,
    pub api_url: String,
    pub model: String,
    pub temperature: f32,
}

impl CohereConfig {
    pub const DEFAULT_API_URL: &'static str = "https://api.cohere.com";

    /// Create configuration from environment variables
    ///
    /// `COHERE_API_KEY` is required; its absence is a fatal startup error.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_key = env::var("COHERE_API_KEY").map_err(|_| {
            Error::Configuration("COHERE_API_KEY environment variable is not set".to_string())
        })?;

        let api_url =
            env::var("COHERE_API_URL").unwrap_or_else(|_| Self::DEFAULT_API_URL.to_string());

        let model = env::var("COHERE_MODEL").unwrap_or_else(|_| "command-r-plus".to_string());

        Ok(Self {
            api_key,
            api_url,
            model,
            temperature: 0.3,
        })
    }

    /// Create configuration with explicit values
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            api_url: Self::DEFAULT_API_URL.to_string(),
            model: "command-r-plus".to_string(),
            temperature: 0.3,
        }
    }
}
