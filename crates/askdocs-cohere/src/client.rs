//! Cohere chat client implementation

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::timeout;

use askdocs_core::{Error, GenerationResult, Result, TextGenerator};

use crate::config::CohereConfig;

/// Cohere chat client
pub struct CohereClient {
    config: CohereConfig,
    client: Client,
}

#[derive(Serialize)]
struct ChatRequest {
    message: String,
    model: String,
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatResponse {
    text: String,
}

impl CohereClient {
    /// Model constants
    pub const COMMAND_R_PLUS: &'static str = "command-r-plus";
    pub const COMMAND_R: &'static str = "command-r";

    const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

    /// Create a new Cohere client from configuration
    pub fn new(config: CohereConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Self::REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;

        Ok(Self { config, client })
    }

    /// Create a new Cohere client from environment variables
    pub fn from_env() -> Result<Self> {
        let config = CohereConfig::from_env()?;
        Self::new(config)
    }

    /// Set the model to use for generation
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    /// Perform the actual chat request
    async fn perform_chat(&self, prompt: &str) -> Result<String> {
        let request_body = ChatRequest {
            message: prompt.to_string(),
            model: self.config.model.clone(),
            temperature: self.config.temperature,
        };

        let url = format!("{}/v1/chat", self.config.api_url);

        let response = self
            .client
            .post(&url)
            .header("Accept", "application/json")
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::Timeout(e.to_string())
                } else {
                    Error::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            if status.as_u16() == 401 || status.as_u16() == 403 {
                return Err(Error::Authentication(format!(
                    "Cohere API rejected the credential with status {}: {}",
                    status, error_text
                )));
            }

            return Err(Error::Generation(format!(
                "Cohere API request failed with status {}: {}",
                status, error_text
            )));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| Error::Serialization(e.to_string()))?;

        let answer = chat_response.text.trim().to_string();
        if answer.is_empty() {
            return Err(Error::Generation(
                "Empty response from Cohere API".to_string(),
            ));
        }

        Ok(answer)
    }
}

#[async_trait]
impl TextGenerator for CohereClient {
    async fn generate(&self, prompt: &str) -> Result<GenerationResult> {
        tracing::debug!(model = %self.config.model, "sending chat request");

        let chat_future = self.perform_chat(prompt);

        let text = match timeout(Self::REQUEST_TIMEOUT, chat_future).await {
            Ok(result) => result?,
            Err(_) => return Err(Error::Timeout("Request timed out".to_string())),
        };

        Ok(GenerationResult {
            text,
            model_id: self.config.model.clone(),
        })
    }

    fn model_id(&self) -> &str {
        &self.config.model
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_model_override() {
        let config = CohereConfig::new("test_key".to_string());
        let client = CohereClient::new(config).unwrap().with_model(CohereClient::COMMAND_R);
        assert_eq!(client.model_id(), "command-r");
    }
}
