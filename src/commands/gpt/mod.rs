mod ask;
mod gemini;
mod openai;
#[cfg(test)]
mod local_server;

use std::sync::Arc;
use async_trait::async_trait;
use reqwest::StatusCode;

use crate::models::config::{Provider, ProviderConfig};
use crate::services::listener::Question;

pub use ask::*;
pub use gemini::GeminiClient;
pub use openai::OpenAiClient;

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Transport(reqwest::Error),

    #[error("provider returned HTTP {0}")]
    Status(StatusCode),

    #[error("could not decode provider response: {0}")]
    Decode(#[from] serde_json::Error)
}

// reqwest puts the request URL in its messages, and the Gemini key lives in the query string.
impl From<reqwest::Error> for ProviderError {
    fn from(ex: reqwest::Error) -> Self {
        ProviderError::Transport(ex.without_url())
    }
}

/// Something that can turn a question into an answer.
#[async_trait]
pub trait AnswerFetcher: Send + Sync {
    /// One request, no retries. A well-formed but empty response is `Ok(self.fallback_text())`.
    async fn fetch(&self, question: &Question) -> Result<String, ProviderError>;

    fn fallback_text(&self) -> &'static str;

    /// What the user sees when [`fetch`](Self::fetch) fails.
    fn failure_text(&self) -> &'static str;
}

pub fn build_fetcher(config: &ProviderConfig, http: reqwest::Client) -> Arc<dyn AnswerFetcher> {
    match config.kind {
        Provider::Gemini => Arc::new(GeminiClient::new(http, &config.api_key, &config.model)),
        Provider::OpenAi => Arc::new(OpenAiClient::new(http, &config.api_key, &config.model))
    }
}
