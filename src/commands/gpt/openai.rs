use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use super::{AnswerFetcher, ProviderError};
use crate::models::openai_models::{ChatCompletionRequest, ChatCompletionResponse};
use crate::services::listener::Question;

const OPENAI_API_BASE: &str = "https://api.openai.com";

pub struct OpenAiClient {
    http: Client,
    api_key: String,
    model: String,
    base_url: String
}

impl OpenAiClient {
    pub fn new(http: Client, api_key: &str, model: &str) -> Self {
        Self::with_base_url(http, api_key, model, OPENAI_API_BASE)
    }

    pub fn with_base_url(http: Client, api_key: &str, model: &str, base_url: &str) -> Self {
        OpenAiClient {
            http,
            api_key: api_key.to_string(),
            model: model.to_string(),
            base_url: base_url.trim_end_matches('/').to_string()
        }
    }
}

#[async_trait]
impl AnswerFetcher for OpenAiClient {
    async fn fetch(&self, question: &Question) -> Result<String, ProviderError> {
        let request = ChatCompletionRequest::from_question(&self.model, question.as_str());

        info!("Sending request to OpenAI API ({})", self.model);
        let response = self.http
            .post(format!("{}/v1/chat/completions", self.base_url))
            .header("Content-Type", "application/json")
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!("OpenAI API response ({}): {}", status, body);

        if !status.is_success() {
            return Err(ProviderError::Status(status));
        }

        let parsed: ChatCompletionResponse = serde_json::from_str(&body)?;
        Ok(parsed.first_text()
            .map(str::to_string)
            .unwrap_or_else(|| self.fallback_text().to_string()))
    }

    fn fallback_text(&self) -> &'static str {
        "No response from OpenAI."
    }

    fn failure_text(&self) -> &'static str {
        "Failed to get a response from OpenAI API."
    }
}
