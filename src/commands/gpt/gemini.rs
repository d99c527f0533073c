use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use super::{AnswerFetcher, ProviderError};
use crate::models::gemini_models::{GeminiRequest, GeminiResponse};
use crate::services::listener::Question;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";

pub struct GeminiClient {
    http: Client,
    api_key: String,
    model: String,
    base_url: String
}

impl GeminiClient {
    pub fn new(http: Client, api_key: &str, model: &str) -> Self {
        Self::with_base_url(http, api_key, model, GEMINI_API_BASE)
    }

    pub fn with_base_url(http: Client, api_key: &str, model: &str, base_url: &str) -> Self {
        GeminiClient {
            http,
            api_key: api_key.to_string(),
            model: model.to_string(),
            base_url: base_url.trim_end_matches('/').to_string()
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl AnswerFetcher for GeminiClient {
    async fn fetch(&self, question: &Question) -> Result<String, ProviderError> {
        let request = GeminiRequest::from_question(question.as_str());

        info!("Sending request to Gemini API ({})", self.model);
        let response = self.http
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!("Gemini API response ({}): {}", status, body);

        if !status.is_success() {
            return Err(ProviderError::Status(status));
        }

        let parsed: GeminiResponse = serde_json::from_str(&body)?;
        Ok(parsed.first_text()
            .map(str::to_string)
            .unwrap_or_else(|| self.fallback_text().to_string()))
    }

    fn fallback_text(&self) -> &'static str {
        "No response from Gemini."
    }

    fn failure_text(&self) -> &'static str {
        "Failed to get a response from Gemini API."
    }
}
