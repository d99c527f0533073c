use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct GeminiRequest {
    pub contents: Vec<GeminiContent>
}

impl GeminiRequest {
    pub fn from_question(question: &str) -> Self {
        GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart { text: question.to_string() }]
            }]
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct GeminiContent {
    #[serde(default)]
    pub parts: Vec<GeminiPart>
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct GeminiPart {
    // Non-text parts (inline data etc.) come through as empty text.
    #[serde(default)]
    pub text: String
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct GeminiCandidate {
    #[serde(default)]
    pub content: GeminiContent
}

impl GeminiResponse {
    /// Text of the first part of the first candidate, if it says anything.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates.first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.as_str())
            .filter(|t| !t.trim().is_empty())
    }
}
