use serde::{Deserialize, Serialize};

pub const SYSTEM_PROMPT: &str = "You are a helpful assistant.";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatCompletionResponseChoice>
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatCompletionResponseChoice {
    pub message: ChatCompletionMessage
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatCompletionMessage>
}

impl ChatCompletionRequest {
    pub fn from_question(model: &str, question: &str) -> Self {
        ChatCompletionRequest {
            model: model.to_string(),
            messages: vec![
                ChatCompletionMessage::new("system", SYSTEM_PROMPT),
                ChatCompletionMessage::new("user", question)
            ]
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatCompletionMessage {
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub content: Option<String>
}

impl ChatCompletionMessage {
    pub fn new(role: &str, content: &str) -> Self {
        ChatCompletionMessage {
            role: role.to_string(),
            content: Some(content.to_string())
        }
    }
}

impl ChatCompletionResponse {
    pub fn first_text(&self) -> Option<&str> {
        self.choices.first()
            .and_then(|c| c.message.content.as_deref())
            .filter(|t| !t.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_has_system_then_user_message() {
        let body = serde_json::to_value(ChatCompletionRequest::from_question("gpt-3.5-turbo", "hi")).unwrap();
        assert_eq!(body, json!({
            "model": "gpt-3.5-turbo",
            "messages": [
                { "role": "system", "content": "You are a helpful assistant." },
                { "role": "user", "content": "hi" }
            ]
        }));
    }

    #[test]
    fn first_choice_content_is_used() {
        let response: ChatCompletionResponse = serde_json::from_str(r#"{
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "created": 1700000000,
            "model": "gpt-3.5-turbo",
            "choices": [
                { "index": 0, "message": { "role": "assistant", "content": "Hello!" }, "finish_reason": "stop" }
            ],
            "usage": { "prompt_tokens": 9, "completion_tokens": 2, "total_tokens": 11 }
        }"#).unwrap();
        assert_eq!(response.first_text(), Some("Hello!"));
    }

    #[test]
    fn no_choices_or_null_content_has_no_text() {
        let response: ChatCompletionResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert_eq!(response.first_text(), None);

        let response: ChatCompletionResponse = serde_json::from_str(
            r#"{"choices":[{"index":0,"message":{"role":"assistant","content":null}}]}"#
        ).unwrap();
        assert_eq!(response.first_text(), None);
    }
}
