use async_trait::async_trait;
use obhidhan_config::lookup::OpenAiConfig;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::LookupError;
use crate::extract::extract_json;
use crate::prompt::{SYSTEM_PROMPT, build_prompt};
use crate::provider::{LookupProvider, usable_credential};

/// Chat-completions backend, authenticated with a bearer header.
pub struct OpenAiProvider {
    client: reqwest::Client,
    config: OpenAiConfig,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessageBody,
}

#[derive(Deserialize)]
struct ChatMessageBody {
    #[serde(default)]
    content: String,
}

impl OpenAiProvider {
    pub fn new(config: OpenAiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl LookupProvider for OpenAiProvider {
    fn name(&self) -> &'static str {
        "OpenAI"
    }

    fn has_credential(&self) -> bool {
        usable_credential(&self.config.api_key)
    }

    async fn lookup(&self, phrase: &str) -> Result<Value, LookupError> {
        if !self.has_credential() {
            return Err(LookupError::CredentialMissing {
                provider: self.name(),
            });
        }

        let prompt = build_prompt(phrase);
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt,
                },
            ],
            temperature: self.config.temperature,
        };

        let response = self
            .client
            .post(&self.config.api_url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status, "OpenAI request failed");
            return Err(LookupError::Api {
                provider: self.name(),
                status,
                body,
            });
        }

        let envelope: ChatResponse = response.json().await?;
        let content = envelope
            .choices
            .first()
            .map(|choice| choice.message.content.as_str())
            .unwrap_or_default();

        extract_json(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_request_serializes_the_expected_envelope() {
        let prompt = build_prompt("cat");
        let request = ChatRequest {
            model: "gpt-4.1-mini",
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt,
                },
            ],
            temperature: 0.4,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-4.1-mini");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
        let temperature = json["temperature"].as_f64().unwrap();
        assert!((temperature - 0.4).abs() < 1e-6);
    }

    #[test]
    fn chat_response_tolerates_empty_choices() {
        let envelope: ChatResponse = serde_json::from_str("{}").unwrap();
        assert!(envelope.choices.is_empty());
    }
}
