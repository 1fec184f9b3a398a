use async_trait::async_trait;
use obhidhan_config::lookup::GeminiConfig;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::LookupError;
use crate::extract::extract_json;
use crate::prompt::build_prompt;
use crate::provider::{LookupProvider, usable_credential};

/// Generate-content backend, authenticated with a `key` query parameter.
pub struct GeminiProvider {
    client: reqwest::Client,
    config: GeminiConfig,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct Candidate {
    content: Option<CandidateContent>,
    output_text: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct CandidateContent {
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct CandidatePart {
    text: String,
}

/// First candidate's part text, falling back to the flat `output_text`
/// shape some API revisions return.
fn completion_text(envelope: &GenerateResponse) -> &str {
    let Some(candidate) = envelope.candidates.first() else {
        return "";
    };

    if let Some(content) = &candidate.content
        && let Some(part) = content.parts.first()
        && !part.text.is_empty()
    {
        return &part.text;
    }

    candidate.output_text.as_deref().unwrap_or_default()
}

impl GeminiProvider {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl LookupProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        "Gemini"
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
        let request = GenerateRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: &prompt }],
            }],
        };

        let response = self
            .client
            .post(&self.config.api_url)
            .query(&[("key", self.config.api_key.as_str())])
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status, "Gemini request failed");
            return Err(LookupError::Api {
                provider: self.name(),
                status,
                body,
            });
        }

        let envelope: GenerateResponse = response.json().await?;
        extract_json(completion_text(&envelope))
    }
}
