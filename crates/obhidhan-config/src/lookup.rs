use std::env;

use serde::{Deserialize, Serialize};

fn default_provider() -> String {
    "openai".to_string()
}

fn default_openai_url() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}

fn default_openai_model() -> String {
    "gpt-4.1-mini".to_string()
}

fn default_temperature() -> f32 {
    0.4
}

fn default_gemini_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash-lite:generateContent"
        .to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LookupConfig {
    /// Backend used when the session holds no preference
    #[serde(default = "default_provider")]
    pub default_provider: String,
    pub openai: OpenAiConfig,
    pub gemini: GeminiConfig,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            default_provider: default_provider(),
            openai: OpenAiConfig::default(),
            gemini: GeminiConfig::default(),
        }
    }
}

impl LookupConfig {
    pub fn new() -> Self {
        let default_provider =
            env::var("DICTIONARY_PROVIDER").unwrap_or_else(|_| default_provider());

        Self {
            default_provider,
            openai: OpenAiConfig::new(),
            gemini: GeminiConfig::new(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct OpenAiConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_openai_url")]
    pub api_url: String,
    #[serde(default = "default_openai_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_url: default_openai_url(),
            model: default_openai_model(),
            temperature: default_temperature(),
        }
    }
}

impl OpenAiConfig {
    pub fn new() -> Self {
        Self {
            api_key: env::var("OPENAI_API_KEY").unwrap_or_default(),
            api_url: env::var("OPENAI_API_URL").unwrap_or_else(|_| default_openai_url()),
            model: env::var("OPENAI_MODEL").unwrap_or_else(|_| default_openai_model()),
            temperature: env::var("OPENAI_TEMPERATURE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_temperature),
        }
    }
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GeminiConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_gemini_url")]
    pub api_url: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_url: default_gemini_url(),
        }
    }
}

impl GeminiConfig {
    pub fn new() -> Self {
        Self {
            api_key: env::var("GEMINI_API_KEY").unwrap_or_default(),
            api_url: env::var("GEMINI_API_URL").unwrap_or_else(|_| default_gemini_url()),
        }
    }
}
