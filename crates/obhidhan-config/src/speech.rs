use std::env;

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_command() -> String {
    "espeak".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SpeechConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// External TTS command; the utterance is passed as the last argument
    #[serde(default = "default_command")]
    pub command: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            command: default_command(),
            args: Vec::new(),
        }
    }
}

impl SpeechConfig {
    pub fn new() -> Self {
        let enabled = env::var("SPEECH_ENABLED")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_enabled);

        let command = env::var("SPEECH_COMMAND").unwrap_or_else(|_| default_command());

        let args = env::var("SPEECH_ARGS")
            .map(|v| v.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default();

        Self {
            enabled,
            command,
            args,
        }
    }
}
