use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Cardinalities the prompt asks the model for. Longer arrays are cut down
/// to these; shorter ones are kept as partial results.
pub const INTERMEDIATE_SENTENCES: usize = 2;
pub const SYNONYMS: usize = 3;
pub const ANTONYMS: usize = 3;

/// Normalized result of one lookup. Every field has a sensible empty
/// default, so a sparse model answer still renders as a partial entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DictionaryEntry {
    pub word: String,
    pub ipa: String,
    pub part_of_speech: String,
    pub definition: String,
    /// Translation in Bangla script
    pub bangla: String,
    pub sentences_intermediate: Vec<String>,
    pub sentence_advanced: String,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}

impl DictionaryEntry {
    /// Maps a raw model answer into an entry. Missing or mistyped fields
    /// become empty strings/lists, and over-long arrays are truncated to
    /// the requested cardinality.
    pub fn from_model_json(value: &Value, fallback_word: &str) -> Self {
        let mut word = text_field(value, "word");
        if word.is_empty() {
            word = fallback_word.to_string();
        }

        Self {
            word,
            ipa: text_field(value, "ipa"),
            part_of_speech: text_field(value, "partOfSpeech"),
            definition: text_field(value, "definition"),
            bangla: text_field(value, "bangla"),
            sentences_intermediate: list_field(
                value,
                "sentencesIntermediate",
                INTERMEDIATE_SENTENCES,
            ),
            sentence_advanced: text_field(value, "sentenceAdvanced"),
            synonyms: list_field(value, "synonyms", SYNONYMS),
            antonyms: list_field(value, "antonyms", ANTONYMS),
        }
    }

    /// Headword plus numbered example sentences, the way the result is
    /// read aloud. `None` when there is nothing worth speaking.
    pub fn speech_text(&self) -> Option<String> {
        let word = self.word.trim();
        let sentences: Vec<&str> = self
            .sentences_intermediate
            .iter()
            .map(String::as_str)
            .chain(
                (!self.sentence_advanced.is_empty()).then_some(self.sentence_advanced.as_str()),
            )
            .collect();

        if word.is_empty() || sentences.is_empty() {
            return None;
        }

        let mut text = format!("{word}.");
        for (i, sentence) in sentences.iter().enumerate() {
            text.push_str(&format!(" {}. {sentence}", i + 1));
        }
        Some(text)
    }
}

fn text_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn list_field(value: &Value, key: &str, cap: usize) -> Vec<String> {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .take(cap)
                .collect()
        })
        .unwrap_or_default()
}
