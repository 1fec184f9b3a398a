use obhidhan_config::lookup::LookupConfig;
use obhidhan_types::{DictionaryEntry, LookupRequest, ProviderKind};
use unicode_normalization::UnicodeNormalization;

pub mod error;
pub mod extract;
pub mod prompt;
pub mod provider;
pub mod providers;

#[cfg(test)]
mod tests;

pub use self::error::LookupError;
pub use self::provider::LookupProvider;
use self::providers::{GeminiProvider, OpenAiProvider};

/// The lookup pipeline: validates the phrase, picks the requested backend,
/// runs the single-shot request and maps the model's JSON into an entry.
pub struct LookupService {
    openai: OpenAiProvider,
    gemini: GeminiProvider,
}

impl LookupService {
    pub fn new(config: &LookupConfig) -> Self {
        Self {
            openai: OpenAiProvider::new(config.openai.clone()),
            gemini: GeminiProvider::new(config.gemini.clone()),
        }
    }

    fn provider(&self, kind: ProviderKind) -> &dyn LookupProvider {
        match kind {
            ProviderKind::OpenAi => &self.openai,
            ProviderKind::Gemini => &self.gemini,
        }
    }

    pub async fn perform_lookup(
        &self,
        request: &LookupRequest,
    ) -> Result<DictionaryEntry, LookupError> {
        let phrase = normalize_phrase(&request.phrase);
        if phrase.is_empty() {
            return Err(LookupError::EmptyInput);
        }

        let provider = self.provider(request.provider);
        if !provider.has_credential() {
            return Err(LookupError::CredentialMissing {
                provider: provider.name(),
            });
        }

        tracing::debug!(provider = provider.name(), %phrase, "dispatching lookup");

        let value = match provider.lookup(&phrase).await {
            Ok(value) => value,
            Err(err) => {
                if let LookupError::MalformedResponse { raw } = &err {
                    tracing::warn!(%raw, "model returned unparseable output");
                }
                return Err(err);
            }
        };

        Ok(DictionaryEntry::from_model_json(&value, &phrase))
    }
}

/// Selections often arrive with stray newlines and odd spacing around
/// them; NFC-normalize and collapse whitespace before prompting.
fn normalize_phrase(raw: &str) -> String {
    let flattened: String = raw.nfc().collect();
    flattened.split_whitespace().collect::<Vec<_>>().join(" ")
}
