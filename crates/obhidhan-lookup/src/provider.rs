use async_trait::async_trait;
use serde_json::Value;

use crate::error::LookupError;

/// A key is usable when it is non-empty and not the sample placeholder
/// people leave in their .env files.
pub(crate) fn usable_credential(key: &str) -> bool {
    let key = key.trim();
    !key.is_empty() && !key.starts_with("YOUR")
}

/// One LLM backend able to answer a dictionary lookup.
#[async_trait]
pub trait LookupProvider: Send + Sync {
    fn name(&self) -> &'static str;

    fn has_credential(&self) -> bool;

    /// Builds the prompt, issues one non-retried request and returns the
    /// model's JSON answer after fence stripping.
    async fn lookup(&self, phrase: &str) -> Result<Value, LookupError>;
}
