/// Everything that can go wrong between a phrase and a rendered entry.
/// All variants surface to the user as a single message; none are retried.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("please enter or select a word or phrase")]
    EmptyInput,

    #[error("{provider} API key is not configured")]
    CredentialMissing { provider: &'static str },

    #[error("{provider} API error: HTTP {status}")]
    Api {
        provider: &'static str,
        status: u16,
        body: String,
    },

    /// The completion was not valid JSON after fence stripping. The raw
    /// text is kept for diagnostics and logged, never shown to the user.
    #[error("could not parse JSON from model output")]
    MalformedResponse { raw: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}
