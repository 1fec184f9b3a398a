use serde_json::Value;

use crate::error::LookupError;

/// Parses a model completion as strict JSON, tolerating the markdown code
/// fence models like to wrap their answers in.
pub fn extract_json(raw: &str) -> Result<Value, LookupError> {
    let cleaned = strip_fence(raw.trim());

    serde_json::from_str(cleaned).map_err(|_| LookupError::MalformedResponse {
        raw: raw.to_string(),
    })
}

/// Removes a surrounding triple-backtick fence, with an optional language
/// tag on the opening line. Only strips when both delimiters are present,
/// so valid JSON that merely contains backticks is left untouched.
fn strip_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let Some(body) = rest.strip_suffix("```") else {
        return text;
    };

    // Language tag, e.g. ```json
    let body = body.trim_start_matches(|c: char| c.is_ascii_alphabetic());
    let body = body.strip_prefix('\n').unwrap_or(body);
    body
}
