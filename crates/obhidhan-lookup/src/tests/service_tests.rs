use obhidhan_config::lookup::{GeminiConfig, LookupConfig, OpenAiConfig};
use obhidhan_types::{LookupRequest, ProviderKind};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::{LookupError, LookupService, normalize_phrase};

fn openai_config(server: &MockServer, api_key: &str) -> LookupConfig {
    LookupConfig {
        openai: OpenAiConfig {
            api_key: api_key.to_string(),
            api_url: format!("{}/v1/chat/completions", server.uri()),
            ..OpenAiConfig::default()
        },
        ..LookupConfig::default()
    }
}

fn gemini_config(server: &MockServer, api_key: &str) -> LookupConfig {
    LookupConfig {
        gemini: GeminiConfig {
            api_key: api_key.to_string(),
            api_url: format!("{}/v1beta/models/test:generateContent", server.uri()),
        },
        ..LookupConfig::default()
    }
}

fn request(phrase: &str, provider: ProviderKind) -> LookupRequest {
    LookupRequest {
        phrase: phrase.to_string(),
        provider,
    }
}

#[test]
fn normalize_phrase_collapses_whitespace() {
    assert_eq!(normalize_phrase("  give \n up  "), "give up");
    assert_eq!(normalize_phrase(" \n\t "), "");
    assert_eq!(normalize_phrase("run"), "run");
}

#[tokio::test]
async fn empty_phrase_fails_without_any_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let service = LookupService::new(&openai_config(&server, "test-key"));
    let result = service
        .perform_lookup(&request("   \n ", ProviderKind::OpenAi))
        .await;

    assert!(matches!(result, Err(LookupError::EmptyInput)));
}

#[tokio::test]
async fn missing_credential_fails_without_any_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let service = LookupService::new(&openai_config(&server, ""));
    let result = service
        .perform_lookup(&request("run", ProviderKind::OpenAi))
        .await;

    match result {
        Err(LookupError::CredentialMissing { provider }) => assert_eq!(provider, "OpenAI"),
        other => panic!("expected CredentialMissing, got {other:?}"),
    }
}

#[tokio::test]
async fn placeholder_credential_counts_as_missing() {
    let server = MockServer::start().await;
    let service = LookupService::new(&openai_config(&server, "YOUR-API-KEY"));

    let result = service
        .perform_lookup(&request("run", ProviderKind::OpenAi))
        .await;

    assert!(matches!(
        result,
        Err(LookupError::CredentialMissing { .. })
    ));
}

#[tokio::test]
async fn openai_completion_maps_into_an_entry() {
    let server = MockServer::start().await;

    let completion = json!({
        "word": "run",
        "ipa": "/rʌn/",
        "partOfSpeech": "verb",
        "definition": "to move quickly on foot",
        "bangla": "দৌড়ানো",
        "sentencesIntermediate": ["I run daily.", "She runs fast."],
        "sentenceAdvanced": "He ran the marathon despite the heat.",
        "synonyms": ["sprint", "dash", "jog"],
        "antonyms": ["walk", "stand", "rest"]
    })
    .to_string();

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("Authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "content": completion } }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = LookupService::new(&openai_config(&server, "test-key"));
    let entry = service
        .perform_lookup(&request("run", ProviderKind::OpenAi))
        .await
        .unwrap();

    assert_eq!(entry.word, "run");
    assert_eq!(entry.synonyms.len(), 3);
    assert_eq!(entry.bangla, "দৌড়ানো");
}

#[tokio::test]
async fn openai_http_error_carries_the_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("backend exploded"))
        .mount(&server)
        .await;

    let service = LookupService::new(&openai_config(&server, "test-key"));
    let result = service
        .perform_lookup(&request("run", ProviderKind::OpenAi))
        .await;

    match result {
        Err(LookupError::Api { status, body, .. }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "backend exploded");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn fenced_completion_is_unwrapped() {
    let server = MockServer::start().await;

    let fenced = "```json\n{\"word\":\"cat\",\"definition\":\"a small feline\"}\n```";
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "content": fenced } }]
        })))
        .mount(&server)
        .await;

    let service = LookupService::new(&openai_config(&server, "test-key"));
    let entry = service
        .perform_lookup(&request("cat", ProviderKind::OpenAi))
        .await
        .unwrap();

    assert_eq!(entry.word, "cat");
    assert_eq!(entry.definition, "a small feline");
}

#[tokio::test]
async fn malformed_completion_keeps_the_raw_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "content": "Sorry, I cannot help with that." } }]
        })))
        .mount(&server)
        .await;

    let service = LookupService::new(&openai_config(&server, "test-key"));
    let result = service
        .perform_lookup(&request("run", ProviderKind::OpenAi))
        .await;

    match result {
        Err(LookupError::MalformedResponse { raw }) => {
            assert_eq!(raw, "Sorry, I cannot help with that.");
        }
        other => panic!("expected MalformedResponse, got {other:?}"),
    }
}

#[tokio::test]
async fn extra_synonyms_are_truncated() {
    let server = MockServer::start().await;

    let completion = json!({
        "word": "big",
        "synonyms": ["large", "huge", "vast", "grand", "immense"]
    })
    .to_string();

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "content": completion } }]
        })))
        .mount(&server)
        .await;

    let service = LookupService::new(&openai_config(&server, "test-key"));
    let entry = service
        .perform_lookup(&request("big", ProviderKind::OpenAi))
        .await
        .unwrap();

    assert_eq!(entry.synonyms, vec!["large", "huge", "vast"]);
}

#[tokio::test]
async fn gemini_sends_the_credential_as_a_query_parameter() {
    let server = MockServer::start().await;

    let completion = json!({ "word": "cat", "bangla": "বিড়াল" }).to_string();
    Mock::given(method("POST"))
        .and(path("/v1beta/models/test:generateContent"))
        .and(query_param("key", "gemini-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": [{ "text": completion }] } }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = LookupService::new(&gemini_config(&server, "gemini-key"));
    let entry = service
        .perform_lookup(&request("cat", ProviderKind::Gemini))
        .await
        .unwrap();

    assert_eq!(entry.word, "cat");
    assert_eq!(entry.bangla, "বিড়াল");
}

#[tokio::test]
async fn gemini_falls_back_to_flat_output_text() {
    let server = MockServer::start().await;

    let completion = json!({ "word": "dog" }).to_string();
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "output_text": completion }]
        })))
        .mount(&server)
        .await;

    let service = LookupService::new(&gemini_config(&server, "gemini-key"));
    let entry = service
        .perform_lookup(&request("dog", ProviderKind::Gemini))
        .await
        .unwrap();

    assert_eq!(entry.word, "dog");
}

#[tokio::test]
async fn missing_word_falls_back_to_the_phrase() {
    let server = MockServer::start().await;

    let completion = json!({ "definition": "a greeting" }).to_string();
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "content": completion } }]
        })))
        .mount(&server)
        .await;

    let service = LookupService::new(&openai_config(&server, "test-key"));
    let entry = service
        .perform_lookup(&request("  hello there ", ProviderKind::OpenAi))
        .await
        .unwrap();

    assert_eq!(entry.word, "hello there");
    assert_eq!(entry.definition, "a greeting");
}
