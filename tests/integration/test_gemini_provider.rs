use reviewlyzer::enums::ai_provider_error::AiProviderError;
use reviewlyzer::services::ai_providers::gemini::GeminiProvider;
use reviewlyzer::structs::config::ai_config::AiConfig;
use reviewlyzer::traits::ai_provider::AiProvider;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MODEL_PATH: &str = "/models/gemini-1.5-flash:generateContent";

fn create_provider(mock_server: &MockServer) -> GeminiProvider {
    GeminiProvider::new("test-api-key".to_string(), &AiConfig::default())
        .unwrap()
        .with_base_url(mock_server.uri())
}

#[tokio::test]
async fn test_gemini_generate_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .and(query_param("key", "test-api-key"))
        .and(body_partial_json(serde_json::json!({
            "contents": [{ "role": "user", "parts": [{ "text": "Review this" }] }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "text": "Looks " }, { "text": "good." }] },
                "finishReason": "STOP"
            }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let text = create_provider(&mock_server).generate("Review this".to_string()).await.unwrap();

    assert_eq!(text, "Looks good.");
}

#[tokio::test]
async fn test_gemini_rate_limited() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(429).set_body_string("quota exhausted"))
        .mount(&mock_server)
        .await;

    let error = create_provider(&mock_server).generate("hi".to_string()).await.unwrap_err();

    assert!(matches!(error, AiProviderError::ApiError(ref message) if message.contains("Rate limit exceeded")));
}

#[tokio::test]
async fn test_gemini_rejected_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(403).set_body_string("API key not valid"))
        .mount(&mock_server)
        .await;

    let error = create_provider(&mock_server).generate("hi".to_string()).await.unwrap_err();

    assert!(matches!(error, AiProviderError::AuthenticationError(_)));
}

#[tokio::test]
async fn test_gemini_empty_candidates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "candidates": [] })))
        .mount(&mock_server)
        .await;

    let error = create_provider(&mock_server).generate("hi".to_string()).await.unwrap_err();

    assert!(matches!(error, AiProviderError::SerializationError(_)));
}
