use std::sync::Arc;
use reviewlyzer::config::constants::REVIEW_ERROR_SENTINEL;
use reviewlyzer::services::ai_providers::gemini::GeminiProvider;
use reviewlyzer::services::file_reviewer::FileReviewer;
use reviewlyzer::structs::config::ai_config::AiConfig;
use reviewlyzer::ui::review_server::routes;
use serde_json::Value;
use tempfile::TempDir;
use warp::http::StatusCode;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use crate::common::{content_type, multipart_body, scratch_is_empty, state_in, zip_bytes, FormPart};

fn reviewer_for(mock_server: &MockServer) -> FileReviewer {
    let provider = GeminiProvider::new("test-api-key".to_string(), &AiConfig::default())
        .unwrap()
        .with_base_url(mock_server.uri());
    FileReviewer::new(Arc::new(provider))
}

fn gemini_text(text: &str) -> Value {
    serde_json::json!({ "candidates": [{ "content": { "parts": [{ "text": text }] } }] })
}

async fn post_review(dir: &TempDir, reviewer: Option<FileReviewer>, body: Vec<u8>) -> (StatusCode, Value) {
    let api = routes(Arc::new(state_in(dir, reviewer)));
    let response = warp::test::request()
        .method("POST")
        .path("/api/review")
        .header("content-type", content_type())
        .body(body)
        .reply(&api)
        .await;

    (response.status(), serde_json::from_slice(response.body()).unwrap())
}

#[tokio::test]
async fn test_review_without_key_is_configuration_error() {
    let dir = TempDir::new().unwrap();
    let archive = zip_bytes(&[("package.json", "{}"), ("index.js", "let total = 1;\n")]);

    let (status, body) = post_review(&dir, None, multipart_body(&[FormPart::File(&archive)])).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("AI review is not configured"));
    assert!(scratch_is_empty(&dir));
}

#[tokio::test]
async fn test_review_returns_one_entry_per_sampled_file() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-1.5-flash:generateContent"))
        .and(body_string_contains("File: src/app.js"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_text("Split the handler.")))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-1.5-flash:generateContent"))
        .and(body_string_contains("File: index.js"))
        .respond_with(ResponseTemplate::new(500).set_body_string("backend unavailable"))
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let archive = zip_bytes(&[
        ("package.json", r#"{"dependencies":{"express":"4.18.2"}}"#),
        ("index.js", "const server = require('./src/app');\n"),
        ("src/app.js", "module.exports = function handler(req, res) {};\n"),
        (".env", "PORT=3000\n"),
    ]);

    let (status, body) = post_review(
        &dir,
        Some(reviewer_for(&mock_server)),
        multipart_body(&[FormPart::File(&archive), FormPart::Text("prompt", "error handling")]),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["focus"], "error handling");
    assert_eq!(
        body["reviews"],
        serde_json::json!([
            { "file": "index.js", "review": REVIEW_ERROR_SENTINEL },
            { "file": "src/app.js", "review": "Split the handler." },
        ])
    );
    assert_eq!(body["report"]["rating"], "9.0/10");
    assert!(scratch_is_empty(&dir));
}

#[tokio::test]
async fn test_review_missing_descriptor_makes_no_model_calls() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_text("unused")))
        .expect(0)
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let archive = zip_bytes(&[("lib/index.js", "let a = 1;\n")]);

    let (status, body) = post_review(&dir, Some(reviewer_for(&mock_server)), multipart_body(&[FormPart::File(&archive)])).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No package.json found");
}
