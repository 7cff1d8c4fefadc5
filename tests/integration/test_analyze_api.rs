use std::sync::Arc;
use futures::future::join_all;
use reviewlyzer::ui::review_server::routes;
use serde_json::Value;
use tempfile::TempDir;
use warp::http::StatusCode;
use crate::common::{content_type, multipart_body, scratch_is_empty, state_in, zip_bytes, FormPart};

async fn post_analyze(dir: &TempDir, body: Vec<u8>) -> (StatusCode, Value) {
    let api = routes(Arc::new(state_in(dir, None)));
    let response = warp::test::request()
        .method("POST")
        .path("/api/analyze")
        .header("content-type", content_type())
        .body(body)
        .reply(&api)
        .await;

    let json = serde_json::from_slice(response.body()).unwrap();
    (response.status(), json)
}

#[tokio::test]
async fn test_health_reports_ok() {
    let dir = TempDir::new().unwrap();
    let api = routes(Arc::new(state_in(&dir, None)));

    let response = warp::test::request().method("GET").path("/health").reply(&api).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(serde_json::from_slice::<Value>(response.body()).unwrap(), serde_json::json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_analyze_nested_express_project() {
    let dir = TempDir::new().unwrap();
    let archive = zip_bytes(&[
        ("my-app/package.json", r#"{"name":"my-app","dependencies":{"express":"^4.18.2"},"devDependencies":{"jest":"29.0.0"}}"#),
        ("my-app/index.js", "const x = require('./app');\nx.listen(3000);\n"),
        ("my-app/.env", "PORT=3000\n"),
        ("my-app/node_modules/express/index.js", "var a = 1;\n"),
    ]);

    let (status, report) = post_analyze(
        &dir,
        multipart_body(&[FormPart::File(&archive), FormPart::Text("description", "Small express API")]),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["projectDescription"], "Small express API");
    assert_eq!(report["dependencies"]["dependencies"]["express"], "^4.18.2");
    assert_eq!(report["dependencies"]["devDependencies"]["jest"], "29.0.0");
    assert_eq!(report["envFiles"], serde_json::json!([".env"]));
    assert_eq!(report["analyzedFiles"], serde_json::json!(["index.js"]));
    assert_eq!(report["suspiciousIdentifiers"], serde_json::json!(["x"]));
    assert_eq!(report["improvements"].as_array().unwrap().len(), 1);
    assert_eq!(report["improvements"][0]["priority"], "medium");
    assert_eq!(report["rating"], "9.0/10");
    assert!(scratch_is_empty(&dir));
}

#[tokio::test]
async fn test_prompt_field_is_accepted_as_description() {
    let dir = TempDir::new().unwrap();
    let archive = zip_bytes(&[("package.json", "{}"), (".env.example", "PORT=\n")]);

    let (status, report) = post_analyze(&dir, multipart_body(&[FormPart::File(&archive), FormPart::Text("prompt", "Todo app")])).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["projectDescription"], "Todo app");
    assert_eq!(report["rating"], "9.0/10");
}

#[tokio::test]
async fn test_missing_descriptor_is_bad_request() {
    let dir = TempDir::new().unwrap();
    let archive = zip_bytes(&[("src/index.js", "let total = 0;\n")]);

    let (status, body) = post_analyze(&dir, multipart_body(&[FormPart::File(&archive)])).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, serde_json::json!({ "error": "No package.json found" }));
    assert!(scratch_is_empty(&dir));
}

#[tokio::test]
async fn test_missing_file_field_is_bad_request() {
    let dir = TempDir::new().unwrap();

    let (status, body) = post_analyze(&dir, multipart_body(&[FormPart::Text("description", "nothing attached")])).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No file uploaded");
}

#[tokio::test]
async fn test_non_multipart_body_is_bad_request() {
    let dir = TempDir::new().unwrap();
    let api = routes(Arc::new(state_in(&dir, None)));

    let response = warp::test::request()
        .method("POST")
        .path("/api/analyze")
        .header("content-type", "application/json")
        .body("{}")
        .reply(&api)
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_corrupt_archive_is_server_error_with_details() {
    let dir = TempDir::new().unwrap();

    let (status, body) = post_analyze(&dir, multipart_body(&[FormPart::File(b"this is not a zip archive")])).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to analyze project");
    assert!(body["details"].as_str().is_some_and(|details| !details.is_empty()));
    assert!(scratch_is_empty(&dir));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let dir = TempDir::new().unwrap();
    let api = routes(Arc::new(state_in(&dir, None)));

    let response = warp::test::request().method("GET").path("/api/nothing").reply(&api).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_uploads_do_not_interfere() {
    let dir = TempDir::new().unwrap();
    let api = routes(Arc::new(state_in(&dir, None)));

    let requests = (0..8).map(|i| {
        let archive = zip_bytes(&[
            ("package.json", format!(r#"{{"dependencies":{{"dep-{}":"1.0.0"}}}}"#, i).as_str()),
            ("src/app.js", "module.exports = {};\n"),
        ]);
        let api = api.clone();
        async move {
            let response = warp::test::request()
                .method("POST")
                .path("/api/analyze")
                .header("content-type", content_type())
                .body(multipart_body(&[FormPart::File(&archive)]))
                .reply(&api)
                .await;
            (i, response)
        }
    });

    for (i, response) in join_all(requests).await {
        assert_eq!(response.status(), StatusCode::OK);
        let report: Value = serde_json::from_slice(response.body()).unwrap();
        let dependencies = report["dependencies"]["dependencies"].as_object().unwrap();
        assert_eq!(dependencies.len(), 1);
        assert!(dependencies.contains_key(&format!("dep-{}", i)));
    }

    assert!(scratch_is_empty(&dir));
}
