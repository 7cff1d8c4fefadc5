use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use futures::TryStreamExt;
use serde::Serialize;
use serde_json::json;
use warp::http::StatusCode;
use warp::hyper::body::Buf;
use warp::multipart::{FormData, Part};
use warp::{Filter, Rejection, Reply};
use crate::config::constants::{DESCRIPTION_FIELDS, MAX_UPLOAD_BYTES, UPLOAD_FIELD};
use crate::errors::{ErrorBody, ErrorHandler, ReviewError, ReviewResult};
use crate::structs::app_state::AppState;
use crate::structs::quality_report::QualityReport;
use crate::structs::review_response::ReviewResponse;
use crate::structs::upload_form::UploadForm;

pub struct ReviewServer {
    state: Arc<AppState>,
    addr: SocketAddr,
}

impl ReviewServer {
    pub fn new(state: AppState, host: &str, port: u16) -> ReviewResult<Self> {
        let addr: SocketAddr = format!("{}:{}", host, port).parse().map_err(|e| {
            ReviewError::config_error(&format!("Invalid listen address {}:{}: {}", host, port, e), Some("Use an IP address such as 0.0.0.0"))
        })?;

        Ok(Self {
            state: Arc::new(state),
            addr,
        })
    }

    /// Serves until Ctrl-C.
    pub async fn run(self) -> ReviewResult<()> {
        let ai_enabled = self.state.reviewer.is_some();
        let (addr, server) = warp::serve(routes(self.state))
            .try_bind_with_graceful_shutdown(self.addr, async {
                tokio::signal::ctrl_c().await.ok();
                log::info!("🛑 Shutting down review server...");
            })
            .map_err(|e| ReviewError::config_error(&format!("Failed to bind {}: {}", self.addr, e), Some("Set PORT to a free port")))?;

        log::info!("🌐 Review server listening on http://{}", addr);
        if !ai_enabled {
            log::warn!("⚠️ No AI API key configured, /api/review will answer with an error");
        }

        server.await;
        log::info!("✅ Review server shutdown complete");
        Ok(())
    }
}

pub fn routes(state: Arc<AppState>) -> impl Filter<Extract = (impl Reply,), Error = Infallible> + Clone {
    let state_filter = warp::any().map(move || Arc::clone(&state));

    let health = warp::path("health")
        .and(warp::path::end())
        .and(warp::get())
        .map(|| warp::reply::json(&json!({ "status": "ok" })));

    let analyze = warp::path!("api" / "analyze")
        .and(warp::post())
        .and(warp::multipart::form().max_length(MAX_UPLOAD_BYTES))
        .and(state_filter.clone())
        .and_then(analyze_handler);

    let review = warp::path!("api" / "review")
        .and(warp::post())
        .and(warp::multipart::form().max_length(MAX_UPLOAD_BYTES))
        .and(state_filter)
        .and_then(review_handler);

    health
        .or(analyze)
        .or(review)
        .recover(handle_rejection)
        .with(warp::log("reviewlyzer::http"))
}

async fn analyze_handler(form: FormData, state: Arc<AppState>) -> Result<warp::reply::Response, Infallible> {
    Ok(respond(analyze(form, state).await))
}

async fn review_handler(form: FormData, state: Arc<AppState>) -> Result<warp::reply::Response, Infallible> {
    Ok(respond(review(form, state).await))
}

async fn analyze(form: FormData, state: Arc<AppState>) -> ReviewResult<QualityReport> {
    let upload = read_form(form).await?;
    let archive = upload.archive.ok_or_else(|| ReviewError::user_input("No file uploaded"))?;
    let description = upload.description;

    log::info!("📥 Received archive of {} bytes for analysis", archive.len());

    tokio::task::spawn_blocking(move || {
        let project = state.allocator.spool(&archive)?;
        state.pipeline.inspect(project, description)
    })
    .await?
}

async fn review(form: FormData, state: Arc<AppState>) -> ReviewResult<ReviewResponse> {
    let upload = read_form(form).await?;
    let archive = upload.archive.ok_or_else(|| ReviewError::user_input("No file uploaded"))?;
    let reviewer = state.reviewer.clone().ok_or_else(|| {
        ReviewError::config_error("AI review is not configured", Some("Set GEMINI_API_KEY and restart the server"))
    })?;
    let focus = upload.description;

    log::info!("📥 Received archive of {} bytes for AI review", archive.len());

    let blocking_state = Arc::clone(&state);
    let material = tokio::task::spawn_blocking(move || {
        let project = blocking_state.allocator.spool(&archive)?;
        blocking_state.pipeline.review_material(project, None)
    })
    .await??;

    let reviews = reviewer.review(&material.sources, focus.as_deref()).await;

    Ok(ReviewResponse {
        focus,
        reviews,
        report: material.report,
    })
}

async fn read_form(form: FormData) -> ReviewResult<UploadForm> {
    let parts: Vec<(String, Vec<u8>)> = form
        .and_then(|part| async move {
            let name = part.name().to_string();
            let bytes = read_part(part).await?;
            Ok((name, bytes))
        })
        .try_collect()
        .await
        .map_err(|e| {
            log::debug!("Malformed multipart body: {}", e);
            ReviewError::user_input("Malformed multipart upload")
        })?;

    let mut upload = UploadForm::default();
    for (name, bytes) in parts {
        if name == UPLOAD_FIELD && !bytes.is_empty() {
            upload.archive = Some(bytes);
        } else if DESCRIPTION_FIELDS.contains(&name.as_str()) {
            let text = String::from_utf8_lossy(&bytes).trim().to_string();
            if !text.is_empty() {
                upload.description = Some(text);
            }
        }
    }

    Ok(upload)
}

async fn read_part(mut part: Part) -> Result<Vec<u8>, warp::Error> {
    let mut bytes = Vec::new();
    while let Some(chunk) = part.data().await {
        bytes.extend_from_slice(chunk?.chunk());
    }
    Ok(bytes)
}

fn respond<T: Serialize>(result: ReviewResult<T>) -> warp::reply::Response {
    match result {
        Ok(body) => warp::reply::json(&body).into_response(),
        Err(e) => {
            ErrorHandler::handle_error(&e);
            warp::reply::with_status(warp::reply::json(&e.to_body()), e.status_code()).into_response()
        }
    }
}

async fn handle_rejection(rejection: Rejection) -> Result<warp::reply::Response, Infallible> {
    let (status, message) = if rejection.is_not_found() {
        (StatusCode::NOT_FOUND, "Not found")
    } else if rejection.find::<warp::reject::PayloadTooLarge>().is_some() {
        (StatusCode::PAYLOAD_TOO_LARGE, "Upload is too large")
    } else if rejection.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
    } else {
        // missing or non-multipart body
        (StatusCode::BAD_REQUEST, "No file uploaded")
    };

    Ok(warp::reply::with_status(warp::reply::json(&ErrorBody::new(message)), status).into_response())
}
