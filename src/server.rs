//! HTTP surface: one parse endpoint plus a health probe.
//!
//! Handlers are stateless; the only shared piece is the HTTP client inside
//! [`DocumentFetcher`], so concurrent requests need no locking and a slow
//! download never stalls an unrelated request.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use log::{error, info};
use serde::Deserialize;
use serde_json::json;

use crate::config::Settings;
use crate::error::ParseError;
use crate::fetcher::DocumentFetcher;
use crate::model::ParsedResume;
use crate::{extractor, pdf, recognizer, validate_url};

#[derive(Clone)]
pub struct AppState {
    fetcher: Arc<DocumentFetcher>,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        let fetcher = DocumentFetcher::new(Some(Duration::from_secs(settings.timeout_secs)))
            .with_max_bytes(settings.max_download_bytes);
        Self {
            fetcher: Arc::new(fetcher),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    pub file_url: String,
}

/// Wrapper so axum handlers can return `Result<T, ParseError>` bodies.
pub struct ApiError(ParseError);

impl From<ParseError> for ApiError {
    fn from(err: ParseError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            // All three pipeline error kinds are the caller's fault.
            ParseError::InvalidInput(_)
            | ParseError::DownloadStatus(_)
            | ParseError::Download(_)
            | ParseError::DownloadTooLarge { .. }
            | ParseError::Extraction => StatusCode::BAD_REQUEST,
            ParseError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!("Internal error: {}", self.0);
        }

        let body = Json(json!({
            "error": {
                "code": self.0.code(),
                "message": self.0.to_string()
            }
        }));

        (status, body).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/parse", post(parse_handler))
        .with_state(state)
}

/// GET /health
async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "resume-parser",
        "pdf_decoder": pdf::is_available()
    }))
}

/// POST /parse
async fn parse_handler(
    State(state): State<AppState>,
    Json(request): Json<ParseRequest>,
) -> Result<Json<ParsedResume>, ApiError> {
    validate_url(&request.file_url)?;

    let fetched = state.fetcher.fetch(&request.file_url).await?;
    let text = extractor::extract(&fetched.bytes, fetched.content_type.as_deref());
    if text.trim().is_empty() {
        return Err(ParseError::Extraction.into());
    }

    Ok(Json(recognizer::recognize(&text)))
}

/// Bind the configured port and serve until the process is stopped.
pub async fn serve(settings: Settings) -> Result<(), Box<dyn std::error::Error>> {
    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
    let app = router(AppState::new(&settings));

    info!("Listening on {addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
