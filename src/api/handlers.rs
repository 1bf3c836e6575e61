//! HTTP request handlers for the summarizer service.

use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::SummarizerError;
use crate::extraction::DocumentFormat;
use crate::jobs::{SummaryPipeline, SummaryStore};
use crate::types::{SummarizeTextRequest, SummarizerConfig, SummaryReport};
use crate::SUMMARY_FILE_NAME;

/// Application state shared across handlers.
pub struct AppState {
    pub pipeline: SummaryPipeline,
    pub store: RwLock<SummaryStore>,
}

impl AppState {
    pub fn new(pipeline: SummaryPipeline) -> Self {
        Self {
            pipeline,
            store: RwLock::new(SummaryStore::new()),
        }
    }
}

/// Error body returned to clients.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    error: String,
}

/// Errors surfaced by the HTTP layer.
#[derive(Debug)]
pub enum ApiError {
    Summarizer(SummarizerError),
    BadRequest(String),
}

impl From<SummarizerError> for ApiError {
    fn from(err: SummarizerError) -> Self {
        ApiError::Summarizer(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Summarizer(err) => {
                let status = match &err {
                    SummarizerError::EmptyInput => StatusCode::BAD_REQUEST,
                    SummarizerError::UnsupportedFormat(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
                    SummarizerError::Extraction(_) => StatusCode::UNPROCESSABLE_ENTITY,
                    SummarizerError::NotFound(_) => StatusCode::NOT_FOUND,
                    SummarizerError::AllChunksFailed(_)
                    | SummarizerError::Model(_)
                    | SummarizerError::Http(_) => StatusCode::BAD_GATEWAY,
                    SummarizerError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
                };
                (status, err.to_string())
            }
        };

        if status.is_server_error() {
            warn!(%status, error = %message, "Request failed");
        }

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
    model: String,
}

/// Health check endpoint.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        model: state.pipeline.summarizer().model_name().to_string(),
    })
}

/// Summarize pasted text.
pub async fn summarize_text(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SummarizeTextRequest>,
) -> Result<Json<SummaryReport>, ApiError> {
    info!(chars = request.text.len(), "Received text summarization request");

    let report = state.pipeline.summarize_text(&request.text).await?;
    state.store.write().await.insert(report.clone());

    Ok(Json(report))
}

/// Summarize an uploaded PDF, DOCX or TXT file.
pub async fn summarize_upload(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<SummaryReport>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Invalid upload: {}", e)))?
    {
        let Some(file_name) = field.file_name().map(str::to_string) else {
            continue;
        };

        if DocumentFormat::from_file_name(&file_name).is_none() {
            return Err(SummarizerError::UnsupportedFormat(file_name).into());
        }

        let content = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read upload: {}", e)))?;

        info!(file = %file_name, bytes = content.len(), "Received document upload");

        let report = state.pipeline.summarize_document(&file_name, &content).await?;
        state.store.write().await.insert(report.clone());
        return Ok(Json(report));
    }

    Err(SummarizerError::EmptyInput.into())
}

/// Get a stored summary.
pub async fn get_summary(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<SummaryReport>, ApiError> {
    let store = state.store.read().await;
    store
        .get(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| SummarizerError::NotFound(id).into())
}

/// Download a stored summary as `summary.txt`.
pub async fn download_summary(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let store = state.store.read().await;
    let report = store.get(id).ok_or(SummarizerError::NotFound(id))?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", SUMMARY_FILE_NAME),
            ),
        ],
        report.summary.clone(),
    ))
}

/// Get the active summarization settings.
pub async fn get_config(State(state): State<Arc<AppState>>) -> Json<SummarizerConfig> {
    Json(state.pipeline.config().clone())
}
