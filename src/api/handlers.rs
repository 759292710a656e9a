//! HTTP request handlers for the conversion and chunking API.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::{error, info, warn};

use crate::engine::ExecutionEngine;
use crate::types::{
    ChunkingRequest, ChunkingResponse, ClearResponse, ConversionStatus,
    ConvertDocumentErrorResponse, ConvertDocumentResponse, ConvertDocumentsRequest,
    HealthCheckResponse,
};
use crate::validation::{validate_chunking_request, validate_convert_request, ValidationErrors};

/// Application state shared across handlers.
pub struct AppState {
    pub engine: Arc<dyn ExecutionEngine>,
}

/// What a handler can fail with, and how that maps onto the wire.
pub enum ApiError {
    /// Request parsed but violated validation rules; client-correctable.
    Validation(ValidationErrors),
    /// The engine itself failed; passed through verbatim.
    Engine(anyhow::Error),
}

/// One violated rule in a 422 payload.
#[derive(Debug, Serialize)]
pub struct ValidationDetail {
    category: &'static str,
    message: String,
}

/// Body of a 422 validation failure.
#[derive(Debug, Serialize)]
pub struct ValidationErrorResponse {
    detail: Vec<ValidationDetail>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => {
                warn!(violations = errors.len(), "rejected invalid request");
                let detail = errors
                    .errors()
                    .iter()
                    .map(|e| ValidationDetail {
                        category: e.category(),
                        message: e.to_string(),
                    })
                    .collect();
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(ValidationErrorResponse { detail }),
                )
                    .into_response()
            }
            ApiError::Engine(e) => {
                error!(error = %e, "engine failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ConvertDocumentErrorResponse {
                        status: ConversionStatus::Failure,
                    }),
                )
                    .into_response()
            }
        }
    }
}

/// Health check endpoint.
pub async fn health_check() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse::default())
}

/// Clear results held by the engine.
pub async fn clear_results(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ClearResponse>, ApiError> {
    state.engine.clear().await.map_err(ApiError::Engine)?;
    Ok(Json(ClearResponse::default()))
}

/// Convert documents from the given sources.
pub async fn convert_source(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ConvertDocumentsRequest>,
) -> Result<Json<ConvertDocumentResponse>, ApiError> {
    validate_convert_request(&request, state.engine.kind()).map_err(ApiError::Validation)?;

    info!(
        sources = request.sources.len(),
        target = %request.target,
        "dispatching conversion request"
    );

    let response = state
        .engine
        .convert(request)
        .await
        .map_err(ApiError::Engine)?;
    Ok(Json(response))
}

/// Chunk inline documents.
pub async fn chunk_source(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChunkingRequest>,
) -> Result<Json<ChunkingResponse>, ApiError> {
    validate_chunking_request(&request).map_err(ApiError::Validation)?;

    info!(
        sources = request.sources.len(),
        method = %request.method,
        "dispatching chunking request"
    );

    let response = state
        .engine
        .chunk(request)
        .await
        .map_err(ApiError::Engine)?;
    Ok(Json(response))
}
