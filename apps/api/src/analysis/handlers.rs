//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::analysis::assembly::{analyze_resume, AnalyzeRequest};
use crate::errors::AppError;
use crate::models::analysis::{AnalysisSummary, ResumeAnalysis};
use crate::state::AppState;

/// POST /api/v1/analyses
///
/// Extracts skills from the resume text, scores them and stores the result.
pub async fn handle_create_analysis(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<(StatusCode, Json<ResumeAnalysis>), AppError> {
    let analysis = analyze_resume(request, state.assembly_deps()).await?;
    Ok((StatusCode::CREATED, Json(analysis)))
}

/// GET /api/v1/analyses
pub async fn handle_list_analyses(
    State(state): State<AppState>,
) -> Result<Json<Vec<ResumeAnalysis>>, AppError> {
    Ok(Json(state.store.get_history().await?))
}

/// GET /api/v1/analyses/summary
pub async fn handle_analysis_summaries(
    State(state): State<AppState>,
) -> Result<Json<Vec<AnalysisSummary>>, AppError> {
    Ok(Json(state.store.history_summaries().await?))
}

/// GET /api/v1/analyses/:id
pub async fn handle_get_analysis(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ResumeAnalysis>, AppError> {
    state
        .store
        .get_analysis_by_id(&id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Analysis {id} not found")))
}

/// DELETE /api/v1/analyses/:id
///
/// Idempotent: deleting an unknown id still returns 204.
pub async fn handle_delete_analysis(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.store.delete_analysis(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
