//! Axum route handlers for the catalog and ad-hoc matching.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::catalog::Job;
use crate::errors::AppError;
use crate::matching::engine::{best_match, calculate_match_scores, FitBand};
use crate::models::analysis::JobMatch;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RankedMatch {
    #[serde(flatten)]
    pub job_match: JobMatch,
    pub band: FitBand,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResponse {
    pub best_fit: Option<String>,
    pub matches: Vec<RankedMatch>,
}

/// GET /api/v1/jobs
pub async fn handle_list_jobs(State(state): State<AppState>) -> Json<Vec<Job>> {
    Json(state.catalog.jobs().to_vec())
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Job>, AppError> {
    state
        .catalog
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))
}

/// POST /api/v1/match
///
/// Scores a skill list against the catalog without persisting anything.
pub async fn handle_match(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    let scored = calculate_match_scores(&state.catalog, &request.skills);
    let best_fit = best_match(&scored).map(|m| m.job_title.clone());

    let matches = scored
        .into_iter()
        .map(|job_match| RankedMatch {
            band: FitBand::for_score(job_match.score),
            job_match,
        })
        .collect();

    Ok(Json(MatchResponse { best_fit, matches }))
}
