pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::matching::handlers as matching;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog & matching
        .route("/api/v1/jobs", get(matching::handle_list_jobs))
        .route("/api/v1/jobs/:id", get(matching::handle_get_job))
        .route("/api/v1/match", post(matching::handle_match))
        // Analyses
        .route(
            "/api/v1/analyses",
            get(analysis::handle_list_analyses).post(analysis::handle_create_analysis),
        )
        .route(
            "/api/v1/analyses/summary",
            get(analysis::handle_analysis_summaries),
        )
        .route(
            "/api/v1/analyses/:id",
            get(analysis::handle_get_analysis).delete(analysis::handle_delete_analysis),
        )
        .with_state(state)
}
