//! Analysis Assembly — one full run: extract → match → persist.
//!
//! Nothing is saved unless extraction succeeds, and the saved match scores are
//! exactly the engine output computed here.

use chrono::{SecondsFormat, Utc};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::analysis::extraction::SkillExtractor;
use crate::catalog::JobCatalog;
use crate::errors::AppError;
use crate::matching::engine::calculate_match_scores;
use crate::models::analysis::ResumeAnalysis;
use crate::store::AnalysisStore;

/// Placeholder owner for every analysis; there is a single implicit user.
pub const DEFAULT_USER_ID: &str = "current-user";
/// File name recorded when the resume was pasted rather than uploaded.
pub const PASTED_TEXT_FILE_NAME: &str = "Pasted Text Resume";

/// Source of unique analysis ids.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

pub struct UuidV4Generator;

impl IdGenerator for UuidV4Generator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub resume_text: String,
    pub file_name: Option<String>,
}

/// Collaborators needed for one run.
pub struct AssemblyDeps<'a> {
    pub extractor: &'a dyn SkillExtractor,
    pub catalog: &'a JobCatalog,
    pub store: &'a AnalysisStore,
    pub ids: &'a dyn IdGenerator,
}

/// Runs extraction, scores the skills, saves and returns the new record.
pub async fn analyze_resume(
    request: AnalyzeRequest,
    deps: AssemblyDeps<'_>,
) -> Result<ResumeAnalysis, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "Please upload or paste your resume text.".to_string(),
        ));
    }

    let extracted = deps.extractor.extract(&request.resume_text).await?;
    let match_scores = calculate_match_scores(deps.catalog, &extracted.skills);

    let file_name = request
        .file_name
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| PASTED_TEXT_FILE_NAME.to_string());

    let analysis = ResumeAnalysis {
        id: deps.ids.next_id(),
        user_id: DEFAULT_USER_ID.to_string(),
        file_name,
        uploaded_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        extracted_skills: extracted.skills,
        summary: extracted.summary,
        suggested_roles: extracted.suggested_roles,
        match_scores,
    };

    deps.store.save_analysis(&analysis).await?;

    info!(
        "Analysis {} complete: {} skills, best fit {:?}",
        analysis.id,
        analysis.extracted_skills.len(),
        analysis.best_match().map(|m| (&m.job_title, m.score))
    );

    Ok(analysis)
}
