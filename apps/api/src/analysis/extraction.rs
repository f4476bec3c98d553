//! Extraction collaborator — turns raw resume text into skills, summary and roles.
//!
//! `AppState` holds an `Arc<dyn SkillExtractor>`; tests swap in stubs.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

use crate::analysis::prompts::{build_extract_prompt, RESUME_EXTRACT_SYSTEM};
use crate::llm_client::LlmClient;

/// Message shown to end users whenever extraction fails, whatever the cause.
pub const EXTRACTION_FAILED_MESSAGE: &str =
    "Failed to analyze resume with AI. Please check your API configuration.";

/// Structured output of one extraction call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub skills: Vec<String>,
    pub summary: String,
    pub suggested_roles: Vec<String>,
}

/// Extraction failed. `Display` is the user-facing message.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ExtractionError {
    pub message: String,
}

impl ExtractionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
pub trait SkillExtractor: Send + Sync {
    async fn extract(&self, resume_text: &str) -> Result<ExtractionResult, ExtractionError>;
}

/// Extraction backed by the Anthropic API.
pub struct LlmSkillExtractor {
    llm: LlmClient,
}

impl LlmSkillExtractor {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl SkillExtractor for LlmSkillExtractor {
    async fn extract(&self, resume_text: &str) -> Result<ExtractionResult, ExtractionError> {
        let prompt = build_extract_prompt(resume_text);
        self.llm
            .complete_json::<ExtractionResult>(&prompt, RESUME_EXTRACT_SYSTEM)
            .await
            .map_err(|e| {
                error!("Resume extraction failed: {e}");
                ExtractionError::new(EXTRACTION_FAILED_MESSAGE)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_result_uses_snake_case_roles() {
        let json = r#"{
            "skills": ["React", "Node.js"],
            "summary": "Full stack developer with 4 years of experience.",
            "suggested_roles": ["Full Stack Developer"]
        }"#;
        let parsed: ExtractionResult = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.skills, vec!["React", "Node.js"]);
        assert_eq!(parsed.suggested_roles, vec!["Full Stack Developer"]);
    }

    #[test]
    fn test_extraction_result_requires_all_fields() {
        let json = r#"{"skills": ["React"], "summary": "x"}"#;
        assert!(serde_json::from_str::<ExtractionResult>(json).is_err());
    }

    #[test]
    fn test_error_displays_user_message_verbatim() {
        let err = ExtractionError::new(EXTRACTION_FAILED_MESSAGE);
        assert_eq!(err.to_string(), EXTRACTION_FAILED_MESSAGE);
    }
}
