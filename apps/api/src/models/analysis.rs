use serde::{Deserialize, Serialize};

/// How well one catalog job is covered by a set of extracted skills.
///
/// `matched_skills` and `missing_skills` partition the job's required skills,
/// each keeping the catalog's original casing and order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatch {
    pub job_id: String,
    pub job_title: String,
    pub score: u32, // 0 – 100
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

/// One persisted analysis run. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeAnalysis {
    pub id: String,
    pub user_id: String,
    pub file_name: String,
    /// RFC 3339 UTC timestamp, e.g. `2026-10-19T08:30:00.000Z`.
    pub uploaded_at: String,
    pub extracted_skills: Vec<String>,
    pub summary: String,
    pub suggested_roles: Vec<String>,
    /// Sorted by score, highest first.
    pub match_scores: Vec<JobMatch>,
}

impl ResumeAnalysis {
    /// The top-ranked job, if any job was scored.
    pub fn best_match(&self) -> Option<&JobMatch> {
        self.match_scores.first()
    }
}

/// Condensed row for history listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    pub id: String,
    pub file_name: String,
    pub uploaded_at: String,
    pub top_job_title: Option<String>,
    pub top_score: Option<u32>,
    pub skill_count: usize,
}

impl From<&ResumeAnalysis> for AnalysisSummary {
    fn from(analysis: &ResumeAnalysis) -> Self {
        let best = analysis.best_match();
        AnalysisSummary {
            id: analysis.id.clone(),
            file_name: analysis.file_name.clone(),
            uploaded_at: analysis.uploaded_at.clone(),
            top_job_title: best.map(|m| m.job_title.clone()),
            top_score: best.map(|m| m.score),
            skill_count: analysis.extracted_skills.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ResumeAnalysis {
        ResumeAnalysis {
            id: "a-1".to_string(),
            user_id: "current-user".to_string(),
            file_name: "cv.txt".to_string(),
            uploaded_at: "2026-10-19T08:30:00.000Z".to_string(),
            extracted_skills: vec!["Rust".to_string(), "SQL".to_string()],
            summary: "Systems engineer.".to_string(),
            suggested_roles: vec!["Backend Engineer".to_string()],
            match_scores: vec![JobMatch {
                job_id: "job-4".to_string(),
                job_title: "Data Scientist".to_string(),
                score: 13,
                matched_skills: vec!["SQL".to_string()],
                missing_skills: vec!["Python".to_string()],
            }],
        }
    }

    #[test]
    fn test_analysis_serializes_with_camel_case_keys() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["userId"], "current-user");
        assert_eq!(value["fileName"], "cv.txt");
        assert_eq!(value["uploadedAt"], "2026-10-19T08:30:00.000Z");
        assert_eq!(value["matchScores"][0]["jobId"], "job-4");
        assert_eq!(value["matchScores"][0]["matchedSkills"][0], "SQL");
        assert_eq!(value["matchScores"][0]["missingSkills"][0], "Python");
    }

    #[test]
    fn test_summary_takes_top_match() {
        let summary = AnalysisSummary::from(&sample());
        assert_eq!(summary.top_job_title.as_deref(), Some("Data Scientist"));
        assert_eq!(summary.top_score, Some(13));
        assert_eq!(summary.skill_count, 2);
    }

    #[test]
    fn test_summary_without_matches() {
        let mut analysis = sample();
        analysis.match_scores.clear();
        let summary = AnalysisSummary::from(&analysis);
        assert!(summary.top_job_title.is_none());
        assert!(summary.top_score.is_none());
    }
}
