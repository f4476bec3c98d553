//! Matching Engine — scores extracted resume skills against every catalog job.
//!
//! Pure and deterministic: the same catalog and skills always give the same output.
//!
//! Algorithm:
//! 1. Lower-case and trim every extracted skill.
//! 2. For each job, a required skill counts as matched when any normalized
//!    extracted skill contains it, or is contained by it (bidirectional substring).
//! 3. score = round(100 × matched / required), half-up.
//! 4. Stable sort by score descending, so ties keep catalog order.

use serde::Serialize;

use crate::catalog::{Job, JobCatalog};
use crate::models::analysis::JobMatch;

/// Coarse fit classification used when presenting a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FitBand {
    Strong,
    Moderate,
    Weak,
}

impl FitBand {
    pub fn for_score(score: u32) -> Self {
        if score > 70 {
            FitBand::Strong
        } else if score > 40 {
            FitBand::Moderate
        } else {
            FitBand::Weak
        }
    }
}

/// Scores `extracted_skills` against every job in `catalog`, best match first.
pub fn calculate_match_scores(catalog: &JobCatalog, extracted_skills: &[String]) -> Vec<JobMatch> {
    let normalized: Vec<String> = extracted_skills.iter().map(|s| normalize(s)).collect();

    let mut matches: Vec<JobMatch> = catalog
        .jobs()
        .iter()
        .map(|job| score_job(job, &normalized))
        .collect();

    // Vec::sort_by is stable; equal scores keep catalog order.
    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches
}

/// The top-ranked match of an already sorted list.
pub fn best_match(matches: &[JobMatch]) -> Option<&JobMatch> {
    matches.first()
}

fn score_job(job: &Job, normalized_extracted: &[String]) -> JobMatch {
    let (matched_skills, missing_skills): (Vec<String>, Vec<String>) = job
        .required_skills
        .iter()
        .cloned()
        .partition(|skill| is_present(&normalize(skill), normalized_extracted));

    JobMatch {
        job_id: job.id.clone(),
        job_title: job.title.clone(),
        score: percentage(matched_skills.len(), job.required_skills.len()),
        matched_skills,
        missing_skills,
    }
}

/// Bidirectional containment. Short skills like "Go" or "R" match generously.
fn is_present(required: &str, normalized_extracted: &[String]) -> bool {
    normalized_extracted
        .iter()
        .any(|s| s.contains(required) || required.contains(s.as_str()))
}

fn normalize(skill: &str) -> String {
    skill.trim().to_lowercase()
}

/// round(100 × part / total), half-up, in integer arithmetic.
fn percentage(part: usize, total: usize) -> u32 {
    // JobCatalog::new refuses jobs without required skills.
    debug_assert!(total > 0, "job has no required skills");
    if total == 0 {
        return 0;
    }
    ((200 * part + total) / (2 * total)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn single_job_catalog() -> JobCatalog {
        JobCatalog::new(vec![Job::new(
            "job-1",
            "Frontend",
            &["React", "TypeScript", "Redux"],
            "",
        )])
        .unwrap()
    }

    #[test]
    fn test_case_and_whitespace_are_normalized() {
        let result = calculate_match_scores(&single_job_catalog(), &skills(&["react", "TYPESCRIPT "]));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].matched_skills, skills(&["React", "TypeScript"]));
        assert_eq!(result[0].missing_skills, skills(&["Redux"]));
        assert_eq!(result[0].score, 67);
    }

    #[test]
    fn test_empty_skills_score_zero_for_every_job() {
        let catalog = JobCatalog::seeded().unwrap();
        let result = calculate_match_scores(&catalog, &[]);
        assert_eq!(result.len(), catalog.len());
        for m in &result {
            let job = catalog.get(&m.job_id).unwrap();
            assert_eq!(m.score, 0);
            assert!(m.matched_skills.is_empty());
            assert_eq!(m.missing_skills, job.required_skills);
        }
    }

    #[test]
    fn test_empty_skills_keep_catalog_order() {
        let ids: Vec<String> = calculate_match_scores(&JobCatalog::seeded().unwrap(), &[])
            .into_iter()
            .map(|m| m.job_id)
            .collect();
        assert_eq!(ids, skills(&["job-1", "job-2", "job-3", "job-4", "job-5"]));
    }

    #[test]
    fn test_partition_and_score_invariants_hold() {
        let catalog = JobCatalog::seeded().unwrap();
        let input = skills(&["Python", "docker", " AWS ", "sql", "Git", "css"]);
        for m in calculate_match_scores(&catalog, &input) {
            let job = catalog.get(&m.job_id).unwrap();
            let total = job.required_skills.len();
            assert_eq!(m.matched_skills.len() + m.missing_skills.len(), total);
            let expected = (100.0 * m.matched_skills.len() as f64 / total as f64).round() as u32;
            assert_eq!(m.score, expected);
            assert!(m.score <= 100);
        }
    }

    #[test]
    fn test_output_preserves_required_skill_order() {
        let catalog = JobCatalog::seeded().unwrap();
        let input = skills(&["unit testing", "html", "react"]);
        let result = calculate_match_scores(&catalog, &input);
        let frontend = result.iter().find(|m| m.job_id == "job-1").unwrap();
        // "CSS" stays missing: neither "css" nor "html" contains the other.
        assert_eq!(frontend.matched_skills, skills(&["React", "HTML", "Unit Testing"]));
        assert_eq!(
            frontend.missing_skills,
            skills(&["TypeScript", "Tailwind CSS", "JavaScript", "CSS", "Redux"])
        );
    }

    #[test]
    fn test_sorted_descending_with_stable_ties() {
        let catalog = JobCatalog::new(vec![
            Job::new("a", "A", &["Rust", "Go"], ""),
            Job::new("b", "B", &["Rust", "Java"], ""),
            Job::new("c", "C", &["Rust"], ""),
            Job::new("d", "D", &["Kotlin", "Rust"], ""),
        ])
        .unwrap();
        let result = calculate_match_scores(&catalog, &skills(&["rust"]));
        let order: Vec<(&str, u32)> = result.iter().map(|m| (m.job_id.as_str(), m.score)).collect();
        assert_eq!(order, vec![("c", 100), ("a", 50), ("b", 50), ("d", 50)]);
    }

    #[test]
    fn test_idempotent() {
        let catalog = JobCatalog::seeded().unwrap();
        let input = skills(&["React", "Node.js", "Docker"]);
        assert_eq!(
            calculate_match_scores(&catalog, &input),
            calculate_match_scores(&catalog, &input)
        );
    }

    #[test]
    fn test_extracted_skill_containing_requirement_matches() {
        let catalog = JobCatalog::new(vec![Job::new("j", "J", &["React"], "")]).unwrap();
        let result = calculate_match_scores(&catalog, &skills(&["React Native"]));
        assert_eq!(result[0].score, 100);
    }

    #[test]
    fn test_requirement_containing_extracted_skill_matches() {
        let catalog = JobCatalog::new(vec![Job::new("j", "J", &["REST API"], "")]).unwrap();
        let result = calculate_match_scores(&catalog, &skills(&["api"]));
        assert_eq!(result[0].matched_skills, skills(&["REST API"]));
    }

    /// Substring containment is permissive: "go" is found inside "django".
    /// Kept as-is; this test pins the behaviour so any tightening is deliberate.
    #[test]
    fn test_short_skill_false_positive_is_preserved() {
        let catalog = JobCatalog::new(vec![Job::new("j", "J", &["Go"], "")]).unwrap();
        let result = calculate_match_scores(&catalog, &skills(&["Django"]));
        assert_eq!(result[0].score, 100);
    }

    #[test]
    fn test_duplicate_extracted_skills_do_not_inflate_score() {
        let result =
            calculate_match_scores(&single_job_catalog(), &skills(&["React", "react", "REACT"]));
        assert_eq!(result[0].matched_skills, skills(&["React"]));
        assert_eq!(result[0].score, 33);
    }

    #[test]
    fn test_whitespace_only_skill_matches_everything() {
        // Trims to "", which every requirement contains.
        let result = calculate_match_scores(&single_job_catalog(), &skills(&["   "]));
        assert_eq!(result[0].score, 100);
    }

    #[test]
    fn test_percentage_rounds_half_up() {
        assert_eq!(percentage(1, 8), 13); // 12.5
        assert_eq!(percentage(3, 8), 38); // 37.5
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(0, 8), 0);
        assert_eq!(percentage(8, 8), 100);
    }

    #[test]
    fn test_fit_band_thresholds() {
        assert_eq!(FitBand::for_score(100), FitBand::Strong);
        assert_eq!(FitBand::for_score(71), FitBand::Strong);
        assert_eq!(FitBand::for_score(70), FitBand::Moderate);
        assert_eq!(FitBand::for_score(41), FitBand::Moderate);
        assert_eq!(FitBand::for_score(40), FitBand::Weak);
        assert_eq!(FitBand::for_score(0), FitBand::Weak);
    }

    #[test]
    fn test_best_match_is_first() {
        let result = calculate_match_scores(&JobCatalog::seeded().unwrap(), &skills(&["Python", "SQL"]));
        assert_eq!(best_match(&result).unwrap().job_id, "job-4");
        assert!(best_match(&[]).is_none());
    }
}
