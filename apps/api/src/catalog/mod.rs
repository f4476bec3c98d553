//! Job Catalog — the fixed set of job profiles every resume is scored against.
//!
//! Built once at startup and shared read-only through `AppState`.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A job profile with the skills it requires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub required_skills: Vec<String>,
    pub description: String,
}

impl Job {
    pub fn new(id: &str, title: &str, required_skills: &[&str], description: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            required_skills: required_skills.iter().map(|s| s.to_string()).collect(),
            description: description.to_string(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Job '{0}' has no required skills")]
    NoRequiredSkills(String),

    #[error("Duplicate job id '{0}'")]
    DuplicateId(String),
}

/// Ordered, validated list of jobs. Order is the tie-break order for ranking.
#[derive(Debug, Clone)]
pub struct JobCatalog {
    jobs: Vec<Job>,
}

impl JobCatalog {
    /// Validates and wraps a job list. Every job must require at least one
    /// skill, otherwise its score would be a division by zero.
    pub fn new(jobs: Vec<Job>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for job in &jobs {
            if job.required_skills.is_empty() {
                return Err(CatalogError::NoRequiredSkills(job.id.clone()));
            }
            if !seen.insert(job.id.as_str()) {
                return Err(CatalogError::DuplicateId(job.id.clone()));
            }
        }
        Ok(Self { jobs })
    }

    /// The five built-in job profiles, validated like any other catalog.
    pub fn seeded() -> Result<Self, CatalogError> {
        Self::new(seeded_jobs())
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn get(&self, id: &str) -> Option<&Job> {
        self.jobs.iter().find(|j| j.id == id)
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }
}

fn seeded_jobs() -> Vec<Job> {
    vec![
        Job::new(
            "job-1",
            "Frontend Engineer (React)",
            &[
                "React",
                "TypeScript",
                "Tailwind CSS",
                "JavaScript",
                "HTML",
                "CSS",
                "Redux",
                "Unit Testing",
            ],
            "Developing high-quality user interfaces with modern React practices.",
        ),
        Job::new(
            "job-2",
            "Backend Developer (Node.js)",
            &[
                "Node.js",
                "Express",
                "PostgreSQL",
                "Redis",
                "API Design",
                "Microservices",
                "Docker",
                "Authentication",
            ],
            "Building scalable server-side applications and robust APIs.",
        ),
        Job::new(
            "job-3",
            "Full Stack Developer",
            &[
                "React",
                "Node.js",
                "TypeScript",
                "PostgreSQL",
                "AWS",
                "Git",
                "REST API",
                "GraphQL",
            ],
            "Handling both client-side and server-side development end-to-end.",
        ),
        Job::new(
            "job-4",
            "Data Scientist",
            &[
                "Python",
                "SQL",
                "Machine Learning",
                "Pandas",
                "NumPy",
                "Scikit-learn",
                "Statistics",
                "Data Visualization",
            ],
            "Analyzing complex datasets and building predictive models.",
        ),
        Job::new(
            "job-5",
            "DevOps Engineer",
            &[
                "Docker",
                "Kubernetes",
                "CI/CD",
                "AWS",
                "Terraform",
                "Linux",
                "Bash",
                "Networking",
            ],
            "Automating infrastructure and deployment pipelines.",
        ),
    ]
}
