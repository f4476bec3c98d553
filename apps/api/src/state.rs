use std::sync::Arc;

use crate::analysis::assembly::{AssemblyDeps, IdGenerator};
use crate::analysis::extraction::SkillExtractor;
use crate::catalog::JobCatalog;
use crate::store::AnalysisStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable extractor. Default: LlmSkillExtractor.
    pub extractor: Arc<dyn SkillExtractor>,
    pub catalog: Arc<JobCatalog>,
    pub store: Arc<AnalysisStore>,
    pub ids: Arc<dyn IdGenerator>,
}

impl AppState {
    pub fn assembly_deps(&self) -> AssemblyDeps<'_> {
        AssemblyDeps {
            extractor: self.extractor.as_ref(),
            catalog: &self.catalog,
            store: &self.store,
            ids: self.ids.as_ref(),
        }
    }
}
