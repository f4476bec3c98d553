// Resume analysis: AI extraction, scoring and persistence of one run.
// All LLM calls go through llm_client.

pub mod assembly;
pub mod extraction;
pub mod handlers;
pub mod prompts;
