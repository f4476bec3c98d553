// Skill matching: scores extracted resume skills against the job catalog.
// Pure computation; persistence lives in `store`.

pub mod engine;
pub mod handlers;
