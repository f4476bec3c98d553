// LLM prompt constants for resume extraction.

/// System prompt for resume extraction — enforces JSON-only output.
pub const RESUME_EXTRACT_SYSTEM: &str =
    "You are a senior HR professional and recruitment specialist. \
    Your goal is to accurately parse resumes and provide structured insights. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Resume extraction prompt template. Replace `{resume_text}` before sending.
pub const RESUME_EXTRACT_PROMPT_TEMPLATE: &str = r#"Analyze the following resume and extract the key information.

Return a JSON object with this EXACT schema (no extra fields):
{
  "skills": ["React", "TypeScript", "Team Leadership"],
  "summary": "A professional 2-3 sentence summary of the candidate.",
  "suggested_roles": ["Frontend Engineer", "Full Stack Developer"]
}

Rules:
- "skills": technical and soft skills, each as a short name as it would appear in a job posting.
- "summary": 2-3 sentences, third person, no bullet points.
- "suggested_roles": job titles that fit the experience described.
- All three fields are required. Use an empty array when nothing applies.

Resume Text:
"""
{resume_text}
"""
"#;

/// Fills the extraction template.
pub fn build_extract_prompt(resume_text: &str) -> String {
    RESUME_EXTRACT_PROMPT_TEMPLATE.replace("{resume_text}", resume_text)
}
