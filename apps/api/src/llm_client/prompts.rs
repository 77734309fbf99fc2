// Shared prompt fragments. Each module that needs LLM calls keeps its own
// prompts.rs alongside it; this file holds the cross-cutting pieces.

/// System prompt used for all career-advice calls.
pub const CAREER_ADVISOR_SYSTEM: &str = "You are a helpful career advisor. \
    Be specific, honest and encouraging. \
    Base every statement on the candidate and job details provided. \
    Do NOT invent employers, projects or credentials the candidate does not list.";

/// Appended to prompts whose reply is parsed as a `|`-separated list.
pub const PIPE_LIST_INSTRUCTION: &str = "\
    Format the answer as a single line: point 1 | point 2 | point 3. \
    Do NOT number the points. Do NOT add any text before or after the list.";

/// Appended to prompts whose reply is parsed as JSON.
pub const JSON_ONLY_INSTRUCTION: &str = "\
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";
