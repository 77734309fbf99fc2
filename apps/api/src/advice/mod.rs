// Advice generation: deterministic templates plus an optional LLM-backed writer.
// All LLM calls go through llm_client.

pub mod insights;
pub mod interview;
pub mod prompts;
pub mod templates;
pub mod writer;
