// Skill-Alignment Pipeline: validate → aggregate → compile → infer.
// All LLM calls go through llm_client — no direct Anthropic calls here.

pub mod handlers;
pub mod inference;
pub mod prompt;
pub mod report;
pub mod service;
