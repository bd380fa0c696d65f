//! Structured Inference Client — submits a compiled prompt to the generative
//! backend and parses the response into a typed `AlignmentReport`.
//!
//! Backend timeout, refusal, and schema-invalid output all collapse into one
//! `InferenceError` carrying a human-readable cause. No partial report is
//! ever returned, and the call is never retried here — generative backends
//! are non-idempotent, so resubmission is the caller's decision.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

use crate::alignment::prompt::ALIGNMENT_SYSTEM;
use crate::alignment::report::AlignmentReport;
use crate::llm_client::LlmClient;

#[derive(Debug, Error)]
#[error("inference failed: {0}")]
pub struct InferenceError(pub String);

/// The inference seam. Carried in `AppState` as `Arc<dyn StructuredInference>`
/// so the service layer can be exercised against stubs.
#[async_trait]
pub trait StructuredInference: Send + Sync {
    async fn infer(
        &self,
        prompt: &str,
        timeout: Duration,
    ) -> Result<AlignmentReport, InferenceError>;
}

/// Production backend: the Anthropic Messages API via the shared `LlmClient`,
/// with the output schema pinned in the system prompt.
pub struct LlmInference {
    llm: LlmClient,
}

impl LlmInference {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl StructuredInference for LlmInference {
    async fn infer(
        &self,
        prompt: &str,
        timeout: Duration,
    ) -> Result<AlignmentReport, InferenceError> {
        self.llm
            .call_json::<AlignmentReport>(prompt, ALIGNMENT_SYSTEM, timeout)
            .await
            .map_err(|e| InferenceError(e.to_string()))
    }
}
