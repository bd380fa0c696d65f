use std::sync::Arc;

use crate::alignment::inference::StructuredInference;
use crate::config::Config;
use crate::models::profile::CandidateProfile;
use crate::profile::store::ProfileStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read-only profile store. Trait object so tests can substitute stubs.
    pub store: Arc<dyn ProfileStore>,
    /// Structured inference backend for the alignment pipeline.
    pub inference: Arc<dyn StructuredInference>,
    /// Compiled-in fallback profile, injected rather than read as a global.
    pub defaults: Arc<CandidateProfile>,
    pub config: Config,
}
