//! Alignment Service — orchestrates the Skill-Alignment Pipeline.
//!
//! Flow: validate job-posting text → load canonical profile (concurrent
//! store reads with default fallback) → compile prompt → infer → interpret.
//!
//! Every outcome that leaves this module is one of the named variants of
//! `AlignmentError` or a well-formed report. Backend internals never cross
//! this boundary: inference causes are logged here and surfaced as the
//! generic `AnalysisFailed`.

use std::time::Duration;
use thiserror::Error;
use tracing::{error, info};

use crate::alignment::inference::StructuredInference;
use crate::alignment::prompt::compile;
use crate::alignment::report::AlignmentReport;
use crate::models::profile::CandidateProfile;
use crate::profile::aggregator::load_profile;
use crate::profile::store::ProfileStore;

#[derive(Debug, Error, PartialEq)]
pub enum AlignmentError {
    /// Bad input — recoverable by the caller supplying better input.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The inference backend failed; the cause was logged, not exposed.
    #[error("Failed to analyze the job description due to a server error. Please try again later.")]
    AnalysisFailed,

    /// The analysis ran but found nothing relevant. Not a system error.
    #[error("The analysis could not find strong matches for this job description. Try another one.")]
    NoStrongMatch,
}

/// Pipeline tunables, derived from `Config` at startup.
#[derive(Debug, Clone)]
pub struct AlignmentOptions {
    pub min_jd_chars: usize,
    pub inference_timeout: Duration,
}

/// Runs the full pipeline for one job description.
///
/// The only input-shape check happens before any I/O: postings shorter than
/// the configured floor are rejected without touching the store or the
/// backend. Store outages degrade to defaults inside `load_profile` and are
/// never visible to the caller.
pub async fn align_with_job_description(
    store: &dyn ProfileStore,
    inference: &dyn StructuredInference,
    defaults: &CandidateProfile,
    options: &AlignmentOptions,
    jd_text: &str,
) -> Result<AlignmentReport, AlignmentError> {
    if jd_text.trim().chars().count() < options.min_jd_chars {
        return Err(AlignmentError::Validation(format!(
            "Please provide a job description with at least {} characters.",
            options.min_jd_chars
        )));
    }

    let profile = load_profile(store, defaults).await;
    let prompt = compile(&profile, jd_text);

    let report = match inference.infer(&prompt, options.inference_timeout).await {
        Ok(report) => report,
        Err(e) => {
            error!("Skill alignment inference failed: {e}");
            return Err(AlignmentError::AnalysisFailed);
        }
    };

    if report.is_empty() {
        info!("Alignment produced no matches for this job description");
        return Err(AlignmentError::NoStrongMatch);
    }

    info!(
        "Alignment matched {} skills and {} projects",
        report.matched_skills.len(),
        report.matched_projects.len()
    );
    Ok(report)
}
