//! Axum route handlers for the Alignment API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::alignment::report::AlignmentReport;
use crate::alignment::service::{align_with_job_description, AlignmentError, AlignmentOptions};
use crate::errors::AppError;
use crate::models::profile::CandidateProfile;
use crate::profile::aggregator::load_profile;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlignRequest {
    pub job_description: String,
}

impl From<AlignmentError> for AppError {
    fn from(e: AlignmentError) -> Self {
        match e {
            AlignmentError::Validation(msg) => AppError::Validation(msg),
            AlignmentError::AnalysisFailed => AppError::AnalysisFailed,
            AlignmentError::NoStrongMatch => AppError::NoStrongMatch,
        }
    }
}

/// POST /api/v1/alignment
///
/// Runs the Skill-Alignment Pipeline against the submitted job description
/// and the current (live-or-default) candidate profile.
pub async fn handle_align(
    State(state): State<AppState>,
    Json(request): Json<AlignRequest>,
) -> Result<Json<AlignmentReport>, AppError> {
    let options = AlignmentOptions {
        min_jd_chars: state.config.min_jd_chars,
        inference_timeout: std::time::Duration::from_secs(state.config.inference_timeout_secs),
    };

    let report = align_with_job_description(
        state.store.as_ref(),
        state.inference.as_ref(),
        &state.defaults,
        &options,
        &request.job_description,
    )
    .await?;

    Ok(Json(report))
}

/// GET /api/v1/profile
///
/// Returns the aggregated candidate profile — the same merged view the
/// pipeline compiles into its prompt. Store outages degrade to the
/// compiled-in defaults, so this endpoint never fails on a store error.
pub async fn handle_get_profile(
    State(state): State<AppState>,
) -> Result<Json<CandidateProfile>, AppError> {
    let profile = load_profile(state.store.as_ref(), &state.defaults).await;
    Ok(Json(profile))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_request_uses_camel_case_key() {
        let json = serde_json::json!({
            "jobDescription": "A long enough job description for a backend role."
        });
        let request: AlignRequest = serde_json::from_value(json).unwrap();
        assert!(request.job_description.starts_with("A long"));
    }

    #[test]
    fn test_alignment_errors_map_to_distinct_app_errors() {
        assert!(matches!(
            AppError::from(AlignmentError::Validation("too short".to_string())),
            AppError::Validation(_)
        ));
        assert!(matches!(
            AppError::from(AlignmentError::NoStrongMatch),
            AppError::NoStrongMatch
        ));
        assert!(matches!(
            AppError::from(AlignmentError::AnalysisFailed),
            AppError::AnalysisFailed
        ));
    }
}
