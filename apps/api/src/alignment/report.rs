//! Alignment report — the output contract of the pipeline.
//!
//! Field names and the category enum are the wire contract with the
//! inference backend: the backend is instructed to populate exactly these
//! names, and typed deserialization rejects anything else. The backend's
//! output is untrusted input until it parses into these types.

use serde::{Deserialize, Serialize};

/// The closed set of skill categories. An unknown category in backend output
/// fails deserialization rather than passing through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Technical,
    Tools,
    Soft,
}

/// A profile skill the backend judged relevant to the job description.
///
/// Expected invariant (held by construction of the backend instructions, not
/// re-validated here): `skill` appears in the profile list named by
/// `category`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedSkill {
    pub category: SkillCategory,
    pub skill: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevance_explanation: Option<String>,
}

/// A profile project the backend judged relevant. `project_title` is expected
/// to match a project title from the profile used to build the prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedProject {
    pub project_title: String,
    pub relevance_explanation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlignmentReport {
    pub matched_skills: Vec<MatchedSkill>,
    pub matched_projects: Vec<MatchedProject>,
}

impl AlignmentReport {
    /// True when the backend found nothing relevant in either list — a
    /// reportable outcome, not a failure.
    pub fn is_empty(&self) -> bool {
        self.matched_skills.is_empty() && self.matched_projects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_deserializes_from_backend_shape() {
        let json = r#"{
            "matchedSkills": [
                {"category": "technical", "skill": "Python", "relevanceExplanation": "Listed in requirements"},
                {"category": "soft", "skill": "Clear Communication"}
            ],
            "matchedProjects": [
                {
                    "projectTitle": "Local AI Agent Pipeline",
                    "relevanceExplanation": "Demonstrates API integration",
                    "projectLink": "https://example.com/repo"
                }
            ]
        }"#;

        let report: AlignmentReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.matched_skills.len(), 2);
        assert_eq!(report.matched_skills[0].category, SkillCategory::Technical);
        assert!(report.matched_skills[1].relevance_explanation.is_none());
        assert_eq!(
            report.matched_projects[0].project_title,
            "Local AI Agent Pipeline"
        );
        assert!(!report.is_empty());
    }

    #[test]
    fn test_unknown_category_fails_deserialization() {
        let json = r#"{"category": "hobbies", "skill": "Juggling"}"#;
        let result: Result<MatchedSkill, _> = serde_json::from_str(json);
        assert!(result.is_err(), "categories outside the enum must be rejected");
    }

    #[test]
    fn test_category_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&SkillCategory::Technical).unwrap(),
            "\"technical\""
        );
        assert_eq!(
            serde_json::to_string(&SkillCategory::Tools).unwrap(),
            "\"tools\""
        );
        assert_eq!(
            serde_json::to_string(&SkillCategory::Soft).unwrap(),
            "\"soft\""
        );
    }

    #[test]
    fn test_empty_report_is_empty() {
        let report = AlignmentReport {
            matched_skills: vec![],
            matched_projects: vec![],
        };
        assert!(report.is_empty());
    }

    #[test]
    fn test_missing_required_explanation_on_project_fails() {
        let json = r#"{"projectTitle": "Thing"}"#;
        let result: Result<MatchedProject, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
