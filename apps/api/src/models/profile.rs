//! Canonical candidate profile — the single merged view of the portfolio
//! consumed by the prompt compiler, independent of which storage tier each
//! category came from.

use serde::{Deserialize, Serialize};

/// The aggregated candidate profile. Rebuilt fresh on every alignment
/// request — underlying records can be edited between requests, so nothing
/// here is cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateProfile {
    pub about_me: String,
    pub education: Vec<EducationEntry>,
    pub certifications: Vec<CertificationEntry>,
    pub work_history: Vec<WorkEntry>,
    pub skills: SkillSet,
    pub projects: Vec<ProjectEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub completion_date: String,
    pub coursework: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationEntry {
    pub name: String,
    pub issuer: String,
    pub year_earned: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkEntry {
    pub role: String,
    pub organization: String,
    pub dates: String,
    pub responsibilities: Vec<String>,
}

/// The three canonical skill lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillSet {
    pub technical: Vec<String>,
    pub tools: Vec<String>,
    pub soft: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    pub title: String,
    pub purpose: String,
    pub tools: Vec<String>,
    pub skills_demonstrated: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}
