//! Raw document-store records, one row type per record kind.
//!
//! Conversions into the canonical profile entry types are field renaming
//! only — no derivation happens here. Missing optional columns normalize to
//! empty/absent, never to a placeholder string.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::profile::{EducationEntry, ProjectEntry, WorkEntry};

/// The single bio document. Counts as present only when `about` is non-blank.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BioRow {
    pub id: Uuid,
    pub about: String,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EducationRow {
    pub id: Uuid,
    pub degree_program_name: String,
    pub institution_name: String,
    pub completion_date: String,
    pub relevant_coursework: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WorkRow {
    pub id: Uuid,
    pub job_title_role: String,
    pub organization_company: String,
    pub dates_of_involvement: String,
    pub key_responsibilities: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// A titled group of skills as stored, e.g. "Technical Skills" or
/// "Tools & Technologies". Bucketing into the canonical three lists happens
/// in the aggregator.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SkillCategoryRow {
    pub id: Uuid,
    pub title: String,
    pub skills: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProjectRow {
    pub id: Uuid,
    pub project_title: String,
    pub project_purpose: String,
    pub tools_used: Vec<String>,
    pub skills_demonstrated: Vec<String>,
    pub project_link: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<EducationRow> for EducationEntry {
    fn from(row: EducationRow) -> Self {
        EducationEntry {
            degree: row.degree_program_name,
            institution: row.institution_name,
            completion_date: row.completion_date,
            coursework: row.relevant_coursework.unwrap_or_default(),
        }
    }
}

impl From<WorkRow> for WorkEntry {
    fn from(row: WorkRow) -> Self {
        WorkEntry {
            role: row.job_title_role,
            organization: row.organization_company,
            dates: row.dates_of_involvement,
            responsibilities: row.key_responsibilities,
        }
    }
}

impl From<ProjectRow> for ProjectEntry {
    fn from(row: ProjectRow) -> Self {
        ProjectEntry {
            title: row.project_title,
            purpose: row.project_purpose,
            tools: row.tools_used,
            skills_demonstrated: row.skills_demonstrated,
            link: row.project_link,
        }
    }
}
