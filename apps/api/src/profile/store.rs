//! Profile Store Adapter — read-only access to the portfolio document store.
//!
//! Five read operations, one per record kind, each returning everything for
//! the single portfolio owner in insertion order. No writes, no filters.
//! An unreachable store surfaces as `StoreError::Unavailable`; the caller
//! decides whether to fall back.
//!
//! The trait seam exists so the alignment service can be exercised against
//! counting stubs. Carried in `AppState` as `Arc<dyn ProfileStore>`.

use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;

use crate::models::records::{BioRow, EducationRow, ProjectRow, SkillCategoryRow, WorkRow};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("profile store unavailable: {0}")]
    Unavailable(#[from] sqlx::Error),
}

#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn read_bio(&self) -> Result<Option<BioRow>, StoreError>;
    async fn read_education(&self) -> Result<Vec<EducationRow>, StoreError>;
    async fn read_work_history(&self) -> Result<Vec<WorkRow>, StoreError>;
    async fn read_skill_categories(&self) -> Result<Vec<SkillCategoryRow>, StoreError>;
    async fn read_projects(&self) -> Result<Vec<ProjectRow>, StoreError>;
}

/// PostgreSQL-backed store.
pub struct PgProfileStore {
    pool: PgPool,
}

impl PgProfileStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileStore for PgProfileStore {
    async fn read_bio(&self) -> Result<Option<BioRow>, StoreError> {
        let row = sqlx::query_as::<_, BioRow>(
            "SELECT id, about, updated_at FROM profile_bio ORDER BY updated_at DESC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn read_education(&self) -> Result<Vec<EducationRow>, StoreError> {
        let rows = sqlx::query_as::<_, EducationRow>(
            "SELECT id, degree_program_name, institution_name, completion_date, \
             relevant_coursework, created_at FROM education ORDER BY created_at",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn read_work_history(&self) -> Result<Vec<WorkRow>, StoreError> {
        let rows = sqlx::query_as::<_, WorkRow>(
            "SELECT id, job_title_role, organization_company, dates_of_involvement, \
             key_responsibilities, created_at FROM work_history ORDER BY created_at",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn read_skill_categories(&self) -> Result<Vec<SkillCategoryRow>, StoreError> {
        let rows = sqlx::query_as::<_, SkillCategoryRow>(
            "SELECT id, title, skills, created_at FROM skill_categories ORDER BY created_at",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn read_projects(&self) -> Result<Vec<ProjectRow>, StoreError> {
        let rows = sqlx::query_as::<_, ProjectRow>(
            "SELECT id, project_title, project_purpose, tools_used, skills_demonstrated, \
             project_link, created_at FROM projects ORDER BY created_at",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
