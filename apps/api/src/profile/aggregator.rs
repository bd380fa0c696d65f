//! Profile Aggregator — merges live store reads with the compiled-in default
//! profile into one canonical `CandidateProfile`.
//!
//! Fallback chain, applied per category: a non-empty live collection wins
//! verbatim; an empty one (or an unavailable store) copies the defaults for
//! that category only. Categories resolve independently — education can come
//! from the store while projects fall back in the same request.
//!
//! Certifications are always served from the defaults: the store has no
//! certification-writing path in this system. Known asymmetry, kept on
//! purpose.

use tracing::warn;

use crate::models::profile::{CandidateProfile, SkillSet};
use crate::models::records::{BioRow, EducationRow, ProjectRow, SkillCategoryRow, WorkRow};
use crate::profile::store::{ProfileStore, StoreError};

/// Raw per-category read results, before merging.
#[derive(Debug, Default)]
pub struct ProfileReads {
    pub bio: Option<BioRow>,
    pub education: Vec<EducationRow>,
    pub work_history: Vec<WorkRow>,
    pub skill_categories: Vec<SkillCategoryRow>,
    pub projects: Vec<ProjectRow>,
}

/// The single fallback rule: live data wins when present, defaults otherwise.
pub fn resolve<T: Clone>(live: Vec<T>, fallback: &[T]) -> Vec<T> {
    if live.is_empty() {
        fallback.to_vec()
    } else {
        live
    }
}

/// Merges store reads with defaults. Pure — no I/O, no failure outputs.
pub fn aggregate(reads: ProfileReads, defaults: &CandidateProfile) -> CandidateProfile {
    let about_me = reads
        .bio
        .filter(|b| !b.about.trim().is_empty())
        .map(|b| b.about)
        .unwrap_or_else(|| defaults.about_me.clone());

    let skills = if reads.skill_categories.is_empty() {
        defaults.skills.clone()
    } else {
        bucket_skills(reads.skill_categories)
    };

    CandidateProfile {
        about_me,
        education: resolve(
            reads.education.into_iter().map(Into::into).collect(),
            &defaults.education,
        ),
        // Always static: no live write path exists for certifications.
        certifications: defaults.certifications.clone(),
        work_history: resolve(
            reads.work_history.into_iter().map(Into::into).collect(),
            &defaults.work_history,
        ),
        skills,
        projects: resolve(
            reads.projects.into_iter().map(Into::into).collect(),
            &defaults.projects,
        ),
    }
}

/// Sorts live skill-category rows into the three canonical lists by title.
/// Titles mentioning tools land in `tools`, soft skills in `soft`, everything
/// else in `technical`.
fn bucket_skills(categories: Vec<SkillCategoryRow>) -> SkillSet {
    let mut skills = SkillSet::default();
    for category in categories {
        let title = category.title.to_lowercase();
        let bucket = if title.contains("tool") || title.contains("technolog") {
            &mut skills.tools
        } else if title.contains("soft") || title.contains("professional") {
            &mut skills.soft
        } else {
            &mut skills.technical
        };
        bucket.extend(category.skills);
    }
    skills
}

/// Loads the canonical profile for a request: issues the five store reads
/// concurrently, degrades each failed or empty category to defaults
/// independently, and merges. Never fails — a store outage means the caller
/// gets the compiled-in profile.
pub async fn load_profile(
    store: &dyn ProfileStore,
    defaults: &CandidateProfile,
) -> CandidateProfile {
    let (bio, education, work_history, skill_categories, projects) = tokio::join!(
        store.read_bio(),
        store.read_education(),
        store.read_work_history(),
        store.read_skill_categories(),
        store.read_projects(),
    );

    let reads = ProfileReads {
        bio: recover(bio, "bio").flatten(),
        education: recover(education, "education").unwrap_or_default(),
        work_history: recover(work_history, "work_history").unwrap_or_default(),
        skill_categories: recover(skill_categories, "skill_categories").unwrap_or_default(),
        projects: recover(projects, "projects").unwrap_or_default(),
    };

    aggregate(reads, defaults)
}

/// Converts a failed read into "no live data" for that category only.
fn recover<T>(result: Result<T, StoreError>, category: &str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Store read for '{category}' failed, falling back to defaults: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::{EducationEntry, ProjectEntry};
    use async_trait::async_trait;
    use chrono::Utc;
    use uuid::Uuid;

    fn test_defaults() -> CandidateProfile {
        CandidateProfile {
            about_me: "Default bio".to_string(),
            education: vec![EducationEntry {
                degree: "Default Degree".to_string(),
                institution: "Default U".to_string(),
                completion_date: "2020".to_string(),
                coursework: vec![],
            }],
            certifications: vec![],
            work_history: vec![],
            skills: SkillSet {
                technical: vec!["Default Tech".to_string()],
                tools: vec!["Default Tool".to_string()],
                soft: vec!["Default Soft".to_string()],
            },
            projects: vec![ProjectEntry {
                title: "Default Project".to_string(),
                purpose: "Default purpose".to_string(),
                tools: vec![],
                skills_demonstrated: vec![],
                link: None,
            }],
        }
    }

    fn education_row(degree: &str) -> EducationRow {
        EducationRow {
            id: Uuid::new_v4(),
            degree_program_name: degree.to_string(),
            institution_name: "Live University".to_string(),
            completion_date: "May 2026".to_string(),
            relevant_coursework: None,
            created_at: Utc::now(),
        }
    }

    fn project_row(title: &str) -> ProjectRow {
        ProjectRow {
            id: Uuid::new_v4(),
            project_title: title.to_string(),
            project_purpose: "Live purpose".to_string(),
            tools_used: vec!["Rust".to_string()],
            skills_demonstrated: vec![],
            project_link: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_resolve_prefers_live_when_present() {
        let live = vec!["live".to_string()];
        let fallback = vec!["fallback".to_string()];
        assert_eq!(resolve(live, &fallback), vec!["live".to_string()]);
    }

    #[test]
    fn test_resolve_falls_back_when_empty() {
        let fallback = vec!["fallback".to_string()];
        assert_eq!(resolve(Vec::<String>::new(), &fallback), fallback);
    }

    #[test]
    fn test_empty_reads_yield_defaults_for_every_category() {
        let defaults = test_defaults();
        let merged = aggregate(ProfileReads::default(), &defaults);
        assert_eq!(merged, defaults);
    }

    #[test]
    fn test_categories_resolve_independently() {
        // Live education, nothing else — only education should change.
        let defaults = test_defaults();
        let reads = ProfileReads {
            education: vec![education_row("Live Degree")],
            ..Default::default()
        };

        let merged = aggregate(reads, &defaults);
        assert_eq!(merged.education[0].degree, "Live Degree");
        assert_eq!(merged.projects, defaults.projects);
        assert_eq!(merged.skills, defaults.skills);
        assert_eq!(merged.about_me, defaults.about_me);
    }

    #[test]
    fn test_live_projects_win_while_education_falls_back() {
        let defaults = test_defaults();
        let reads = ProfileReads {
            projects: vec![project_row("Live Project")],
            ..Default::default()
        };

        let merged = aggregate(reads, &defaults);
        assert_eq!(merged.projects[0].title, "Live Project");
        assert_eq!(merged.education, defaults.education);
    }

    #[test]
    fn test_blank_bio_record_counts_as_absent() {
        let defaults = test_defaults();
        let reads = ProfileReads {
            bio: Some(BioRow {
                id: Uuid::new_v4(),
                about: "   ".to_string(),
                updated_at: Utc::now(),
            }),
            ..Default::default()
        };

        let merged = aggregate(reads, &defaults);
        assert_eq!(merged.about_me, defaults.about_me);
    }

    #[test]
    fn test_certifications_always_come_from_defaults() {
        let mut defaults = test_defaults();
        defaults.certifications = vec![crate::models::profile::CertificationEntry {
            name: "Static Cert".to_string(),
            issuer: "Static Org".to_string(),
            year_earned: "2024".to_string(),
            credential_url: None,
        }];

        let merged = aggregate(ProfileReads::default(), &defaults);
        assert_eq!(merged.certifications, defaults.certifications);
    }

    #[test]
    fn test_bucket_skills_sorts_by_category_title() {
        let categories = vec![
            SkillCategoryRow {
                id: Uuid::new_v4(),
                title: "Technical Skills".to_string(),
                skills: vec!["Rust".to_string()],
                created_at: Utc::now(),
            },
            SkillCategoryRow {
                id: Uuid::new_v4(),
                title: "Tools & Technologies".to_string(),
                skills: vec!["Docker".to_string()],
                created_at: Utc::now(),
            },
            SkillCategoryRow {
                id: Uuid::new_v4(),
                title: "Professional & Soft Skills".to_string(),
                skills: vec!["Communication".to_string()],
                created_at: Utc::now(),
            },
        ];

        let skills = bucket_skills(categories);
        assert_eq!(skills.technical, vec!["Rust".to_string()]);
        assert_eq!(skills.tools, vec!["Docker".to_string()]);
        assert_eq!(skills.soft, vec!["Communication".to_string()]);
    }

    /// Store that fails some categories and serves others — a failed category
    /// must degrade to defaults without blocking the healthy ones.
    struct PartialOutageStore;

    #[async_trait]
    impl ProfileStore for PartialOutageStore {
        async fn read_bio(&self) -> Result<Option<BioRow>, StoreError> {
            Err(StoreError::Unavailable(sqlx::Error::PoolTimedOut))
        }
        async fn read_education(&self) -> Result<Vec<EducationRow>, StoreError> {
            Ok(vec![education_row("Live Degree")])
        }
        async fn read_work_history(&self) -> Result<Vec<WorkRow>, StoreError> {
            Err(StoreError::Unavailable(sqlx::Error::PoolTimedOut))
        }
        async fn read_skill_categories(&self) -> Result<Vec<SkillCategoryRow>, StoreError> {
            Ok(vec![])
        }
        async fn read_projects(&self) -> Result<Vec<ProjectRow>, StoreError> {
            Ok(vec![project_row("Live Project")])
        }
    }

    #[tokio::test]
    async fn test_load_profile_degrades_per_category_on_outage() {
        let defaults = test_defaults();
        let profile = load_profile(&PartialOutageStore, &defaults).await;

        // Failed/empty categories fall back...
        assert_eq!(profile.about_me, defaults.about_me);
        assert_eq!(profile.work_history, defaults.work_history);
        assert_eq!(profile.skills, defaults.skills);
        // ...while live categories still come through.
        assert_eq!(profile.education[0].degree, "Live Degree");
        assert_eq!(profile.projects[0].title, "Live Project");
    }
}
