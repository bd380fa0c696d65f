//! Prompt Compiler — serializes a candidate profile plus job-posting text
//! into the analysis prompt.
//!
//! Pure formatting: same inputs always yield the same bytes. No timestamps,
//! no randomness. This keeps the inference output attributable to content
//! rather than formatting noise.
//!
//! Section order is fixed: job description, about-me, education,
//! certifications, work history, skills, projects. A category with no
//! entries omits its section entirely — no empty headers, no "N/A" filler.

use crate::models::profile::CandidateProfile;

/// System prompt for the alignment call. Pins the role, the JSON-only rule,
/// and the exact output schema — the field names here are the wire contract.
pub const ALIGNMENT_SYSTEM: &str = r#"You are a professional career branding expert and a hiring manager. Your task is to analyze a given job description and a candidate's portfolio content to identify the most relevant skills and projects that align with the job requirements.

You MUST respond with valid JSON only. Do NOT include any text outside the JSON object. Do NOT use markdown code fences. Do NOT include explanations or apologies.

Return a JSON object with this EXACT schema (no extra fields):
{
  "matchedSkills": [
    {
      "category": "technical",
      "skill": "a skill copied verbatim from the candidate's skill lists",
      "relevanceExplanation": "why this skill is relevant to the job (optional)"
    }
  ],
  "matchedProjects": [
    {
      "projectTitle": "a project title copied verbatim from the candidate's projects",
      "relevanceExplanation": "why this project is relevant to the job",
      "projectLink": "the project's link, only if one was provided"
    }
  ]
}

HARD RULES:
1. "category" must be exactly one of: "technical", "tools", "soft"
2. Every "skill" must appear verbatim in the candidate's list for that category
3. Every "projectTitle" must match one of the candidate's project titles verbatim
4. If a matched project has a link in the portfolio, include it as "projectLink"
5. Only include genuinely relevant matches — empty arrays are acceptable"#;

/// Compiles the deterministic analysis prompt from a profile and the raw
/// job-posting text.
pub fn compile(profile: &CandidateProfile, jd_text: &str) -> String {
    let mut out = String::new();

    out.push_str("**Job Description:**\n");
    out.push_str(jd_text);
    out.push_str("\n\n**Candidate's Portfolio Content:**\n");

    if !profile.about_me.trim().is_empty() {
        out.push_str("\n**About Me:**\n");
        out.push_str(&profile.about_me);
        out.push('\n');
    }

    if !profile.education.is_empty() {
        out.push_str("\n**Education:**\n");
        for entry in &profile.education {
            out.push_str(&format!(
                "- Degree/Program: {}, Institution: {}, Completion: {}\n",
                entry.degree, entry.institution, entry.completion_date
            ));
            if !entry.coursework.is_empty() {
                out.push_str(&format!("  Coursework: {}\n", entry.coursework.join(", ")));
            }
        }
    }

    if !profile.certifications.is_empty() {
        out.push_str("\n**Certifications:**\n");
        for cert in &profile.certifications {
            out.push_str(&format!(
                "- Certification: {}, Organization: {}, Year: {}\n",
                cert.name, cert.issuer, cert.year_earned
            ));
            if let Some(url) = &cert.credential_url {
                out.push_str(&format!("  URL: {url}\n"));
            }
        }
    }

    if !profile.work_history.is_empty() {
        out.push_str("\n**Work History:**\n");
        for job in &profile.work_history {
            out.push_str(&format!(
                "- Job Title: {}, Company: {}, Dates: {}\n",
                job.role, job.organization, job.dates
            ));
            if !job.responsibilities.is_empty() {
                out.push_str("  Responsibilities:\n");
                for responsibility in &job.responsibilities {
                    out.push_str(&format!("  - {responsibility}\n"));
                }
            }
        }
    }

    let skills = &profile.skills;
    if !skills.technical.is_empty() || !skills.tools.is_empty() || !skills.soft.is_empty() {
        out.push_str("\n**Skills:**\n");
        push_skill_list(&mut out, "Technical Skills", &skills.technical);
        push_skill_list(&mut out, "Tools & Technologies", &skills.tools);
        push_skill_list(&mut out, "Professional/Soft Skills", &skills.soft);
    }

    if !profile.projects.is_empty() {
        out.push_str("\n**Projects:**\n");
        for project in &profile.projects {
            out.push_str(&format!("- Project Title: {}\n", project.title));
            out.push_str(&format!("  Purpose/Problem Solved: {}\n", project.purpose));
            if !project.tools.is_empty() {
                out.push_str(&format!(
                    "  Tools/Technologies Used: {}\n",
                    project.tools.join(", ")
                ));
            }
            if !project.skills_demonstrated.is_empty() {
                out.push_str(&format!(
                    "  Skills Demonstrated: {}\n",
                    project.skills_demonstrated.join(", ")
                ));
            }
            if let Some(link) = &project.link {
                out.push_str(&format!("  Link: {link}\n"));
            }
        }
    }

    out.push_str(
        "\nBased on the job description, carefully identify which of the candidate's \
         skills and projects are most relevant. For each matched item, provide a concise \
         explanation of its relevance to the job description. If a project has a link, \
         include it.\n",
    );

    out
}

fn push_skill_list(out: &mut String, label: &str, skills: &[String]) {
    if skills.is_empty() {
        return;
    }
    out.push_str(&format!("{label}:\n"));
    for skill in skills {
        out.push_str(&format!("- {skill}\n"));
    }
}
