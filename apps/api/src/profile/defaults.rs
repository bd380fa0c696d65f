//! Compiled-in default portfolio content.
//!
//! Used as per-category fallback whenever the live store has no records for
//! a category. Injected through `AppState` rather than read as a global so
//! tests can substitute their own defaults.

use crate::models::profile::{
    CandidateProfile, CertificationEntry, EducationEntry, ProjectEntry, SkillSet, WorkEntry,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The static portfolio content shipped with the site.
pub fn default_profile() -> CandidateProfile {
    CandidateProfile {
        about_me: "From coordinating complex logistics as a transport professional to \
            designing intelligent systems as an aspiring AI developer, my career has been a \
            journey of continuous problem-solving. I am currently a Technical Management \
            student at DeVry University and an AI bootcamp graduate, channeling my passion \
            for efficiency and system design into modern web development. My goal is to \
            leverage AI and automation to build tools that are not only powerful but also \
            intuitive and reliable. I thrive on deconstructing complex challenges and \
            engineering elegant solutions, and I am excited to build a career in a field \
            that is constantly pushing the boundaries of what's possible."
            .to_string(),
        education: vec![EducationEntry {
            degree: "Bachelor of Science in Technical Management".to_string(),
            institution: "DeVry University".to_string(),
            completion_date: "March 2028".to_string(),
            coursework: strings(&[
                "Introduction to Programming",
                "AI Bootcamp",
                "Introduction to Operating Systems",
                "Technology and Information Systems",
                "Computer Applications for Business",
                "Introduction to Business and Technology",
            ]),
        }],
        certifications: vec![CertificationEntry {
            name: "Google IT Support Professional Certificate".to_string(),
            issuer: "Google".to_string(),
            year_earned: "2025".to_string(),
            credential_url: Some(
                "https://www.coursera.org/account/accomplishments/specialization/certificate/3B1G9HN8W2VD"
                    .to_string(),
            ),
        }],
        work_history: vec![
            WorkEntry {
                role: "Truck Driver".to_string(),
                organization: "Ryder Systems".to_string(),
                dates: "March 2022 – July 2024".to_string(),
                responsibilities: strings(&[
                    "Ensured 100% on-time delivery rate through strategic route planning and proactive logistical troubleshooting.",
                    "Maintained a perfect safety and compliance record by conducting meticulous daily vehicle inspections.",
                    "Achieved high levels of client satisfaction by providing reliable, customer-centric delivery services.",
                ]),
            },
            WorkEntry {
                role: "Truck Driver and Trainer".to_string(),
                organization: "Central Freight Lines".to_string(),
                dates: "July 2012 – December 2021".to_string(),
                responsibilities: strings(&[
                    "Successfully trained and mentored over a dozen new drivers on logistics protocols, safety procedures, and customer service excellence.",
                    "Served as a key point of contact for regional clients, ensuring clear communication and consistent freight delivery.",
                    "Guaranteed regulatory compliance by maintaining precise documentation and adhering to all DOT standards.",
                ]),
            },
        ],
        skills: SkillSet {
            technical: strings(&[
                "Troubleshooting & Diagnostics",
                "Cybersecurity Fundamentals",
                "Operating Systems Fundamentals",
                "Technical Documentation",
                "System Maintenance Procedures",
                "Introductory Programming",
                "Technical Training",
            ]),
            tools: strings(&[
                "Microsoft Office Suite",
                "Windows & Linux OS",
                "Business & Productivity Apps",
                "Ticketing & Logging Systems",
                "AI Development Tools",
                "Python",
                "Ollama",
                "REST APIs",
                "Firebase Studio",
            ]),
            soft: strings(&[
                "Clear Communication",
                "Customer Service & Support",
                "Conflict Resolution",
                "Logistics & Scheduling",
                "Inventory Management",
                "Procedural Compliance",
                "Team Training & Mentoring",
                "Adaptability",
                "Leadership & Discipline",
                "Process Optimization",
            ]),
        },
        projects: vec![
            ProjectEntry {
                title: "CelebrationHub".to_string(),
                purpose: "Designed a simple party-planning web app that helps users organize event details, guest lists, and planning tasks. I provided the functional requirements, used Firebase Studio's AI to generate the code, and iteratively tested the app to identify issues and guide corrections.".to_string(),
                tools: strings(&["Firebase Studio", "AI Code Generation", "HTML/CSS", "JavaScript"]),
                skills_demonstrated: strings(&[
                    "Prompt Engineering",
                    "App Design",
                    "Iterative Testing",
                    "Debugging",
                    "UI/UX Validation",
                ]),
                link: Some("https://github.com/superordie/CelebrationHub".to_string()),
            },
            ProjectEntry {
                title: "ResumeKeeper".to_string(),
                purpose: "Created a résumé-management tool that allows users to store and update their professional information in a structured interface. I defined the requirements, used Firebase Studio to generate the code, and tested each component to ensure correct behavior.".to_string(),
                tools: strings(&["Firebase Studio", "AI Code Generation", "HTML/CSS", "JavaScript"]),
                skills_demonstrated: strings(&[
                    "Requirements Definition",
                    "AI-Assisted Development",
                    "Targeted Debugging",
                    "UI Validation",
                ]),
                link: Some("https://github.com/superordie/ResumeKeeper".to_string()),
            },
            ProjectEntry {
                title: "Local AI Agent Pipeline".to_string(),
                purpose: "Built a fully local AI agent using Ollama and Python to run OpenAI-style chat completions without cloud APIs. I configured the environment, installed a local model, and validated the pipeline with real prompts.".to_string(),
                tools: strings(&["Python", "Ollama", "REST API", "Local LLMs (qwen2:7b)"]),
                skills_demonstrated: strings(&[
                    "API Integration",
                    "Local Environment Setup",
                    "Troubleshooting",
                    "Functional AI Workflows",
                ]),
                link: Some("https://github.com/superordie/A.I.".to_string()),
            },
            ProjectEntry {
                title: "Personal Portfolio Website".to_string(),
                purpose: "Built this clean, professional portfolio site to showcase my projects and coursework. I used Firebase Studio to generate the initial layout and refined the structure through iterative testing and targeted prompts.".to_string(),
                tools: strings(&["Next.js", "React", "Tailwind CSS", "Firebase Studio", "Genkit"]),
                skills_demonstrated: strings(&[
                    "Content Organization",
                    "Prompt-Driven Development",
                    "UI/UX Review",
                    "Iterative Refinement",
                ]),
                link: Some("https://github.com/superordie/Synthfolio".to_string()),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_has_every_category_populated() {
        let profile = default_profile();
        assert!(!profile.about_me.is_empty());
        assert!(!profile.education.is_empty());
        assert!(!profile.certifications.is_empty());
        assert!(!profile.work_history.is_empty());
        assert!(!profile.skills.technical.is_empty());
        assert!(!profile.skills.tools.is_empty());
        assert!(!profile.skills.soft.is_empty());
        assert!(!profile.projects.is_empty());
    }

    #[test]
    fn test_default_profile_is_stable_between_calls() {
        assert_eq!(default_profile(), default_profile());
    }
}
