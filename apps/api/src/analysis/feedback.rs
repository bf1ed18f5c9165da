//! Rule-based feedback generation.
//!
//! Five rules evaluated in a fixed order, each appending to one or more of the
//! three output lists. Append-only: no rule removes, reorders, or deduplicates
//! what an earlier rule produced, so output order is stable and deterministic.

use serde::Serialize;

use crate::analysis::classifier::DomainLabel;

/// Below this many characters the resume is flagged as too short. Strict `<`.
const SHORT_RESUME_CHARS: usize = 800;

/// The summary/objective check only inspects this many leading characters.
const SUMMARY_WINDOW_CHARS: usize = 600;

/// Core IT terms for the highlight-skills suggestion. Deliberately a separate,
/// smaller list than the skill catalog — the two overlap but are not identical,
/// and unifying them would change suggestion behavior.
const CORE_IT_TERMS: &[&str] = &["Python", "Java", "JavaScript", "SQL", "Cloud", "DevOps"];

/// Categorized feedback lists, each in rule-evaluation order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FeedbackReport {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Generates feedback from the flattened text, its domain, and the extracted
/// skills. Pure and total: never fails, same inputs always give same output.
pub fn generate_feedback(text: &str, domain: DomainLabel, skills: &[String]) -> FeedbackReport {
    let mut report = FeedbackReport::default();

    // Rule 1: overall length.
    if text.chars().count() < SHORT_RESUME_CHARS {
        report.weaknesses.push(
            "Resume appears quite short; consider adding more detail about your experience and achievements."
                .to_string(),
        );
        report.suggestions.push(
            "Add 3–5 bullet points for each recent role, focusing on your responsibilities and measurable impact."
                .to_string(),
        );
    } else {
        report
            .strengths
            .push("Good overall level of detail about your work experience.".to_string());
    }

    // Rule 2: summary/objective near the top.
    let first_chunk: String = text
        .chars()
        .take(SUMMARY_WINDOW_CHARS)
        .collect::<String>()
        .to_lowercase();
    if first_chunk.contains("summary") || first_chunk.contains("objective") {
        report.strengths.push(
            "Professional summary/objective is present near the top of the resume.".to_string(),
        );
    } else {
        report
            .weaknesses
            .push("No clear professional summary/objective section found at the top.".to_string());
        report.suggestions.push(
            "Add a 2–3 sentence professional summary that highlights your domain, years of experience, and top skills."
                .to_string(),
        );
    }

    // Rule 3: domain-specific hints. Dispatch on the enum, not on strings.
    match domain {
        DomainLabel::It => {
            report
                .strengths
                .push("Profile appears aligned with Information Technology.".to_string());
            let has_core_it = CORE_IT_TERMS
                .iter()
                .any(|term| skills.iter().any(|skill| skill.eq_ignore_ascii_case(term)));
            if !has_core_it {
                report.suggestions.push(
                    "Highlight core technical skills (languages, frameworks, databases, cloud tools) in a dedicated Skills section."
                        .to_string(),
                );
            }
        }
        DomainLabel::Medical => {
            report
                .strengths
                .push("Profile appears aligned with the Medical/Healthcare domain.".to_string());
            // Unconditional, unlike the IT branch.
            report.suggestions.push(
                "Include relevant licenses, registrations, and certifications with validity dates (e.g., medical council registration, BLS, ACLS)."
                    .to_string(),
            );
        }
        DomainLabel::NonTech => {
            report
                .strengths
                .push("Profile seems to be from a non-technical domain.".to_string());
        }
    }

    // Rule 4: skills section visibility.
    if skills.is_empty() {
        report
            .weaknesses
            .push("Could not clearly detect a skills section.".to_string());
        report.suggestions.push(
            "Create a separate Skills section listing tools, technologies, and soft skills using bullet points."
                .to_string(),
        );
    } else {
        report
            .strengths
            .push("Key skills are visible; ensure they are grouped and easy to scan.".to_string());
    }

    // Rule 5: safety net so suggestions are never empty.
    if report.suggestions.is_empty() {
        report.suggestions.push(
            "Review each bullet point to emphasize outcomes and metrics (e.g., 'Improved process efficiency by 20%')."
                .to_string(),
        );
    }

    report
}
