//! Skill extraction — case-insensitive substring scan against a fixed catalog.

use std::collections::BTreeSet;

/// Canonical skill catalog. Matching is case-insensitive on the resume text,
/// but output always carries these exact spellings. Grouped IT / medical /
/// soft-skill for maintenance only; grouping is not part of the output.
pub const SKILL_CATALOG: &[&str] = &[
    // IT / Software
    "Python",
    "Java",
    "C",
    "C++",
    "C#",
    "JavaScript",
    "TypeScript",
    "HTML",
    "CSS",
    "React",
    "Angular",
    "Vue",
    "Django",
    "Flask",
    "Node.js",
    "Express",
    "Spring",
    "SQL",
    "NoSQL",
    "MongoDB",
    "PostgreSQL",
    "MySQL",
    "Git",
    "Docker",
    "Kubernetes",
    "AWS",
    "Azure",
    "GCP",
    "Linux",
    "REST API",
    "Machine Learning",
    "Data Analysis",
    // Medical
    "Patient Care",
    "Clinical Procedures",
    "Phlebotomy",
    "ECG",
    "BLS",
    "ACLS",
    "ICU",
    "Emergency Care",
    "Surgery Assistance",
    // Generic / Soft skills
    "Communication",
    "Teamwork",
    "Leadership",
    "Problem Solving",
    "Time Management",
    "Project Management",
    "Customer Service",
];

/// Catalog-driven skill extractor. The catalog is injected at construction so
/// tests can supply a custom one; production uses `SKILL_CATALOG`.
///
/// Known caveat: short catalog entries are substrings of ordinary words (a bare
/// "C" matches almost any text). This is accepted heuristic behavior — do not
/// add word-boundary matching without also redesigning the catalog.
#[derive(Debug, Clone)]
pub struct SkillExtractor {
    catalog: &'static [&'static str],
}

impl SkillExtractor {
    pub fn new(catalog: &'static [&'static str]) -> Self {
        Self { catalog }
    }

    /// Returns the canonical spellings of every catalog entry found in `text`,
    /// sorted ascending. Set semantics: a skill appears at most once no matter
    /// how often (or in which casing) it occurs in the text.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();

        let found: BTreeSet<&str> = self
            .catalog
            .iter()
            .copied()
            .filter(|skill| lower.contains(&skill.to_lowercase()))
            .collect();

        found.into_iter().map(String::from).collect()
    }
}

impl Default for SkillExtractor {
    fn default() -> Self {
        Self::new(SKILL_CATALOG)
    }
}
