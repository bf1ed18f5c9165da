//! Domain classification — coarse IT / Medical / Non-tech labeling via keyword membership.

use serde::{Deserialize, Serialize};

/// Coarse professional domain assigned to a resume. Exactly one per document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainLabel {
    #[serde(rename = "IT")]
    It,
    Medical,
    #[serde(rename = "Non-tech")]
    NonTech,
}

impl DomainLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DomainLabel::It => "IT",
            DomainLabel::Medical => "Medical",
            DomainLabel::NonTech => "Non-tech",
        }
    }
}

impl std::fmt::Display for DomainLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Default IT keyword set. All entries lowercase; matching is substring-based.
pub const IT_KEYWORDS: &[&str] = &[
    "software",
    "developer",
    "engineer",
    "programmer",
    "java",
    "python",
    "javascript",
    "node.js",
    "react",
    "angular",
    "git",
    "devops",
    "cloud",
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "data analyst",
    "machine learning",
    "sql",
    "database",
    "full stack",
    "frontend",
    "backend",
    "cybersecurity",
];

/// Default Medical keyword set. Checked before IT — Medical wins ties.
pub const MEDICAL_KEYWORDS: &[&str] = &[
    "hospital",
    "clinic",
    "nurse",
    "doctor",
    "physician",
    "surgeon",
    "mbbs",
    "md",
    "patient care",
    "clinical",
    "icu",
    "ward",
    "pharmacy",
    "pharmacist",
    "lab technician",
    "radiology",
    "cardiology",
    "neurology",
    "ot technician",
    "mri",
    "ct scan",
    "healthcare",
];

/// Heuristic keyword classifier. Keyword sets are injected at construction so
/// tests can run against custom sets; production uses the module constants.
#[derive(Debug, Clone)]
pub struct DomainClassifier {
    medical_keywords: &'static [&'static str],
    it_keywords: &'static [&'static str],
}

impl DomainClassifier {
    pub fn new(
        medical_keywords: &'static [&'static str],
        it_keywords: &'static [&'static str],
    ) -> Self {
        Self {
            medical_keywords,
            it_keywords,
        }
    }

    /// Classifies flattened resume text into exactly one domain.
    ///
    /// Medical keywords are checked first; any hit short-circuits to `Medical`
    /// regardless of how many IT keywords are also present. A "Health-Tech
    /// Software Engineer" resume therefore classifies as Medical. This ordering
    /// is load-bearing and must not be reversed.
    pub fn classify(&self, text: &str) -> DomainLabel {
        let lower = text.to_lowercase();

        if self.medical_keywords.iter().any(|k| lower.contains(k)) {
            return DomainLabel::Medical;
        }
        if self.it_keywords.iter().any(|k| lower.contains(k)) {
            return DomainLabel::It;
        }
        DomainLabel::NonTech
    }
}

impl Default for DomainClassifier {
    fn default() -> Self {
        Self::new(MEDICAL_KEYWORDS, IT_KEYWORDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_keywords_classifies_non_tech() {
        let classifier = DomainClassifier::default();
        let label = classifier.classify("Accomplished chef with a passion for pastry.");
        assert_eq!(label, DomainLabel::NonTech);
    }

    #[test]
    fn test_it_keyword_classifies_it() {
        let classifier = DomainClassifier::default();
        let label = classifier.classify("Senior backend team lead, shipped three products.");
        assert_eq!(label, DomainLabel::It);
    }

    #[test]
    fn test_medical_keyword_classifies_medical() {
        let classifier = DomainClassifier::default();
        let label = classifier.classify("Registered nurse with 5 years in the ICU.");
        assert_eq!(label, DomainLabel::Medical);
    }

    #[test]
    fn test_medical_outranks_it() {
        // Both sets match; Medical precedence must win.
        let classifier = DomainClassifier::default();
        let label = classifier.classify(
            "Health-Tech Software Engineer building Python services for hospital scheduling.",
        );
        assert_eq!(label, DomainLabel::Medical);
    }

    #[test]
    fn test_classification_is_case_insensitive() {
        let classifier = DomainClassifier::default();
        assert_eq!(classifier.classify("KUBERNETES ADMIN"), DomainLabel::It);
        assert_eq!(classifier.classify("Cardiology Fellow"), DomainLabel::Medical);
    }

    #[test]
    fn test_keyword_match_is_substring_based() {
        // "ward" matches inside "forward-deployed" — accepted heuristic behavior.
        let classifier = DomainClassifier::default();
        let label = classifier.classify("Forward-deployed consultant for retail clients.");
        assert_eq!(label, DomainLabel::Medical);
    }

    #[test]
    fn test_custom_keyword_sets() {
        const MEDICAL: &[&str] = &["triage"];
        const IT: &[&str] = &["compiler"];
        let classifier = DomainClassifier::new(MEDICAL, IT);

        assert_eq!(classifier.classify("wrote a compiler"), DomainLabel::It);
        assert_eq!(classifier.classify("ran triage"), DomainLabel::Medical);
        // Default-set keywords are invisible to a custom classifier.
        assert_eq!(classifier.classify("python nurse"), DomainLabel::NonTech);
    }

    #[test]
    fn test_empty_text_classifies_non_tech() {
        let classifier = DomainClassifier::default();
        assert_eq!(classifier.classify(""), DomainLabel::NonTech);
    }

    #[test]
    fn test_domain_label_serializes_to_wire_strings() {
        assert_eq!(serde_json::to_string(&DomainLabel::It).unwrap(), r#""IT""#);
        assert_eq!(
            serde_json::to_string(&DomainLabel::Medical).unwrap(),
            r#""Medical""#
        );
        assert_eq!(
            serde_json::to_string(&DomainLabel::NonTech).unwrap(),
            r#""Non-tech""#
        );
    }
}
