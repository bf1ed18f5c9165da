//! Resume analysis pipeline.
//!
//! bytes → text extraction → { domain classification, skill extraction } →
//! feedback generation → `AnalysisResult`. One invocation per request,
//! synchronous, no shared mutable state; the keyword sets and skill catalog
//! are process-wide constants.

pub mod classifier;
pub mod extractor;
pub mod feedback;
pub mod skills;

use serde::Serialize;
use thiserror::Error;

use crate::analysis::classifier::{DomainClassifier, DomainLabel};
use crate::analysis::extractor::ExtractedText;
use crate::analysis::feedback::generate_feedback;
use crate::analysis::skills::SkillExtractor;

/// Terminal failure conditions of one pipeline invocation. No retries and no
/// fallback extraction; the HTTP layer maps each kind to a distinct response.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The byte stream is not a valid PDF (corrupt header, unsupported
    /// structure). User-facing as "unreadable file".
    #[error("could not read the uploaded document: {0}")]
    UnreadableDocument(#[from] pdf_extract::OutputError),

    /// The document parsed, but every page was empty after trimming —
    /// typically a scanned-image PDF. Distinct from a parse failure.
    #[error("no readable text found in the document")]
    NoReadableText,
}

/// Everything the caller gets back for one analyzed resume.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub domain: DomainLabel,
    /// Matched catalog skills, sorted ascending, possibly empty.
    pub skills: Vec<String>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Orchestrates the pipeline. Holds the classifier and skill extractor so
/// tests can inject custom keyword sets; production uses the defaults. Shared
/// across requests behind an `Arc` — immutable after construction.
#[derive(Debug, Default)]
pub struct ResumeAnalyzer {
    classifier: DomainClassifier,
    skill_extractor: SkillExtractor,
}

impl ResumeAnalyzer {
    pub fn new(classifier: DomainClassifier, skill_extractor: SkillExtractor) -> Self {
        Self {
            classifier,
            skill_extractor,
        }
    }

    /// Runs the full pipeline on raw document bytes.
    pub fn analyze(&self, bytes: &[u8]) -> Result<AnalysisResult, AnalysisError> {
        let extracted = extractor::extract_text(bytes)?;
        self.analyze_extracted(&extracted)
    }

    /// Runs everything after extraction. Rejects blank text before invoking
    /// the (total) classification, skill-extraction, and feedback stages.
    pub fn analyze_extracted(
        &self,
        extracted: &ExtractedText,
    ) -> Result<AnalysisResult, AnalysisError> {
        if extracted.is_blank() {
            return Err(AnalysisError::NoReadableText);
        }

        let text = extracted.flattened();
        let domain = self.classifier.classify(text);
        let skills = self.skill_extractor.extract(text);
        let report = generate_feedback(text, domain, &skills);

        Ok(AnalysisResult {
            domain,
            skills,
            strengths: report.strengths,
            weaknesses: report.weaknesses,
            suggestions: report.suggestions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze_text(text: &str) -> Result<AnalysisResult, AnalysisError> {
        ResumeAnalyzer::default().analyze_extracted(&ExtractedText::new(vec![text.to_string()]))
    }

    #[test]
    fn test_it_resume_end_to_end() {
        let mut text = String::from(
            "Experienced Python developer with AWS and Docker skills. \
             Summary: 10 years in software engineering. ",
        );
        // Pad past the short-resume threshold.
        text.push_str(&"Shipped reliable services at scale. ".repeat(30));

        let result = analyze_text(&text).unwrap();
        assert_eq!(result.domain, DomainLabel::It);
        assert!(result.skills.contains(&"AWS".to_string()));
        assert!(result.skills.contains(&"Docker".to_string()));
        assert!(result.skills.contains(&"Python".to_string()));
        assert!(result
            .strengths
            .iter()
            .any(|s| s.contains("Good overall level of detail")));
        assert!(result
            .strengths
            .iter()
            .any(|s| s.contains("summary/objective is present")));
        // Python is a core IT term, so rule 3 adds no suggestion here.
        assert!(!result
            .suggestions
            .iter()
            .any(|s| s.contains("Highlight core technical skills")));
        assert!(!result.suggestions.is_empty());
    }

    #[test]
    fn test_short_medical_resume_end_to_end() {
        let text = "Dedicated nurse with ICU experience and a patient-first mindset.";
        assert!(text.len() < 800);

        let result = analyze_text(text).unwrap();
        assert_eq!(result.domain, DomainLabel::Medical);
        assert!(result.weaknesses.iter().any(|w| w.contains("quite short")));
        assert!(result
            .weaknesses
            .iter()
            .any(|w| w.contains("No clear professional summary")));
        assert!(result
            .suggestions
            .iter()
            .any(|s| s.contains("3–5 bullet points")));
        assert!(result
            .suggestions
            .iter()
            .any(|s| s.contains("professional summary")));
        assert!(result
            .suggestions
            .iter()
            .any(|s| s.contains("certifications")));
    }

    #[test]
    fn test_blank_extraction_is_no_readable_text() {
        let analyzer = ResumeAnalyzer::default();
        let extracted = ExtractedText::new(vec![String::new(), "   \n".to_string()]);
        let err = analyzer.analyze_extracted(&extracted).unwrap_err();
        assert!(matches!(err, AnalysisError::NoReadableText));
    }

    #[test]
    fn test_non_pdf_bytes_are_unreadable_document() {
        let analyzer = ResumeAnalyzer::default();
        let err = analyzer.analyze(b"plain text pretending to be a PDF").unwrap_err();
        assert!(matches!(err, AnalysisError::UnreadableDocument(_)));
    }

    #[test]
    fn test_classifier_and_extractor_share_the_flattened_text() {
        // Keywords split across pages still match once flattened.
        let analyzer = ResumeAnalyzer::default();
        let extracted = ExtractedText::new(vec![
            "Worked as a software developer.".to_string(),
            "Comfortable with Kubernetes.".to_string(),
        ]);
        let result = analyzer.analyze_extracted(&extracted).unwrap();
        assert_eq!(result.domain, DomainLabel::It);
        assert!(result.skills.contains(&"Kubernetes".to_string()));
    }

    #[test]
    fn test_result_serializes_with_wire_field_names() {
        let result = analyze_text("Objective: keep growing as a florist.").unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["domain"], "Non-tech");
        assert!(json["skills"].is_array());
        assert!(json["strengths"].is_array());
        assert!(json["weaknesses"].is_array());
        assert!(json["suggestions"].is_array());
    }
}
