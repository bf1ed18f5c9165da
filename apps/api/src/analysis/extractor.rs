//! PDF text extraction.

use pdf_extract::OutputError;

/// Text pulled out of one document: per-page strings in original page order,
/// plus the flattened form the rest of the pipeline consumes. Built once per
/// request and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ExtractedText {
    pages: Vec<String>,
    flattened: String,
}

impl ExtractedText {
    pub fn new(pages: Vec<String>) -> Self {
        let flattened = pages.join("\n");
        Self { pages, flattened }
    }

    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    /// All pages joined by a newline separator, in page order.
    pub fn flattened(&self) -> &str {
        &self.flattened
    }

    /// True when no page produced anything beyond whitespace. A valid parse
    /// with no usable content (e.g. a scanned-image PDF) ends up here, and the
    /// orchestrator rejects it as a distinct condition from a parse failure.
    pub fn is_blank(&self) -> bool {
        self.flattened.trim().is_empty()
    }
}

/// Parses `bytes` as a PDF and extracts text page by page. A page with no
/// extractable text contributes an empty string rather than failing the whole
/// document. Fails only when the byte stream is not a valid PDF.
pub fn extract_text(bytes: &[u8]) -> Result<ExtractedText, OutputError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)?;
    Ok(ExtractedText::new(pages))
}
