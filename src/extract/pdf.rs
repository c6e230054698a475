//! PDF text extractor.

use crate::error::Result;
use crate::model::{DocumentKind, ExtractedText};
use crate::parser::{ParseOptions, PdfParser};
use std::path::Path;

use super::{recover, TextExtractor};

/// PDF text extractor.
///
/// Reads pages in order; each page contributes its text followed by a blank
/// line.
#[derive(Debug, Clone, Default)]
pub struct PdfExtractor {
    _private: (),
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl TextExtractor for PdfExtractor {
    fn supported_extensions(&self) -> &[&str] {
        &["pdf"]
    }

    fn kind(&self) -> DocumentKind {
        DocumentKind::Pdf
    }

    fn name(&self) -> &str {
        "pdf"
    }

    fn extract(&self, path: &Path, options: &ParseOptions) -> Result<ExtractedText> {
        let result = PdfParser::open_with_options(path, options.clone())
            .and_then(|parser| parser.parse())
            .map(|doc| doc.extracted_text());
        recover(DocumentKind::Pdf, options, result)
    }

    fn extract_bytes(&self, bytes: &[u8], options: &ParseOptions) -> Result<ExtractedText> {
        let result = PdfParser::from_bytes_with_options(bytes, options.clone())
            .and_then(|parser| parser.parse())
            .map(|doc| doc.extracted_text());
        recover(DocumentKind::Pdf, options, result)
    }
}
