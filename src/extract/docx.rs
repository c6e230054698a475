//! DOCX text extractor.

use crate::error::Result;
use crate::model::{DocumentKind, ExtractedText};
use crate::parser::{DocxParser, ParseOptions};
use std::path::Path;

use super::{recover, TextExtractor};

/// DOCX text extractor.
///
/// Reads body paragraphs in order, drops blank ones and joins the rest with
/// single newlines.
#[derive(Debug, Clone, Default)]
pub struct DocxExtractor {
    _private: (),
}

impl DocxExtractor {
    /// Create a new DOCX extractor.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl TextExtractor for DocxExtractor {
    fn supported_extensions(&self) -> &[&str] {
        &["docx"]
    }

    fn kind(&self) -> DocumentKind {
        DocumentKind::WordDoc
    }

    fn name(&self) -> &str {
        "docx"
    }

    fn extract(&self, path: &Path, options: &ParseOptions) -> Result<ExtractedText> {
        let result = DocxParser::open(path)
            .and_then(|parser| parser.parse())
            .map(|doc| doc.extracted_text());
        recover(DocumentKind::WordDoc, options, result)
    }

    fn extract_bytes(&self, bytes: &[u8], options: &ParseOptions) -> Result<ExtractedText> {
        let result = DocxParser::from_bytes(bytes)
            .and_then(|parser| parser.parse())
            .map(|doc| doc.extracted_text());
        recover(DocumentKind::WordDoc, options, result)
    }
}
