//! # doctext
//!
//! Plain text extraction from PDF and DOCX documents.
//!
//! A document is read as an ordered sequence of structural units (pages for
//! PDF, paragraphs for DOCX). Each unit contributes a text fragment and the
//! fragments are concatenated in document order.
//!
//! ## Quick Start
//!
//! ```no_run
//! use doctext::{extract, DocumentKind};
//!
//! fn main() -> doctext::Result<()> {
//!     let text = extract("report.pdf", DocumentKind::Pdf)?;
//!     println!("{}", text);
//!     Ok(())
//! }
//! ```
//!
//! ## Error handling
//!
//! [`ParseOptions`] carries one [`ErrorMode`] that applies to every kind.
//! `Strict` (the default) propagates read failures; `Lenient` logs them and
//! returns whatever text was gathered, possibly none.

pub mod detect;
pub mod error;
pub mod extract;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use detect::{detect_kind_from_bytes, detect_kind_from_path};
pub use error::{Error, Result};
pub use extract::{DocxExtractor, ExtractorRegistry, PdfExtractor, TextExtractor};
pub use model::{
    Document, DocumentKind, ExtractedText, Metadata, ResumeRecord, StructuralUnit, UnitKind,
};
pub use parser::{DocxParser, ErrorMode, ParseOptions, PdfParser};
pub use render::JsonFormat;

use std::path::Path;

/// Extract text from a document of a declared kind.
///
/// No format sniffing is performed; `kind` decides which decoder is used.
/// Failures propagate (strict mode).
///
/// # Example
///
/// ```no_run
/// use doctext::{extract, DocumentKind};
///
/// let text = extract("resume.docx", DocumentKind::WordDoc).unwrap();
/// assert!(!text.to_string().contains("\n\n"));
/// ```
pub fn extract<P: AsRef<Path>>(path: P, kind: DocumentKind) -> Result<ExtractedText> {
    extract_with_options(path, kind, &ParseOptions::default())
}

/// Extract text from a document of a declared kind with custom options.
///
/// # Example
///
/// ```no_run
/// use doctext::{extract_with_options, DocumentKind, ParseOptions};
///
/// // A missing or corrupt file yields empty text instead of an error.
/// let options = ParseOptions::new().lenient();
/// let text = extract_with_options("scan.pdf", DocumentKind::Pdf, &options).unwrap();
/// ```
pub fn extract_with_options<P: AsRef<Path>>(
    path: P,
    kind: DocumentKind,
    options: &ParseOptions,
) -> Result<ExtractedText> {
    let path = path.as_ref();
    match kind {
        DocumentKind::Pdf => PdfExtractor::new().extract(path, options),
        DocumentKind::WordDoc => DocxExtractor::new().extract(path, options),
    }
}

/// Parse a document into its structural units without joining them.
pub fn parse_file<P: AsRef<Path>>(path: P, kind: DocumentKind) -> Result<Document> {
    match kind {
        DocumentKind::Pdf => PdfParser::open(path)?.parse(),
        DocumentKind::WordDoc => DocxParser::open(path)?.parse(),
    }
}

/// Extract the text of a PDF file as one string, pages separated by blank
/// lines.
pub fn extract_pdf_text<P: AsRef<Path>>(path: P, options: &ParseOptions) -> Result<String> {
    extract_with_options(path, DocumentKind::Pdf, options).map(String::from)
}

/// Extract the text of a DOCX file as one string, one non-blank paragraph
/// per line.
pub fn extract_docx_text<P: AsRef<Path>>(path: P, options: &ParseOptions) -> Result<String> {
    extract_with_options(path, DocumentKind::WordDoc, options).map(String::from)
}

/// Build a resume record from a DOCX file.
///
/// Only `full_text` is populated; the category fields stay empty.
///
/// # Example
///
/// ```no_run
/// use doctext::{extract_resume, render, JsonFormat, ParseOptions};
///
/// let record = extract_resume("resume.docx", &ParseOptions::default()).unwrap();
/// println!("{}", render::to_json(&record, JsonFormat::Pretty).unwrap());
/// ```
pub fn extract_resume<P: AsRef<Path>>(path: P, options: &ParseOptions) -> Result<ResumeRecord> {
    let text = extract_with_options(path, DocumentKind::WordDoc, options)?;
    Ok(ResumeRecord::from(&text))
}
