//! Text extractors and the registry that dispatches between them.
//!
//! Each extractor handles one [`DocumentKind`]. The registry maps file
//! extensions to extractors so callers can dispatch by path.
//!
//! # Example
//!
//! ```no_run
//! use doctext::extract::ExtractorRegistry;
//! use doctext::ParseOptions;
//! use std::path::Path;
//!
//! fn main() -> doctext::Result<()> {
//!     let registry = ExtractorRegistry::with_defaults();
//!     let text = registry.extract(Path::new("resume.docx"), &ParseOptions::default())?;
//!     println!("{}", text);
//!     Ok(())
//! }
//! ```

mod docx;
mod pdf;

pub use docx::DocxExtractor;
pub use pdf::PdfExtractor;

use crate::error::{Error, Result};
use crate::model::{DocumentKind, ExtractedText};
use crate::parser::ParseOptions;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Trait for text extractors.
///
/// Implement this trait to add support for a new document format.
pub trait TextExtractor: Send + Sync {
    /// Get the supported file extensions for this extractor.
    ///
    /// Extensions should be lowercase without the leading dot (e.g., `["pdf"]`).
    fn supported_extensions(&self) -> &[&str];

    /// The document kind this extractor reads.
    fn kind(&self) -> DocumentKind;

    /// Get the name of this extractor.
    fn name(&self) -> &str;

    /// Extract text from a file at the given path.
    fn extract(&self, path: &Path, options: &ParseOptions) -> Result<ExtractedText>;

    /// Extract text from in-memory bytes.
    fn extract_bytes(&self, bytes: &[u8], options: &ParseOptions) -> Result<ExtractedText>;

    /// Check if this extractor supports the given extension.
    fn supports_extension(&self, ext: &str) -> bool {
        let ext_lower = ext.to_lowercase();
        self.supported_extensions().iter().any(|e| *e == ext_lower)
    }
}

/// Apply the error mode to the outcome of an open/decode pass.
///
/// In lenient mode a failure is logged and replaced by an empty result.
pub(crate) fn recover(
    kind: DocumentKind,
    options: &ParseOptions,
    result: Result<ExtractedText>,
) -> Result<ExtractedText> {
    match result {
        Err(e) if options.is_lenient() => {
            log::warn!("Error reading {}: {}", kind, e);
            Ok(ExtractedText::empty(kind))
        }
        other => other,
    }
}

/// Registry for text extractors.
///
/// The registry maps file extensions and document kinds to extractors.
pub struct ExtractorRegistry {
    by_extension: HashMap<String, Arc<dyn TextExtractor>>,
    by_kind: HashMap<DocumentKind, Arc<dyn TextExtractor>>,
    by_name: HashMap<String, Arc<dyn TextExtractor>>,
}

impl ExtractorRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            by_extension: HashMap::new(),
            by_kind: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Create a registry with the PDF and DOCX extractors.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(PdfExtractor::new()));
        registry.register(Arc::new(DocxExtractor::new()));
        registry
    }

    /// Register an extractor.
    ///
    /// The extractor will be registered for all its supported extensions and
    /// replaces any earlier extractor for the same kind.
    pub fn register(&mut self, extractor: Arc<dyn TextExtractor>) {
        for ext in extractor.supported_extensions() {
            self.by_extension.insert(ext.to_lowercase(), extractor.clone());
        }
        self.by_kind.insert(extractor.kind(), extractor.clone());
        self.by_name.insert(extractor.name().to_lowercase(), extractor);
    }

    /// Get an extractor by file extension.
    pub fn get_by_extension(&self, ext: &str) -> Option<Arc<dyn TextExtractor>> {
        self.by_extension.get(&ext.to_lowercase()).cloned()
    }

    /// Get an extractor by document kind.
    pub fn get_by_kind(&self, kind: DocumentKind) -> Option<Arc<dyn TextExtractor>> {
        self.by_kind.get(&kind).cloned()
    }

    /// Get an extractor by name.
    pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn TextExtractor>> {
        self.by_name.get(&name.to_lowercase()).cloned()
    }

    /// Check if an extension is supported.
    pub fn supports(&self, ext: &str) -> bool {
        self.by_extension.contains_key(&ext.to_lowercase())
    }

    /// Get all supported extensions.
    pub fn supported_extensions(&self) -> Vec<&str> {
        self.by_extension.keys().map(|s| s.as_str()).collect()
    }

    /// Extract a file using the extractor registered for its extension.
    pub fn extract(&self, path: &Path, options: &ParseOptions) -> Result<ExtractedText> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| Error::Other("File has no extension".into()))?;

        let extractor = self
            .get_by_extension(ext)
            .ok_or_else(|| Error::UnsupportedExtension(ext.to_string()))?;

        extractor.extract(path, options)
    }

    /// Extract in-memory bytes using the extension to pick the extractor.
    pub fn extract_bytes(
        &self,
        bytes: &[u8],
        ext: &str,
        options: &ParseOptions,
    ) -> Result<ExtractedText> {
        let extractor = self
            .get_by_extension(ext)
            .ok_or_else(|| Error::UnsupportedExtension(ext.to_string()))?;

        extractor.extract_bytes(bytes, options)
    }

    /// Extract a file using the extractor registered for a declared kind.
    pub fn extract_as(
        &self,
        path: &Path,
        kind: DocumentKind,
        options: &ParseOptions,
    ) -> Result<ExtractedText> {
        let extractor = self
            .get_by_kind(kind)
            .ok_or_else(|| Error::Other(format!("No extractor for {}", kind)))?;

        extractor.extract(path, options)
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_with_defaults() {
        let registry = ExtractorRegistry::with_defaults();
        assert!(registry.supports("pdf"));
        assert!(registry.supports("PDF"));
        assert!(registry.supports("docx"));
        assert!(!registry.supports("odt"));
    }

    #[test]
    fn test_registry_get_by_kind() {
        let registry = ExtractorRegistry::with_defaults();
        let extractor = registry.get_by_kind(DocumentKind::WordDoc).unwrap();
        assert_eq!(extractor.name(), "docx");
    }

    #[test]
    fn test_recover_lenient() {
        let options = ParseOptions::new().lenient();
        let result = recover(
            DocumentKind::Pdf,
            &options,
            Err(Error::PdfParse("broken xref".into())),
        );
        assert!(result.unwrap().is_empty());
    }

    #[test]
    fn test_recover_strict() {
        let options = ParseOptions::new();
        let result = recover(DocumentKind::WordDoc, &options, Err(Error::UnknownFormat));
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_registry_rejects_unknown_extension() {
        let registry = ExtractorRegistry::with_defaults();
        let result = registry.extract(Path::new("notes.odt"), &ParseOptions::default());
        assert!(matches!(result, Err(Error::UnsupportedExtension(ext)) if ext == "odt"));
    }
}
