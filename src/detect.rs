//! Document kind detection.
//!
//! Extraction itself never sniffs: callers declare a [`DocumentKind`]. These
//! helpers exist for front ends that want to infer one.

use crate::error::{Error, Result};
use crate::model::DocumentKind;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
/// ZIP local file header; DOCX is an OOXML zip package.
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// Detect document kind from leading bytes.
///
/// # Returns
/// * `Ok(DocumentKind::Pdf)` for a `%PDF-` header
/// * `Ok(DocumentKind::WordDoc)` for a zip local file header
/// * `Err(Error::UnknownFormat)` otherwise
pub fn detect_kind_from_bytes(data: &[u8]) -> Result<DocumentKind> {
    if data.starts_with(PDF_MAGIC) {
        Ok(DocumentKind::Pdf)
    } else if data.starts_with(ZIP_MAGIC) {
        Ok(DocumentKind::WordDoc)
    } else {
        Err(Error::UnknownFormat)
    }
}

/// Detect document kind from a path.
///
/// The extension wins when it names a known kind; otherwise the first bytes
/// of the file are inspected.
///
/// # Example
/// ```no_run
/// use doctext::detect::detect_kind_from_path;
///
/// let kind = detect_kind_from_path("resume.docx").unwrap();
/// println!("{}", kind);
/// ```
pub fn detect_kind_from_path<P: AsRef<Path>>(path: P) -> Result<DocumentKind> {
    let path = path.as_ref();

    if let Some(kind) = path
        .extension()
        .and_then(|e| e.to_str())
        .and_then(DocumentKind::from_extension)
    {
        return Ok(kind);
    }

    let mut header = Vec::with_capacity(8);
    File::open(path)?.take(8).read_to_end(&mut header)?;
    detect_kind_from_bytes(&header)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_detect_pdf_bytes() {
        let data = b"%PDF-1.7\n%\xe2\xe3\xcf\xd3";
        assert_eq!(detect_kind_from_bytes(data).unwrap(), DocumentKind::Pdf);
    }

    #[test]
    fn test_detect_zip_bytes() {
        let data = b"PK\x03\x04\x14\x00\x06\x00";
        assert_eq!(detect_kind_from_bytes(data).unwrap(), DocumentKind::WordDoc);
    }

    #[test]
    fn test_detect_unknown() {
        let result = detect_kind_from_bytes(b"<!DOCTYPE html>");
        assert!(matches!(result, Err(Error::UnknownFormat)));

        let result = detect_kind_from_bytes(b"");
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_detect_from_path_extension() {
        // Extension is trusted without opening the file.
        let kind = detect_kind_from_path("/nonexistent/report.PDF").unwrap();
        assert_eq!(kind, DocumentKind::Pdf);
    }

    #[test]
    fn test_detect_from_path_content() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"%PDF-1.4\n").unwrap();
        let kind = detect_kind_from_path(file.path()).unwrap();
        assert_eq!(kind, DocumentKind::Pdf);
    }
}
