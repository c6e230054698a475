//! Error types for doctext library.

use std::io;
use thiserror::Error;

/// Result type alias for doctext operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reading a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file format is not recognized as PDF or DOCX.
    #[error("Unknown file format: not a PDF or DOCX document")]
    UnknownFormat,

    /// No extractor handles the given file extension.
    #[error("Unsupported file extension: {0}")]
    UnsupportedExtension(String),

    /// Error parsing PDF structure.
    #[error("PDF parsing error: {0}")]
    PdfParse(String),

    /// The PDF document is encrypted and cannot be read.
    #[error("Document is encrypted")]
    Encrypted,

    /// Error reading the DOCX package or its document part.
    #[error("DOCX parsing error: {0}")]
    Docx(String),

    /// Error extracting text content from a structural unit.
    #[error("Text extraction error: {0}")]
    TextExtract(String),

    /// Error during rendering (text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::PdfParse(err.to_string()),
        }
    }
}

impl From<docx_rs::ReaderError> for Error {
    fn from(err: docx_rs::ReaderError) -> Self {
        Error::Docx(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Encrypted;
        assert_eq!(err.to_string(), "Document is encrypted");

        let err = Error::UnsupportedExtension("odt".to_string());
        assert_eq!(err.to_string(), "Unsupported file extension: odt");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
