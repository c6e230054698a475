//! Plain text rendering and persistence.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::model::ExtractedText;

/// Render extracted text as a single string.
///
/// No trimming or cleanup is applied; the output is exactly the fragments
/// and their separators.
pub fn to_text(text: &ExtractedText) -> String {
    text.to_string()
}

/// Write text verbatim to a file as UTF-8, replacing any existing file.
pub fn write_text<P: AsRef<Path>>(path: P, text: &str) -> Result<()> {
    fs::write(path.as_ref(), text.as_bytes())?;
    log::debug!("Wrote {} bytes to {}", text.len(), path.as_ref().display());
    Ok(())
}
