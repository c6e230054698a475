//! Resume record built from a word-processor document.

use super::ExtractedText;
use serde::{Deserialize, Serialize};

/// Resume data: the full text plus category fields.
///
/// The category fields are never populated; no categorization rule exists
/// for them yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeRecord {
    /// Non-blank paragraphs joined by newlines
    pub full_text: String,

    /// Education entries
    pub education: Vec<String>,

    /// Work experience entries
    pub experience: Vec<String>,

    /// Skills
    pub skills: Vec<String>,
}

impl ResumeRecord {
    /// Create a record holding only the full text.
    pub fn new(full_text: impl Into<String>) -> Self {
        Self {
            full_text: full_text.into(),
            ..Default::default()
        }
    }
}

impl From<&ExtractedText> for ResumeRecord {
    fn from(text: &ExtractedText) -> Self {
        Self::new(text.to_string())
    }
}
