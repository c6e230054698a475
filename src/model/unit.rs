//! Structural units: pages and paragraphs.

use serde::{Deserialize, Serialize};

/// What kind of division a unit is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    /// A PDF page
    Page,
    /// A word-processor paragraph
    Paragraph,
}

/// One page or paragraph with its raw extracted text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuralUnit {
    /// Unit kind
    pub kind: UnitKind,

    /// Page number (1-indexed) or paragraph index (0-indexed)
    pub index: u32,

    /// Raw text as produced by the decoder
    pub text: String,
}

impl StructuralUnit {
    /// Create a page unit.
    pub fn page(number: u32, text: impl Into<String>) -> Self {
        Self {
            kind: UnitKind::Page,
            index: number,
            text: text.into(),
        }
    }

    /// Create a paragraph unit.
    pub fn paragraph(index: u32, text: impl Into<String>) -> Self {
        Self {
            kind: UnitKind::Paragraph,
            index,
            text: text.into(),
        }
    }

    /// The text fragment this unit contributes, if any.
    ///
    /// Pages always contribute their raw text, even when empty. Paragraphs
    /// contribute their trimmed text and nothing when blank.
    pub fn fragment(&self) -> Option<&str> {
        match self.kind {
            UnitKind::Page => Some(&self.text),
            UnitKind::Paragraph => {
                let trimmed = self.text.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed)
                }
            }
        }
    }
}
