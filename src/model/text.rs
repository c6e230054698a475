//! Extracted text: ordered fragments joined per document kind.

use super::{Document, DocumentKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered text fragments, one per contributing structural unit.
///
/// Rendering depends on the kind: PDF fragments are each followed by a
/// blank-line separator (the last one included), DOCX fragments are joined
/// by a single newline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedText {
    kind: DocumentKind,
    fragments: Vec<String>,
}

impl ExtractedText {
    /// Create an empty result for the given kind.
    pub fn empty(kind: DocumentKind) -> Self {
        Self {
            kind,
            fragments: Vec::new(),
        }
    }

    /// Build from already-filtered fragments.
    pub fn from_fragments(kind: DocumentKind, fragments: Vec<String>) -> Self {
        Self { kind, fragments }
    }

    /// Collect fragments from a document's units, in order.
    pub fn from_document(doc: &Document) -> Self {
        let fragments = doc
            .units
            .iter()
            .filter_map(|unit| unit.fragment())
            .map(str::to_string)
            .collect();

        Self {
            kind: doc.kind,
            fragments,
        }
    }

    /// Source document kind.
    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    /// The fragments in document order.
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    /// Number of fragments.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// True when no unit contributed a fragment.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

impl fmt::Display for ExtractedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = self.kind.separator();
        match self.kind {
            DocumentKind::Pdf => {
                for fragment in &self.fragments {
                    f.write_str(fragment)?;
                    f.write_str(sep)?;
                }
            }
            DocumentKind::WordDoc => {
                for (i, fragment) in self.fragments.iter().enumerate() {
                    if i > 0 {
                        f.write_str(sep)?;
                    }
                    f.write_str(fragment)?;
                }
            }
        }
        Ok(())
    }
}

impl From<ExtractedText> for String {
    fn from(text: ExtractedText) -> Self {
        text.to_string()
    }
}
