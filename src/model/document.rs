//! Document-level types.

use super::{ExtractedText, StructuralUnit};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Declared format of a source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// PDF document, iterated page by page.
    Pdf,
    /// Word-processor (DOCX) document, iterated paragraph by paragraph.
    #[serde(rename = "docx")]
    WordDoc,
}

impl DocumentKind {
    /// Resolve a kind from a file extension (case-insensitive, no leading dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "docx" => Some(DocumentKind::WordDoc),
            _ => None,
        }
    }

    /// Canonical file extension for this kind.
    pub fn extension(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "pdf",
            DocumentKind::WordDoc => "docx",
        }
    }

    /// Text placed between (PDF: after) unit fragments.
    pub fn separator(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "\n\n",
            DocumentKind::WordDoc => "\n",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentKind::Pdf => write!(f, "PDF"),
            DocumentKind::WordDoc => write!(f, "DOCX"),
        }
    }
}

/// A decoded document: its kind, metadata and structural units in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Source format
    pub kind: DocumentKind,

    /// Document metadata (title, author, etc.)
    pub metadata: Metadata,

    /// Pages or paragraphs, in document order
    pub units: Vec<StructuralUnit>,
}

impl Document {
    /// Create a new empty document of the given kind.
    pub fn new(kind: DocumentKind) -> Self {
        Self {
            kind,
            metadata: Metadata::default(),
            units: Vec::new(),
        }
    }

    /// Number of structural units.
    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    /// Append a structural unit.
    pub fn add_unit(&mut self, unit: StructuralUnit) {
        self.units.push(unit);
    }

    /// Check if the document has no units.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Collect the per-unit fragments.
    pub fn extracted_text(&self) -> ExtractedText {
        ExtractedText::from_document(self)
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.extracted_text().to_string()
    }
}

/// Document metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title
    pub title: Option<String>,

    /// Document author
    pub author: Option<String>,

    /// Document subject
    pub subject: Option<String>,

    /// Keywords
    pub keywords: Option<String>,

    /// Creator application
    pub creator: Option<String>,

    /// PDF producer
    pub producer: Option<String>,

    /// Creation date
    pub created: Option<DateTime<Utc>>,

    /// Last modification date
    pub modified: Option<DateTime<Utc>>,

    /// Format version (e.g., "1.7" for PDF), empty when unknown
    pub version: String,

    /// Total number of structural units
    pub unit_count: u32,

    /// Whether the document is encrypted
    pub encrypted: bool,
}

impl Metadata {
    /// Create new metadata with a format version.
    pub fn with_version(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            ..Default::default()
        }
    }
}
