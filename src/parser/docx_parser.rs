//! DOCX document parser using docx-rs.

use std::io::Read;
use std::path::Path;

use docx_rs::{Break, BreakType, DocumentChild, Docx, ParagraphChild, RunChild};

use crate::error::Result;
use crate::model::{Document, DocumentKind, StructuralUnit};

/// DOCX document parser.
///
/// Only top-level body paragraphs are walked; table cell paragraphs,
/// headers and footers are not part of the paragraph sequence.
pub struct DocxParser {
    docx: Docx,
}

impl DocxParser {
    /// Open a DOCX file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Opening DOCX {}", path.display());

        let data = std::fs::read(path)?;
        Self::from_bytes(&data)
    }

    /// Parse a DOCX package from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let docx = docx_rs::read_docx(data)?;
        Ok(Self { docx })
    }

    /// Parse a DOCX package from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(&data)
    }

    /// Walk the body paragraphs in order, one unit per paragraph.
    ///
    /// Blank paragraphs are kept as units; they are dropped when fragments
    /// are collected.
    pub fn parse(&self) -> Result<Document> {
        let mut document = Document::new(DocumentKind::WordDoc);

        let mut index = 0u32;
        for child in &self.docx.document.children {
            if let DocumentChild::Paragraph(p) = child {
                document.add_unit(StructuralUnit::paragraph(index, paragraph_text(p)));
                index += 1;
            }
        }

        document.metadata.unit_count = index;
        log::debug!("Read {} paragraphs", index);
        Ok(document)
    }

    /// Number of body paragraphs.
    pub fn paragraph_count(&self) -> usize {
        self.docx
            .document
            .children
            .iter()
            .filter(|c| matches!(c, DocumentChild::Paragraph(_)))
            .count()
    }
}

/// Concatenate run text of a paragraph, hyperlink runs included.
fn paragraph_text(p: &docx_rs::Paragraph) -> String {
    let mut text = String::new();

    for child in &p.children {
        match child {
            ParagraphChild::Run(r) => push_run_text(r, &mut text),
            ParagraphChild::Hyperlink(h) => {
                for child in &h.children {
                    if let ParagraphChild::Run(r) = child {
                        push_run_text(r, &mut text);
                    }
                }
            }
            _ => {}
        }
    }

    text
}

/// Line breaks and carriage returns become `\n`; page and column breaks
/// contribute nothing.
fn push_run_text(r: &docx_rs::Run, text: &mut String) {
    let line_break = Break::new(BreakType::TextWrapping);

    for run_child in &r.children {
        match run_child {
            RunChild::Text(t) => text.push_str(&t.text),
            RunChild::Tab(_) => text.push('\t'),
            RunChild::Break(b) if *b == line_break => text.push('\n'),
            RunChild::CarriageReturn(_) => text.push('\n'),
            _ => {}
        }
    }
}
