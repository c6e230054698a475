//! PDF document parser using lopdf.

use std::io::Read;
use std::path::Path;

use lopdf::Document as LopdfDocument;

use crate::error::{Error, Result};
use crate::model::{Document, DocumentKind, Metadata, StructuralUnit};

use super::options::ParseOptions;

/// PDF document parser.
///
/// Owns the decoded `lopdf` document for the duration of one extraction.
pub struct PdfParser {
    doc: LopdfDocument,
    options: ParseOptions,
}

impl PdfParser {
    /// Open a PDF file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open a PDF file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Opening PDF {}", path.display());

        let doc = LopdfDocument::load(path)?;
        Ok(Self { doc, options })
    }

    /// Parse a PDF from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, ParseOptions::default())
    }

    /// Parse a PDF from bytes with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Self> {
        let doc = LopdfDocument::load_mem(data)?;
        Ok(Self { doc, options })
    }

    /// Parse a PDF from a reader.
    pub fn from_reader_with_options<R: Read>(
        mut reader: R,
        options: ParseOptions,
    ) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes_with_options(&data, options)
    }

    /// Walk the pages in order and return a document with one unit per page.
    pub fn parse(&self) -> Result<Document> {
        let mut document = Document::new(DocumentKind::Pdf);
        document.metadata = self.extract_metadata();

        let page_ids = self.doc.get_pages();
        document.metadata.unit_count = page_ids.len() as u32;

        for page_num in page_ids.keys().copied() {
            let text = match self.extract_page_text(page_num) {
                Ok(text) => text,
                Err(e) => {
                    if !self.options.is_lenient() {
                        return Err(e);
                    }
                    // The page still gets its separator; only its text is lost.
                    log::warn!("Failed to extract text from page {}: {}", page_num, e);
                    String::new()
                }
            };
            log::debug!("Page {}: {} bytes of text", page_num, text.len());
            document.add_unit(StructuralUnit::page(page_num, text));
        }

        Ok(document)
    }

    /// Extract document metadata from the Info dictionary.
    fn extract_metadata(&self) -> Metadata {
        let mut metadata = Metadata::with_version(self.doc.version.to_string());

        if let Ok(info) = self.doc.trailer.get(b"Info") {
            let info_dict = match info {
                lopdf::Object::Reference(r) => self.doc.get_dictionary(*r).ok(),
                lopdf::Object::Dictionary(d) => Some(d),
                _ => None,
            };

            if let Some(info_dict) = info_dict {
                metadata.title = get_string_from_dict(info_dict, b"Title");
                metadata.author = get_string_from_dict(info_dict, b"Author");
                metadata.subject = get_string_from_dict(info_dict, b"Subject");
                metadata.keywords = get_string_from_dict(info_dict, b"Keywords");
                metadata.creator = get_string_from_dict(info_dict, b"Creator");
                metadata.producer = get_string_from_dict(info_dict, b"Producer");

                if let Some(date_str) = get_string_from_dict(info_dict, b"CreationDate") {
                    metadata.created = parse_pdf_date(&date_str);
                }
                if let Some(date_str) = get_string_from_dict(info_dict, b"ModDate") {
                    metadata.modified = parse_pdf_date(&date_str);
                }
            }
        }

        metadata.encrypted = self.doc.is_encrypted();
        metadata
    }

    /// Extract text from a page.
    fn extract_page_text(&self, page_num: u32) -> Result<String> {
        self.doc
            .extract_text(&[page_num])
            .map_err(|e| Error::TextExtract(format!("Page {}: {}", page_num, e)))
    }

    /// Get the number of pages.
    pub fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    /// Check if the document is encrypted.
    pub fn is_encrypted(&self) -> bool {
        self.doc.is_encrypted()
    }

    /// Get PDF version.
    pub fn version(&self) -> String {
        self.doc.version.to_string()
    }
}

/// Helper to get a string from a PDF dictionary.
fn get_string_from_dict(dict: &lopdf::Dictionary, key: &[u8]) -> Option<String> {
    dict.get(key).ok().and_then(|obj| match obj {
        lopdf::Object::String(bytes, _) => Some(decode_pdf_string(bytes)),
        lopdf::Object::Name(bytes) => String::from_utf8(bytes.clone()).ok(),
        _ => None,
    })
}

/// Decode a PDF text string: UTF-16BE with BOM, else UTF-8, else Latin-1.
fn decode_pdf_string(bytes: &[u8]) -> String {
    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        let utf16: Vec<u16> = bytes[2..]
            .chunks_exact(2)
            .map(|c| u16::from_be_bytes([c[0], c[1]]))
            .collect();
        return String::from_utf16_lossy(&utf16);
    }

    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}

/// Parse a PDF date string (D:YYYYMMDDHHmmSSOHH'mm').
fn parse_pdf_date(s: &str) -> Option<chrono::DateTime<chrono::Utc>> {
    let s = s.strip_prefix("D:").unwrap_or(s);

    // At minimum we need YYYY
    if s.len() < 4 {
        return None;
    }

    let year: i32 = s.get(0..4)?.parse().ok()?;
    let month: u32 = s.get(4..6).and_then(|m| m.parse().ok()).unwrap_or(1);
    let day: u32 = s.get(6..8).and_then(|d| d.parse().ok()).unwrap_or(1);
    let hour: u32 = s.get(8..10).and_then(|h| h.parse().ok()).unwrap_or(0);
    let minute: u32 = s.get(10..12).and_then(|m| m.parse().ok()).unwrap_or(0);
    let second: u32 = s.get(12..14).and_then(|s| s.parse().ok()).unwrap_or(0);

    chrono::NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, second))
        .map(|dt| chrono::DateTime::from_naive_utc_and_offset(dt, chrono::Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};

    fn build_pdf(pages: &[&str]) -> Vec<u8> {
        let mut doc = LopdfDocument::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids = Vec::new();
        for text in pages {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 24.into()]),
                    Operation::new("Td", vec![100.into(), 600.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages_dict));
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    #[test]
    fn test_parse_pages_in_order() {
        let bytes = build_pdf(&["Alpha", "Beta"]);
        let parser = PdfParser::from_bytes(&bytes).unwrap();
        assert_eq!(parser.page_count(), 2);

        let doc = parser.parse().unwrap();
        assert_eq!(doc.kind, DocumentKind::Pdf);
        assert_eq!(doc.unit_count(), 2);
        assert_eq!(doc.metadata.unit_count, 2);
        assert_eq!(doc.units[0].index, 1);
        assert!(doc.units[0].text.contains("Alpha"));
        assert!(doc.units[1].text.contains("Beta"));
    }

    #[test]
    fn test_from_reader_and_accessors() {
        let bytes = build_pdf(&["Only page"]);
        let parser =
            PdfParser::from_reader_with_options(std::io::Cursor::new(bytes), ParseOptions::new())
                .unwrap();

        assert_eq!(parser.version(), "1.5");
        assert!(!parser.is_encrypted());
        assert_eq!(parser.page_count(), 1);
    }

    #[test]
    fn test_from_bytes_rejects_garbage() {
        let result = PdfParser::from_bytes(b"not a pdf at all");
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_utf16_string() {
        let bytes = [0xFE, 0xFF, 0x00, 0x48, 0x00, 0x69];
        assert_eq!(decode_pdf_string(&bytes), "Hi");
    }

    #[test]
    fn test_decode_latin1_fallback() {
        let bytes = [b'C', 0xE9];
        assert_eq!(decode_pdf_string(&bytes), "Cé");
    }

    #[test]
    fn test_parse_pdf_date() {
        let date = parse_pdf_date("D:20240115103045").unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 1);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn test_parse_pdf_date_minimal() {
        let date = parse_pdf_date("D:2024").unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 1);
        assert_eq!(date.day(), 1);

        assert!(parse_pdf_date("D:20").is_none());
    }
}
