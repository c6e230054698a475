//! Recovered read failures must surface as `warn` records.

use std::fs;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};

use doctext::{extract_with_options, DocumentKind, ParseOptions};

static RECORDS: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Warn
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            RECORDS
                .lock()
                .unwrap()
                .push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

#[test]
fn test_lenient_recovery_logs_warning() {
    log::set_boxed_logger(Box::new(CaptureLogger)).unwrap();
    log::set_max_level(LevelFilter::Warn);

    let dir = tempfile::tempdir().unwrap();
    let missing_pdf = dir.path().join("missing.pdf");
    let broken_docx = dir.path().join("broken.docx");
    fs::write(&broken_docx, b"not a zip archive").unwrap();

    let options = ParseOptions::new().lenient();
    let pdf = extract_with_options(&missing_pdf, DocumentKind::Pdf, &options).unwrap();
    let docx = extract_with_options(&broken_docx, DocumentKind::WordDoc, &options).unwrap();
    assert!(pdf.is_empty());
    assert!(docx.is_empty());

    let records = RECORDS.lock().unwrap();
    let warnings: Vec<&String> = records
        .iter()
        .filter(|(level, msg)| *level == Level::Warn && msg.starts_with("Error reading"))
        .map(|(_, msg)| msg)
        .collect();

    assert_eq!(warnings.len(), 2, "captured: {:?}", *records);
    assert!(warnings[0].contains(&DocumentKind::Pdf.to_string()));
    assert!(warnings[1].contains(&DocumentKind::WordDoc.to_string()));
}
