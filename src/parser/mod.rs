//! Document parsing module.

mod docx_parser;
mod options;
mod pdf_parser;

pub use docx_parser::DocxParser;
pub use options::{ErrorMode, ParseOptions};
pub use pdf_parser::PdfParser;
