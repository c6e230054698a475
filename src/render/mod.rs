//! Rendering module for writing extraction results out.

mod json;
mod text;

pub use json::{to_json, JsonFormat};
pub use text::{to_text, write_text};
