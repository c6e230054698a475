//! Document model types.
//!
//! This module defines the intermediate representation between the
//! format decoders and text rendering. A [`Document`] is an ordered list of
//! [`StructuralUnit`]s; an [`ExtractedText`] holds the fragments those units
//! contribute.

mod document;
mod resume;
mod text;
mod unit;

pub use document::{Document, DocumentKind, Metadata};
pub use resume::ResumeRecord;
pub use text::ExtractedText;
pub use unit::{StructuralUnit, UnitKind};
