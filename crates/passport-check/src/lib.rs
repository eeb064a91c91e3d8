//! Structural validation of field-based documents.
//!
//! A document is an ordered map of `name -> value` fields parsed from a
//! blank-line-separated batch. Each known field name carries a
//! [`FieldRule`], a closed enumeration of validator kinds dispatched by
//! an exhaustive match; a document is valid when all mandatory fields
//! are present and every field it carries is accepted by its rule.

pub mod document;
pub mod error;
pub mod rules;

// Re-export commonly used types
pub use document::{count_valid, Document, MANDATORY_FIELDS};
pub use error::ParseError;
pub use rules::{FieldRule, PatternKind};
