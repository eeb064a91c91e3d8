//! Error types for passport-check.

use thiserror::Error;

/// Errors produced while parsing a document batch.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A field entry without the `name:value` separator.
    #[error("malformed field entry '{entry}': expected 'name:value'")]
    MissingSeparator { entry: String },
}
