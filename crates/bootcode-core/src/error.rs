//! Core error types for bootcode-core.
//!
//! Uses `thiserror` for structured, matchable error variants covering
//! parsing and program-manipulation failures. Parsing is the error
//! boundary for the instruction set: an operation token outside the
//! closed set is rejected here, so the interpreter never encounters one.

use std::num::ParseIntError;

use thiserror::Error;

/// Errors produced by the bootcode-core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A line that does not split into exactly an operation token and an
    /// argument token. Line numbers are 1-based.
    #[error("line {line}: expected '<operation> <argument>', got '{text}'")]
    MalformedLine { line: usize, text: String },

    /// An operation token outside the closed set {acc, jmp, nop}.
    #[error("line {line}: unknown operation '{op}'")]
    UnknownOperation { line: usize, op: String },

    /// An argument token that is not a signed base-10 integer.
    #[error("line {line}: invalid argument '{arg}': {source}")]
    InvalidArgument {
        line: usize,
        arg: String,
        #[source]
        source: ParseIntError,
    },

    /// An instruction index outside the program.
    #[error("instruction index {index} out of range for program of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}
