//! Runtime error types for the boot-code interpreter.
//!
//! Each variant includes the program counter of the instruction that
//! caused the error, enabling precise error reporting. Unknown
//! operations are not represented here: the operation set is a closed
//! enum and anything else is already a parse error in bootcode-core.

use serde::{Deserialize, Serialize};

/// Runtime errors produced by the interpreter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum RuntimeError {
    /// A jump whose target is negative or strictly past the terminal
    /// index. Landing exactly on the terminal index halts instead.
    #[error("jump out of bounds at instruction {pc}: target {target} not in 0..={len}")]
    JumpOutOfBounds { pc: usize, target: i64, len: usize },

    /// The accumulator left the representable integer range.
    #[error("accumulator overflow at instruction {pc}")]
    AccumulatorOverflow { pc: usize },
}
