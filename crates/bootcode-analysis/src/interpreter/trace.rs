//! Execution trace recording for the boot-code interpreter.
//!
//! When tracing is enabled via [`InterpreterConfig::trace_enabled`], the
//! interpreter records a [`TraceEntry`] for every executed instruction,
//! capturing the program counter, the instruction, and the accumulator.
//!
//! [`InterpreterConfig::trace_enabled`]: super::InterpreterConfig

use bootcode_core::Instruction;
use serde::{Deserialize, Serialize};

/// A single entry in the execution trace, recording one executed
/// instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceEntry {
    /// Index of the executed instruction.
    pub pc: usize,
    /// The instruction that was executed.
    pub instruction: Instruction,
    /// Accumulator value after the instruction executed.
    pub accumulator: i64,
}
