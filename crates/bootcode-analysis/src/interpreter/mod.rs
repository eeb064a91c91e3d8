//! Boot-code interpreter for sequential execution with loop detection.
//!
//! Executes a parsed [`Program`] instruction by instruction, producing
//! the final accumulator value when the program halts.
//!
//! # Architecture
//!
//! The interpreter uses a state machine execution model:
//!
//! - [`Interpreter`] holds a reference to a [`Program`] and manages the
//!   program counter, accumulator, visited set, and optional traces.
//! - [`ExecutionState`] tracks the interpreter's lifecycle:
//!   `Ready -> Running -> (Halted | Looped | Error)`.
//! - [`RunOutcome`] summarizes a complete run for callers that only
//!   care how it stopped.
//! - [`RuntimeError`] captures trap conditions (malformed jump target,
//!   accumulator overflow) with the program counter that caused them.
//! - [`TraceEntry`] records each executed instruction when tracing is
//!   enabled.
//!
//! # Usage
//!
//! ```ignore
//! let mut interp = Interpreter::new(&program, InterpreterConfig::default());
//! match interp.run_to_outcome()? {
//!     RunOutcome::Halted { accumulator } => { /* final answer */ }
//!     RunOutcome::Looped { accumulator, at } => { /* infinite loop */ }
//! }
//! ```
//!
//! [`Program`]: bootcode_core::Program

pub mod error;
pub mod state;
pub mod trace;

pub use error::RuntimeError;
pub use state::{ExecutionState, Interpreter, InterpreterConfig, RunOutcome};
pub use trace::TraceEntry;
