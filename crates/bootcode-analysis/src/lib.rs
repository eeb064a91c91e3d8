pub mod flow;
pub mod interpreter;

// Re-export commonly used types
pub use flow::{find_repair_candidate, repair_and_run, RepairCandidate, RepairError};
pub use interpreter::{
    ExecutionState, Interpreter, InterpreterConfig, RunOutcome, RuntimeError, TraceEntry,
};
