//! Interpreter state machine with step-by-step execution.
//!
//! The [`Interpreter`] uses an explicit state machine for execution. The
//! state transitions are:
//! `Ready -> Running -> (Halted | Looped | Error)`.
//!
//! Each step executes the instruction under the program counter. A step
//! that finds the program counter on the terminal index (one past the
//! last instruction) halts; a step that finds it on an already-executed
//! instruction stops the run before re-entering it. Loop detection
//! bounds every run at one execution per instruction.

use bootcode_core::{Op, Program};

use super::error::RuntimeError;
use super::trace::TraceEntry;

/// Execution state of the interpreter state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionState {
    /// Ready to start execution (initial state).
    Ready,
    /// Currently executing (between steps).
    Running,
    /// The program counter reached the terminal index.
    Halted { accumulator: i64 },
    /// An already-executed instruction was reached again; execution
    /// stopped before re-entering it.
    Looped { accumulator: i64, at: usize },
    /// Execution halted due to a runtime error.
    Error { error: RuntimeError },
}

impl ExecutionState {
    /// Whether the state admits no further steps.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ExecutionState::Halted { .. }
                | ExecutionState::Looped { .. }
                | ExecutionState::Error { .. }
        )
    }
}

/// Terminal summary of a complete run.
///
/// Collapses the state machine down to the two ways a well-formed
/// program stops; runtime errors are reported separately as `Err`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The program ran off its end.
    Halted { accumulator: i64 },
    /// Instruction `at` was about to execute a second time.
    Looped { accumulator: i64, at: usize },
}

/// Configuration for the interpreter.
#[derive(Debug, Clone, Default)]
pub struct InterpreterConfig {
    /// Whether to record an execution trace.
    pub trace_enabled: bool,
}

/// The boot-code interpreter.
///
/// Holds a reference to the [`Program`] and executes it sequentially,
/// dispatching on the closed operation set with an exhaustive match.
/// Supports step-by-step execution and optional execution tracing.
pub struct Interpreter<'p> {
    /// The program being interpreted.
    program: &'p Program,
    /// Current execution state.
    state: ExecutionState,
    /// Index of the instruction to execute next.
    pc: usize,
    /// Running total, mutated only by `acc` instructions.
    accumulator: i64,
    /// Instructions already executed, by index.
    visited: Vec<bool>,
    /// Execution trace (when enabled).
    trace: Option<Vec<TraceEntry>>,
}

impl<'p> Interpreter<'p> {
    /// Creates a new interpreter in the Ready state at `(pc, acc) = (0, 0)`.
    pub fn new(program: &'p Program, config: InterpreterConfig) -> Self {
        let trace = if config.trace_enabled {
            Some(Vec::new())
        } else {
            None
        };

        Interpreter {
            program,
            state: ExecutionState::Ready,
            pc: 0,
            accumulator: 0,
            visited: vec![false; program.len()],
            trace,
        }
    }

    /// Current execution state.
    pub fn state(&self) -> &ExecutionState {
        &self.state
    }

    /// Accumulator value as of the last executed instruction.
    pub fn accumulator(&self) -> i64 {
        self.accumulator
    }

    /// Index of the instruction that would execute next.
    pub fn pc(&self) -> usize {
        self.pc
    }

    /// The recorded execution trace, when tracing is enabled.
    pub fn trace(&self) -> Option<&[TraceEntry]> {
        self.trace.as_deref()
    }

    /// Advances execution by one instruction and returns the new state.
    ///
    /// Transitions from Ready to Running on the first call. Once a
    /// terminal state is reached, further calls return it unchanged.
    pub fn step(&mut self) -> &ExecutionState {
        match self.state {
            ExecutionState::Ready | ExecutionState::Running => {
                self.state = ExecutionState::Running;
            }
            _ => return &self.state,
        }

        if self.pc == self.program.len() {
            self.state = ExecutionState::Halted {
                accumulator: self.accumulator,
            };
            return &self.state;
        }

        if self.visited[self.pc] {
            self.state = ExecutionState::Looped {
                accumulator: self.accumulator,
                at: self.pc,
            };
            return &self.state;
        }
        self.visited[self.pc] = true;

        // In range: the halt check above already handled pc == len.
        let instruction = self.program.instructions()[self.pc];

        if let Op::Acc = instruction.op {
            self.accumulator = match self.accumulator.checked_add(instruction.argument) {
                Some(total) => total,
                None => {
                    self.state = ExecutionState::Error {
                        error: RuntimeError::AccumulatorOverflow { pc: self.pc },
                    };
                    return &self.state;
                }
            };
        }

        if let Some(trace) = &mut self.trace {
            trace.push(TraceEntry {
                pc: self.pc,
                instruction,
                accumulator: self.accumulator,
            });
        }

        let target = self.pc as i64 + instruction.step_offset();
        if target < 0 || target > self.program.len() as i64 {
            self.state = ExecutionState::Error {
                error: RuntimeError::JumpOutOfBounds {
                    pc: self.pc,
                    target,
                    len: self.program.len(),
                },
            };
            return &self.state;
        }

        self.pc = target as usize;
        &self.state
    }

    /// Runs until a terminal state is reached and returns it.
    pub fn run(&mut self) -> &ExecutionState {
        while !self.state.is_terminal() {
            self.step();
        }
        &self.state
    }

    /// Runs to completion and summarizes the terminal state.
    ///
    /// # Errors
    ///
    /// Returns the [`RuntimeError`] if execution trapped (malformed jump
    /// target or accumulator overflow).
    pub fn run_to_outcome(&mut self) -> Result<RunOutcome, RuntimeError> {
        loop {
            match self.step() {
                ExecutionState::Halted { accumulator } => {
                    return Ok(RunOutcome::Halted {
                        accumulator: *accumulator,
                    })
                }
                ExecutionState::Looped { accumulator, at } => {
                    return Ok(RunOutcome::Looped {
                        accumulator: *accumulator,
                        at: *at,
                    })
                }
                ExecutionState::Error { error } => return Err(error.clone()),
                ExecutionState::Ready | ExecutionState::Running => {}
            }
        }
    }
}
