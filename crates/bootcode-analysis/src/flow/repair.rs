//! Repair-candidate search for non-terminating programs.
//!
//! A faulty program loops forever because exactly one `jmp` or `nop`
//! carries the wrong operation. The search combines forward
//! reachability from the entry with backward reachability from the
//! terminal index: flipping instruction `i` repairs the program
//! precisely when `i` executes under the original control flow and the
//! flipped instruction steps onto a node the terminal index is
//! reachable from.

use thiserror::Error;

use bootcode_core::{CoreError, Instruction, Op, Program};

use super::{reachable, reversed_step_graph, step_graph};
use crate::interpreter::{Interpreter, InterpreterConfig, RunOutcome, RuntimeError};

/// The single instruction whose flip makes a looping program halt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepairCandidate {
    /// Index of the instruction to replace.
    pub index: usize,
    /// The flipped instruction to put there.
    pub replacement: Instruction,
}

/// Errors produced by the end-to-end repair pipeline.
#[derive(Debug, Error)]
pub enum RepairError {
    /// The candidate search was exhausted without a match.
    #[error("no instruction flip makes the program terminate")]
    NoCandidate,

    /// The patched program still revisits an instruction. The
    /// exactly-one-corruption precondition did not hold.
    #[error("program still loops after flipping instruction {index}")]
    StillLooping { index: usize },

    /// The program (original or patched) hit a trap condition.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),

    /// Applying the patch failed structurally.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Finds the first instruction index (in program order) whose flip
/// redirects control flow onto a path from the entry to the terminal
/// index.
///
/// `Acc` instructions are skipped: their flip is the identity and
/// cannot change control flow. When no index qualifies the search
/// reports `None` rather than a misleading default; when more than one
/// qualifies (the exactly-one-corruption precondition does not hold),
/// the lowest index wins.
pub fn find_repair_candidate(program: &Program) -> Option<RepairCandidate> {
    let forward = reachable(&step_graph(program), 0);
    let backward = reachable(&reversed_step_graph(program), program.len() as i64);

    for (index, instruction) in program.instructions().iter().enumerate() {
        if instruction.op == Op::Acc {
            continue;
        }
        let src = index as i64;
        if !forward.contains(&src) {
            continue;
        }
        let alternate = src + instruction.flipped().step_offset();
        if backward.contains(&alternate) {
            return Some(RepairCandidate {
                index,
                replacement: instruction.flipped(),
            });
        }
    }

    None
}

/// Runs `program` to completion, repairing it first if it loops.
///
/// A program that already halts is executed untouched and its
/// accumulator returned; no flip is applied. Otherwise the repair
/// candidate is flipped and the patched program is run.
///
/// # Errors
///
/// - [`RepairError::NoCandidate`] if the program loops and no single
///   flip can make it halt.
/// - [`RepairError::StillLooping`] if the patched program loops anyway.
/// - [`RepairError::Runtime`] if either run traps.
pub fn repair_and_run(program: &Program) -> Result<i64, RepairError> {
    let mut interpreter = Interpreter::new(program, InterpreterConfig::default());
    match interpreter.run_to_outcome()? {
        RunOutcome::Halted { accumulator } => return Ok(accumulator),
        RunOutcome::Looped { .. } => {}
    }

    let candidate = find_repair_candidate(program).ok_or(RepairError::NoCandidate)?;
    let patched = program.with_flipped(candidate.index)?;

    let mut interpreter = Interpreter::new(&patched, InterpreterConfig::default());
    match interpreter.run_to_outcome()? {
        RunOutcome::Halted { accumulator } => Ok(accumulator),
        RunOutcome::Looped { .. } => Err(RepairError::StillLooping {
            index: candidate.index,
        }),
    }
}
