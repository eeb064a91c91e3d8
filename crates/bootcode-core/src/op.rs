//! The boot-code instruction set.
//!
//! Defines the closed operation vocabulary ([`Op`]) and a single
//! [`Instruction`] pairing an operation with its signed argument. The
//! set is deliberately closed: dispatch everywhere is an exhaustive
//! `match`, and anything outside the three mnemonics is a parse error
//! (see [`crate::program::Program::parse`]).

use std::fmt;

use serde::{Deserialize, Serialize};

/// The three boot-code operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Op {
    /// Adds the argument to the accumulator, then advances by one.
    Acc,
    /// Jumps by the argument, relative to the current instruction.
    Jmp,
    /// Does nothing and advances by one. The argument is ignored.
    Nop,
}

impl Op {
    /// Swaps `Jmp` and `Nop`; `Acc` is returned unchanged.
    ///
    /// Involutive: flipping twice yields the original operation.
    pub fn flip(self) -> Op {
        match self {
            Op::Acc => Op::Acc,
            Op::Jmp => Op::Nop,
            Op::Nop => Op::Jmp,
        }
    }

    /// Resolves a lowercase mnemonic to its operation, or `None` for
    /// anything outside the closed set.
    pub fn from_mnemonic(token: &str) -> Option<Op> {
        match token {
            "acc" => Some(Op::Acc),
            "jmp" => Some(Op::Jmp),
            "nop" => Some(Op::Nop),
            _ => None,
        }
    }

    /// The lowercase mnemonic used in program text.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Op::Acc => "acc",
            Op::Jmp => "jmp",
            Op::Nop => "nop",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// One boot-code instruction: an operation and its signed argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Instruction {
    pub op: Op,
    pub argument: i64,
}

impl Instruction {
    /// Creates a new instruction.
    pub fn new(op: Op, argument: i64) -> Self {
        Instruction { op, argument }
    }

    /// Returns a copy with the operation flipped (`Jmp` <-> `Nop`).
    /// The argument is kept as-is.
    pub fn flipped(self) -> Instruction {
        Instruction {
            op: self.op.flip(),
            argument: self.argument,
        }
    }

    /// Relative offset from this instruction to the one executed next:
    /// the argument for `Jmp`, one for everything else.
    pub fn step_offset(self) -> i64 {
        match self.op {
            Op::Jmp => self.argument,
            Op::Acc | Op::Nop => 1,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Arguments carry an explicit sign in program text, e.g. "acc +6".
        write!(f, "{} {:+}", self.op, self.argument)
    }
}
