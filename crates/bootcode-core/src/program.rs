//! Program container and text parsing.
//!
//! A [`Program`] is an ordered, immutable sequence of instructions. The
//! only supported mutation is producing a copy with a single instruction
//! flipped ([`Program::with_flipped`]), which is how a repair is applied.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::op::{Instruction, Op};

/// An ordered sequence of boot-code instructions, indexed `0..len`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    /// Creates a program from an instruction sequence.
    pub fn new(instructions: Vec<Instruction>) -> Self {
        Program { instructions }
    }

    /// Parses a program from text, one `<operation> <signed-integer>`
    /// instruction per line.
    ///
    /// Line numbers in errors are 1-based. Unknown operations are
    /// rejected here rather than during execution, so the interpreter
    /// only ever sees the closed operation set.
    ///
    /// # Errors
    ///
    /// Returns `CoreError` for:
    /// - A line without exactly two whitespace-separated tokens
    /// - An operation token outside {acc, jmp, nop}
    /// - An argument that is not a signed base-10 integer
    pub fn parse(input: &str) -> Result<Program, CoreError> {
        let mut instructions = Vec::new();

        for (index, line) in input.lines().enumerate() {
            let number = index + 1;
            let mut tokens = line.split_whitespace();
            let (op_token, arg_token) = match (tokens.next(), tokens.next(), tokens.next()) {
                (Some(op), Some(arg), None) => (op, arg),
                _ => {
                    return Err(CoreError::MalformedLine {
                        line: number,
                        text: line.to_string(),
                    })
                }
            };

            let op = Op::from_mnemonic(op_token).ok_or_else(|| CoreError::UnknownOperation {
                line: number,
                op: op_token.to_string(),
            })?;
            let argument = arg_token
                .parse::<i64>()
                .map_err(|source| CoreError::InvalidArgument {
                    line: number,
                    arg: arg_token.to_string(),
                    source,
                })?;

            instructions.push(Instruction::new(op, argument));
        }

        Ok(Program { instructions })
    }

    /// Number of instructions. The index one past the last instruction
    /// is the terminal position a halting run ends on.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Whether the program has no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// The instruction at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&Instruction> {
        self.instructions.get(index)
    }

    /// Read-only view of the instruction sequence.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Returns a copy of this program with the single instruction at
    /// `index` flipped (`Jmp` <-> `Nop`, `Acc` unchanged).
    ///
    /// # Errors
    ///
    /// Returns `CoreError::IndexOutOfRange` if `index` is not a valid
    /// instruction index.
    pub fn with_flipped(&self, index: usize) -> Result<Program, CoreError> {
        let mut instructions = self.instructions.clone();
        match instructions.get_mut(index) {
            Some(slot) => {
                *slot = slot.flipped();
                Ok(Program { instructions })
            }
            None => Err(CoreError::IndexOutOfRange {
                index,
                len: self.instructions.len(),
            }),
        }
    }
}
