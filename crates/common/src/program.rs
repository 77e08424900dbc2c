//! Program representation for decoded Tetra source.
//!
//! A program holds one instruction per emitting source line, in source
//! order. Blank, comment and unrecognized lines take no slot, so an
//! instruction's index can trail its line number.

use crate::instruction::Instruction;

/// A decoded Tetra program. Read-only once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    /// The instruction stream, indexed from 0.
    pub instructions: Vec<Instruction>,
}

impl Program {
    /// Create a new program from a vector of instructions.
    pub fn new(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }

    /// Number of instructions in the program.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Returns true if the program has no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// The instruction at a 0-based index.
    pub fn get(&self, index: usize) -> Option<&Instruction> {
        self.instructions.get(index)
    }

    /// Number of source lines before the last instruction that produced no
    /// instruction of their own.
    ///
    /// Jump targets are source line numbers but address program indices, so
    /// a nonzero value means some jumps may land earlier than the line they
    /// name.
    pub fn skipped_lines(&self) -> usize {
        self.instructions
            .last()
            .map(|last| last.line.saturating_sub(self.instructions.len()))
            .unwrap_or(0)
    }

    /// Returns true if any instruction is a conditional jump.
    pub fn has_jumps(&self) -> bool {
        self.instructions.iter().any(|instr| instr.op.is_jump())
    }
}
