//! Decoded Tetra instructions.
//!
//! An [`Op`] is the closed set of executable operations, with any immediate
//! embedded in the variant. An [`Instruction`] pairs it with the 1-indexed
//! source line it came from so runtime errors can point back at the text.

use std::fmt;

use crate::opcode::Opcode;

/// An executable operation. Comments have no variant: they never execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
    AddImm(i64),
    SubImm(i64),
    MulImm(i64),
    DivImm(i64),
    Print,
    /// Jump to the 1-indexed line `target` when the popped value is nonzero.
    JumpIfNonZero { target: i64 },
    Dup,
    /// Reverse the top `count` values. A non-positive count reverses nothing.
    Reverse { count: i64 },
    PrintChar,
    /// Jump to the 1-indexed line `target` when the stack is empty or the
    /// popped value is zero.
    JumpIfZero { target: i64 },
    Load(i64),
}

impl Op {
    /// The opcode whose tag produces this operation.
    pub fn opcode(&self) -> Opcode {
        match self {
            Op::Add => Opcode::Add,
            Op::Sub => Opcode::Sub,
            Op::Mul => Opcode::Mul,
            Op::Div => Opcode::Div,
            Op::AddImm(_) => Opcode::AddImm,
            Op::SubImm(_) => Opcode::SubImm,
            Op::MulImm(_) => Opcode::MulImm,
            Op::DivImm(_) => Opcode::DivImm,
            Op::Print => Opcode::Print,
            Op::JumpIfNonZero { .. } => Opcode::JumpIfNonZero,
            Op::Dup => Opcode::Dup,
            Op::Reverse { .. } => Opcode::Reverse,
            Op::PrintChar => Opcode::PrintChar,
            Op::JumpIfZero { .. } => Opcode::JumpIfZero,
            Op::Load(_) => Opcode::Load,
        }
    }

    /// The embedded immediate, if this operation carries one.
    pub fn immediate(&self) -> Option<i64> {
        match *self {
            Op::AddImm(v)
            | Op::SubImm(v)
            | Op::MulImm(v)
            | Op::DivImm(v)
            | Op::Load(v)
            | Op::JumpIfNonZero { target: v }
            | Op::JumpIfZero { target: v }
            | Op::Reverse { count: v } => Some(v),
            Op::Add | Op::Sub | Op::Mul | Op::Div | Op::Print | Op::Dup | Op::PrintChar => None,
        }
    }

    /// Returns true for the two conditional jumps.
    pub fn is_jump(&self) -> bool {
        matches!(self, Op::JumpIfNonZero { .. } | Op::JumpIfZero { .. })
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.immediate() {
            Some(v) => write!(f, "{} {v}", self.opcode().mnemonic()),
            None => f.write_str(self.opcode().mnemonic()),
        }
    }
}

/// A decoded instruction. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Instruction {
    /// 1-indexed source line the instruction was decoded from.
    pub line: usize,
    /// The operation to perform.
    pub op: Op,
}

impl Instruction {
    /// Create a new instruction.
    pub fn new(line: usize, op: Op) -> Self {
        Self { line, op }
    }
}
