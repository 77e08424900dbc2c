//! Per-line decoding: source text → at most one instruction.
//!
//! All whitespace is removed from the line first, including whitespace
//! between or inside tag and argument. The first two remaining characters
//! select the opcode and the rest is the argument text.

use crate::error::ParseError;
use crate::numeral::decode_numeral;
use tetra_common::{Argument, Instruction, Op, Opcode};

/// What a single source line decodes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// The line produced an instruction.
    Emit(Instruction),
    /// The line carries the comment tag.
    Comment,
    /// Nothing but whitespace.
    Blank,
    /// The leading characters name no opcode. Holds the stripped line.
    Unrecognized(String),
}

/// Decode one line of source text. `line_num` is 1-indexed.
pub fn decode_line(line: &str, line_num: usize) -> Result<LineOutcome, ParseError> {
    let stripped: String = line.chars().filter(|c| !c.is_whitespace()).collect();
    if stripped.is_empty() {
        return Ok(LineOutcome::Blank);
    }

    let split = stripped
        .char_indices()
        .nth(2)
        .map(|(i, _)| i)
        .unwrap_or(stripped.len());
    let (tag, arg) = stripped.split_at(split);

    let Some(opcode) = Opcode::from_tag(tag) else {
        return Ok(LineOutcome::Unrecognized(stripped));
    };

    let immediate = match opcode.argument() {
        Argument::None => 0,
        Argument::Required => decode_numeral(arg, line_num)?,
        Argument::Optional(default) if arg.is_empty() => default,
        Argument::Optional(_) => decode_numeral(arg, line_num)?,
    };

    let op = match opcode {
        Opcode::Add => Op::Add,
        Opcode::Sub => Op::Sub,
        Opcode::Mul => Op::Mul,
        Opcode::Div => Op::Div,
        Opcode::AddImm => Op::AddImm(immediate),
        Opcode::SubImm => Op::SubImm(immediate),
        Opcode::MulImm => Op::MulImm(immediate),
        Opcode::DivImm => Op::DivImm(immediate),
        Opcode::Print => Op::Print,
        Opcode::JumpIfNonZero => Op::JumpIfNonZero { target: immediate },
        Opcode::Dup => Op::Dup,
        Opcode::Reverse => Op::Reverse { count: immediate },
        Opcode::PrintChar => Op::PrintChar,
        Opcode::JumpIfZero => Op::JumpIfZero { target: immediate },
        Opcode::Load => Op::Load(immediate),
        Opcode::Comment => return Ok(LineOutcome::Comment),
    };

    Ok(LineOutcome::Emit(Instruction::new(line_num, op)))
}
