//! Disassembler: program → canonical source text.
//!
//! Each instruction is written as its tag, a space, and its canonical
//! numeral if it has one. Blank lines are inserted so every instruction
//! sits on the same line number it was decoded from, which keeps jump
//! targets meaning the same thing after a round trip.

use crate::numeral::encode_numeral;
use tetra_common::Program;

/// Disassemble a program into canonical source text.
///
/// Decoding the output yields a program equal to the input, provided the
/// input's line numbers are strictly increasing (true of anything the
/// decoder produced).
pub fn disassemble(program: &Program) -> String {
    let mut out = String::new();
    let mut line = 1;

    for instr in &program.instructions {
        while line < instr.line {
            out.push('\n');
            line += 1;
        }

        out.push_str(instr.op.opcode().tag());
        if let Some(value) = instr.op.immediate() {
            out.push(' ');
            out.push_str(&encode_numeral(value));
        }
        out.push('\n');
        line += 1;
    }

    out
}
