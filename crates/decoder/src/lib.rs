//! Tetra decoder: source text → program.
//!
//! Source is read line by line. Each line yields zero or one instruction:
//! the first two non-whitespace characters pick the opcode, and any
//! argument is a base-4 numeral (see [`numeral`]).
//!
//! # Usage
//!
//! ```
//! use tetra_common::Op;
//! use tetra_decoder::{decode, disassemble};
//!
//! let program = decode("32 113\n20\n").unwrap();
//! assert_eq!(program.instructions[0].op, Op::Load(7));
//! assert_eq!(program.instructions[1].op, Op::Print);
//! assert_eq!(disassemble(&program), "32 113\n20\n");
//! ```
//!
//! # Line numbers and jump targets
//!
//! Blank, comment and unrecognized lines get no slot in the program, yet
//! jump targets are source line numbers. A jump therefore lands on program
//! index `target - 1`, which is only the instruction on line `target` when
//! no skipped line precedes it. This is kept as-is; [`decode`] logs a
//! warning when a program with jumps is affected.

pub mod error;
pub mod numeral;

mod disassembler;
mod parser;

pub use error::ParseError;
pub use numeral::{decode_numeral, encode_numeral};
pub use parser::{decode_line, LineOutcome};

use tetra_common::Program;
use tracing::{debug, trace, warn};

/// Decode source text into a program.
///
/// Stops at the first error; a partially decoded program is never returned.
pub fn decode(source: &str) -> Result<Program, ParseError> {
    let mut instructions = Vec::new();

    for (idx, line) in source.split('\n').enumerate() {
        let line_num = idx + 1;
        match decode_line(line, line_num)? {
            LineOutcome::Emit(instr) => instructions.push(instr),
            LineOutcome::Comment | LineOutcome::Blank => {}
            LineOutcome::Unrecognized(text) => {
                trace!(line = line_num, %text, "unrecognized tag, line skipped");
            }
        }
    }

    let program = Program::new(instructions);
    let skipped = program.skipped_lines();
    if skipped > 0 && program.has_jumps() {
        warn!(
            skipped,
            "jump targets are source line numbers but skipped lines shift instruction indices"
        );
    }
    debug!(instructions = program.len(), skipped, "decoded program");

    Ok(program)
}

/// Disassemble a program into canonical source text.
///
/// Blank lines pad the output so each instruction keeps its line number;
/// `decode(&disassemble(&p)) == Ok(p)` for any decoded program `p`.
pub fn disassemble(program: &Program) -> String {
    disassembler::disassemble(program)
}
