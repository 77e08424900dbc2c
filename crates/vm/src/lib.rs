//! Tetra virtual machine — executes decoded programs.
//!
//! The VM is a stack machine with:
//! - An operand stack of signed 64-bit integers
//! - A counter indexing into the program
//! - An output sink for PRINT and PRINTC
//!
//! Execution starts at index 0 and ends the moment the counter leaves the
//! program, in either direction. There is no halt instruction.
//!
//! # Usage
//!
//! ```
//! use tetra_common::{Instruction, Op, Program};
//! use tetra_vm::run;
//!
//! let program = Program::new(vec![
//!     Instruction::new(1, Op::Load(42)),
//!     Instruction::new(2, Op::Dup),
//!     Instruction::new(3, Op::Print),
//! ]);
//!
//! let mut out = Vec::new();
//! let stack = run(&program, &mut out).unwrap();
//! assert_eq!(out, b"42");
//! assert_eq!(stack, vec![42]);
//! ```

pub mod error;
pub mod execute;
pub mod machine;

pub use error::RuntimeError;
pub use machine::{Stack, VM};

use std::io::Write;

use tetra_common::Program;

/// Execute a program against a fresh stack and return the final stack.
///
/// # Errors
///
/// Returns [`RuntimeError`] for the first instruction that fails (stack
/// underflow, division by zero, invalid character, overflow, or a failed
/// write).
pub fn run<W: Write>(program: &Program, out: W) -> Result<Vec<i64>, RuntimeError> {
    let mut vm = VM::new(program, out);
    vm.execute()?;
    let (stack, _) = vm.into_parts();
    Ok(stack.into_vec())
}
