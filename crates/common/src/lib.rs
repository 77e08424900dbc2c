//! Tetra common types.
//!
//! This crate provides the data model shared by the decoder and the VM:
//!
//! - [`Opcode`]: the sixteen two-character tags and their argument rules
//! - [`Op`]: the closed set of executable operations with immediates
//! - [`Instruction`]: an operation tagged with its source line
//! - [`Program`]: the decoded instruction sequence
//!
//! # Dependencies
//!
//! None. Error types live with the component that raises them.

pub mod instruction;
pub mod opcode;
pub mod program;

// Re-export commonly used types at the crate root.
pub use instruction::{Instruction, Op};
pub use opcode::{Argument, Opcode};
pub use program::Program;
