//! Tetra command-line host: reads source files and drives the decoder and VM.
//!
//! Each command returns `Err(exit_code)` after printing its own diagnostic,
//! so `main` only has to exit with the code.

pub mod commands;

/// Input could not be read, or failed to decode.
pub const EXIT_INPUT: i32 = 1;
/// Decoding succeeded but execution raised a runtime error.
pub const EXIT_RUNTIME: i32 = 3;
