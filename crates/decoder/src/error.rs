//! Error types for the Tetra decoder.

use thiserror::Error;

/// Errors produced while decoding source text into a program.
///
/// Every variant carries the 1-indexed source line of the offending text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// An opcode that needs an argument had nothing after its tag.
    #[error("line {line}: empty argument")]
    EmptyArgument { line: usize },

    /// The first argument character is not one of the four sign digits.
    #[error("line {line}: invalid sign character '{sign}'")]
    InvalidSign { line: usize, sign: char },

    /// The magnitude contains a character outside `0`-`3`.
    #[error("line {line}: invalid numeral '{numeral}'")]
    InvalidNumeral { line: usize, numeral: String },

    /// The magnitude does not fit a signed 64-bit integer.
    #[error("line {line}: numeral '{numeral}' is out of range")]
    NumeralOutOfRange { line: usize, numeral: String },
}

impl ParseError {
    /// The 1-indexed source line the error was raised on.
    pub fn line(&self) -> usize {
        match self {
            ParseError::EmptyArgument { line }
            | ParseError::InvalidSign { line, .. }
            | ParseError::InvalidNumeral { line, .. }
            | ParseError::NumeralOutOfRange { line, .. } => *line,
        }
    }
}
