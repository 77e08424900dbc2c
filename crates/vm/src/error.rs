//! Runtime errors for the Tetra VM.
//!
//! Every error carries the 1-indexed source line of the instruction that
//! raised it. All of them end the run.

use thiserror::Error;

/// Errors that occur during program execution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// The stack held fewer values than the instruction consumes.
    #[error("line {line}: {op} requires at least {required} value(s) on the stack")]
    StackUnderflow {
        line: usize,
        op: &'static str,
        required: usize,
    },

    /// Stack or immediate division with a zero divisor.
    #[error("line {line}: divide by zero")]
    DivisionByZero { line: usize },

    /// PRINTC popped a value that is not a Unicode scalar value.
    #[error("line {line}: {code} is not a valid character code")]
    InvalidCharacter { line: usize, code: i64 },

    /// An arithmetic result does not fit a signed 64-bit integer.
    #[error("line {line}: {op} overflowed")]
    ArithmeticOverflow { line: usize, op: &'static str },

    /// The output sink rejected a write.
    #[error("line {line}: output failed: {message}")]
    Output { line: usize, message: String },
}

impl RuntimeError {
    /// The 1-indexed source line the error was raised on.
    pub fn line(&self) -> usize {
        match self {
            RuntimeError::StackUnderflow { line, .. }
            | RuntimeError::DivisionByZero { line }
            | RuntimeError::InvalidCharacter { line, .. }
            | RuntimeError::ArithmeticOverflow { line, .. }
            | RuntimeError::Output { line, .. } => *line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formats() {
        assert_eq!(
            RuntimeError::DivisionByZero { line: 5 }.to_string(),
            "line 5: divide by zero"
        );
        assert_eq!(
            RuntimeError::StackUnderflow {
                line: 2,
                op: "ADD",
                required: 2
            }
            .to_string(),
            "line 2: ADD requires at least 2 value(s) on the stack"
        );
        assert_eq!(
            RuntimeError::InvalidCharacter { line: 1, code: -3 }.to_string(),
            "line 1: -3 is not a valid character code"
        );
        assert_eq!(
            RuntimeError::ArithmeticOverflow { line: 8, op: "MUL" }.to_string(),
            "line 8: MUL overflowed"
        );
    }

    #[test]
    fn line_accessor() {
        assert_eq!(RuntimeError::DivisionByZero { line: 12 }.line(), 12);
        assert_eq!(
            RuntimeError::Output {
                line: 4,
                message: "broken pipe".to_string()
            }
            .line(),
            4
        );
    }
}
