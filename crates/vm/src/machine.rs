//! VM state: the operand stack, the counter and the output sink.

use std::io::Write;

use crate::error::RuntimeError;
use crate::execute::execute;
use tetra_common::{Instruction, Program};
use tracing::trace;

/// The operand stack. Grows and shrinks only at the top.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stack {
    values: Vec<i64>,
}

impl Stack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Values from bottom to top.
    pub fn as_slice(&self) -> &[i64] {
        &self.values
    }

    /// Consume the stack, returning its values from bottom to top.
    pub fn into_vec(self) -> Vec<i64> {
        self.values
    }

    /// Number of values on the stack.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the stack holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Push a value.
    pub fn push(&mut self, value: i64) {
        self.values.push(value);
    }

    /// Pop a value if there is one.
    pub fn pop(&mut self) -> Option<i64> {
        self.values.pop()
    }

    /// Fail unless at least `required` values are present, naming `instr`.
    pub(crate) fn require(
        &self,
        instr: &Instruction,
        required: usize,
    ) -> Result<(), RuntimeError> {
        if self.values.len() < required {
            return Err(RuntimeError::StackUnderflow {
                line: instr.line,
                op: instr.op.opcode().mnemonic(),
                required,
            });
        }
        Ok(())
    }

    /// Pop after a successful [`Stack::require`] for `instr`.
    pub(crate) fn take(&mut self, instr: &Instruction) -> Result<i64, RuntimeError> {
        self.values.pop().ok_or(RuntimeError::StackUnderflow {
            line: instr.line,
            op: instr.op.opcode().mnemonic(),
            required: 1,
        })
    }

    /// Copy of the top value.
    pub(crate) fn peek(&self, instr: &Instruction) -> Result<i64, RuntimeError> {
        self.require(instr, 1)?;
        Ok(self.values[self.values.len() - 1])
    }

    /// Reverse the order of the top `n` values. Caller checks the depth.
    pub(crate) fn reverse_top(&mut self, n: usize) {
        let start = self.values.len() - n;
        self.values[start..].reverse();
    }
}

impl From<Vec<i64>> for Stack {
    fn from(values: Vec<i64>) -> Self {
        Self { values }
    }
}

/// The Tetra stack machine.
///
/// One VM runs one program once. The stack and counter are owned here and
/// start fresh; output goes to the borrowed sink `W`.
pub struct VM<'a, W: Write> {
    /// The program being executed.
    program: &'a Program,
    /// Operand stack.
    stack: Stack,
    /// Index of the next instruction. Execution ends once it leaves
    /// `0..program.len()`.
    pc: i64,
    /// Where PRINT and PRINTC write.
    out: W,
    /// Instructions executed so far.
    steps: u64,
}

impl<'a, W: Write> VM<'a, W> {
    /// Create a new VM for the given program, writing output to `out`.
    pub fn new(program: &'a Program, out: W) -> Self {
        Self::with_stack(program, out, Stack::new())
    }

    /// Create a VM whose stack starts with `stack` instead of empty.
    pub fn with_stack(program: &'a Program, out: W, stack: Stack) -> Self {
        Self {
            program,
            stack,
            pc: 0,
            out,
            steps: 0,
        }
    }

    /// The current stack.
    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    /// The current counter.
    pub fn pc(&self) -> i64 {
        self.pc
    }

    /// Number of instructions executed so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Consume the VM, returning the final stack and the output sink.
    pub fn into_parts(self) -> (Stack, W) {
        (self.stack, self.out)
    }

    /// The instruction the counter addresses, or `None` once it has left
    /// the program.
    pub fn current(&self) -> Option<&'a Instruction> {
        usize::try_from(self.pc)
            .ok()
            .and_then(|index| self.program.get(index))
    }

    /// Execute one instruction.
    ///
    /// Returns `Ok(false)` without doing anything if the counter is already
    /// outside the program.
    pub fn step(&mut self) -> Result<bool, RuntimeError> {
        let Some(instr) = self.current() else {
            return Ok(false);
        };

        trace!(
            line = instr.line,
            pc = self.pc,
            op = %instr.op,
            depth = self.stack.len(),
            "step"
        );

        self.pc = execute(instr, &mut self.stack, self.pc, &mut self.out)?;
        self.steps += 1;
        Ok(true)
    }
}
