//! Main execution loop and per-operation semantics.

use std::io::Write;

use crate::error::RuntimeError;
use crate::machine::{Stack, VM};
use tetra_common::{Instruction, Op};
use tracing::debug;

impl<'a, W: Write> VM<'a, W> {
    /// Run until the counter leaves the program or an instruction fails.
    ///
    /// There is no halt instruction and no step limit: a program that
    /// loops forever runs forever.
    pub fn execute(&mut self) -> Result<(), RuntimeError> {
        while self.step()? {}
        debug!(
            steps = self.steps(),
            pc = self.pc(),
            depth = self.stack().len(),
            "program finished"
        );
        Ok(())
    }
}

/// Execute a single instruction at counter `pc` and return the next counter.
///
/// Failing instructions leave the stack as they found it, except PRINT and
/// PRINTC whose value is already consumed when the write fails.
pub fn execute<W: Write>(
    instr: &Instruction,
    stack: &mut Stack,
    pc: i64,
    out: &mut W,
) -> Result<i64, RuntimeError> {
    let next = pc + 1;

    match instr.op {
        Op::Add => binary(instr, stack, i64::checked_add)?,
        Op::Sub => binary(instr, stack, i64::checked_sub)?,
        Op::Mul => binary(instr, stack, i64::checked_mul)?,
        Op::Div => {
            stack.require(instr, 2)?;
            let dividend = stack.take(instr)?;
            let divisor = stack.take(instr)?;
            match floor_div(instr, dividend, divisor) {
                Ok(q) => stack.push(q),
                Err(e) => {
                    stack.push(divisor);
                    stack.push(dividend);
                    return Err(e);
                }
            }
        }

        Op::AddImm(imm) => unary(instr, stack, |v| v.checked_add(imm))?,
        Op::SubImm(imm) => unary(instr, stack, |v| v.checked_sub(imm))?,
        Op::MulImm(imm) => unary(instr, stack, |v| v.checked_mul(imm))?,
        Op::DivImm(imm) => {
            let v = stack.peek(instr)?;
            let q = floor_div(instr, v, imm)?;
            stack.take(instr)?;
            stack.push(q);
        }

        Op::Print => {
            stack.require(instr, 1)?;
            let v = stack.take(instr)?;
            emit(instr, out, format_args!("{v}"))?;
        }
        Op::PrintChar => {
            let code = stack.peek(instr)?;
            let c = u32::try_from(code)
                .ok()
                .and_then(char::from_u32)
                .ok_or(RuntimeError::InvalidCharacter {
                    line: instr.line,
                    code,
                })?;
            stack.take(instr)?;
            emit(instr, out, format_args!("{c}"))?;
        }

        Op::JumpIfNonZero { target } => {
            return Ok(match stack.pop() {
                None | Some(0) => next,
                Some(_) => target.saturating_sub(1),
            });
        }
        Op::JumpIfZero { target } => {
            return Ok(match stack.pop() {
                None | Some(0) => target.saturating_sub(1),
                Some(_) => next,
            });
        }

        Op::Dup => {
            let v = stack.peek(instr)?;
            stack.push(v);
        }
        Op::Reverse { count } => {
            if count > 0 {
                let n = usize::try_from(count).unwrap_or(usize::MAX);
                stack.require(instr, n)?;
                stack.reverse_top(n);
            }
        }
        Op::Load(imm) => stack.push(imm),
    }

    Ok(next)
}

/// Pop a, pop b, push `op(a, b)`.
fn binary(
    instr: &Instruction,
    stack: &mut Stack,
    op: fn(i64, i64) -> Option<i64>,
) -> Result<(), RuntimeError> {
    stack.require(instr, 2)?;
    let a = stack.take(instr)?;
    let b = stack.take(instr)?;
    match op(a, b) {
        Some(r) => {
            stack.push(r);
            Ok(())
        }
        None => {
            stack.push(b);
            stack.push(a);
            Err(overflow(instr))
        }
    }
}

/// Pop v, push `op(v)`.
fn unary(
    instr: &Instruction,
    stack: &mut Stack,
    op: impl FnOnce(i64) -> Option<i64>,
) -> Result<(), RuntimeError> {
    let v = stack.peek(instr)?;
    let r = op(v).ok_or_else(|| overflow(instr))?;
    stack.take(instr)?;
    stack.push(r);
    Ok(())
}

/// Quotient rounded toward negative infinity.
fn floor_div(instr: &Instruction, dividend: i64, divisor: i64) -> Result<i64, RuntimeError> {
    if divisor == 0 {
        return Err(RuntimeError::DivisionByZero { line: instr.line });
    }
    // Only i64::MIN / -1 fails here.
    let q = dividend.checked_div(divisor).ok_or_else(|| overflow(instr))?;
    if dividend % divisor != 0 && (dividend < 0) != (divisor < 0) {
        Ok(q - 1)
    } else {
        Ok(q)
    }
}

fn overflow(instr: &Instruction) -> RuntimeError {
    RuntimeError::ArithmeticOverflow {
        line: instr.line,
        op: instr.op.opcode().mnemonic(),
    }
}

/// Write to the sink and flush so output appears instruction by instruction.
fn emit<W: Write>(
    instr: &Instruction,
    out: &mut W,
    args: std::fmt::Arguments<'_>,
) -> Result<(), RuntimeError> {
    out.write_fmt(args)
        .and_then(|()| out.flush())
        .map_err(|e| RuntimeError::Output {
            line: instr.line,
            message: e.to_string(),
        })
}
