//! Opcode table for the Tetra instruction set.
//!
//! Every opcode is selected by a two-character tag made of base-4 digits.
//! The `#[repr(u8)]` value of each variant is the tag read as a two-digit
//! base-4 number, so `"23"` is `2 * 4 + 3 = 11`.

/// Identifies the operation selected by a two-character tag.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    // Row 0: stack arithmetic
    /// Pop a, pop b, push a + b.
    Add = 0,
    /// Pop a, pop b, push a - b.
    Sub = 1,
    /// Pop a, pop b, push a * b.
    Mul = 2,
    /// Pop dividend, pop divisor, push the floor of the quotient.
    Div = 3,

    // Row 1: immediate arithmetic
    /// Pop v, push v + imm.
    AddImm = 4,
    /// Pop v, push v - imm.
    SubImm = 5,
    /// Pop v, push v * imm.
    MulImm = 6,
    /// Pop v, push floor(v / imm).
    DivImm = 7,

    // Row 2: output, branching and stack shuffling
    /// Pop v, write it in decimal.
    Print = 8,
    /// Pop v, jump to line imm if v is nonzero. Empty stack falls through.
    JumpIfNonZero = 9,
    /// Push a copy of the top value.
    Dup = 10,
    /// Reverse the order of the top N values (N defaults to 2).
    Reverse = 11,

    // Row 3: output, branching, constants and comments
    /// Pop v, write the character with code point v.
    PrintChar = 12,
    /// Jump to line imm if the stack is empty or the popped value is zero.
    JumpIfZero = 13,
    /// Push imm.
    Load = 14,
    /// Comment line. Never produces an instruction.
    Comment = 15,
}

/// How an opcode consumes the argument text following its tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Argument {
    /// Any argument text is ignored.
    None,
    /// A numeral must follow the tag.
    Required,
    /// A numeral may follow the tag; this value is used when it is absent.
    Optional(i64),
}

/// All sixteen opcodes in tag order.
pub const ALL_OPCODES: [Opcode; 16] = [
    Opcode::Add,
    Opcode::Sub,
    Opcode::Mul,
    Opcode::Div,
    Opcode::AddImm,
    Opcode::SubImm,
    Opcode::MulImm,
    Opcode::DivImm,
    Opcode::Print,
    Opcode::JumpIfNonZero,
    Opcode::Dup,
    Opcode::Reverse,
    Opcode::PrintChar,
    Opcode::JumpIfZero,
    Opcode::Load,
    Opcode::Comment,
];

/// Count used by [`Opcode::Reverse`] when no argument is written.
pub const DEFAULT_REVERSE_COUNT: i64 = 2;

impl Opcode {
    /// Look up the opcode for a two-character tag.
    ///
    /// Returns `None` for anything that is not exactly two base-4 digits.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let mut chars = tag.chars();
        let hi = chars.next()?.to_digit(4)?;
        let lo = chars.next()?.to_digit(4)?;
        if chars.next().is_some() {
            return None;
        }
        ALL_OPCODES.get((hi * 4 + lo) as usize).copied()
    }

    /// The two-character tag that selects this opcode in source text.
    pub fn tag(&self) -> &'static str {
        match self {
            Opcode::Add => "00",
            Opcode::Sub => "01",
            Opcode::Mul => "02",
            Opcode::Div => "03",
            Opcode::AddImm => "10",
            Opcode::SubImm => "11",
            Opcode::MulImm => "12",
            Opcode::DivImm => "13",
            Opcode::Print => "20",
            Opcode::JumpIfNonZero => "21",
            Opcode::Dup => "22",
            Opcode::Reverse => "23",
            Opcode::PrintChar => "30",
            Opcode::JumpIfZero => "31",
            Opcode::Load => "32",
            Opcode::Comment => "33",
        }
    }

    /// Short uppercase name used in diagnostics and listings.
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Opcode::Add => "ADD",
            Opcode::Sub => "SUB",
            Opcode::Mul => "MUL",
            Opcode::Div => "DIV",
            Opcode::AddImm => "ADDI",
            Opcode::SubImm => "SUBI",
            Opcode::MulImm => "MULI",
            Opcode::DivImm => "DIVI",
            Opcode::Print => "PRINT",
            Opcode::JumpIfNonZero => "JNZ",
            Opcode::Dup => "DUP",
            Opcode::Reverse => "REV",
            Opcode::PrintChar => "PRINTC",
            Opcode::JumpIfZero => "JZ",
            Opcode::Load => "LOAD",
            Opcode::Comment => "COMMENT",
        }
    }

    /// The argument this opcode expects after its tag.
    pub fn argument(&self) -> Argument {
        match self {
            Opcode::AddImm
            | Opcode::SubImm
            | Opcode::MulImm
            | Opcode::DivImm
            | Opcode::JumpIfNonZero
            | Opcode::JumpIfZero
            | Opcode::Load => Argument::Required,
            Opcode::Reverse => Argument::Optional(DEFAULT_REVERSE_COUNT),
            Opcode::Add
            | Opcode::Sub
            | Opcode::Mul
            | Opcode::Div
            | Opcode::Print
            | Opcode::Dup
            | Opcode::PrintChar
            | Opcode::Comment => Argument::None,
        }
    }
}
