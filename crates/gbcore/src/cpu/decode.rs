//! Opcode decoding.
//!
//! Every byte 0x00..=0xFF maps to exactly one [`Instruction`]. The mapping
//! is computed once into a 256-entry table so that `execute` is a table
//! lookup followed by a match on the variant.

use std::fmt;

use lazy_static::lazy_static;

/// 8-bit operand encoded in the low three bits (source) or bits 3-5
/// (destination) of an opcode. `HlInd` is the byte at the address in HL.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reg8 {
    B,
    C,
    D,
    E,
    H,
    L,
    HlInd,
    A,
}

impl Reg8 {
    /// Standard register order used by the opcode matrix:
    /// 0=B, 1=C, 2=D, 3=E, 4=H, 5=L, 6=[HL], 7=A.
    fn from_index(index: u8) -> Self {
        match index & 0x07 {
            0 => Reg8::B,
            1 => Reg8::C,
            2 => Reg8::D,
            3 => Reg8::E,
            4 => Reg8::H,
            5 => Reg8::L,
            6 => Reg8::HlInd,
            _ => Reg8::A,
        }
    }
}

/// 16-bit register operand for loads, INC/DEC and `ADD HL`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reg16 {
    BC,
    DE,
    HL,
    SP,
}

impl Reg16 {
    fn from_index(index: u8) -> Self {
        match index & 0x03 {
            0 => Reg16::BC,
            1 => Reg16::DE,
            2 => Reg16::HL,
            _ => Reg16::SP,
        }
    }
}

/// Register pair operand for PUSH/POP, where AF takes the place of SP.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackPair {
    BC,
    DE,
    HL,
    AF,
}

impl StackPair {
    fn from_index(index: u8) -> Self {
        match index & 0x03 {
            0 => StackPair::BC,
            1 => StackPair::DE,
            2 => StackPair::HL,
            _ => StackPair::AF,
        }
    }
}

/// Address operand of `LD [rr], A` and `LD A, [rr]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Indirect {
    BC,
    DE,
    /// `[HL+]`: HL is incremented after the access.
    HlInc,
    /// `[HL-]`: HL is decremented after the access.
    HlDec,
}

impl Indirect {
    fn from_index(index: u8) -> Self {
        match index & 0x03 {
            0 => Indirect::BC,
            1 => Indirect::DE,
            2 => Indirect::HlInc,
            _ => Indirect::HlDec,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Condition {
    NZ,
    Z,
    NC,
    C,
}

impl Condition {
    fn from_index(index: u8) -> Self {
        match index & 0x03 {
            0 => Condition::NZ,
            1 => Condition::Z,
            2 => Condition::NC,
            _ => Condition::C,
        }
    }
}

/// Accumulator ALU operation, encoded in bits 3-5 of 0x80..=0xBF and of the
/// immediate forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    Add,
    Adc,
    Sub,
    Sbc,
    And,
    Xor,
    Or,
    Cp,
}

impl AluOp {
    fn from_index(index: u8) -> Self {
        match index & 0x07 {
            0 => AluOp::Add,
            1 => AluOp::Adc,
            2 => AluOp::Sub,
            3 => AluOp::Sbc,
            4 => AluOp::And,
            5 => AluOp::Xor,
            6 => AluOp::Or,
            _ => AluOp::Cp,
        }
    }
}

/// Unprefixed accumulator rotates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RotateA {
    Rlca,
    Rrca,
    Rla,
    Rra,
}

/// A decoded instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    Nop,
    Stop,
    Halt,
    Di,
    Ei,
    Daa,
    Cpl,
    Scf,
    Ccf,
    /// `LD r, r'` (0x40..=0x7F apart from HALT).
    LdRR { dst: Reg8, src: Reg8 },
    /// `LD r, n8`
    LdRImm(Reg8),
    /// `LD rr, n16`
    LdRrImm(Reg16),
    /// `LD [rr], A`
    LdIndA(Indirect),
    /// `LD A, [rr]`
    LdAInd(Indirect),
    /// `LDH [a8], A`
    LdhImmA,
    /// `LDH A, [a8]`
    LdhAImm,
    /// `LDH [C], A`
    LdhCA,
    /// `LDH A, [C]`
    LdhAC,
    /// `LD [a16], A`
    LdAbsA,
    /// `LD A, [a16]`
    LdAAbs,
    /// `LD [a16], SP`
    LdAbsSp,
    /// `LD SP, HL`
    LdSpHl,
    /// `LD HL, SP+e8`
    LdHlSpOffset,
    Alu(AluOp, Reg8),
    AluImm(AluOp),
    Inc8(Reg8),
    Dec8(Reg8),
    Inc16(Reg16),
    Dec16(Reg16),
    AddHl(Reg16),
    /// `ADD SP, e8`
    AddSpOffset,
    Rotate(RotateA),
    Jr(Option<Condition>),
    Jp(Option<Condition>),
    /// `JP HL`
    JpHl,
    Call(Option<Condition>),
    Ret(Option<Condition>),
    Reti,
    /// `RST n`; holds the target vector (0x00, 0x08, ..., 0x38).
    Rst(u8),
    Push(StackPair),
    Pop(StackPair),
    /// The 0xCB prefix byte.
    Prefix,
    /// An opcode hole.
    Illegal(u8),
}

lazy_static! {
    static ref DECODE_TABLE: [Instruction; 256] = {
        let mut table = [Instruction::Nop; 256];
        for (opcode, slot) in table.iter_mut().enumerate() {
            *slot = Instruction::decode(opcode as u8);
        }
        table
    };
}

impl Instruction {
    /// Look up the precomputed decoding of `opcode`.
    #[inline]
    pub fn from_opcode(opcode: u8) -> Self {
        DECODE_TABLE[opcode as usize]
    }

    /// Decode `opcode` from scratch. Prefer [`Instruction::from_opcode`] on
    /// hot paths.
    pub fn decode(opcode: u8) -> Self {
        let y = (opcode >> 3) & 0x07;
        let z = opcode & 0x07;
        let p = (opcode >> 4) & 0x03;
        let cc = Condition::from_index(y);

        match opcode {
            0x00 => Instruction::Nop,
            0x10 => Instruction::Stop,
            0x76 => Instruction::Halt,
            0xF3 => Instruction::Di,
            0xFB => Instruction::Ei,
            0x27 => Instruction::Daa,
            0x2F => Instruction::Cpl,
            0x37 => Instruction::Scf,
            0x3F => Instruction::Ccf,

            // 16-bit immediate loads.
            0x01 | 0x11 | 0x21 | 0x31 => Instruction::LdRrImm(Reg16::from_index(p)),

            // LD (BC/DE/HL±), A
            0x02 | 0x12 | 0x22 | 0x32 => Instruction::LdIndA(Indirect::from_index(p)),

            // LD A, (BC/DE/HL±)
            0x0A | 0x1A | 0x2A | 0x3A => Instruction::LdAInd(Indirect::from_index(p)),

            0x03 | 0x13 | 0x23 | 0x33 => Instruction::Inc16(Reg16::from_index(p)),
            0x0B | 0x1B | 0x2B | 0x3B => Instruction::Dec16(Reg16::from_index(p)),
            0x09 | 0x19 | 0x29 | 0x39 => Instruction::AddHl(Reg16::from_index(p)),

            0x04 | 0x0C | 0x14 | 0x1C | 0x24 | 0x2C | 0x34 | 0x3C => {
                Instruction::Inc8(Reg8::from_index(y))
            }
            0x05 | 0x0D | 0x15 | 0x1D | 0x25 | 0x2D | 0x35 | 0x3D => {
                Instruction::Dec8(Reg8::from_index(y))
            }
            0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x36 | 0x3E => {
                Instruction::LdRImm(Reg8::from_index(y))
            }

            0x07 => Instruction::Rotate(RotateA::Rlca),
            0x0F => Instruction::Rotate(RotateA::Rrca),
            0x17 => Instruction::Rotate(RotateA::Rla),
            0x1F => Instruction::Rotate(RotateA::Rra),

            0x08 => Instruction::LdAbsSp,
            0x18 => Instruction::Jr(None),
            0x20 | 0x28 | 0x30 | 0x38 => Instruction::Jr(Some(Condition::from_index(y - 4))),

            // 8-bit register/memory transfers; 0x76 (HALT) is matched above.
            0x40..=0x7F => Instruction::LdRR {
                dst: Reg8::from_index(y),
                src: Reg8::from_index(z),
            },

            0x80..=0xBF => Instruction::Alu(AluOp::from_index(y), Reg8::from_index(z)),
            0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE => {
                Instruction::AluImm(AluOp::from_index(y))
            }

            0xC0 | 0xC8 | 0xD0 | 0xD8 => Instruction::Ret(Some(cc)),
            0xC9 => Instruction::Ret(None),
            0xD9 => Instruction::Reti,
            0xC2 | 0xCA | 0xD2 | 0xDA => Instruction::Jp(Some(cc)),
            0xC3 => Instruction::Jp(None),
            0xE9 => Instruction::JpHl,
            0xC4 | 0xCC | 0xD4 | 0xDC => Instruction::Call(Some(cc)),
            0xCD => Instruction::Call(None),
            0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF => {
                Instruction::Rst(opcode & 0x38)
            }

            0xC1 | 0xD1 | 0xE1 | 0xF1 => Instruction::Pop(StackPair::from_index(p)),
            0xC5 | 0xD5 | 0xE5 | 0xF5 => Instruction::Push(StackPair::from_index(p)),

            0xE0 => Instruction::LdhImmA,
            0xF0 => Instruction::LdhAImm,
            0xE2 => Instruction::LdhCA,
            0xF2 => Instruction::LdhAC,
            0xEA => Instruction::LdAbsA,
            0xFA => Instruction::LdAAbs,
            0xE8 => Instruction::AddSpOffset,
            0xF8 => Instruction::LdHlSpOffset,
            0xF9 => Instruction::LdSpHl,

            0xCB => Instruction::Prefix,

            // Pandocs "opcode holes": D3, DB, DD, E3, E4, EB, EC, ED, F4, FC, FD.
            _ => Instruction::Illegal(opcode),
        }
    }

    /// Encoded size in bytes, opcode included.
    pub fn length(&self) -> u8 {
        match self {
            Instruction::LdRrImm(_)
            | Instruction::LdAbsA
            | Instruction::LdAAbs
            | Instruction::LdAbsSp
            | Instruction::Jp(_)
            | Instruction::Call(_) => 3,
            Instruction::LdRImm(_)
            | Instruction::LdhImmA
            | Instruction::LdhAImm
            | Instruction::LdHlSpOffset
            | Instruction::AluImm(_)
            | Instruction::AddSpOffset
            | Instruction::Jr(_)
            | Instruction::Stop
            | Instruction::Prefix => 2,
            _ => 1,
        }
    }

    pub fn is_illegal(&self) -> bool {
        matches!(self, Instruction::Illegal(_))
    }
}

impl fmt::Display for Reg8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Reg8::B => "B",
            Reg8::C => "C",
            Reg8::D => "D",
            Reg8::E => "E",
            Reg8::H => "H",
            Reg8::L => "L",
            Reg8::HlInd => "[HL]",
            Reg8::A => "A",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Reg16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Reg16::BC => "BC",
            Reg16::DE => "DE",
            Reg16::HL => "HL",
            Reg16::SP => "SP",
        };
        f.write_str(name)
    }
}

impl fmt::Display for StackPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StackPair::BC => "BC",
            StackPair::DE => "DE",
            StackPair::HL => "HL",
            StackPair::AF => "AF",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Indirect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Indirect::BC => "[BC]",
            Indirect::DE => "[DE]",
            Indirect::HlInc => "[HL+]",
            Indirect::HlDec => "[HL-]",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Condition::NZ => "NZ",
            Condition::Z => "Z",
            Condition::NC => "NC",
            Condition::C => "C",
        };
        f.write_str(name)
    }
}

impl fmt::Display for AluOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AluOp::Add => "ADD",
            AluOp::Adc => "ADC",
            AluOp::Sub => "SUB",
            AluOp::Sbc => "SBC",
            AluOp::And => "AND",
            AluOp::Xor => "XOR",
            AluOp::Or => "OR",
            AluOp::Cp => "CP",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Instruction {
    /// Assembler mnemonic, with immediates shown as `n8`, `n16`, `a8`,
    /// `a16` and `e8`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Nop => f.write_str("NOP"),
            Instruction::Stop => f.write_str("STOP"),
            Instruction::Halt => f.write_str("HALT"),
            Instruction::Di => f.write_str("DI"),
            Instruction::Ei => f.write_str("EI"),
            Instruction::Daa => f.write_str("DAA"),
            Instruction::Cpl => f.write_str("CPL"),
            Instruction::Scf => f.write_str("SCF"),
            Instruction::Ccf => f.write_str("CCF"),
            Instruction::LdRR { dst, src } => write!(f, "LD {dst}, {src}"),
            Instruction::LdRImm(r) => write!(f, "LD {r}, n8"),
            Instruction::LdRrImm(rr) => write!(f, "LD {rr}, n16"),
            Instruction::LdIndA(ind) => write!(f, "LD {ind}, A"),
            Instruction::LdAInd(ind) => write!(f, "LD A, {ind}"),
            Instruction::LdhImmA => f.write_str("LDH [a8], A"),
            Instruction::LdhAImm => f.write_str("LDH A, [a8]"),
            Instruction::LdhCA => f.write_str("LDH [C], A"),
            Instruction::LdhAC => f.write_str("LDH A, [C]"),
            Instruction::LdAbsA => f.write_str("LD [a16], A"),
            Instruction::LdAAbs => f.write_str("LD A, [a16]"),
            Instruction::LdAbsSp => f.write_str("LD [a16], SP"),
            Instruction::LdSpHl => f.write_str("LD SP, HL"),
            Instruction::LdHlSpOffset => f.write_str("LD HL, SP+e8"),
            Instruction::Alu(op, r) => write!(f, "{op} A, {r}"),
            Instruction::AluImm(op) => write!(f, "{op} A, n8"),
            Instruction::Inc8(r) => write!(f, "INC {r}"),
            Instruction::Dec8(r) => write!(f, "DEC {r}"),
            Instruction::Inc16(rr) => write!(f, "INC {rr}"),
            Instruction::Dec16(rr) => write!(f, "DEC {rr}"),
            Instruction::AddHl(rr) => write!(f, "ADD HL, {rr}"),
            Instruction::AddSpOffset => f.write_str("ADD SP, e8"),
            Instruction::Rotate(RotateA::Rlca) => f.write_str("RLCA"),
            Instruction::Rotate(RotateA::Rrca) => f.write_str("RRCA"),
            Instruction::Rotate(RotateA::Rla) => f.write_str("RLA"),
            Instruction::Rotate(RotateA::Rra) => f.write_str("RRA"),
            Instruction::Jr(None) => f.write_str("JR e8"),
            Instruction::Jr(Some(cc)) => write!(f, "JR {cc}, e8"),
            Instruction::Jp(None) => f.write_str("JP a16"),
            Instruction::Jp(Some(cc)) => write!(f, "JP {cc}, a16"),
            Instruction::JpHl => f.write_str("JP HL"),
            Instruction::Call(None) => f.write_str("CALL a16"),
            Instruction::Call(Some(cc)) => write!(f, "CALL {cc}, a16"),
            Instruction::Ret(None) => f.write_str("RET"),
            Instruction::Ret(Some(cc)) => write!(f, "RET {cc}"),
            Instruction::Reti => f.write_str("RETI"),
            Instruction::Rst(vector) => write!(f, "RST ${vector:02X}"),
            Instruction::Push(rr) => write!(f, "PUSH {rr}"),
            Instruction::Pop(rr) => write!(f, "POP {rr}"),
            Instruction::Prefix => f.write_str("PREFIX CB"),
            Instruction::Illegal(opcode) => write!(f, "ILLEGAL ${opcode:02X}"),
        }
    }
}
