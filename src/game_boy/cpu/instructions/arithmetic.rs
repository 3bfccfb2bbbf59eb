use core::fmt;

use crate::game_boy::cpu::{
    Register16,
    instructions::{Source8, Target8},
};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Arithmetic {
    Arithmetic8(Arithmetic8),
    Arithmetic16(Arithmetic16),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Arithmetic8 {
    Increment(Target8),
    Decrement(Target8),
    AddA(Source8),
    SubtractA(Source8),
    AddACarry(Source8),
    SubtractACarry(Source8),
    CompareA(Source8),
}

impl From<Arithmetic8> for Arithmetic {
    fn from(arithmetic: Arithmetic8) -> Self {
        Arithmetic::Arithmetic8(arithmetic)
    }
}

impl Arithmetic8 {
    /// Accumulator operations selected by bits 3-5 of the opcode. and/xor/or
    /// share the encoding but decode as bitwise instructions.
    fn accumulator(operation: u8, source: Source8) -> Option<Self> {
        Some(match operation & 0b111 {
            0 => Self::AddA(source),
            1 => Self::AddACarry(source),
            2 => Self::SubtractA(source),
            3 => Self::SubtractACarry(source),
            7 => Self::CompareA(source),
            _ => return None,
        })
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Arithmetic16 {
    Increment(Register16),
    Decrement(Register16),
    AddHl(Register16),
}

impl From<Arithmetic16> for Arithmetic {
    fn from(arithmetic: Arithmetic16) -> Self {
        Arithmetic::Arithmetic16(arithmetic)
    }
}

impl Arithmetic {
    pub fn decode(op: u8, ops: &mut impl Iterator<Item = u8>) -> Option<Self> {
        Some(match op {
            0x04 | 0x0c | 0x14 | 0x1c | 0x24 | 0x2c | 0x34 | 0x3c => {
                Arithmetic8::Increment(Target8::from_index(op >> 3)).into()
            }
            0x05 | 0x0d | 0x15 | 0x1d | 0x25 | 0x2d | 0x35 | 0x3d => {
                Arithmetic8::Decrement(Target8::from_index(op >> 3)).into()
            }
            0x80..=0xbf => Arithmetic8::accumulator(op >> 3, Source8::from_index(op))?.into(),
            0xc6 | 0xce | 0xd6 | 0xde | 0xfe => {
                Arithmetic8::accumulator(op >> 3, Source8::constant(ops)?)?.into()
            }

            0x03 | 0x13 | 0x23 | 0x33 => {
                Arithmetic16::Increment(Register16::from_pair_index(op >> 4)).into()
            }
            0x0b | 0x1b | 0x2b | 0x3b => {
                Arithmetic16::Decrement(Register16::from_pair_index(op >> 4)).into()
            }
            0x09 | 0x19 | 0x29 | 0x39 => {
                Arithmetic16::AddHl(Register16::from_pair_index(op >> 4)).into()
            }

            _ => return None,
        })
    }
}

impl fmt::Display for Arithmetic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Arithmetic::Arithmetic8(arithmetic) => match arithmetic {
                Arithmetic8::Increment(target) => write!(f, "inc {}", target),
                Arithmetic8::Decrement(target) => write!(f, "dec {}", target),
                Arithmetic8::AddA(source) => write!(f, "add a, {}", source),
                Arithmetic8::SubtractA(source) => write!(f, "sub a, {}", source),
                Arithmetic8::AddACarry(source) => write!(f, "adc a, {}", source),
                Arithmetic8::SubtractACarry(source) => write!(f, "sbc a, {}", source),
                Arithmetic8::CompareA(source) => write!(f, "cp a, {}", source),
            },
            Arithmetic::Arithmetic16(arithmetic) => match arithmetic {
                Arithmetic16::Increment(register) => write!(f, "inc {}", register),
                Arithmetic16::Decrement(register) => write!(f, "dec {}", register),
                Arithmetic16::AddHl(register) => write!(f, "add hl, {}", register),
            },
        }
    }
}
