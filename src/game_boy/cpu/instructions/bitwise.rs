use core::fmt;

use super::Source8;

/// Accumulator logic operators, in opcode order from bit 3 of the
/// 0xa0..=0xb7 block.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Logic {
    And,
    Xor,
    Or,
}

impl Logic {
    fn from_opcode(op: u8) -> Option<Self> {
        match (op >> 3) & 0b111 {
            4 => Some(Self::And),
            5 => Some(Self::Xor),
            6 => Some(Self::Or),
            _ => None,
        }
    }

    pub fn apply(self, a: u8, value: u8) -> u8 {
        match self {
            Self::And => a & value,
            Self::Xor => a ^ value,
            Self::Or => a | value,
        }
    }

    fn mnemonic(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Xor => "xor",
            Self::Or => "or",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Bitwise {
    Logic(Logic, Source8),
    ComplementA,
}

impl Bitwise {
    pub fn decode(op: u8, ops: &mut impl Iterator<Item = u8>) -> Option<Self> {
        match op {
            0x2f => Some(Self::ComplementA),
            0xa0..=0xb7 => Some(Self::Logic(Logic::from_opcode(op)?, Source8::from_index(op))),
            0xe6 | 0xee | 0xf6 => {
                let logic = Logic::from_opcode(op)?;
                Some(Self::Logic(logic, Source8::constant(ops)?))
            }
            _ => None,
        }
    }
}

impl fmt::Display for Bitwise {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Logic(logic, source) => write!(f, "{} a, {}", logic.mnemonic(), source),
            Self::ComplementA => f.write_str("cpl"),
        }
    }
}
