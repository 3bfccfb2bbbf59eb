use core::fmt;

use super::{Source8, Target8};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BitFlag {
    Check(u8, Source8),
    Set(u8, Target8),
    Unset(u8, Target8),
}

impl BitFlag {
    /// Decodes the 0x40-0xff part of the cb-prefixed table.
    pub fn decode(op: u8) -> Self {
        let bit = (op >> 3) & 0b111;
        match op >> 6 {
            1 => Self::Check(bit, Source8::from_index(op)),
            2 => Self::Unset(bit, Target8::from_index(op)),
            _ => Self::Set(bit, Target8::from_index(op)),
        }
    }
}

impl fmt::Display for BitFlag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Check(bit, source) => write!(f, "bit {}, {}", bit, source),
            Self::Set(bit, target) => write!(f, "set {}, {}", bit, target),
            Self::Unset(bit, target) => write!(f, "res {}, {}", bit, target),
        }
    }
}
