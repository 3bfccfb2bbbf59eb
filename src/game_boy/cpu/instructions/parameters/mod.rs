use core::fmt;

use crate::game_boy::cpu::Register16;

pub use parameters_8::{Source8, Target8};
pub use parameters_16::{Source16, Target16};

mod parameters_8;
mod parameters_16;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Address {
    Fixed(u16),
    High(u8),
    HighPlusC,
    Dereference(Register16),
    DereferenceHlAndIncrement,
    DereferenceHlAndDecrement,
}

impl Address {
    pub fn fixed(ops: &mut impl Iterator<Item = u8>) -> Option<Self> {
        Some(Self::Fixed(u16::from_le_bytes([ops.next()?, ops.next()?])))
    }

    pub fn high(ops: &mut impl Iterator<Item = u8>) -> Option<Self> {
        Some(Self::High(ops.next()?))
    }

    pub fn deref_hl() -> Self {
        Self::Dereference(Register16::Hl)
    }

    /// The 2-bit indirect field of `ld [rr], a` and `ld a, [rr]`.
    pub fn indirect(index: u8) -> Self {
        match index & 0b11 {
            0 => Self::Dereference(Register16::Bc),
            1 => Self::Dereference(Register16::De),
            2 => Self::DereferenceHlAndIncrement,
            _ => Self::DereferenceHlAndDecrement,
        }
    }

    /// Operand bytes this addressing mode takes from the instruction stream.
    pub fn operand_byte_count(&self) -> u16 {
        match self {
            Self::Fixed(_) => 2,
            Self::High(_) => 1,
            Self::HighPlusC
            | Self::Dereference(_)
            | Self::DereferenceHlAndIncrement
            | Self::DereferenceHlAndDecrement => 0,
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(address) => write!(f, "[${:04x}]", address),
            Self::High(offset) => write!(f, "[$ff{:02x}]", offset),
            Self::HighPlusC => write!(f, "[$ff00+c]"),
            Self::Dereference(register) => write!(f, "[{}]", register),
            Self::DereferenceHlAndIncrement => write!(f, "[hl+]"),
            Self::DereferenceHlAndDecrement => write!(f, "[hl-]"),
        }
    }
}
