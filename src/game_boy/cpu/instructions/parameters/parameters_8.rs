use core::fmt;

use crate::game_boy::cpu::{Register8, instructions::Address};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Target8 {
    Register(Register8),
    Memory(Address),
}

impl Target8 {
    pub fn a() -> Self {
        Self::Register(Register8::A)
    }

    pub fn deref_hl() -> Self {
        Self::Memory(Address::deref_hl())
    }

    /// Decodes the 3-bit register field shared by most of the opcode table:
    /// b, c, d, e, h, l, [hl], a.
    pub fn from_index(index: u8) -> Self {
        match index & 0b111 {
            0 => Self::Register(Register8::B),
            1 => Self::Register(Register8::C),
            2 => Self::Register(Register8::D),
            3 => Self::Register(Register8::E),
            4 => Self::Register(Register8::H),
            5 => Self::Register(Register8::L),
            6 => Self::deref_hl(),
            _ => Self::a(),
        }
    }

    pub fn operand_byte_count(&self) -> u16 {
        match self {
            Self::Register(_) => 0,
            Self::Memory(address) => address.operand_byte_count(),
        }
    }
}

impl fmt::Display for Target8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Register(register) => register.fmt(f),
            Self::Memory(address) => address.fmt(f),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Source8 {
    Constant(u8),
    Register(Register8),
    Memory(Address),
}

impl Source8 {
    pub fn a() -> Self {
        Self::Register(Register8::A)
    }

    pub fn constant(ops: &mut impl Iterator<Item = u8>) -> Option<Self> {
        Some(Self::Constant(ops.next()?))
    }

    pub fn from_index(index: u8) -> Self {
        match Target8::from_index(index) {
            Target8::Register(register) => Self::Register(register),
            Target8::Memory(address) => Self::Memory(address),
        }
    }

    pub fn operand_byte_count(&self) -> u16 {
        match self {
            Self::Constant(_) => 1,
            Self::Register(_) => 0,
            Self::Memory(address) => address.operand_byte_count(),
        }
    }
}

impl fmt::Display for Source8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(value) => write!(f, "${:02x}", value),
            Self::Register(register) => register.fmt(f),
            Self::Memory(address) => address.fmt(f),
        }
    }
}
