use core::fmt;

use crate::game_boy::cpu::Register16;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Target16 {
    Register(Register16),
    Memory(u16),
}

impl Target16 {
    pub fn memory(ops: &mut impl Iterator<Item = u8>) -> Option<Self> {
        Some(Self::Memory(u16::from_le_bytes([ops.next()?, ops.next()?])))
    }

    pub fn operand_byte_count(&self) -> u16 {
        match self {
            Self::Register(_) => 0,
            Self::Memory(_) => 2,
        }
    }
}

impl fmt::Display for Target16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Register(register) => register.fmt(f),
            Self::Memory(address) => write!(f, "[${:04x}]", address),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Source16 {
    Constant(u16),
    Register(Register16),
    StackPointerWithOffset(i8),
}

impl Source16 {
    pub fn constant(ops: &mut impl Iterator<Item = u8>) -> Option<Self> {
        Some(Self::Constant(u16::from_le_bytes([ops.next()?, ops.next()?])))
    }

    pub fn sp_with_offset(ops: &mut impl Iterator<Item = u8>) -> Option<Self> {
        Some(Self::StackPointerWithOffset(ops.next()? as i8))
    }

    pub fn operand_byte_count(&self) -> u16 {
        match self {
            Self::Constant(_) => 2,
            Self::Register(_) => 0,
            Self::StackPointerWithOffset(_) => 1,
        }
    }
}

impl fmt::Display for Source16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(value) => write!(f, "${:04x}", value),
            Self::Register(register) => register.fmt(f),
            Self::StackPointerWithOffset(offset) => write!(f, "sp{:+}", offset),
        }
    }
}
