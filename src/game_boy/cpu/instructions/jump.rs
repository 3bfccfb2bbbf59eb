use core::fmt;

use crate::game_boy::cpu::Flags;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Jump {
    Jump(Option<Condition>, Location),
    Call(Option<Condition>, Location),
    Return(Option<Condition>),
    ReturnAndEnableInterrupts,
    Restart(u8),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Location {
    Fixed(u16),
    Relative(i8),
    RegisterHl,
}

impl Location {
    pub fn fixed(ops: &mut impl Iterator<Item = u8>) -> Option<Self> {
        Some(Self::Fixed(u16::from_le_bytes([ops.next()?, ops.next()?])))
    }

    pub fn relative(ops: &mut impl Iterator<Item = u8>) -> Option<Self> {
        Some(Self::Relative(ops.next()? as i8))
    }

    pub fn operand_byte_count(&self) -> u16 {
        match self {
            Self::Fixed(_) => 2,
            Self::Relative(_) => 1,
            Self::RegisterHl => 0,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Fixed(address) => write!(f, "${:04x}", address),
            Location::Relative(offset) => write!(f, "{:+}", offset),
            Location::RegisterHl => write!(f, "hl"),
        }
    }
}

/// Branch conditions, in the order of the two bit field at bits 3-4.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Condition {
    NotZero,
    Zero,
    NotCarry,
    Carry,
}

impl Condition {
    pub fn from_index(index: u8) -> Self {
        match index & 0b11 {
            0 => Self::NotZero,
            1 => Self::Zero,
            2 => Self::NotCarry,
            _ => Self::Carry,
        }
    }

    pub fn holds(self, flags: Flags) -> bool {
        match self {
            Self::NotZero => !flags.contains(Flags::ZERO),
            Self::Zero => flags.contains(Flags::ZERO),
            Self::NotCarry => !flags.contains(Flags::CARRY),
            Self::Carry => flags.contains(Flags::CARRY),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NotZero => "nz",
            Self::Zero => "z",
            Self::NotCarry => "nc",
            Self::Carry => "c",
        })
    }
}

impl Jump {
    pub fn decode(op: u8, ops: &mut impl Iterator<Item = u8>) -> Option<Self> {
        Some(match op {
            0x18 => Self::Jump(None, Location::relative(ops)?),
            0x20 | 0x28 | 0x30 | 0x38 => {
                Self::Jump(Some(Condition::from_index(op >> 3)), Location::relative(ops)?)
            }
            0xc3 => Self::Jump(None, Location::fixed(ops)?),
            0xc2 | 0xca | 0xd2 | 0xda => {
                Self::Jump(Some(Condition::from_index(op >> 3)), Location::fixed(ops)?)
            }
            0xe9 => Self::Jump(None, Location::RegisterHl),

            0xcd => Self::Call(None, Location::fixed(ops)?),
            0xc4 | 0xcc | 0xd4 | 0xdc => {
                Self::Call(Some(Condition::from_index(op >> 3)), Location::fixed(ops)?)
            }

            0xc9 => Self::Return(None),
            0xc0 | 0xc8 | 0xd0 | 0xd8 => Self::Return(Some(Condition::from_index(op >> 3))),
            0xd9 => Self::ReturnAndEnableInterrupts,

            0xc7 | 0xcf | 0xd7 | 0xdf | 0xe7 | 0xef | 0xf7 | 0xff => Self::Restart(op & 0x38),

            _ => return None,
        })
    }
}

fn condition_prefix(condition: &Option<Condition>) -> String {
    match condition {
        Some(condition) => format!("{}, ", condition),
        None => String::new(),
    }
}

impl fmt::Display for Jump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Jump(condition, location @ Location::Relative(_)) => {
                write!(f, "jr {}{}", condition_prefix(condition), location)
            }
            Self::Jump(condition, location) => {
                write!(f, "jp {}{}", condition_prefix(condition), location)
            }
            Self::Call(condition, location) => {
                write!(f, "call {}{}", condition_prefix(condition), location)
            }
            Self::Return(Some(condition)) => write!(f, "ret {}", condition),
            Self::Return(None) => write!(f, "ret"),
            Self::ReturnAndEnableInterrupts => write!(f, "reti"),
            Self::Restart(address) => write!(f, "rst ${:02x}", address),
        }
    }
}
