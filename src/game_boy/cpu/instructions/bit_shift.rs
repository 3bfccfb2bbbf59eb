use core::fmt;

use crate::game_boy::cpu::instructions::Target8;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BitShift {
    RotateA(Direction, Carry), // Register A optimised variants, not within cb prefix
    Rotate(Direction, Carry, Target8),
    ShiftArithmetical(Direction, Target8),
    ShiftRightLogical(Target8),
    Swap(Target8),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    Left,
    Right,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Left => write!(f, "l"),
            Self::Right => write!(f, "r"),
        }
    }
}

/// Whether a rotate passes through the carry flag (rl) or copies the
/// outgoing bit into it and around (rlc).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Carry {
    Through,
    SetOnly,
}

impl fmt::Display for Carry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Through => write!(f, ""),
            Self::SetOnly => write!(f, "c"),
        }
    }
}

impl BitShift {
    pub fn decode_rotate_a(op: u8) -> Option<Self> {
        Some(match op {
            0x07 => Self::RotateA(Direction::Left, Carry::SetOnly),
            0x0f => Self::RotateA(Direction::Right, Carry::SetOnly),
            0x17 => Self::RotateA(Direction::Left, Carry::Through),
            0x1f => Self::RotateA(Direction::Right, Carry::Through),
            _ => return None,
        })
    }

    /// Decodes the 0x00-0x3f quarter of the cb-prefixed table.
    pub fn decode(op: u8) -> Self {
        let target = Target8::from_index(op);
        match (op >> 3) & 0b111 {
            0 => Self::Rotate(Direction::Left, Carry::SetOnly, target),
            1 => Self::Rotate(Direction::Right, Carry::SetOnly, target),
            2 => Self::Rotate(Direction::Left, Carry::Through, target),
            3 => Self::Rotate(Direction::Right, Carry::Through, target),
            4 => Self::ShiftArithmetical(Direction::Left, target),
            5 => Self::ShiftArithmetical(Direction::Right, target),
            6 => Self::Swap(target),
            _ => Self::ShiftRightLogical(target),
        }
    }
}

impl fmt::Display for BitShift {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::RotateA(direction, carry) => write!(f, "r{}{}a", direction, carry),
            Self::Rotate(direction, carry, target) => {
                write!(f, "r{}{} {}", direction, carry, target)
            }
            Self::ShiftArithmetical(direction, target) => write!(f, "s{}a {}", direction, target),
            Self::ShiftRightLogical(target) => write!(f, "srl {}", target),
            Self::Swap(target) => write!(f, "swap {}", target),
        }
    }
}
