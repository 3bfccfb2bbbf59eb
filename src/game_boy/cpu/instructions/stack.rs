use core::fmt;

use crate::game_boy::cpu::Register16;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Stack {
    Push(Register16),
    Pop(Register16),
    /// `add sp, e`.
    Adjust(i8),
}

impl Stack {
    pub fn decode(op: u8, ops: &mut impl Iterator<Item = u8>) -> Option<Self> {
        if op == 0xe8 {
            return Some(Self::Adjust(ops.next()? as i8));
        }
        if op < 0xc0 {
            return None;
        }

        let register = Register16::from_stack_index(op >> 4);
        match op & 0x0f {
            0x1 => Some(Self::Pop(register)),
            0x5 => Some(Self::Push(register)),
            _ => None,
        }
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Push(register) => write!(f, "push {register}"),
            Self::Pop(register) => write!(f, "pop {register}"),
            Self::Adjust(offset) => write!(f, "add sp, {offset}"),
        }
    }
}
