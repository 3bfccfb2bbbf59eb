use core::fmt;

use super::{Address, Source8, Source16, Target8, Target16};
use crate::game_boy::cpu::Register16;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Load {
    Load8(Target8, Source8),
    Load16(Target16, Source16),
}

impl Load {
    pub fn decode(op: u8, ops: &mut impl Iterator<Item = u8>) -> Option<Self> {
        Some(match op {
            // 0x76 sits in the middle of this block but is halt
            0x40..=0x75 | 0x77..=0x7f => {
                Self::Load8(Target8::from_index(op >> 3), Source8::from_index(op))
            }
            0x06 | 0x0e | 0x16 | 0x1e | 0x26 | 0x2e | 0x36 | 0x3e => {
                Self::Load8(Target8::from_index(op >> 3), Source8::constant(ops)?)
            }
            0x02 | 0x12 | 0x22 | 0x32 => {
                Self::Load8(Target8::Memory(Address::indirect(op >> 4)), Source8::a())
            }
            0x0a | 0x1a | 0x2a | 0x3a => {
                Self::Load8(Target8::a(), Source8::Memory(Address::indirect(op >> 4)))
            }
            0xe0 => Self::Load8(Target8::Memory(Address::high(ops)?), Source8::a()),
            0xf0 => Self::Load8(Target8::a(), Source8::Memory(Address::high(ops)?)),
            0xe2 => Self::Load8(Target8::Memory(Address::HighPlusC), Source8::a()),
            0xf2 => Self::Load8(Target8::a(), Source8::Memory(Address::HighPlusC)),
            0xea => Self::Load8(Target8::Memory(Address::fixed(ops)?), Source8::a()),
            0xfa => Self::Load8(Target8::a(), Source8::Memory(Address::fixed(ops)?)),

            0x01 | 0x11 | 0x21 | 0x31 => Self::Load16(
                Target16::Register(Register16::from_pair_index(op >> 4)),
                Source16::constant(ops)?,
            ),
            0x08 => Self::Load16(
                Target16::memory(ops)?,
                Source16::Register(Register16::StackPointer),
            ),
            0xf8 => Self::Load16(
                Target16::Register(Register16::Hl),
                Source16::sp_with_offset(ops)?,
            ),
            0xf9 => Self::Load16(
                Target16::Register(Register16::StackPointer),
                Source16::Register(Register16::Hl),
            ),

            _ => return None,
        })
    }
}

impl fmt::Display for Load {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Load::Load8(target, source) => write!(f, "ld {}, {}", target, source),
            Load::Load16(target, source) => write!(f, "ld {}, {}", target, source),
        }
    }
}
