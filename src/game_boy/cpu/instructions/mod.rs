use core::fmt;

pub use arithmetic::{Arithmetic, Arithmetic8, Arithmetic16};
pub use bit_flag::BitFlag;
pub use bit_shift::BitShift;
pub use bitwise::{Bitwise, Logic};
pub use control::Control;
pub use jump::Jump;
pub use load::Load;
pub use parameters::*;
pub use stack::Stack;

mod arithmetic;
mod bit_flag;
pub mod bit_shift;
mod bitwise;
mod control;
pub mod jump;
mod load;
mod parameters;
mod stack;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Instruction {
    Load(Load),
    Arithmetic(Arithmetic),
    Bitwise(Bitwise),
    BitFlag(BitFlag),
    BitShift(BitShift),
    Jump(Jump),
    Stack(Stack),
    Control(Control),
    DecimalAdjustAccumulator,
    Invalid(u8),
}

impl Instruction {
    /// Decodes one instruction, pulling the opcode and any operands from
    /// `ops`. Returns `None` only if `ops` runs dry mid-instruction.
    pub fn decode(ops: &mut impl Iterator<Item = u8>) -> Option<Self> {
        let op = ops.next()?;

        Some(match op {
            0x27 => Self::DecimalAdjustAccumulator,
            0xcb => {
                let op = ops.next()?;
                match op {
                    0x00..=0x3f => Self::BitShift(BitShift::decode(op)),
                    _ => Self::BitFlag(BitFlag::decode(op)),
                }
            }
            _ => {
                if let Some(control) = Control::decode(op, ops) {
                    Self::Control(control)
                } else if let Some(load) = Load::decode(op, ops) {
                    Self::Load(load)
                } else if let Some(arithmetic) = Arithmetic::decode(op, ops) {
                    Self::Arithmetic(arithmetic)
                } else if let Some(bitwise) = Bitwise::decode(op, ops) {
                    Self::Bitwise(bitwise)
                } else if let Some(bit_shift) = BitShift::decode_rotate_a(op) {
                    Self::BitShift(bit_shift)
                } else if let Some(jump) = Jump::decode(op, ops) {
                    Self::Jump(jump)
                } else if let Some(stack) = Stack::decode(op, ops) {
                    Self::Stack(stack)
                } else {
                    Self::Invalid(op)
                }
            }
        })
    }

    /// How many bytes were consumed from the iterator during decode.
    pub fn fetch_byte_count(&self) -> u16 {
        match self {
            Self::DecimalAdjustAccumulator | Self::Invalid(_) => 1,
            Self::Control(control) => control.byte_count(),

            Self::BitShift(BitShift::RotateA(..)) => 1,
            Self::BitShift(_) | Self::BitFlag(_) => 2,

            Self::Load(Load::Load8(target, source)) => {
                1 + target.operand_byte_count() + source.operand_byte_count()
            }
            Self::Load(Load::Load16(target, source)) => {
                1 + target.operand_byte_count() + source.operand_byte_count()
            }

            Self::Arithmetic(Arithmetic::Arithmetic8(arithmetic)) => {
                1 + match arithmetic {
                    Arithmetic8::Increment(target) | Arithmetic8::Decrement(target) => {
                        target.operand_byte_count()
                    }
                    Arithmetic8::AddA(source)
                    | Arithmetic8::SubtractA(source)
                    | Arithmetic8::AddACarry(source)
                    | Arithmetic8::SubtractACarry(source)
                    | Arithmetic8::CompareA(source) => source.operand_byte_count(),
                }
            }
            Self::Arithmetic(Arithmetic::Arithmetic16(_)) => 1,

            Self::Bitwise(Bitwise::Logic(_, source)) => 1 + source.operand_byte_count(),
            Self::Bitwise(Bitwise::ComplementA) => 1,

            Self::Jump(Jump::Jump(_, location) | Jump::Call(_, location)) => {
                1 + location.operand_byte_count()
            }
            Self::Jump(_) => 1,

            Self::Stack(Stack::Adjust(_)) => 2,
            Self::Stack(_) => 1,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load(load) => load.fmt(f),
            Self::Arithmetic(arithmetic) => arithmetic.fmt(f),
            Self::Bitwise(bitwise) => bitwise.fmt(f),
            Self::BitFlag(bit_flag) => bit_flag.fmt(f),
            Self::BitShift(bit_shift) => bit_shift.fmt(f),
            Self::Jump(jump) => jump.fmt(f),
            Self::Stack(stack) => stack.fmt(f),
            Self::Control(control) => control.fmt(f),
            Self::DecimalAdjustAccumulator => f.write_str("daa"),
            Self::Invalid(op) => write!(f, "invalid ${:02x}", op),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(bytes: &[u8]) -> Instruction {
        Instruction::decode(&mut bytes.iter().copied()).unwrap()
    }

    #[test]
    fn every_primary_opcode_decodes_to_its_encoded_length() {
        let invalid = [
            0xd3, 0xdb, 0xdd, 0xe3, 0xe4, 0xeb, 0xec, 0xed, 0xf4, 0xfc, 0xfd,
        ];

        for op in 0..=0xffu8 {
            let bytes = [op, 0x12, 0x34];
            let mut ops = bytes.iter().copied();
            let instruction = Instruction::decode(&mut ops).unwrap();
            let consumed = 3 - ops.count() as u16;

            if invalid.contains(&op) {
                assert_eq!(instruction, Instruction::Invalid(op), "opcode {op:02x}");
            } else {
                assert_ne!(instruction, Instruction::Invalid(op), "opcode {op:02x}");
            }
            assert_eq!(
                instruction.fetch_byte_count(),
                consumed,
                "opcode {op:02x} ({instruction})"
            );
        }
    }

    #[test]
    fn register_field_selects_memory_at_index_six() {
        assert_eq!(decode(&[0x7e]).to_string(), "ld a, [hl]");
        assert_eq!(decode(&[0x70]).to_string(), "ld [hl], b");
        assert_eq!(decode(&[0x41]).to_string(), "ld b, c");
    }

    #[test]
    fn disassembles_extended_table() {
        assert_eq!(decode(&[0xcb, 0x7c]).to_string(), "bit 7, h");
        assert_eq!(decode(&[0xcb, 0x86]).to_string(), "res 0, [hl]");
        assert_eq!(decode(&[0xcb, 0xff]).to_string(), "set 7, a");
        assert_eq!(decode(&[0xcb, 0x11]).to_string(), "rl c");
        assert_eq!(decode(&[0xcb, 0x37]).to_string(), "swap a");
    }

    #[test]
    fn disassembles_control_flow() {
        assert_eq!(decode(&[0x20, 0xfe]).to_string(), "jr nz, -2");
        assert_eq!(decode(&[0xc3, 0x50, 0x01]).to_string(), "jp $0150");
        assert_eq!(decode(&[0xdc, 0x00, 0x40]).to_string(), "call c, $4000");
        assert_eq!(decode(&[0xef]).to_string(), "rst $28");
        assert_eq!(decode(&[0x2a]).to_string(), "ld a, [hl+]");
    }
}
