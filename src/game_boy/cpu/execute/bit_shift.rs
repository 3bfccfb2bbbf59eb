use super::OpResult;
use crate::game_boy::{
    MemoryMapped,
    cpu::{
        Cpu, Flags,
        cycles::Cycles,
        instructions::{
            BitShift,
            bit_shift::{Carry, Direction},
        },
    },
};

impl Cpu {
    pub fn execute_bit_shift(&mut self, instruction: BitShift, memory: &MemoryMapped) -> OpResult {
        match instruction {
            BitShift::RotateA(direction, carry) => {
                let (result, carry_out) = self.rotate(direction, carry, self.a);
                self.a = result;
                // Unlike the cb-prefixed rotates, zero is always cleared
                self.flags = if carry_out {
                    Flags::CARRY
                } else {
                    Flags::empty()
                };
                OpResult::cycles(1)
            }

            BitShift::Rotate(direction, carry, target) => {
                let (value, fetch_cycles) = self.peek8(target, memory);
                let (result, carry_out) = self.rotate(direction, carry, value);
                self.set_shift_flags(result, carry_out);
                self.set8(target, result)
                    .add_cycles(fetch_cycles + Cycles(2))
            }

            BitShift::ShiftArithmetical(direction, target) => {
                let (value, fetch_cycles) = self.peek8(target, memory);
                let (result, carry_out) = match direction {
                    Direction::Left => (value << 1, value & 0x80 != 0),
                    Direction::Right => ((value >> 1) | (value & 0x80), value & 0x01 != 0),
                };
                self.set_shift_flags(result, carry_out);
                self.set8(target, result)
                    .add_cycles(fetch_cycles + Cycles(2))
            }

            BitShift::ShiftRightLogical(target) => {
                let (value, fetch_cycles) = self.peek8(target, memory);
                let result = value >> 1;
                self.set_shift_flags(result, value & 0x01 != 0);
                self.set8(target, result)
                    .add_cycles(fetch_cycles + Cycles(2))
            }

            BitShift::Swap(target) => {
                let (value, fetch_cycles) = self.peek8(target, memory);
                let result = value.rotate_left(4);
                self.set_shift_flags(result, false);
                self.set8(target, result)
                    .add_cycles(fetch_cycles + Cycles(2))
            }
        }
    }

    fn rotate(&self, direction: Direction, carry: Carry, value: u8) -> (u8, bool) {
        let carry_in = self.flags.contains(Flags::CARRY) as u8;
        match (direction, carry) {
            (Direction::Left, Carry::SetOnly) => (value.rotate_left(1), value & 0x80 != 0),
            (Direction::Right, Carry::SetOnly) => (value.rotate_right(1), value & 0x01 != 0),
            (Direction::Left, Carry::Through) => ((value << 1) | carry_in, value & 0x80 != 0),
            (Direction::Right, Carry::Through) => {
                ((value >> 1) | (carry_in << 7), value & 0x01 != 0)
            }
        }
    }

    fn set_shift_flags(&mut self, result: u8, carry: bool) {
        self.flags = Flags::zero_if(result);
        self.flags.set(Flags::CARRY, carry);
    }
}
