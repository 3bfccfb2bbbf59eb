use super::OpResult;
use crate::game_boy::{
    MemoryMapped,
    cpu::{Cpu, Flags, cycles::Cycles, instructions::BitFlag},
};

impl Cpu {
    pub fn execute_bit_flag(&mut self, instruction: BitFlag, memory: &MemoryMapped) -> OpResult {
        match instruction {
            BitFlag::Check(bit, source) => {
                let (value, fetch_cycles) = self.fetch8(source, memory);

                self.flags.set(Flags::ZERO, value & (1 << bit) == 0);
                self.flags.remove(Flags::NEGATIVE);
                self.flags.insert(Flags::HALF_CARRY);

                OpResult::cycles(2).add_cycles(fetch_cycles)
            }

            BitFlag::Set(bit, target) => {
                let (value, fetch_cycles) = self.peek8(target, memory);
                self.set8(target, value | (1 << bit))
                    .add_cycles(fetch_cycles + Cycles(2))
            }

            BitFlag::Unset(bit, target) => {
                let (value, fetch_cycles) = self.peek8(target, memory);
                self.set8(target, value & !(1 << bit))
                    .add_cycles(fetch_cycles + Cycles(2))
            }
        }
    }
}
