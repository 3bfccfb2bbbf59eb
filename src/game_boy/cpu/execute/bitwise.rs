use super::OpResult;
use crate::game_boy::{
    MemoryMapped,
    cpu::{
        Cpu, Flags,
        instructions::{Bitwise, Logic},
    },
};

impl Cpu {
    pub fn execute_bitwise(&mut self, instruction: Bitwise, memory: &MemoryMapped) -> OpResult {
        match instruction {
            Bitwise::Logic(logic, source) => {
                let (value, fetch_cycles) = self.fetch8(source, memory);
                self.a = logic.apply(self.a, value);
                self.flags = Flags::zero_if(self.a);
                if logic == Logic::And {
                    self.flags.insert(Flags::HALF_CARRY);
                }
                OpResult::cycles(1).add_cycles(fetch_cycles)
            }
            Bitwise::ComplementA => {
                self.a = !self.a;
                self.flags.insert(Flags::NEGATIVE | Flags::HALF_CARRY);
                OpResult::cycles(1)
            }
        }
    }
}
