use super::OpResult;
use crate::game_boy::{
    MemoryMapped,
    cpu::{Cpu, cycles::Cycles, instructions::Load},
};

impl Cpu {
    /// One cycle for the opcode fetch, plus operand fetches and the store.
    pub fn execute_load(&mut self, instruction: Load, memory: &MemoryMapped) -> OpResult {
        let (stored, fetch_cycles) = match instruction {
            Load::Load8(target, source) => {
                let (value, cycles) = self.fetch8(source, memory);
                (self.set8(target, value), cycles)
            }
            Load::Load16(target, source) => {
                let (value, cycles) = self.fetch16(source);
                (self.set16(target, value), cycles)
            }
        };

        stored.add_cycles(Cycles(1) + fetch_cycles)
    }
}
