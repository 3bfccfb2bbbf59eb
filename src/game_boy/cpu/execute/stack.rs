use super::OpResult;
use crate::game_boy::{
    MemoryMapped,
    cpu::{Cpu, cycles::Cycles, instructions::Stack},
};

impl Cpu {
    pub fn execute_stack(&mut self, instruction: Stack, memory: &MemoryMapped) -> OpResult {
        match instruction {
            Stack::Adjust(offset) => {
                self.stack_pointer = self.add_stack_pointer_offset(offset);
                OpResult::cycles(4)
            }
            Stack::Push(register) => self.push(self.get_register16(register), Cycles(4)),
            Stack::Pop(register) => {
                let value = self.pop(memory);
                self.set_register16(register, value);
                OpResult::cycles(3)
            }
        }
    }

    pub(super) fn push(&mut self, value: u16, cycles: Cycles) -> OpResult {
        self.stack_pointer = self.stack_pointer.wrapping_sub(2);
        OpResult::write16(self.stack_pointer, value, cycles)
    }

    pub(super) fn pop(&mut self, memory: &MemoryMapped) -> u16 {
        let low = memory.read(self.stack_pointer);
        let high = memory.read(self.stack_pointer.wrapping_add(1));
        self.stack_pointer = self.stack_pointer.wrapping_add(2);
        u16::from_le_bytes([low, high])
    }
}
