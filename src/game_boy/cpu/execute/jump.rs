use super::OpResult;
use crate::game_boy::{
    MemoryMapped,
    cpu::{
        Cpu, InterruptMasterEnable, Register16,
        cycles::Cycles,
        instructions::{Jump, jump::Location},
    },
};

impl Cpu {
    pub fn execute_jump(&mut self, instruction: Jump, memory: &MemoryMapped) -> OpResult {
        match instruction {
            Jump::Jump(condition, location) => {
                let (address, address_cycles) = self.fetch_jump_address(location);

                if self.check_condition(condition) {
                    self.program_counter = address;
                    OpResult::cycles(1).add_cycles(address_cycles)
                } else {
                    OpResult(address_cycles, None)
                }
            }

            Jump::Call(condition, location) => {
                let (address, _) = self.fetch_jump_address(location);

                if self.check_condition(condition) {
                    let result = self.push(self.program_counter, Cycles(6));
                    self.program_counter = address;
                    result
                } else {
                    OpResult::cycles(3)
                }
            }

            Jump::Return(None) => {
                self.program_counter = self.pop(memory);
                OpResult::cycles(4)
            }

            Jump::Return(condition) => {
                if self.check_condition(condition) {
                    self.program_counter = self.pop(memory);
                    OpResult::cycles(5)
                } else {
                    OpResult::cycles(2)
                }
            }

            Jump::ReturnAndEnableInterrupts => {
                self.program_counter = self.pop(memory);
                self.interrupt_master_enable = InterruptMasterEnable::Enabled;
                OpResult::cycles(4)
            }

            Jump::Restart(address) => {
                let result = self.push(self.program_counter, Cycles(4));
                self.program_counter = address as u16;
                result
            }
        }
    }

    fn fetch_jump_address(&self, location: Location) -> (u16, Cycles) {
        match location {
            Location::Fixed(address) => (address, Cycles(3)),
            Location::Relative(offset) => (
                self.program_counter.wrapping_add_signed(offset as i16),
                Cycles(2),
            ),
            Location::RegisterHl => (self.get_register16(Register16::Hl), Cycles(0)),
        }
    }
}
