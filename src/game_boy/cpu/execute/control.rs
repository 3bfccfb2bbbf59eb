use super::OpResult;
use crate::game_boy::{
    cpu::{Cpu, Flags, InterruptMasterEnable, cycles::Cycles, instructions::Control},
    interrupts::Interrupt,
};

impl Cpu {
    pub fn execute_control(&mut self, instruction: Control) -> OpResult {
        match instruction {
            Control::NoOperation => {}
            // No low power mode or joypad wake; treated as halt.
            Control::Stop | Control::Halt => self.halted = true,
            Control::DisableInterrupts => {
                self.interrupt_master_enable = InterruptMasterEnable::Disabled;
            }
            Control::EnableInterrupts => {
                if self.interrupt_master_enable == InterruptMasterEnable::Disabled {
                    self.interrupt_master_enable =
                        InterruptMasterEnable::EnableAfterNextInstruction;
                }
            }
            Control::SetCarry | Control::ComplementCarry => {
                let carry = instruction == Control::SetCarry
                    || !self.flags.contains(Flags::CARRY);
                self.flags.remove(Flags::NEGATIVE | Flags::HALF_CARRY);
                self.flags.set(Flags::CARRY, carry);
            }
        }

        OpResult::cycles(1)
    }

    /// Pushes the program counter and jumps to the interrupt's vector. The
    /// caller clears the request bit and master enable.
    pub fn dispatch_interrupt(&mut self, interrupt: Interrupt) -> OpResult {
        self.halted = false;
        let result = self.push(self.program_counter, Cycles(5));
        self.program_counter = interrupt.vector();
        result
    }
}
