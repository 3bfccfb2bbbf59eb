use super::{
    GameBoy,
    cpu::{InterruptMasterEnable, cycles::Cycles, execute::OpResult, instructions::Instruction},
    interrupts::Interrupt,
    video::{ppu::FRAME_CLOCKS, screen::Screen},
};
use crate::error::ExecutionError;

impl Iterator for GameBoy {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.mapped.read(self.cpu.program_counter);
        self.cpu.program_counter = self.cpu.program_counter.wrapping_add(1);
        Some(value)
    }
}

impl GameBoy {
    /// Runs one instruction, one interrupt dispatch, or one idle cycle
    /// while halted, then advances the timers, serial port and video by
    /// the cycles it took.
    pub fn step(&mut self) -> Result<Cycles, ExecutionError> {
        let OpResult(cycles, memory_write) = if let Some(interrupt) = self.check_for_interrupt() {
            self.cpu.interrupt_master_enable = InterruptMasterEnable::Disabled;
            self.mapped.interrupts.clear(interrupt);
            log::trace!("dispatching {:?} interrupt", interrupt);

            self.cpu.dispatch_interrupt(interrupt)
        } else if self.cpu.halted {
            OpResult::cycles(1)
        } else {
            let program_counter = self.cpu.program_counter;
            let Some(instruction) = Instruction::decode(self) else {
                let error = ExecutionError::InvalidOpcode {
                    opcode: self.mapped.read(program_counter),
                    program_counter,
                };
                log::error!("{}", error);
                return Err(error);
            };
            log::trace!("{:04x}: {}", program_counter, instruction);

            self.cpu
                .execute(instruction, &self.mapped)
                .inspect_err(|error| log::error!("{}", error))?
        };

        if let Some(memory_write) = memory_write {
            self.mapped.write(memory_write);
        }

        self.step_peripherals(cycles);
        Ok(cycles)
    }

    fn step_peripherals(&mut self, cycles: Cycles) {
        let clocks = cycles.clocks();

        if let Some(interrupt) = self.mapped.timers.step(clocks) {
            self.mapped.interrupts.request(interrupt);
        }

        if let Some(interrupt) = self.mapped.serial.step(clocks) {
            self.mapped.interrupts.request(interrupt);
        }

        let requested = self.mapped.video.step(clocks);
        self.mapped.interrupts.requested |= requested;
    }

    /// Runs until a frame's worth of clocks has elapsed and returns the
    /// screen. Clocks the last instruction ran over by count towards the
    /// next frame.
    pub fn run_frame(&mut self) -> Result<&Screen, ExecutionError> {
        let mut clocks = self.frame_overrun;
        while clocks < FRAME_CLOCKS {
            clocks += self.step()?.clocks();
        }
        self.frame_overrun = clocks - FRAME_CLOCKS;

        Ok(self.screen())
    }

    /// Picks the interrupt to dispatch this step, if any. A pending
    /// interrupt always wakes a halted cpu, even when it can't be serviced.
    fn check_for_interrupt(&mut self) -> Option<Interrupt> {
        if self.cpu.halted && self.mapped.interrupts.pending() {
            self.cpu.halted = false;
        }

        match self.cpu.interrupt_master_enable {
            InterruptMasterEnable::EnableAfterNextInstruction => {
                self.cpu.interrupt_master_enable = InterruptMasterEnable::Enabled;
                None
            }
            InterruptMasterEnable::Enabled => self.mapped.interrupts.triggered(),
            InterruptMasterEnable::Disabled => None,
        }
    }
}
