use bitflags::bitflags;

use crate::game_boy::interrupts::Interrupt;

// Eight bits at 8192Hz
const TRANSFER_CLOCKS: u32 = 4096;

/// Serial port with nothing attached to the other end. Outgoing bytes are
/// captured so test programs that report over serial can be observed.
#[derive(Clone, Debug)]
pub struct Registers {
    pub data: u8,
    pub control: Control,
    clocks_remaining: u32,
    output: Vec<u8>,
}

impl Registers {
    pub fn new() -> Self {
        Registers {
            data: 0,
            control: Control::from_bits_retain(0x7e),
            clocks_remaining: 0,
            output: Vec::new(),
        }
    }

    pub fn read_register(&self, register: Register) -> u8 {
        match register {
            Register::Data => self.data,
            Register::Control => self.control.bits() | 0x7e,
        }
    }

    pub fn write_register(&mut self, register: Register, value: u8) {
        match register {
            Register::Data => self.data = value,
            Register::Control => {
                self.control = Control::from_bits_retain(value);
                self.start_transfer();
            }
        }
    }

    fn start_transfer(&mut self) {
        if self
            .control
            .contains(Control::ENABLE | Control::INTERNAL_CLOCK)
        {
            self.output.push(self.data);
            self.clocks_remaining = TRANSFER_CLOCKS;
        }
    }

    pub fn step(&mut self, clocks: u32) -> Option<Interrupt> {
        if self.clocks_remaining == 0 {
            return None;
        }

        self.clocks_remaining = self.clocks_remaining.saturating_sub(clocks);
        if self.clocks_remaining == 0 {
            // Nothing connected, so every bit shifted in is a 1
            self.data = 0xff;
            self.control.remove(Control::ENABLE);
            Some(Interrupt::Serial)
        } else {
            None
        }
    }

    /// Takes every byte sent since the last drain. Nothing is discarded
    /// until then, so a long running program that reports over serial
    /// should be drained regularly.
    pub fn drain_output(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.output)
    }
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Register {
    Data,
    Control,
}

bitflags! {
    #[derive(Copy, Clone, Debug)]
    pub struct Control: u8 {
        const ENABLE         = 0b10000000;
        const INTERNAL_CLOCK = 0b00000001;

        const _OTHER = !0;
    }
}
