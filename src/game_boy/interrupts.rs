use bitflags::bitflags;

use crate::error::ExecutionError;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Register {
    EnabledInterrupts,
    RequestedInterrupts,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Interrupt {
    VideoBetweenFrames,
    VideoStatus,
    Timer,
    Serial,
    Joypad,
}

impl From<Interrupt> for InterruptFlags {
    fn from(interrupt: Interrupt) -> Self {
        match interrupt {
            Interrupt::VideoBetweenFrames => InterruptFlags::VIDEO_BETWEEN_FRAMES,
            Interrupt::VideoStatus => InterruptFlags::VIDEO_STATUS,
            Interrupt::Timer => InterruptFlags::TIMER,
            Interrupt::Serial => InterruptFlags::SERIAL,
            Interrupt::Joypad => InterruptFlags::JOYPAD,
        }
    }
}

impl TryFrom<u8> for Interrupt {
    type Error = ExecutionError;

    /// Converts a signal index (the bit number in IE/IF) into an interrupt.
    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Interrupt::priority_order()
            .get(index as usize)
            .copied()
            .ok_or(ExecutionError::InvalidInterrupt(index))
    }
}

bitflags! {
    #[derive(Copy, Clone, PartialEq, Eq, Debug)]
    pub struct InterruptFlags: u8 {
        const JOYPAD               = 0b00010000;
        const SERIAL               = 0b00001000;
        const TIMER                = 0b00000100;
        const VIDEO_STATUS         = 0b00000010;
        const VIDEO_BETWEEN_FRAMES = 0b00000001;

        const _OTHER = !0;
    }
}

impl Interrupt {
    pub fn vector(&self) -> u16 {
        match self {
            Interrupt::VideoBetweenFrames => 0x40,
            Interrupt::VideoStatus => 0x48,
            Interrupt::Timer => 0x50,
            Interrupt::Serial => 0x58,
            Interrupt::Joypad => 0x60,
        }
    }

    /// Highest priority first, which is also bit order.
    pub fn priority_order() -> &'static [Self] {
        &[
            Interrupt::VideoBetweenFrames,
            Interrupt::VideoStatus,
            Interrupt::Timer,
            Interrupt::Serial,
            Interrupt::Joypad,
        ]
    }
}

#[derive(Clone, Debug)]
pub struct Registers {
    pub enabled: InterruptFlags,
    pub requested: InterruptFlags,
}

impl Registers {
    pub fn new() -> Self {
        Self {
            enabled: InterruptFlags::empty(),
            requested: InterruptFlags::empty(),
        }
    }

    pub fn enabled(&self, interrupt: Interrupt) -> bool {
        self.enabled.contains(interrupt.into())
    }

    pub fn requested(&self, interrupt: Interrupt) -> bool {
        self.requested.contains(interrupt.into())
    }

    /// The highest priority interrupt that is both enabled and requested.
    pub fn triggered(&self) -> Option<Interrupt> {
        Interrupt::priority_order()
            .iter()
            .copied()
            .find(|interrupt| self.enabled(*interrupt) && self.requested(*interrupt))
    }

    /// Whether anything would wake a halted cpu, regardless of master enable.
    pub fn pending(&self) -> bool {
        self.triggered().is_some()
    }

    pub fn request(&mut self, interrupt: Interrupt) {
        self.requested.insert(interrupt.into());
    }

    pub fn request_signal(&mut self, index: u8) -> Result<(), ExecutionError> {
        self.request(Interrupt::try_from(index)?);
        Ok(())
    }

    pub fn clear(&mut self, interrupt: Interrupt) {
        self.requested.remove(interrupt.into());
    }

    pub fn read_register(&self, register: Register) -> u8 {
        match register {
            Register::EnabledInterrupts => self.enabled.bits(),
            // Upper three bits are unused and read back as set
            Register::RequestedInterrupts => self.requested.bits() | 0xe0,
        }
    }

    pub fn write_register(&mut self, register: Register, value: u8) {
        match register {
            Register::EnabledInterrupts => self.enabled = InterruptFlags::from_bits_retain(value),
            Register::RequestedInterrupts => {
                self.requested = InterruptFlags::from_bits_retain(value & 0x1f)
            }
        }
    }
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}
