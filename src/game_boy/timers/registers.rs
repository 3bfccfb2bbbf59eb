#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Register {
    Divider,
    Counter,
    Modulo,
    Control,
}

/// Clocks per counter increment, indexed by the low two bits of TAC.
const INTERVALS: [u32; 4] = [1024, 16, 64, 256];

/// TAC (0xff07). Only the low three bits are stored.
#[derive(Clone, Copy, Debug, Default)]
pub struct Control(u8);

impl Control {
    pub fn from_bits(value: u8) -> Self {
        Self(value & 0b111)
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn enabled(self) -> bool {
        self.0 & 0b100 != 0
    }

    pub fn interval(self) -> u32 {
        INTERVALS[(self.0 & 0b11) as usize]
    }
}
