use super::{ram_index, read_fixed_rom};

/// 32KiB of rom mapped straight through, with an optional single bank of
/// ram that is always accessible.
#[derive(Clone, Debug, Default)]
pub struct NoMbc;

impl NoMbc {
    pub fn new() -> Self {
        Self
    }

    pub fn read(&self, rom: &[u8], ram: &[u8], address: u16) -> u8 {
        match address {
            0x0000..=0x7fff => read_fixed_rom(rom, address),
            0xa000..=0xbfff => ram[ram_index(0, address)],
            _ => 0xff,
        }
    }

    pub fn write(&mut self, ram: &mut [u8], address: u16, value: u8) {
        if let 0xa000..=0xbfff = address {
            ram[ram_index(0, address)] = value;
        }
    }
}
