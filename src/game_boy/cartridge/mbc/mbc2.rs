use super::{read_fixed_rom, read_rom_bank};

const RAM_SIZE: usize = 0x200;

/// Up to 16 rom banks and 512 half-bytes of ram on the controller itself.
#[derive(Clone, Debug)]
pub struct Mbc2 {
    ram_enabled: bool,
    bank: u8,
}

impl Mbc2 {
    pub fn new() -> Self {
        Self {
            ram_enabled: false,
            bank: 1,
        }
    }

    pub fn rom_bank(&self) -> usize {
        self.bank as usize
    }

    pub fn ram_enabled(&self) -> bool {
        self.ram_enabled
    }

    pub fn read(&self, rom: &[u8], ram: &[u8], address: u16) -> u8 {
        match address {
            0x0000..=0x3fff => read_fixed_rom(rom, address),
            0x4000..=0x7fff => read_rom_bank(rom, self.rom_bank(), address),
            // Only the low nibble is stored; the rest of the window echoes it
            0xa000..=0xbfff if self.ram_enabled => {
                ram[(address as usize - 0xa000) % RAM_SIZE] | 0xf0
            }
            _ => 0xff,
        }
    }

    pub fn write(&mut self, ram: &mut [u8], address: u16, value: u8) {
        match address {
            0x0000..=0x1fff => {
                // Writes with address bit 4 set are ignored here
                if address & 0x0010 != 0 {
                    return;
                }
                match value & 0xf {
                    0xa => self.ram_enabled = true,
                    0x0 => self.ram_enabled = false,
                    _ => {}
                }
            }
            0x2000..=0x3fff => {
                self.bank = (value & 0xf).max(1);
                log::debug!("mbc2: rom bank {}", self.bank);
            }
            0xa000..=0xbfff if self.ram_enabled => {
                ram[(address as usize - 0xa000) % RAM_SIZE] = value & 0x0f;
            }
            _ => {}
        }
    }
}

impl Default for Mbc2 {
    fn default() -> Self {
        Self::new()
    }
}
