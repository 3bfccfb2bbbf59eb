use super::{ram_index, read_fixed_rom, read_rom_bank};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BankingMode {
    Rom,
    Ram,
}

#[derive(Clone, Debug)]
pub struct Mbc1 {
    ram_enabled: bool,
    bank: u8,
    ram_bank: u8,
    banking_mode: BankingMode,
}

impl Mbc1 {
    pub fn new() -> Self {
        Self {
            ram_enabled: false,
            bank: 1,
            ram_bank: 0,
            banking_mode: BankingMode::Rom,
        }
    }

    pub fn rom_bank(&self) -> usize {
        self.bank as usize
    }

    pub fn ram_bank(&self) -> usize {
        self.ram_bank as usize
    }

    pub fn ram_enabled(&self) -> bool {
        self.ram_enabled
    }

    pub fn banking_mode(&self) -> BankingMode {
        self.banking_mode
    }

    pub fn read(&self, rom: &[u8], ram: &[u8], address: u16) -> u8 {
        match address {
            0x0000..=0x3fff => read_fixed_rom(rom, address),
            0x4000..=0x7fff => read_rom_bank(rom, self.rom_bank(), address),
            0xa000..=0xbfff if self.ram_enabled => ram[ram_index(self.ram_bank(), address)],
            _ => 0xff,
        }
    }

    pub fn write(&mut self, ram: &mut [u8], address: u16, value: u8) {
        match address {
            0x0000..=0x1fff => match value & 0xf {
                0xa => self.ram_enabled = true,
                0x0 => self.ram_enabled = false,
                _ => {}
            },
            0x2000..=0x3fff => {
                // The low five bits can never select bank 0
                let low = (value & 0x1f).max(1);
                self.bank = (self.bank & 0x60) | low;
                log::debug!("mbc1: rom bank {}", self.bank);
            }
            0x4000..=0x5fff => match self.banking_mode {
                BankingMode::Rom => {
                    self.bank = (self.bank & 0x1f) | ((value & 0b11) << 5);
                    log::debug!("mbc1: rom bank {}", self.bank);
                }
                BankingMode::Ram => {
                    self.ram_bank = value & 0b11;
                    log::debug!("mbc1: ram bank {}", self.ram_bank);
                }
            },
            0x6000..=0x7fff => {
                self.banking_mode = if value & 1 == 0 {
                    self.ram_bank = 0;
                    BankingMode::Rom
                } else {
                    BankingMode::Ram
                };
            }
            0xa000..=0xbfff if self.ram_enabled => {
                ram[ram_index(self.ram_bank(), address)] = value;
            }
            _ => {}
        }
    }
}

impl Default for Mbc1 {
    fn default() -> Self {
        Self::new()
    }
}
