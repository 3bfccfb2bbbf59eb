use core::fmt;

pub mod mbc1;
pub mod mbc2;
pub mod no_mbc;

pub const ROM_BANK_SIZE: usize = 0x4000;
pub const RAM_BANK_SIZE: usize = 0x2000;
pub const RAM_BANKS: usize = 4;

/// Memory bank controller: intercepts writes to the rom address range and
/// uses them to decide which rom and ram banks the cartridge windows expose.
#[derive(Clone, Debug)]
pub enum Mbc {
    NoMbc(no_mbc::NoMbc),
    Mbc1(mbc1::Mbc1),
    Mbc2(mbc2::Mbc2),
}

impl Mbc {
    pub fn read(&self, rom: &[u8], ram: &[u8], address: u16) -> u8 {
        match self {
            Mbc::NoMbc(m) => m.read(rom, ram, address),
            Mbc::Mbc1(m) => m.read(rom, ram, address),
            Mbc::Mbc2(m) => m.read(rom, ram, address),
        }
    }

    pub fn write(&mut self, ram: &mut [u8], address: u16, value: u8) {
        match self {
            Mbc::NoMbc(m) => m.write(ram, address, value),
            Mbc::Mbc1(m) => m.write(ram, address, value),
            Mbc::Mbc2(m) => m.write(ram, address, value),
        }
    }

    pub fn rom_bank(&self) -> usize {
        match self {
            Mbc::NoMbc(_) => 1,
            Mbc::Mbc1(m) => m.rom_bank(),
            Mbc::Mbc2(m) => m.rom_bank(),
        }
    }
}

impl fmt::Display for Mbc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mbc::NoMbc(_) => write!(f, "None"),
            Mbc::Mbc1(_) => write!(f, "MBC1"),
            Mbc::Mbc2(_) => write!(f, "MBC2"),
        }
    }
}

/// Reads from the switchable window at 0x4000-0x7fff. Banks past the end of
/// the image wrap around, as they do on carts with fewer address lines.
fn read_rom_bank(rom: &[u8], bank: usize, address: u16) -> u8 {
    let offset = (address as usize - ROM_BANK_SIZE) + bank * ROM_BANK_SIZE;
    rom.get(offset % rom.len().max(1)).copied().unwrap_or(0xff)
}

fn read_fixed_rom(rom: &[u8], address: u16) -> u8 {
    rom.get(address as usize).copied().unwrap_or(0xff)
}

fn ram_index(bank: usize, address: u16) -> usize {
    (address as usize - 0xa000) + bank * RAM_BANK_SIZE
}
