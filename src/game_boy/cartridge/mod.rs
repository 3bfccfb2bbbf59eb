pub mod mbc;

use crate::error::CartridgeError;
use mbc::{Mbc, RAM_BANK_SIZE, RAM_BANKS, mbc1::Mbc1, mbc2::Mbc2, no_mbc::NoMbc};

const HEADER_END: usize = 0x150;
pub const RAM_SIZE: usize = RAM_BANK_SIZE * RAM_BANKS;

#[derive(Clone, Debug)]
pub struct Cartridge {
    title: String,
    rom: Vec<u8>,
    ram: Vec<u8>,
    mbc: Mbc,
}

fn parse_title(rom: &[u8]) -> String {
    let mut title = String::new();
    for character in rom[0x134..0x144].iter() {
        if *character == 0u8 {
            break;
        }
        title.push(*character as char)
    }
    title
}

impl Cartridge {
    /// Loads a rom image, optionally restoring external ram previously
    /// exported with [`Cartridge::ram`].
    pub fn new(rom: Vec<u8>, save_data: Option<Vec<u8>>) -> Result<Cartridge, CartridgeError> {
        if rom.len() < HEADER_END {
            return Err(CartridgeError::TooSmall {
                len: rom.len(),
                minimum: HEADER_END,
            });
        }

        let title = parse_title(&rom);
        let mbc = match rom[0x147] {
            0x00 | 0x08 | 0x09 => Mbc::NoMbc(NoMbc::new()),
            0x01..=0x03 => Mbc::Mbc1(Mbc1::new()),
            0x05 | 0x06 => Mbc::Mbc2(Mbc2::new()),
            other => return Err(CartridgeError::UnsupportedMbc(other)),
        };

        let ram = match save_data {
            Some(data) if data.len() == RAM_SIZE => data,
            Some(data) => {
                return Err(CartridgeError::SaveSize {
                    len: data.len(),
                    expected: RAM_SIZE,
                });
            }
            None => vec![0; RAM_SIZE],
        };

        if rom.len() % mbc::ROM_BANK_SIZE != 0 {
            log::warn!(
                "rom size {:#x} is not a whole number of banks; bank reads will wrap",
                rom.len()
            );
        }

        log::info!(
            "Loaded cartridge '{}': {} bytes of rom, bank controller {}",
            title,
            rom.len(),
            mbc
        );

        Ok(Cartridge {
            title,
            rom,
            ram,
            mbc,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn mbc(&self) -> &Mbc {
        &self.mbc
    }

    pub fn rom(&self) -> &[u8] {
        &self.rom
    }

    /// External ram as a flat blob of all four banks, for saving.
    pub fn ram(&self) -> &[u8] {
        &self.ram
    }

    pub fn read(&self, address: u16) -> u8 {
        self.mbc.read(&self.rom, &self.ram, address)
    }

    pub fn write(&mut self, address: u16, value: u8) {
        self.mbc.write(&mut self.ram, address, value);
    }
}
