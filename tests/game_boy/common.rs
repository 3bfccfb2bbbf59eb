use dmg_core::{
    GameBoy,
    game_boy::{cartridge::Cartridge, cpu::cycles::Cycles},
};

pub const ENTRY_POINT: usize = 0x100;

/// Builds rom images in memory: 32KiB of zeroes (all `nop`) with a header
/// for the chosen bank controller and code placed at the entry point.
pub struct RomBuilder {
    rom: Vec<u8>,
}

impl RomBuilder {
    pub fn new() -> Self {
        Self {
            rom: vec![0; 0x8000],
        }
    }

    pub fn banks(mut self, count: usize) -> Self {
        self.rom.resize(count * 0x4000, 0);
        self
    }

    pub fn cartridge_type(mut self, value: u8) -> Self {
        self.rom[0x147] = value;
        self
    }

    pub fn code(self, code: &[u8]) -> Self {
        self.at(ENTRY_POINT, code)
    }

    pub fn at(mut self, address: usize, bytes: &[u8]) -> Self {
        self.rom[address..address + bytes.len()].copy_from_slice(bytes);
        self
    }

    pub fn build(self) -> GameBoy {
        GameBoy::new(Cartridge::new(self.rom, None).unwrap())
    }
}

pub fn step(gb: &mut GameBoy) -> u32 {
    let Cycles(cycles) = gb.step().unwrap();
    cycles
}

pub fn step_n(gb: &mut GameBoy, count: usize) -> u32 {
    (0..count).map(|_| step(gb)).sum()
}
