use crate::game_boy::{MemoryMapped, interrupts, serial_transfer, timers, video};

pub const WORK_RAM_SIZE: usize = 0x2000;
pub const HIGH_RAM_SIZE: usize = 0x7f;
pub const IO_SIZE: usize = 0x80;

const DMA_LENGTH: u16 = video::memory::OAM_SIZE as u16;

#[derive(Clone, Debug)]
pub struct Ram {
    pub work_ram: Box<[u8; WORK_RAM_SIZE]>,
    pub high_ram: [u8; HIGH_RAM_SIZE],
    /// Backing bytes for I/O registers with no modelled behaviour, such as
    /// sound. Indexed by `address - 0xff00`.
    pub io: [u8; IO_SIZE],
    pub dma_source: u8,
}

impl Ram {
    pub fn new() -> Self {
        Self {
            work_ram: Box::new([0; WORK_RAM_SIZE]),
            high_ram: [0; HIGH_RAM_SIZE],
            io: [0; IO_SIZE],
            dma_source: 0,
        }
    }
}

impl Default for Ram {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MappedAddress {
    Cartridge(u16),
    WorkRam(u16),
    HighRam(u8),
    VideoRam(video::memory::MappedAddress),
    JoypadRegister,
    SerialTransferRegister(serial_transfer::Register),
    TimerRegister(timers::Register),
    InterruptRegister(interrupts::Register),
    VideoRegister(video::Register),
    BeginDmaTransfer,
    IoRegister(u8),
    Unusable,
}

impl MappedAddress {
    pub fn map(address: u16) -> Self {
        match address {
            0x0000..=0x7fff => Self::Cartridge(address),
            0x8000..=0x9fff => {
                Self::VideoRam(video::memory::MappedAddress::VideoRam(address - 0x8000))
            }
            0xa000..=0xbfff => Self::Cartridge(address),
            0xc000..=0xdfff => Self::WorkRam(address - 0xc000),
            0xe000..=0xfdff => Self::WorkRam(address - 0xe000),
            0xfe00..=0xfe9f => {
                Self::VideoRam(video::memory::MappedAddress::Oam((address - 0xfe00) as u8))
            }
            0xfea0..=0xfeff => Self::Unusable,
            0xff00 => Self::JoypadRegister,
            0xff01 => Self::SerialTransferRegister(serial_transfer::Register::Data),
            0xff02 => Self::SerialTransferRegister(serial_transfer::Register::Control),
            0xff04 => Self::TimerRegister(timers::Register::Divider),
            0xff05 => Self::TimerRegister(timers::Register::Counter),
            0xff06 => Self::TimerRegister(timers::Register::Modulo),
            0xff07 => Self::TimerRegister(timers::Register::Control),
            0xff0f => Self::InterruptRegister(interrupts::Register::RequestedInterrupts),
            0xff40 => Self::VideoRegister(video::Register::Control),
            0xff41 => Self::VideoRegister(video::Register::Status),
            0xff42 => Self::VideoRegister(video::Register::BackgroundViewportY),
            0xff43 => Self::VideoRegister(video::Register::BackgroundViewportX),
            0xff44 => Self::VideoRegister(video::Register::CurrentScanline),
            0xff45 => Self::VideoRegister(video::Register::InterruptOnScanline),
            0xff46 => Self::BeginDmaTransfer,
            0xff47 => Self::VideoRegister(video::Register::BackgroundPalette),
            0xff48 => Self::VideoRegister(video::Register::Sprite0Palette),
            0xff49 => Self::VideoRegister(video::Register::Sprite1Palette),
            0xff4a => Self::VideoRegister(video::Register::WindowY),
            0xff4b => Self::VideoRegister(video::Register::WindowX),
            0xff00..=0xff7f => Self::IoRegister((address - 0xff00) as u8),
            0xff80..=0xfffe => Self::HighRam((address - 0xff80) as u8),
            0xffff => Self::InterruptRegister(interrupts::Register::EnabledInterrupts),
        }
    }
}

/// A write produced by an instruction, applied once the cpu is done
/// reading memory.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MemoryWrite {
    Write8(MappedAddress, u8),
    /// Applied in order: the first pair, then the second.
    Write16((MappedAddress, u8), (MappedAddress, u8)),
}

impl MemoryMapped {
    pub fn read(&self, address: u16) -> u8 {
        self.read_mapped(MappedAddress::map(address))
    }

    pub fn read_mapped(&self, address: MappedAddress) -> u8 {
        match address {
            MappedAddress::Cartridge(address) => self.cartridge.read(address),
            MappedAddress::WorkRam(address) => self.ram.work_ram[address as usize],
            MappedAddress::HighRam(address) => self.ram.high_ram[address as usize],
            MappedAddress::VideoRam(address) => self.video.read_memory(address),
            MappedAddress::JoypadRegister => self.joypad.read_register(),
            MappedAddress::SerialTransferRegister(register) => self.serial.read_register(register),
            MappedAddress::TimerRegister(register) => self.timers.read_register(register),
            MappedAddress::InterruptRegister(register) => self.interrupts.read_register(register),
            MappedAddress::VideoRegister(register) => self.video.read_register(register),
            MappedAddress::BeginDmaTransfer => self.ram.dma_source,
            MappedAddress::IoRegister(offset) => self.ram.io[offset as usize],
            MappedAddress::Unusable => 0xff,
        }
    }

    pub fn write(&mut self, write: MemoryWrite) {
        match write {
            MemoryWrite::Write8(address, value) => self.write_mapped(address, value),
            MemoryWrite::Write16((first, first_value), (second, second_value)) => {
                self.write_mapped(first, first_value);
                self.write_mapped(second, second_value);
            }
        }
    }

    pub fn write_byte(&mut self, address: u16, value: u8) {
        self.write_mapped(MappedAddress::map(address), value);
    }

    pub fn write_mapped(&mut self, address: MappedAddress, value: u8) {
        match address {
            MappedAddress::Cartridge(address) => self.cartridge.write(address, value),
            MappedAddress::WorkRam(address) => self.ram.work_ram[address as usize] = value,
            MappedAddress::HighRam(address) => self.ram.high_ram[address as usize] = value,
            MappedAddress::VideoRam(address) => self.video.write_memory(address, value),
            MappedAddress::JoypadRegister => self.joypad.write_register(value),
            MappedAddress::SerialTransferRegister(register) => {
                self.serial.write_register(register, value)
            }
            MappedAddress::TimerRegister(register) => self.timers.write_register(register, value),
            MappedAddress::InterruptRegister(register) => {
                self.interrupts.write_register(register, value)
            }
            MappedAddress::VideoRegister(register) => {
                let requested = self.video.write_register(register, value);
                self.interrupts.requested |= requested;
            }
            MappedAddress::BeginDmaTransfer => self.dma_transfer(value),
            MappedAddress::IoRegister(offset) => self.ram.io[offset as usize] = value,
            MappedAddress::Unusable => {
                log::trace!("ignored write of {:#04x} to unusable memory", value);
            }
        }
    }

    /// Copies 160 bytes from `source * 0x100` into sprite attribute memory.
    fn dma_transfer(&mut self, source: u8) {
        self.ram.dma_source = source;
        let start = (source as u16) << 8;

        let mut data = [0; video::memory::OAM_SIZE];
        for (offset, byte) in (0..DMA_LENGTH).zip(data.iter_mut()) {
            *byte = self.read(start.wrapping_add(offset));
        }
        self.video.load_oam(&data);
    }
}
