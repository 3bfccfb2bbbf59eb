use cartridge::Cartridge;
use cpu::Cpu;
use joypad::{Button, Joypad};
use memory::Ram;
use video::{Video, palette::Palette, screen::Screen};

use crate::error::{ExecutionError, InputError};

pub mod cartridge;
pub mod cpu;
pub mod execute;
pub mod interrupts;
pub mod joypad;
pub mod memory;
pub mod serial_transfer;
pub mod timers;
pub mod video;

// Anything accessible via a memory address is stored in a separate
// struct to allow borrowing independently of the Cpu
#[derive(Clone, Debug)]
pub struct MemoryMapped {
    cartridge: Cartridge,
    ram: Ram,
    video: Video,
    joypad: Joypad,
    interrupts: interrupts::Registers,
    serial: serial_transfer::Registers,
    timers: timers::Timers,
}

#[derive(Clone, Debug)]
pub struct GameBoy {
    cpu: Cpu,
    mapped: MemoryMapped,
    /// Clocks run past the end of the last frame by `run_frame`.
    frame_overrun: u32,
}

impl GameBoy {
    pub fn new(cartridge: Cartridge) -> GameBoy {
        Self::with_palette(cartridge, Palette::default())
    }

    pub fn with_palette(cartridge: Cartridge, palette: Palette) -> GameBoy {
        GameBoy {
            cpu: Cpu::new(),
            mapped: MemoryMapped {
                cartridge,
                ram: Ram::new(),
                video: Video::new(palette),
                joypad: Joypad::new(),
                interrupts: interrupts::Registers::new(),
                serial: serial_transfer::Registers::new(),
                timers: timers::Timers::new(),
            },
            frame_overrun: 0,
        }
    }

    /// Returns to the power-on state, keeping the cartridge and its RAM.
    pub fn reset(&mut self) {
        let palette = self.mapped.video.palette();
        self.cpu = Cpu::new();
        self.mapped.ram = Ram::new();
        self.mapped.video = Video::new(palette);
        self.mapped.joypad = Joypad::new();
        self.mapped.interrupts = interrupts::Registers::new();
        self.mapped.serial = serial_transfer::Registers::new();
        self.mapped.timers = timers::Timers::new();
        self.frame_overrun = 0;
    }

    pub fn memory_mapped(&self) -> &MemoryMapped {
        &self.mapped
    }

    pub fn cartridge(&self) -> &Cartridge {
        &self.mapped.cartridge
    }

    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.cpu
    }

    pub fn video(&self) -> &Video {
        &self.mapped.video
    }

    pub fn screen(&self) -> &Screen {
        self.mapped.video.screen()
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.mapped.video.set_palette(palette);
    }

    pub fn interrupts(&self) -> &interrupts::Registers {
        &self.mapped.interrupts
    }

    pub fn timers(&self) -> &timers::Timers {
        &self.mapped.timers
    }

    pub fn read(&self, address: u16) -> u8 {
        self.mapped.read(address)
    }

    pub fn write(&mut self, address: u16, value: u8) {
        self.mapped.write_byte(address, value);
    }

    /// Requests interrupt `index`, 0 (vertical blank) to 4 (joypad).
    pub fn request_interrupt(&mut self, index: u8) -> Result<(), ExecutionError> {
        self.mapped.interrupts.request_signal(index)
    }

    pub fn press_button(&mut self, button: Button) {
        if self.mapped.joypad.press_button(button) {
            self.mapped.interrupts.request(interrupts::Interrupt::Joypad);
        }
    }

    pub fn release_button(&mut self, button: Button) {
        self.mapped.joypad.release_button(button);
    }

    /// Presses the button with host key index `index` (0-7).
    pub fn key_pressed(&mut self, index: u8) -> Result<(), InputError> {
        self.press_button(Button::from_key_index(index)?);
        Ok(())
    }

    pub fn key_released(&mut self, index: u8) -> Result<(), InputError> {
        self.release_button(Button::from_key_index(index)?);
        Ok(())
    }

    /// Bytes sent over the serial port since the last call. They are held
    /// until drained.
    pub fn drain_serial_output(&mut self) -> Vec<u8> {
        self.mapped.serial.drain_output()
    }
}
