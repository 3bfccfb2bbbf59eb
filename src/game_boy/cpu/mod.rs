pub mod cycles;
pub mod execute;
pub mod flags;
pub mod instructions;
mod registers;

pub use flags::Flags;
pub use registers::{Register8, Register16};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum InterruptMasterEnable {
    Disabled,
    EnableAfterNextInstruction,
    Enabled,
}

#[derive(Clone, Debug)]
pub struct Cpu {
    pub a: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,

    pub stack_pointer: u16,
    pub program_counter: u16,

    pub flags: Flags,

    pub interrupt_master_enable: InterruptMasterEnable,
    pub halted: bool,
}

impl Cpu {
    /// Register state as left by the boot ROM.
    pub fn new() -> Self {
        Self {
            a: 0x01,
            b: 0x00,
            c: 0x13,
            d: 0x00,
            e: 0xd8,
            h: 0x01,
            l: 0x4d,

            stack_pointer: 0xfffe,
            program_counter: 0x0100,

            flags: Flags::ZERO | Flags::HALF_CARRY | Flags::CARRY,

            interrupt_master_enable: InterruptMasterEnable::Disabled,
            halted: false,
        }
    }

    pub fn get_register8(&self, register: Register8) -> u8 {
        match register {
            Register8::A => self.a,
            Register8::B => self.b,
            Register8::C => self.c,
            Register8::D => self.d,
            Register8::E => self.e,
            Register8::H => self.h,
            Register8::L => self.l,
        }
    }

    pub fn set_register8(&mut self, register: Register8, value: u8) {
        match register {
            Register8::A => self.a = value,
            Register8::B => self.b = value,
            Register8::C => self.c = value,
            Register8::D => self.d = value,
            Register8::E => self.e = value,
            Register8::H => self.h = value,
            Register8::L => self.l = value,
        }
    }

    pub fn get_register16(&self, register: Register16) -> u16 {
        match register {
            Register16::Bc => u16::from_be_bytes([self.b, self.c]),
            Register16::De => u16::from_be_bytes([self.d, self.e]),
            Register16::Hl => u16::from_be_bytes([self.h, self.l]),
            Register16::StackPointer => self.stack_pointer,
            Register16::Af => u16::from_be_bytes([self.a, self.flags.bits()]),
        }
    }

    pub fn set_register16(&mut self, register: Register16, value: u16) {
        let [high, low] = value.to_be_bytes();
        match register {
            Register16::Bc => (self.b, self.c) = (high, low),
            Register16::De => (self.d, self.e) = (high, low),
            Register16::Hl => (self.h, self.l) = (high, low),
            Register16::StackPointer => self.stack_pointer = value,
            Register16::Af => {
                self.a = high;
                self.flags = Flags::from_bits_truncate(low);
            }
        }
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_pairs_combine_high_and_low_bytes() {
        let mut cpu = Cpu::new();
        cpu.set_register16(Register16::De, 0x1234);
        assert_eq!(cpu.d, 0x12);
        assert_eq!(cpu.e, 0x34);

        cpu.set_register8(Register8::E, 0xff);
        assert_eq!(cpu.get_register16(Register16::De), 0x12ff);
    }

    #[test]
    fn low_nibble_of_flags_is_always_clear() {
        let mut cpu = Cpu::new();
        cpu.set_register16(Register16::Af, 0xabff);
        assert_eq!(cpu.a, 0xab);
        assert_eq!(cpu.get_register16(Register16::Af), 0xabf0);
    }

    #[test]
    fn power_on_state() {
        let cpu = Cpu::new();
        assert_eq!(cpu.get_register16(Register16::Af), 0x01b0);
        assert_eq!(cpu.get_register16(Register16::Bc), 0x0013);
        assert_eq!(cpu.get_register16(Register16::De), 0x00d8);
        assert_eq!(cpu.get_register16(Register16::Hl), 0x014d);
        assert_eq!(cpu.stack_pointer, 0xfffe);
        assert_eq!(cpu.program_counter, 0x0100);
    }
}
