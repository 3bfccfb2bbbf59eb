use super::OpResult;
use crate::game_boy::{
    MemoryMapped,
    cpu::{
        Cpu, Flags, Register16,
        cycles::Cycles,
        instructions::{Arithmetic, Arithmetic8, Arithmetic16},
    },
};

impl Cpu {
    pub fn execute_arithmetic(
        &mut self,
        instruction: Arithmetic,
        memory: &MemoryMapped,
    ) -> OpResult {
        match instruction {
            Arithmetic::Arithmetic8(instruction) => self.execute_arithmetic8(instruction, memory),
            Arithmetic::Arithmetic16(instruction) => self.execute_arithmetic16(instruction),
        }
    }

    fn execute_arithmetic8(&mut self, instruction: Arithmetic8, memory: &MemoryMapped) -> OpResult {
        match instruction {
            Arithmetic8::Increment(target) => {
                let (value, fetch_cycles) = self.peek8(target, memory);
                let result = value.wrapping_add(1);

                self.flags.set(Flags::ZERO, result == 0);
                self.flags.remove(Flags::NEGATIVE);
                self.flags.set(Flags::HALF_CARRY, value & 0xf == 0xf);

                self.set8(target, result)
                    .add_cycles(fetch_cycles + Cycles(1))
            }

            Arithmetic8::Decrement(target) => {
                let (value, fetch_cycles) = self.peek8(target, memory);
                let result = value.wrapping_sub(1);

                self.flags.set(Flags::ZERO, result == 0);
                self.flags.insert(Flags::NEGATIVE);
                self.flags.set(Flags::HALF_CARRY, value & 0xf == 0);

                self.set8(target, result)
                    .add_cycles(fetch_cycles + Cycles(1))
            }

            Arithmetic8::AddA(source) => {
                let (value, fetch_cycles) = self.fetch8(source, memory);
                self.a = self.add(value, false);
                OpResult::cycles(1).add_cycles(fetch_cycles)
            }

            Arithmetic8::AddACarry(source) => {
                let (value, fetch_cycles) = self.fetch8(source, memory);
                self.a = self.add(value, self.flags.contains(Flags::CARRY));
                OpResult::cycles(1).add_cycles(fetch_cycles)
            }

            Arithmetic8::SubtractA(source) => {
                let (value, fetch_cycles) = self.fetch8(source, memory);
                self.a = self.subtract(value, false);
                OpResult::cycles(1).add_cycles(fetch_cycles)
            }

            Arithmetic8::SubtractACarry(source) => {
                let (value, fetch_cycles) = self.fetch8(source, memory);
                self.a = self.subtract(value, self.flags.contains(Flags::CARRY));
                OpResult::cycles(1).add_cycles(fetch_cycles)
            }

            Arithmetic8::CompareA(source) => {
                let (value, fetch_cycles) = self.fetch8(source, memory);
                self.subtract(value, false);
                OpResult::cycles(1).add_cycles(fetch_cycles)
            }
        }
    }

    fn execute_arithmetic16(&mut self, instruction: Arithmetic16) -> OpResult {
        match instruction {
            Arithmetic16::Increment(register) => {
                let value = self.get_register16(register);
                self.set_register16(register, value.wrapping_add(1));
                OpResult::cycles(2)
            }

            Arithmetic16::Decrement(register) => {
                let value = self.get_register16(register);
                self.set_register16(register, value.wrapping_sub(1));
                OpResult::cycles(2)
            }

            Arithmetic16::AddHl(register) => {
                let hl = self.get_register16(Register16::Hl);
                let value = self.get_register16(register);

                self.flags.remove(Flags::NEGATIVE);
                self.flags
                    .set(Flags::HALF_CARRY, (hl & 0xfff) + (value & 0xfff) > 0xfff);
                self.flags
                    .set(Flags::CARRY, hl as u32 + value as u32 > 0xffff);

                self.set_register16(Register16::Hl, hl.wrapping_add(value));
                OpResult::cycles(2)
            }
        }
    }

    /// a + value (+ carry), setting all four flags.
    fn add(&mut self, value: u8, carry: bool) -> u8 {
        self.flags = Flags::for_add(self.a, value, carry as u8);
        self.a.wrapping_add(value).wrapping_add(carry as u8)
    }

    /// a - value (- carry), setting all four flags. Used by cp too, which
    /// discards the result.
    fn subtract(&mut self, value: u8, carry: bool) -> u8 {
        self.flags = Flags::for_subtract(self.a, value, carry as u8);
        self.a.wrapping_sub(value).wrapping_sub(carry as u8)
    }

    pub fn execute_decimal_adjust_accumulator(&mut self) -> OpResult {
        let mut correction = 0;
        let mut carry = self.flags.contains(Flags::CARRY);

        if self.flags.contains(Flags::HALF_CARRY) || self.a & 0xf > 0x9 {
            correction |= 0x06;
        }
        if carry || self.a > 0x99 {
            correction |= 0x60;
        }

        if self.flags.contains(Flags::NEGATIVE) {
            self.a = self.a.wrapping_sub(correction);
        } else {
            self.a = self.a.wrapping_add(correction);
            carry = correction & 0x60 != 0;
        }

        self.flags.set(Flags::ZERO, self.a == 0);
        self.flags.remove(Flags::HALF_CARRY);
        self.flags.set(Flags::CARRY, carry);

        OpResult::cycles(1)
    }
}
