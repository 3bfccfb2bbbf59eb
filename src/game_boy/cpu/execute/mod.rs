use crate::{
    error::ExecutionError,
    game_boy::{
        MemoryMapped,
        memory::{MappedAddress, MemoryWrite},
    },
};

use super::{
    Cpu, Flags, Register16,
    cycles::Cycles,
    instructions::{Address, Instruction, Source8, Source16, Target8, Target16, jump::Condition},
};

mod arithmetic;
mod bit_flag;
mod bit_shift;
mod bitwise;
mod control;
mod jump;
mod load;
mod stack;

/// Cycles spent by one instruction, plus the memory write it produces. The
/// write is applied by the caller once the cpu has released its borrow of
/// memory.
pub struct OpResult(pub Cycles, pub Option<MemoryWrite>);

impl OpResult {
    pub fn cycles(cycles: u32) -> Self {
        OpResult(Cycles(cycles), None)
    }

    pub fn write8(address: u16, value: u8, cycles: Cycles) -> Self {
        OpResult(
            cycles,
            Some(MemoryWrite::Write8(MappedAddress::map(address), value)),
        )
    }

    /// Writes the high byte to `address + 1` first, then the low byte to
    /// `address`, matching a push.
    pub fn write16(address: u16, value: u16, cycles: Cycles) -> Self {
        let [high, low] = value.to_be_bytes();
        OpResult(
            cycles,
            Some(MemoryWrite::Write16(
                (MappedAddress::map(address.wrapping_add(1)), high),
                (MappedAddress::map(address), low),
            )),
        )
    }

    pub fn add_cycles(self, cycles: Cycles) -> Self {
        Self(self.0 + cycles, self.1)
    }
}

impl Cpu {
    pub fn execute(
        &mut self,
        instruction: Instruction,
        memory: &MemoryMapped,
    ) -> Result<OpResult, ExecutionError> {
        Ok(match instruction {
            Instruction::Load(instruction) => self.execute_load(instruction, memory),
            Instruction::Arithmetic(instruction) => self.execute_arithmetic(instruction, memory),
            Instruction::Bitwise(instruction) => self.execute_bitwise(instruction, memory),
            Instruction::BitFlag(instruction) => self.execute_bit_flag(instruction, memory),
            Instruction::BitShift(instruction) => self.execute_bit_shift(instruction, memory),
            Instruction::Jump(instruction) => self.execute_jump(instruction, memory),
            Instruction::Stack(instruction) => self.execute_stack(instruction, memory),
            Instruction::Control(instruction) => self.execute_control(instruction),
            Instruction::DecimalAdjustAccumulator => self.execute_decimal_adjust_accumulator(),
            Instruction::Invalid(opcode) => {
                return Err(ExecutionError::InvalidOpcode {
                    opcode,
                    program_counter: self.program_counter.wrapping_sub(1),
                });
            }
        })
    }

    /// Resolves an addressing mode to a concrete address, applying any hl
    /// post-increment. The cycles are those spent fetching operands and
    /// accessing memory.
    fn resolve_address(&mut self, address: Address) -> (u16, Cycles) {
        match address {
            Address::Fixed(address) => (address, Cycles(3)),
            Address::High(offset) => (0xff00 + offset as u16, Cycles(2)),
            Address::HighPlusC => (0xff00 + self.c as u16, Cycles(1)),
            Address::Dereference(register) => (self.get_register16(register), Cycles(1)),
            Address::DereferenceHlAndIncrement => {
                let address = self.get_register16(Register16::Hl);
                self.set_register16(Register16::Hl, address.wrapping_add(1));
                (address, Cycles(1))
            }
            Address::DereferenceHlAndDecrement => {
                let address = self.get_register16(Register16::Hl);
                self.set_register16(Register16::Hl, address.wrapping_sub(1));
                (address, Cycles(1))
            }
        }
    }

    fn fetch8(&mut self, source: Source8, memory: &MemoryMapped) -> (u8, Cycles) {
        match source {
            Source8::Constant(value) => (value, Cycles(1)),
            Source8::Register(register) => (self.get_register8(register), Cycles(0)),
            Source8::Memory(address) => {
                let (address, cycles) = self.resolve_address(address);
                (memory.read(address), cycles)
            }
        }
    }

    /// Reads the current value of a read-modify-write target without
    /// applying any post-increment; the matching `set8` does that.
    fn peek8(&self, target: Target8, memory: &MemoryMapped) -> (u8, Cycles) {
        match target {
            Target8::Register(register) => (self.get_register8(register), Cycles(0)),
            Target8::Memory(Address::Dereference(register)) => {
                (memory.read(self.get_register16(register)), Cycles(1))
            }
            Target8::Memory(_) => (memory.read(self.get_register16(Register16::Hl)), Cycles(1)),
        }
    }

    fn set8(&mut self, target: Target8, value: u8) -> OpResult {
        match target {
            Target8::Register(register) => {
                self.set_register8(register, value);
                OpResult::cycles(0)
            }
            Target8::Memory(address) => {
                let (address, cycles) = self.resolve_address(address);
                OpResult::write8(address, value, cycles)
            }
        }
    }

    fn fetch16(&mut self, source: Source16) -> (u16, Cycles) {
        match source {
            Source16::Constant(value) => (value, Cycles(2)),
            Source16::Register(register) => (self.get_register16(register), Cycles(1)),
            Source16::StackPointerWithOffset(offset) => {
                let value = self.add_stack_pointer_offset(offset);
                (value, Cycles(2))
            }
        }
    }

    fn set16(&mut self, target: Target16, value: u16) -> OpResult {
        match target {
            Target16::Register(register) => {
                self.set_register16(register, value);
                OpResult::cycles(0)
            }
            Target16::Memory(address) => OpResult::write16(address, value, Cycles(3)),
        }
    }

    /// sp plus a signed byte, as used by `add sp, e` and `ld hl, sp+e`.
    /// Half-carry and carry come from the unsigned low byte addition.
    fn add_stack_pointer_offset(&mut self, offset: i8) -> u16 {
        let sp = self.stack_pointer;
        let unsigned = offset as u8 as u16;

        self.flags = Flags::empty();
        if (sp & 0xf) + (unsigned & 0xf) > 0xf {
            self.flags.insert(Flags::HALF_CARRY);
        }
        if (sp & 0xff) + unsigned > 0xff {
            self.flags.insert(Flags::CARRY);
        }

        sp.wrapping_add_signed(offset as i16)
    }

    fn check_condition(&self, condition: Option<Condition>) -> bool {
        condition.is_none_or(|condition| condition.holds(self.flags))
    }
}
