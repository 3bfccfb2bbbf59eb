use bitflags::bitflags;

bitflags! {
    /// The F register. The low nibble always reads back as zero.
    #[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
    pub struct Flags: u8 {
        const ZERO       = 0x80;
        const NEGATIVE   = 0x40;
        const HALF_CARRY = 0x20;
        const CARRY      = 0x10;
    }
}

impl Flags {
    pub fn zero_if(value: u8) -> Self {
        if value == 0 { Flags::ZERO } else { Flags::empty() }
    }

    /// Flags for an 8-bit addition, with `carry_in` the incoming carry bit.
    pub fn for_add(a: u8, value: u8, carry_in: u8) -> Self {
        let result = a as u16 + value as u16 + carry_in as u16;
        let mut flags = Self::zero_if(result as u8);
        flags.set(Self::HALF_CARRY, (a & 0xf) + (value & 0xf) + carry_in > 0xf);
        flags.set(Self::CARRY, result > 0xff);
        flags
    }

    /// Flags for an 8-bit subtraction, with `borrow_in` the incoming carry bit.
    pub fn for_subtract(a: u8, value: u8, borrow_in: u8) -> Self {
        let result = a as i16 - value as i16 - borrow_in as i16;
        let mut flags = Self::zero_if(result as u8) | Self::NEGATIVE;
        flags.set(
            Self::HALF_CARRY,
            ((a & 0xf) as i16) - ((value & 0xf) as i16) - (borrow_in as i16) < 0,
        );
        flags.set(Self::CARRY, result < 0);
        flags
    }
}
