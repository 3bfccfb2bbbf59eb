use core::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Register8 {
    A,
    B,
    C,
    D,
    E,
    H,
    L,
}

impl fmt::Display for Register8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::A => "a",
                Self::B => "b",
                Self::C => "c",
                Self::D => "d",
                Self::E => "e",
                Self::H => "h",
                Self::L => "l",
            }
        )
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Register16 {
    Bc,
    De,
    Hl,
    StackPointer,
    Af,
}

impl Register16 {
    /// The 2-bit pair field used by 16-bit loads and arithmetic (bc, de, hl, sp).
    pub fn from_pair_index(index: u8) -> Self {
        match index & 0b11 {
            0 => Self::Bc,
            1 => Self::De,
            2 => Self::Hl,
            _ => Self::StackPointer,
        }
    }

    /// push/pop use the same field, with af in place of sp.
    pub fn from_stack_index(index: u8) -> Self {
        match index & 0b11 {
            0 => Self::Bc,
            1 => Self::De,
            2 => Self::Hl,
            _ => Self::Af,
        }
    }
}

impl fmt::Display for Register16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Bc => "bc",
                Self::De => "de",
                Self::Hl => "hl",
                Self::StackPointer => "sp",
                Self::Af => "af",
            }
        )
    }
}
