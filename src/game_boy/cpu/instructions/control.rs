use core::fmt;

/// Single byte instructions that change cpu state rather than data.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Control {
    NoOperation,
    Stop,
    Halt,
    DisableInterrupts,
    EnableInterrupts,
    SetCarry,
    ComplementCarry,
}

impl Control {
    /// `stop` carries a padding byte, which is consumed here.
    pub fn decode(op: u8, ops: &mut impl Iterator<Item = u8>) -> Option<Self> {
        Some(match op {
            0x00 => Self::NoOperation,
            0x10 => {
                ops.next()?;
                Self::Stop
            }
            0x37 => Self::SetCarry,
            0x3f => Self::ComplementCarry,
            0x76 => Self::Halt,
            0xf3 => Self::DisableInterrupts,
            0xfb => Self::EnableInterrupts,
            _ => return None,
        })
    }

    pub fn byte_count(self) -> u16 {
        match self {
            Self::Stop => 2,
            _ => 1,
        }
    }

    fn mnemonic(self) -> &'static str {
        match self {
            Self::NoOperation => "nop",
            Self::Stop => "stop",
            Self::Halt => "halt",
            Self::DisableInterrupts => "di",
            Self::EnableInterrupts => "ei",
            Self::SetCarry => "scf",
            Self::ComplementCarry => "ccf",
        }
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
