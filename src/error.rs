use thiserror::Error;

/// Fatal conditions that stop emulation. None of these are recoverable: the
/// instruction stream or the core itself is in a state it cannot continue from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecutionError {
    #[error("invalid opcode {opcode:02x} at {program_counter:04x}")]
    InvalidOpcode { opcode: u8, program_counter: u16 },
    #[error("invalid interrupt signal index {0}, expected 0-4")]
    InvalidInterrupt(u8),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartridgeError {
    #[error("ROM should be at least {minimum} bytes to hold a header, was {len} bytes")]
    TooSmall { len: usize, minimum: usize },
    #[error("unsupported bank controller byte in cartridge header: {0:02x}")]
    UnsupportedMbc(u8),
    #[error("save data should be {expected} bytes, was {len} bytes")]
    SaveSize { len: usize, expected: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("invalid key index {0}, expected 0-7")]
    InvalidKey(u8),
}
