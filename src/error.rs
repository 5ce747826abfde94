use thiserror::Error;

/// Everything that can go wrong inside the machine. Load-time variants
/// (`RomTooLarge`, `RomUnreadable`) are surfaced to the caller; per-cycle
/// variants are logged and recovered so a bad program cannot take the
/// interpreter down.
#[derive(Debug, Error)]
pub enum MachineError {
    #[error("unknown opcode {opcode:#06X}")]
    UnknownOpcode { opcode: u16 },

    #[error("stack overflow on call to {target:#05X}")]
    StackOverflow { target: u16 },

    #[error("stack underflow on return")]
    StackUnderflow,

    #[error("sprite read out of bounds (I={index:#06X}, height={height})")]
    SpriteOutOfBounds { index: u16, height: u8 },

    #[error("memory access out of bounds at {address:#06X}")]
    MemoryOutOfBounds { address: u16 },

    #[error("ROM is {size} bytes, maximum is {max}")]
    RomTooLarge { size: usize, max: usize },

    #[error("could not read ROM: {0}")]
    RomUnreadable(#[from] std::io::Error),

    #[error("state dump is {size} bytes, expected {expected}")]
    MalformedDump { size: usize, expected: usize },
}
