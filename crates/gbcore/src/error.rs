use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// One of the opcode holes (0xD3, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB, 0xEC,
    /// 0xED, 0xF4, 0xFC, 0xFD). `pc` is the address the opcode was fetched
    /// from.
    #[error("illegal opcode {opcode:#04x} at pc {pc:#06x}")]
    IllegalOpcode { opcode: u8, pc: u16 },
    #[error("image of {len} bytes at {offset:#06x} does not fit in the 64 KiB address space")]
    ImageTooLarge { offset: u16, len: usize },
}
