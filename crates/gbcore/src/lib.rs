//! Instruction-level emulation of the Game Boy CPU (Sharp SM83).
//!
//! The crate exposes the register file, the flags register, the ALU
//! primitives and a table-driven decoder/executor that runs one instruction
//! per `fetch` + `execute` pair against a [`Bus`]. Peripherals (PPU, APU,
//! timer, interrupt controller, cartridge banking) live outside this crate
//! and talk to the core through [`Memory`] and the public CPU fields.

pub mod cpu;
mod error;
pub mod machine;

pub use cpu::{BootState, Bus, Cpu, Flags, Instruction, Registers};
pub use error::{Error, Result};
pub use machine::{GameBoy, Memory};

/// Size of the flat address space in bytes (0x0000..=0xFFFF).
pub const MEMORY_SIZE: usize = 0x10000;
