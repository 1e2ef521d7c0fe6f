mod gameboy;
mod memory;

pub use gameboy::GameBoy;
pub use memory::Memory;
