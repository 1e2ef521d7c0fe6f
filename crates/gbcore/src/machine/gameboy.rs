use crate::cpu::{BootState, Cpu, Instruction};
use crate::{Memory, Result};

/// One emulated machine: the CPU core and the memory it runs against.
///
/// Hosts that need several machines create several `GameBoy`s; nothing is
/// shared between them.
#[derive(Clone, Debug, Default)]
pub struct GameBoy {
    pub cpu: Cpu,
    pub memory: Memory,
}

impl GameBoy {
    pub fn new() -> Self {
        Self {
            cpu: Cpu::new(),
            memory: Memory::new(),
        }
    }

    pub fn with_boot_state(boot: BootState) -> Self {
        Self {
            cpu: Cpu::with_boot_state(boot),
            memory: Memory::new(),
        }
    }

    /// Reset the CPU and clear memory.
    pub fn reset(&mut self) {
        self.cpu.reset();
        self.memory = Memory::new();
    }

    /// Copy a program or ROM image into memory at `offset`.
    pub fn load(&mut self, offset: u16, image: &[u8]) -> Result<()> {
        self.memory.load(offset, image)?;
        log::info!("Loaded {} bytes at 0x{:04X}", image.len(), offset);
        Ok(())
    }

    #[inline]
    pub fn fetch(&mut self) -> u8 {
        self.cpu.fetch(&mut self.memory)
    }

    #[inline]
    pub fn execute(&mut self, opcode: u8) -> Result<()> {
        self.cpu.execute(&mut self.memory, opcode)
    }

    /// Run one instruction and return the machine cycles it consumed.
    ///
    /// A halted, stopped or locked CPU does not fetch; this returns `Ok(0)`
    /// until the host clears the condition (or resets, for a lock).
    pub fn step(&mut self) -> Result<u32> {
        if self.cpu.halted || self.cpu.stopped || self.cpu.is_locked() {
            return Ok(0);
        }

        if log::log_enabled!(log::Level::Trace) {
            let pc = self.cpu.regs.pc;
            let opcode = self.memory.peek(pc);
            log::trace!(
                "0x{pc:04X}: {opcode:02X} {} (AF=0x{:04X} BC=0x{:04X} DE=0x{:04X} HL=0x{:04X} SP=0x{:04X})",
                Instruction::from_opcode(opcode),
                self.cpu.regs.af(),
                self.cpu.regs.bc(),
                self.cpu.regs.de(),
                self.cpu.regs.hl(),
                self.cpu.regs.sp,
            );
        }

        self.cpu.step(&mut self.memory)
    }

    #[inline]
    pub fn mcycles(&self) -> u64 {
        self.memory.mcycles()
    }
}
