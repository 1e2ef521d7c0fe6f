mod alu;
mod bus;
mod decode;
mod exec;
mod helpers;
mod init;
mod regs;

pub use bus::Bus;
pub use decode::{AluOp, Condition, Indirect, Instruction, Reg16, Reg8, RotateA, StackPair};
pub use init::BootState;
pub use regs::{Flags, Registers};

use crate::Result;

/// Game Boy CPU core.
///
/// Holds the register file and the control latches. All state transitions
/// go through [`Cpu::fetch`] and [`Cpu::execute`] (or [`Cpu::step`], which
/// performs one of each); the bus is borrowed for the duration of a call and
/// never retained.
#[derive(Clone, Debug)]
pub struct Cpu {
    pub regs: Registers,
    /// Interrupt master enable. Interrupt dispatch itself is done by the
    /// host, which reads this latch and vectors through `push_u16`.
    pub ime: bool,
    /// Set by HALT. The core never clears it; waking is up to the host.
    pub halted: bool,
    /// Set by STOP. Cleared by the host on a joypad wake-up.
    pub stopped: bool,
    /// Set after executing an opcode hole. The real CPU hangs until
    /// power-off; only `reset` clears this.
    locked: bool,
    boot: BootState,
}

impl Cpu {
    #[inline]
    pub fn flag(&self, flag: Flags) -> bool {
        self.regs.f.contains(flag)
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flags, value: bool) {
        self.regs.f.set(flag, value);
    }

    #[inline]
    pub fn clear_flags(&mut self) {
        self.regs.f = Flags::empty();
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Fetch the opcode at PC and advance PC past it.
    #[inline]
    pub fn fetch<B: Bus>(&mut self, bus: &mut B) -> u8 {
        self.read_at_pc(bus)
    }

    /// Execute a previously fetched opcode, including any immediate operand
    /// fetches it needs.
    pub fn execute<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> Result<()> {
        let instruction = Instruction::from_opcode(opcode);
        self.exec_instruction(bus, instruction, opcode)
    }

    /// Fetch and execute one instruction and return the number of machine
    /// cycles (bus accesses) it consumed.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> Result<u32> {
        let start = bus.mcycles();
        let opcode = self.fetch(bus);
        self.execute(bus, opcode)?;
        Ok(bus.mcycles().wrapping_sub(start) as u32)
    }
}
