use crate::cpu::{Bus, Cpu};

impl Cpu {
    pub(super) fn exec_halt(&mut self) {
        // Waking up is the interrupt collaborator's job; the core only
        // records the state.
        log::debug!("HALT at PC=0x{:04X}", self.regs.pc.wrapping_sub(1));
        self.halted = true;
    }

    pub(super) fn exec_stop<B: Bus>(&mut self, bus: &mut B) {
        // STOP is 2 bytes; the second one is padding.
        let _padding = self.read_at_pc(bus);
        log::debug!("STOP at PC=0x{:04X}", self.regs.pc.wrapping_sub(2));
        self.stopped = true;
        self.halted = false;
    }

    pub(super) fn exec_di(&mut self) {
        self.ime = false;
    }

    pub(super) fn exec_ei(&mut self) {
        self.ime = true;
    }

    /// 0xCB prefix. The extended table is not part of this core: the
    /// sub-opcode is consumed so PC stays aligned with the instruction
    /// stream, and nothing else changes.
    pub(super) fn exec_prefix<B: Bus>(&mut self, bus: &mut B) {
        let sub_opcode = self.read_at_pc(bus);
        log::debug!(
            "CB-prefixed opcode 0x{sub_opcode:02X} at PC=0x{:04X} skipped",
            self.regs.pc.wrapping_sub(2)
        );
    }
}
