use crate::cpu::{Bus, Cpu, Indirect, Reg16, Reg8};

impl Cpu {
    pub(super) fn exec_ld_r_r<B: Bus>(&mut self, bus: &mut B, dst: Reg8, src: Reg8) {
        debug_assert!(
            !(dst == Reg8::HlInd && src == Reg8::HlInd),
            "LD [HL], [HL] encodes HALT"
        );
        let value = self.read_reg8(bus, src);
        self.write_reg8(bus, dst, value);
    }

    pub(super) fn exec_ld_r_d8<B: Bus>(&mut self, bus: &mut B, reg: Reg8) {
        let value = self.read_at_pc(bus);
        self.write_reg8(bus, reg, value);
    }

    pub(super) fn exec_ld_rr_d16<B: Bus>(&mut self, bus: &mut B, reg: Reg16) {
        let value = self.fetch16(bus);
        self.set_reg16(reg, value);
    }

    /// Resolve the address for `[BC]`/`[DE]`/`[HL+]`/`[HL-]`, applying the
    /// HL post-increment/decrement.
    fn indirect_addr(&mut self, ind: Indirect) -> u16 {
        match ind {
            Indirect::BC => self.regs.bc(),
            Indirect::DE => self.regs.de(),
            Indirect::HlInc => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_add(1));
                hl
            }
            Indirect::HlDec => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_sub(1));
                hl
            }
        }
    }

    pub(super) fn exec_ld_indirect_a<B: Bus>(&mut self, bus: &mut B, ind: Indirect) {
        let addr = self.indirect_addr(ind);
        bus.write8(addr, self.regs.a);
    }

    pub(super) fn exec_ld_a_indirect<B: Bus>(&mut self, bus: &mut B, ind: Indirect) {
        let addr = self.indirect_addr(ind);
        self.regs.a = bus.read8(addr);
    }

    pub(super) fn exec_ldh_a8_a<B: Bus>(&mut self, bus: &mut B) {
        let offset = self.read_at_pc(bus) as u16;
        bus.write8(0xFF00 | offset, self.regs.a);
    }

    pub(super) fn exec_ldh_a_a8<B: Bus>(&mut self, bus: &mut B) {
        let offset = self.read_at_pc(bus) as u16;
        self.regs.a = bus.read8(0xFF00 | offset);
    }

    pub(super) fn exec_ldh_c_a<B: Bus>(&mut self, bus: &mut B) {
        let addr = 0xFF00 | self.regs.c as u16;
        bus.write8(addr, self.regs.a);
    }

    pub(super) fn exec_ldh_a_c<B: Bus>(&mut self, bus: &mut B) {
        let addr = 0xFF00 | self.regs.c as u16;
        self.regs.a = bus.read8(addr);
    }

    pub(super) fn exec_ld_a16_a<B: Bus>(&mut self, bus: &mut B) {
        let addr = self.fetch16(bus);
        bus.write8(addr, self.regs.a);
    }

    pub(super) fn exec_ld_a_a16<B: Bus>(&mut self, bus: &mut B) {
        let addr = self.fetch16(bus);
        self.regs.a = bus.read8(addr);
    }

    pub(super) fn exec_ld_a16_sp<B: Bus>(&mut self, bus: &mut B) {
        let addr = self.fetch16(bus);
        let [lo, hi] = self.regs.sp.to_le_bytes();
        bus.write8(addr, lo);
        bus.write8(addr.wrapping_add(1), hi);
    }

    pub(super) fn exec_ld_sp_hl(&mut self) {
        self.regs.sp = self.regs.hl();
    }

    pub(super) fn exec_ld_hl_sp_r8<B: Bus>(&mut self, bus: &mut B) {
        let imm = self.read_at_pc(bus);
        let result = self.alu_add16_signed(self.regs.sp, imm);
        self.regs.set_hl(result);
    }
}
