use crate::cpu::{AluOp, Bus, Cpu, Flags, Reg16, Reg8, RotateA};

impl Cpu {
    /// Apply an accumulator ALU operation to `value`.
    ///
    /// ADC/SBC take their carry/borrow from the current C flag. CP leaves A
    /// untouched.
    fn alu_apply(&mut self, op: AluOp, value: u8) {
        let a = self.regs.a;
        let carry = self.flag(Flags::C);
        self.regs.a = match op {
            AluOp::Add => self.alu_add(a, value, false),
            AluOp::Adc => self.alu_add(a, value, carry),
            AluOp::Sub => self.alu_sub(a, value, false),
            AluOp::Sbc => self.alu_sub(a, value, carry),
            AluOp::And => self.alu_and(a, value),
            AluOp::Xor => self.alu_xor(a, value),
            AluOp::Or => self.alu_or(a, value),
            AluOp::Cp => {
                self.alu_cp(value, a);
                a
            }
        };
    }

    pub(super) fn exec_alu_reg<B: Bus>(&mut self, bus: &mut B, op: AluOp, reg: Reg8) {
        let value = self.read_reg8(bus, reg);
        self.alu_apply(op, value);
    }

    pub(super) fn exec_alu_imm<B: Bus>(&mut self, bus: &mut B, op: AluOp) {
        let value = self.read_at_pc(bus);
        self.alu_apply(op, value);
    }

    /// RLCA/RRCA/RLA/RRA. Unlike the CB-prefixed rotates these always clear
    /// Z.
    pub(super) fn exec_rotate_a(&mut self, rot: RotateA) {
        let a = self.regs.a;
        self.regs.a = match rot {
            RotateA::Rlca => self.alu_rl(a, false),
            RotateA::Rrca => self.alu_rr(a, false),
            RotateA::Rla => self.alu_rl(a, true),
            RotateA::Rra => self.alu_rr(a, true),
        };
        self.set_flag(Flags::Z, false);
    }

    pub(super) fn exec_add_hl_rr(&mut self, reg: Reg16) {
        let value = self.reg16(reg);
        self.alu_add16_hl(value);
    }

    pub(super) fn exec_add_sp_r8<B: Bus>(&mut self, bus: &mut B) {
        let imm = self.read_at_pc(bus);
        self.regs.sp = self.alu_add16_signed(self.regs.sp, imm);
    }

    pub(super) fn exec_cpl(&mut self) {
        self.regs.a = !self.regs.a;
        self.set_flag(Flags::H, true);
        self.set_flag(Flags::N, true);
    }

    pub(super) fn exec_scf(&mut self) {
        self.set_flag(Flags::C, true);
        self.set_flag(Flags::H, false);
        self.set_flag(Flags::N, false);
    }

    pub(super) fn exec_ccf(&mut self) {
        let carry = self.flag(Flags::C);
        self.set_flag(Flags::C, !carry);
        self.set_flag(Flags::H, false);
        self.set_flag(Flags::N, false);
    }
}
