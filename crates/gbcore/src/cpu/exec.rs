mod alu;
mod control;
mod incdec;
mod ld;
mod stack;
mod system;

use super::{Bus, Cpu, Instruction};
use crate::{Error, Result};

impl Cpu {
    /// Run the handler for a decoded instruction.
    ///
    /// `opcode` is the byte the instruction was decoded from; it is only
    /// needed to report opcode holes.
    pub(super) fn exec_instruction<B: Bus>(
        &mut self,
        bus: &mut B,
        instruction: Instruction,
        opcode: u8,
    ) -> Result<()> {
        match instruction {
            Instruction::Nop => {}

            Instruction::LdRR { dst, src } => self.exec_ld_r_r(bus, dst, src),
            Instruction::LdRImm(reg) => self.exec_ld_r_d8(bus, reg),
            Instruction::LdRrImm(reg) => self.exec_ld_rr_d16(bus, reg),
            Instruction::LdIndA(ind) => self.exec_ld_indirect_a(bus, ind),
            Instruction::LdAInd(ind) => self.exec_ld_a_indirect(bus, ind),
            Instruction::LdhImmA => self.exec_ldh_a8_a(bus),
            Instruction::LdhAImm => self.exec_ldh_a_a8(bus),
            Instruction::LdhCA => self.exec_ldh_c_a(bus),
            Instruction::LdhAC => self.exec_ldh_a_c(bus),
            Instruction::LdAbsA => self.exec_ld_a16_a(bus),
            Instruction::LdAAbs => self.exec_ld_a_a16(bus),
            Instruction::LdAbsSp => self.exec_ld_a16_sp(bus),
            Instruction::LdSpHl => self.exec_ld_sp_hl(),
            Instruction::LdHlSpOffset => self.exec_ld_hl_sp_r8(bus),

            Instruction::Alu(op, reg) => self.exec_alu_reg(bus, op, reg),
            Instruction::AluImm(op) => self.exec_alu_imm(bus, op),
            Instruction::AddHl(reg) => self.exec_add_hl_rr(reg),
            Instruction::AddSpOffset => self.exec_add_sp_r8(bus),
            Instruction::Rotate(rot) => self.exec_rotate_a(rot),
            Instruction::Daa => self.alu_daa(),
            Instruction::Cpl => self.exec_cpl(),
            Instruction::Scf => self.exec_scf(),
            Instruction::Ccf => self.exec_ccf(),

            Instruction::Inc8(reg) => self.exec_inc8(bus, reg),
            Instruction::Dec8(reg) => self.exec_dec8(bus, reg),
            Instruction::Inc16(reg) => self.exec_inc16(reg),
            Instruction::Dec16(reg) => self.exec_dec16(reg),

            Instruction::Jr(cc) => self.exec_jr(bus, cc),
            Instruction::Jp(cc) => self.exec_jp(bus, cc),
            Instruction::JpHl => self.exec_jp_hl(),
            Instruction::Call(cc) => self.exec_call(bus, cc),
            Instruction::Ret(cc) => self.exec_ret(bus, cc),
            Instruction::Reti => self.exec_reti(bus),
            Instruction::Rst(vector) => self.exec_rst(bus, vector),
            Instruction::Push(pair) => self.exec_push(bus, pair),
            Instruction::Pop(pair) => self.exec_pop(bus, pair),

            Instruction::Halt => self.exec_halt(),
            Instruction::Stop => self.exec_stop(bus),
            Instruction::Di => self.exec_di(),
            Instruction::Ei => self.exec_ei(),
            Instruction::Prefix => self.exec_prefix(bus),

            // Pandocs documents these opcode holes as hard-locking the CPU
            // until power-off. We mark the CPU as locked and report the
            // opcode to the host.
            Instruction::Illegal(_) => {
                let pc = self.regs.pc.wrapping_sub(1);
                if !self.locked {
                    log::error!(
                        "GB CPU locked: invalid opcode 0x{opcode:02X} at PC=0x{pc:04X} (SP=0x{sp:04X} AF=0x{af:04X} BC=0x{bc:04X} DE=0x{de:04X} HL=0x{hl:04X})",
                        opcode = opcode,
                        pc = pc,
                        sp = self.regs.sp,
                        af = self.regs.af(),
                        bc = self.regs.bc(),
                        de = self.regs.de(),
                        hl = self.regs.hl(),
                    );
                }
                self.locked = true;
                return Err(Error::IllegalOpcode { opcode, pc });
            }
        }
        Ok(())
    }
}
