use super::{Bus, Condition, Cpu, Flags, Reg16, Reg8};

impl Cpu {
    /// Read an 8-bit register, or the byte at HL for `Reg8::HlInd`.
    #[inline]
    pub(super) fn read_reg8<B: Bus>(&mut self, bus: &mut B, reg: Reg8) -> u8 {
        match reg {
            Reg8::B => self.regs.b,
            Reg8::C => self.regs.c,
            Reg8::D => self.regs.d,
            Reg8::E => self.regs.e,
            Reg8::H => self.regs.h,
            Reg8::L => self.regs.l,
            Reg8::HlInd => bus.read8(self.regs.hl()),
            Reg8::A => self.regs.a,
        }
    }

    /// Write an 8-bit register, or the byte at HL for `Reg8::HlInd`.
    #[inline]
    pub(super) fn write_reg8<B: Bus>(&mut self, bus: &mut B, reg: Reg8, value: u8) {
        match reg {
            Reg8::B => self.regs.b = value,
            Reg8::C => self.regs.c = value,
            Reg8::D => self.regs.d = value,
            Reg8::E => self.regs.e = value,
            Reg8::H => self.regs.h = value,
            Reg8::L => self.regs.l = value,
            Reg8::HlInd => bus.write8(self.regs.hl(), value),
            Reg8::A => self.regs.a = value,
        }
    }

    #[inline]
    pub(super) fn reg16(&self, reg: Reg16) -> u16 {
        match reg {
            Reg16::BC => self.regs.bc(),
            Reg16::DE => self.regs.de(),
            Reg16::HL => self.regs.hl(),
            Reg16::SP => self.regs.sp,
        }
    }

    #[inline]
    pub(super) fn set_reg16(&mut self, reg: Reg16, value: u16) {
        match reg {
            Reg16::BC => self.regs.set_bc(value),
            Reg16::DE => self.regs.set_de(value),
            Reg16::HL => self.regs.set_hl(value),
            Reg16::SP => self.regs.sp = value,
        }
    }

    #[inline]
    pub(super) fn condition(&self, cc: Condition) -> bool {
        match cc {
            Condition::NZ => !self.flag(Flags::Z),
            Condition::Z => self.flag(Flags::Z),
            Condition::NC => !self.flag(Flags::C),
            Condition::C => self.flag(Flags::C),
        }
    }

    /// Read the byte at PC through the bus, then advance PC.
    #[inline]
    pub fn read_at_pc<B: Bus>(&mut self, bus: &mut B) -> u8 {
        let value = bus.read8(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        value
    }

    /// Read the byte at SP through the bus, then advance SP (pop direction).
    #[inline]
    pub fn read_at_sp<B: Bus>(&mut self, bus: &mut B) -> u8 {
        let value = bus.read8(self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(1);
        value
    }

    /// Decrement SP, then write at the new SP (push direction).
    #[inline]
    pub fn write_at_sp<B: Bus>(&mut self, bus: &mut B, value: u8) {
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, value);
    }

    /// Fetch a little-endian 16-bit immediate: low byte first.
    #[inline]
    pub(super) fn fetch16<B: Bus>(&mut self, bus: &mut B) -> u16 {
        let lo = self.read_at_pc(bus);
        let hi = self.read_at_pc(bus);
        u16::from_le_bytes([lo, hi])
    }

    /// Push a 16-bit value. The stack ends up with memory[SP] = low and
    /// memory[SP+1] = high.
    #[inline]
    pub fn push_u16<B: Bus>(&mut self, bus: &mut B, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.write_at_sp(bus, hi);
        self.write_at_sp(bus, lo);
    }

    #[inline]
    pub fn pop_u16<B: Bus>(&mut self, bus: &mut B) -> u16 {
        let lo = self.read_at_sp(bus);
        let hi = self.read_at_sp(bus);
        u16::from_le_bytes([lo, hi])
    }

    /// Relative jump helper used by JR/JR cc.
    ///
    /// The displacement is a signed 8-bit offset relative to the address
    /// following the operand. It is fetched whether or not the jump is taken.
    pub(super) fn jr<B: Bus>(&mut self, bus: &mut B, cond: bool) {
        let offset = self.read_at_pc(bus) as i8;
        if cond {
            self.regs.pc = self.regs.pc.wrapping_add(offset as i16 as u16);
        }
    }

    /// Absolute jump helper used by JP a16 and JP cc,a16.
    pub(super) fn jp_cond<B: Bus>(&mut self, bus: &mut B, cond: bool) {
        let addr = self.fetch16(bus);
        if cond {
            self.regs.pc = addr;
        }
    }

    /// Call helper used by CALL a16 and CALL cc,a16.
    pub(super) fn call_cond<B: Bus>(&mut self, bus: &mut B, cond: bool) {
        let addr = self.fetch16(bus);
        if cond {
            let ret = self.regs.pc;
            self.push_u16(bus, ret);
            self.regs.pc = addr;
        }
    }

    /// Return helper used by RET and RET cc.
    pub(super) fn ret_cond<B: Bus>(&mut self, bus: &mut B, cond: bool) {
        if cond {
            self.regs.pc = self.pop_u16(bus);
        }
    }
}
