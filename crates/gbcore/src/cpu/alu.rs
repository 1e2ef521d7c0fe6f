use super::{Cpu, Flags};

impl Cpu {
    /// 8-bit ADD/ADC.
    ///
    /// `carry_in` selects between ADD (false) and ADC with a set carry
    /// (true). Returns the wrapped sum; the caller decides where it goes.
    pub fn alu_add(&mut self, a: u8, b: u8, carry_in: bool) -> u8 {
        let carry_in = carry_in as u8;

        let half = (a & 0x0F) + (b & 0x0F) + carry_in;
        let full = (a as u16) + (b as u16) + (carry_in as u16);
        let result = full as u8;

        // Flags: Z N H C
        self.clear_flags();
        self.set_flag(Flags::Z, result == 0);
        self.set_flag(Flags::N, false);
        self.set_flag(Flags::H, half > 0x0F);
        self.set_flag(Flags::C, full > 0xFF);
        result
    }

    /// 8-bit SUB/SBC: `a - b - borrow_in`.
    pub fn alu_sub(&mut self, a: u8, b: u8, borrow_in: bool) -> u8 {
        let borrow_in = borrow_in as i16;

        let half = (a & 0x0F) as i16 - (b & 0x0F) as i16 - borrow_in;
        let full = a as i16 - b as i16 - borrow_in;
        let result = full as u8;

        self.clear_flags();
        self.set_flag(Flags::Z, result == 0);
        self.set_flag(Flags::N, true);
        self.set_flag(Flags::H, half < 0);
        self.set_flag(Flags::C, full < 0);
        result
    }

    #[inline]
    pub fn alu_and(&mut self, a: u8, b: u8) -> u8 {
        let result = a & b;

        self.clear_flags();
        self.set_flag(Flags::Z, result == 0);
        self.set_flag(Flags::H, true);
        // N and C are already cleared.
        result
    }

    #[inline]
    pub fn alu_or(&mut self, a: u8, b: u8) -> u8 {
        let result = a | b;

        self.clear_flags();
        self.set_flag(Flags::Z, result == 0);
        result
    }

    #[inline]
    pub fn alu_xor(&mut self, a: u8, b: u8) -> u8 {
        let result = a ^ b;

        self.clear_flags();
        self.set_flag(Flags::Z, result == 0);
        result
    }

    /// Compare: sets flags as if `b - a` was performed and discards the
    /// difference.
    ///
    /// Note the operand order. `CP A, x` compares the accumulator against
    /// `x`, so the executor calls `alu_cp(x, A)`.
    #[inline]
    pub fn alu_cp(&mut self, a: u8, b: u8) {
        self.clear_flags();
        self.set_flag(Flags::Z, b == a);
        self.set_flag(Flags::N, true);
        self.set_flag(Flags::H, (a & 0x0F) > (b & 0x0F));
        self.set_flag(Flags::C, a > b);
    }

    /// Rotate left.
    ///
    /// With `through_carry` the old C flag enters bit 0 (RL); otherwise the
    /// bit shifted out of bit 7 wraps around (RLC). Bit 7 of `value` always
    /// ends up in C.
    pub fn alu_rl(&mut self, value: u8, through_carry: bool) -> u8 {
        let carry_out = value & 0x80 != 0;
        let bit0 = if through_carry {
            self.flag(Flags::C) as u8
        } else {
            carry_out as u8
        };
        let result = (value << 1) | bit0;

        self.clear_flags();
        self.set_flag(Flags::Z, result == 0);
        self.set_flag(Flags::C, carry_out);
        result
    }

    /// Rotate right; mirror image of [`Cpu::alu_rl`].
    pub fn alu_rr(&mut self, value: u8, through_carry: bool) -> u8 {
        let carry_out = value & 0x01 != 0;
        let bit7 = if through_carry {
            self.flag(Flags::C) as u8
        } else {
            carry_out as u8
        };
        let result = (value >> 1) | (bit7 << 7);

        self.clear_flags();
        self.set_flag(Flags::Z, result == 0);
        self.set_flag(Flags::C, carry_out);
        result
    }

    /// Decimal adjust accumulator after BCD addition/subtraction.
    ///
    /// - Uses C, H, N and A to compute a correction value.
    /// - Updates A, Z, H, C; leaves N unchanged.
    /// - C ends up set exactly when the 0x60 correction was applied, so a
    ///   carry that was already set is never cleared here.
    pub fn alu_daa(&mut self) {
        let mut a = self.regs.a;
        let mut adjust: u8 = if self.flag(Flags::C) { 0x60 } else { 0x00 };
        if self.flag(Flags::H) {
            adjust |= 0x06;
        }

        if !self.flag(Flags::N) {
            // After an addition.
            if (a & 0x0F) > 0x09 {
                adjust |= 0x06;
            }
            if a > 0x99 {
                adjust |= 0x60;
            }
            a = a.wrapping_add(adjust);
        } else {
            // After a subtraction.
            a = a.wrapping_sub(adjust);
        }

        self.set_flag(Flags::C, adjust >= 0x60);
        self.set_flag(Flags::H, false);
        self.set_flag(Flags::Z, a == 0);
        self.regs.a = a;
    }

    /// 8-bit increment used by INC r and INC [HL].
    ///
    /// Updates Z, N, H while leaving C unchanged.
    #[inline]
    pub fn alu_inc8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        self.set_flag(Flags::Z, result == 0);
        self.set_flag(Flags::N, false);
        self.set_flag(Flags::H, (value & 0x0F) + 1 > 0x0F);
        result
    }

    /// 8-bit decrement used by DEC r and DEC [HL].
    ///
    /// Updates Z, N, H while leaving C unchanged.
    #[inline]
    pub fn alu_dec8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        self.set_flag(Flags::Z, result == 0);
        self.set_flag(Flags::N, true);
        self.set_flag(Flags::H, (value & 0x0F) == 0);
        result
    }

    /// 16-bit add for `ADD HL,rr`.
    ///
    /// Z is unaffected; N is cleared; H and C come from bits 11 and 15.
    #[inline]
    pub fn alu_add16_hl(&mut self, value: u16) {
        let hl = self.regs.hl();
        let result = hl.wrapping_add(value);

        self.set_flag(Flags::N, false);
        self.set_flag(Flags::H, (hl & 0x0FFF) + (value & 0x0FFF) > 0x0FFF);
        self.set_flag(Flags::C, (hl as u32) + (value as u32) > 0xFFFF);

        self.regs.set_hl(result);
    }

    /// Add a signed 8-bit immediate to a 16-bit base (`ADD SP,e8` and
    /// `LD HL,SP+e8`).
    ///
    /// Z and N are cleared; H and C are computed from the low byte.
    #[inline]
    pub fn alu_add16_signed(&mut self, base: u16, imm8: u8) -> u16 {
        let offset = imm8 as i8 as i16 as u16;
        self.set_flag(Flags::N, false);
        self.set_flag(Flags::Z, false);
        self.set_flag(Flags::H, (base & 0x000F) + (offset & 0x000F) > 0x000F);
        self.set_flag(Flags::C, (base & 0x00FF) + (offset & 0x00FF) > 0x00FF);
        base.wrapping_add(offset)
    }
}
