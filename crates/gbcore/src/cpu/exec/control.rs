use crate::cpu::{Bus, Condition, Cpu};

impl Cpu {
    #[inline]
    fn condition_met(&self, cc: Option<Condition>) -> bool {
        cc.map_or(true, |cc| self.condition(cc))
    }

    pub(super) fn exec_jr<B: Bus>(&mut self, bus: &mut B, cc: Option<Condition>) {
        let taken = self.condition_met(cc);
        self.jr(bus, taken);
    }

    pub(super) fn exec_jp<B: Bus>(&mut self, bus: &mut B, cc: Option<Condition>) {
        let taken = self.condition_met(cc);
        self.jp_cond(bus, taken);
    }

    pub(super) fn exec_jp_hl(&mut self) {
        self.regs.pc = self.regs.hl();
    }

    pub(super) fn exec_call<B: Bus>(&mut self, bus: &mut B, cc: Option<Condition>) {
        let taken = self.condition_met(cc);
        self.call_cond(bus, taken);
    }

    pub(super) fn exec_ret<B: Bus>(&mut self, bus: &mut B, cc: Option<Condition>) {
        let taken = self.condition_met(cc);
        self.ret_cond(bus, taken);
    }

    pub(super) fn exec_reti<B: Bus>(&mut self, bus: &mut B) {
        self.ret_cond(bus, true);
        self.ime = true;
    }
}
