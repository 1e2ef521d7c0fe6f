use typed_builder::TypedBuilder;

use super::{Cpu, Flags, Registers};

/// Register image the CPU is put in at power-on and on `reset`.
///
/// The defaults match the DMG state after the boot ROM hands control to
/// cartridge code at 0x0100 (as documented in Pan Docs). Hosts that run a
/// real boot ROM can start from PC=0x0000 instead:
///
/// ```
/// use gbcore::{BootState, Cpu};
///
/// let cpu = Cpu::with_boot_state(BootState::builder().pc(0x0000).build());
/// assert_eq!(cpu.regs.pc, 0x0000);
/// assert_eq!(cpu.regs.sp, 0xFFFE);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, TypedBuilder)]
pub struct BootState {
    #[builder(default = 0x01)]
    pub a: u8,
    /// Raw F value; the low nibble is dropped when applied.
    #[builder(default = 0xB0)]
    pub f: u8,
    #[builder(default = 0x00)]
    pub b: u8,
    #[builder(default = 0x13)]
    pub c: u8,
    #[builder(default = 0x00)]
    pub d: u8,
    #[builder(default = 0xD8)]
    pub e: u8,
    #[builder(default = 0x01)]
    pub h: u8,
    #[builder(default = 0x4D)]
    pub l: u8,
    #[builder(default = 0xFFFE)]
    pub sp: u16,
    #[builder(default = 0x0100)]
    pub pc: u16,
    #[builder(default = true)]
    pub ime: bool,
}

impl Default for BootState {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    pub fn new() -> Self {
        Self::with_boot_state(BootState::default())
    }

    pub fn with_boot_state(boot: BootState) -> Self {
        let mut cpu = Self {
            regs: Registers::default(),
            ime: false,
            halted: false,
            stopped: false,
            locked: false,
            boot,
        };
        cpu.apply_boot_state();
        cpu
    }

    /// Reset the CPU to its configured power-on state.
    pub fn reset(&mut self) {
        self.halted = false;
        self.stopped = false;
        self.locked = false;
        self.apply_boot_state();
        log::info!(
            "CPU reset: PC=0x{:04X} SP=0x{:04X} AF=0x{:04X}",
            self.regs.pc,
            self.regs.sp,
            self.regs.af()
        );
    }

    pub fn boot_state(&self) -> &BootState {
        &self.boot
    }

    fn apply_boot_state(&mut self) {
        let boot = self.boot;
        self.regs = Registers {
            a: boot.a,
            f: Flags::from_bits_truncate(boot.f),
            b: boot.b,
            c: boot.c,
            d: boot.d,
            e: boot.e,
            h: boot.h,
            l: boot.l,
            sp: boot.sp,
            pc: boot.pc,
        };
        self.ime = boot.ime;
    }
}
