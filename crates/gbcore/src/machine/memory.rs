use crate::cpu::Bus;
use crate::{Error, Result, MEMORY_SIZE};

/// Flat 64 KiB address space plus the machine-cycle counter.
///
/// `read8`/`write8` (the [`Bus`] side) are CPU accesses and each cost one
/// machine cycle. `peek`/`poke`/`load` are host-side accesses used to set up
/// or inspect memory and never touch the counter.
#[derive(Clone)]
pub struct Memory {
    bytes: Box<[u8]>,
    mcycles: u64,
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Memory")
            .field("size", &self.bytes.len())
            .field("mcycles", &self.mcycles)
            .finish()
    }
}

impl Memory {
    pub fn new() -> Self {
        Self {
            bytes: vec![0; MEMORY_SIZE].into_boxed_slice(),
            mcycles: 0,
        }
    }

    /// Read without consuming a machine cycle.
    #[inline]
    pub fn peek(&self, addr: u16) -> u8 {
        self.bytes[addr as usize]
    }

    /// Write without consuming a machine cycle.
    #[inline]
    pub fn poke(&mut self, addr: u16, value: u8) {
        self.bytes[addr as usize] = value;
    }

    /// Copy `image` into memory starting at `offset`.
    ///
    /// Fails without writing anything if the image would run past 0xFFFF.
    pub fn load(&mut self, offset: u16, image: &[u8]) -> Result<()> {
        let start = offset as usize;
        let end = start
            .checked_add(image.len())
            .filter(|&end| end <= MEMORY_SIZE)
            .ok_or(Error::ImageTooLarge {
                offset,
                len: image.len(),
            })?;
        self.bytes[start..end].copy_from_slice(image);
        Ok(())
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Mutable view of the whole address space for peripherals that map
    /// their registers into it. Writes through this view are not bus cycles.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    #[inline]
    pub fn mcycles(&self) -> u64 {
        self.mcycles
    }
}

impl Bus for Memory {
    #[inline]
    fn read8(&mut self, addr: u16) -> u8 {
        self.mcycles += 1;
        self.bytes[addr as usize]
    }

    #[inline]
    fn write8(&mut self, addr: u16, value: u8) {
        self.mcycles += 1;
        self.bytes[addr as usize] = value;
    }

    #[inline]
    fn mcycles(&self) -> u64 {
        self.mcycles
    }
}
