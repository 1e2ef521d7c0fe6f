/// Abstraction over the Game Boy bus.
///
/// Every `read8`/`write8` is one machine cycle. Implementations count those
/// accesses and report the running total through `mcycles`; nothing else
/// may advance the count.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);
    /// Machine cycles elapsed on this bus so far.
    fn mcycles(&self) -> u64;
}
