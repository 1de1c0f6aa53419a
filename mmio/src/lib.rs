//! Register access for memory-mapped devices.
//!
//! Drivers are written against [RegisterAccess] rather than raw pointers, so the same driver can
//! be bound to real device memory ([MmioRegion]) or to a simulated register file
//! (`SimRegisters`, behind the `sim` feature).

#![cfg_attr(not(test), no_std)]

mod region;
#[cfg(any(test, feature = "sim"))]
mod sim;

pub use region::MmioRegion;
#[cfg(any(test, feature = "sim"))]
pub use sim::SimRegisters;

/// 32-bit register access at byte offsets from a device base address.
///
/// Implementations must not cache, merge, reorder or elide accesses: every call reaches the
/// device.
pub trait RegisterAccess {
    /// Reads the 32-bit register at `offset`.
    fn read32(&self, offset: usize) -> u32;

    /// Writes `value` to the 32-bit register at `offset`.
    fn write32(&self, offset: usize, value: u32);
}

impl<T: RegisterAccess + ?Sized> RegisterAccess for &T {
    #[inline]
    fn read32(&self, offset: usize) -> u32 {
        (**self).read32(offset)
    }

    #[inline]
    fn write32(&self, offset: usize, value: u32) {
        (**self).write32(offset, value)
    }
}
