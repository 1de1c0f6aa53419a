//! Volatile access to a device register block.

use crate::RegisterAccess;
use core::ptr;

/// A block of device registers, accessed through volatile loads and stores.
#[derive(Clone, Copy, Debug)]
pub struct MmioRegion {
    base: usize,
    size: usize,
}

impl MmioRegion {
    /// Creates a region of `size` bytes starting at `base`.
    ///
    /// # Safety
    ///
    /// `base` must be the address of a device register block of at least `size` bytes, mapped
    /// with device (non-cacheable) attributes for the lifetime of the returned region. No other
    /// code may access the block concurrently.
    pub const unsafe fn new(base: usize, size: usize) -> Self {
        assert!(base % 4 == 0, "mmio base must be 4-byte aligned");
        Self { base, size }
    }

    /// Returns the base address of the region.
    pub const fn base(&self) -> usize {
        self.base
    }

    /// Returns the size of the region, in bytes.
    pub const fn size(&self) -> usize {
        self.size
    }

    fn check(&self, offset: usize) {
        debug_assert!(offset + 4 <= self.size, "mmio offset out of bounds");
        debug_assert!(offset % 4 == 0, "mmio offset not aligned");
    }
}

impl RegisterAccess for MmioRegion {
    #[inline]
    fn read32(&self, offset: usize) -> u32 {
        self.check(offset);
        // SAFETY: the caller of `new` guarantees the block is mapped, and the offset is within
        // bounds.
        unsafe { ptr::read_volatile((self.base + offset) as *const u32) }
    }

    #[inline]
    fn write32(&self, offset: usize, value: u32) {
        self.check(offset);
        // SAFETY: see `read32`.
        unsafe { ptr::write_volatile((self.base + offset) as *mut u32, value) }
    }
}
