//! Simulated register file.
//!
//! Stands in for device memory when running drivers off-target. Every access is counted per
//! register, and a register can be scheduled to gain bits after a number of reads, which is how
//! a device flag rising under a polling loop is simulated.

use crate::RegisterAccess;
use core::cell::Cell;

/// A pending "raise these bits after N reads" event.
#[derive(Clone, Copy)]
struct Raise {
    index: usize,
    mask: u32,
    reads_left: usize,
}

/// A file of `N` simulated 32-bit registers, at byte offsets `0, 4, .., 4 * (N - 1)`.
pub struct SimRegisters<const N: usize> {
    words: [Cell<u32>; N],
    reads: [Cell<usize>; N],
    writes: [Cell<usize>; N],
    raise: Cell<Option<Raise>>,
}

impl<const N: usize> SimRegisters<N> {
    /// Creates a register file with every register cleared.
    pub const fn new() -> Self {
        Self {
            words: [const { Cell::new(0) }; N],
            reads: [const { Cell::new(0) }; N],
            writes: [const { Cell::new(0) }; N],
            raise: Cell::new(None),
        }
    }

    /// Sets a register as the device would, without counting it as a driver access.
    pub fn set(&self, offset: usize, value: u32) {
        self.words[Self::index(offset)].set(value);
    }

    /// Returns the current value of a register, without counting it as a driver access.
    pub fn get(&self, offset: usize) -> u32 {
        self.words[Self::index(offset)].get()
    }

    /// Number of driver reads of the register at `offset`.
    pub fn reads(&self, offset: usize) -> usize {
        self.reads[Self::index(offset)].get()
    }

    /// Number of driver writes to the register at `offset`.
    pub fn writes(&self, offset: usize) -> usize {
        self.writes[Self::index(offset)].get()
    }

    /// Resets the access counters, keeping register values.
    pub fn clear_counts(&self) {
        for i in 0..N {
            self.reads[i].set(0);
            self.writes[i].set(0);
        }
    }

    /// Sets `mask` in the register at `offset` once it has been read `reads` more times.
    ///
    /// The first `reads` reads observe the current value, the next one observes the raised
    /// bits. Replaces any previously scheduled raise.
    pub fn raise_after(&self, offset: usize, mask: u32, reads: usize) {
        self.raise.set(Some(Raise {
            index: Self::index(offset),
            mask,
            reads_left: reads,
        }));
    }

    fn index(offset: usize) -> usize {
        assert!(offset % 4 == 0, "register offset {offset:#x} not aligned");
        assert!(offset / 4 < N, "register offset {offset:#x} out of range");
        offset / 4
    }
}

impl<const N: usize> Default for SimRegisters<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> RegisterAccess for SimRegisters<N> {
    fn read32(&self, offset: usize) -> u32 {
        let index = Self::index(offset);

        if let Some(mut raise) = self.raise.get() {
            if raise.index == index {
                if raise.reads_left == 0 {
                    let word = &self.words[index];
                    word.set(word.get() | raise.mask);
                    self.raise.set(None);
                } else {
                    raise.reads_left -= 1;
                    self.raise.set(Some(raise));
                }
            }
        }

        let count = &self.reads[index];
        count.set(count.get() + 1);
        self.words[index].get()
    }

    fn write32(&self, offset: usize, value: u32) {
        let index = Self::index(offset);
        let count = &self.writes[index];
        count.set(count.get() + 1);
        self.words[index].set(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_accesses() {
        let sim = SimRegisters::<4>::new();
        sim.write32(0x8, 0x41);
        sim.write32(0x8, 0x42);
        assert_eq!(sim.read32(0x8), 0x42);
        assert_eq!(sim.writes(0x8), 2);
        assert_eq!(sim.reads(0x8), 1);

        // Device-side accesses are not counted.
        sim.set(0xC, 7);
        assert_eq!(sim.get(0xC), 7);
        assert_eq!(sim.reads(0xC), 0);
        assert_eq!(sim.writes(0xC), 0);

        sim.clear_counts();
        assert_eq!(sim.writes(0x8), 0);
        assert_eq!(sim.get(0x8), 0x42);
    }

    #[test]
    fn raise_after_reads() {
        let sim = SimRegisters::<4>::new();
        sim.set(0x4, 0b100);
        sim.raise_after(0x4, 0b010, 2);

        // Reads of other registers do not advance the event.
        sim.read32(0x0);
        assert_eq!(sim.read32(0x4), 0b100);
        assert_eq!(sim.read32(0x4), 0b100);
        assert_eq!(sim.read32(0x4), 0b110);
        assert_eq!(sim.read32(0x4), 0b110);

        // Raising immediately.
        let sim = SimRegisters::<4>::new();
        sim.raise_after(0x4, 1, 0);
        assert_eq!(sim.read32(0x4), 1);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn rejects_out_of_range() {
        let sim = SimRegisters::<4>::new();
        sim.read32(0x10);
    }
}
