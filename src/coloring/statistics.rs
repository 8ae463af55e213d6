// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-coloring counters.
//!
//! Counters are owned by the coloring that performed the work (the copy
//! destination, for copies) and are never copied between colorings.

use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(EnumCountMacro, Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Buffer allocations (initialize, or a copy that changed domain size).
    Allocations,
    /// Copies that reused buffers and left `lab` untouched.
    FastCopies,
    /// Copies that replaced every array.
    FullCopies,
    /// `ptn` reproduced by one bulk copy.
    BulkPtnCopies,
    /// `ptn` reproduced by walking cell starts.
    SparsePtnCopies,
    /// Cell splits (including those done by individualization).
    Splits,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    #[inline]
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Zero every counter.
    pub fn reset(&mut self) {
        self.stats = [0; Counters::COUNT];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let stats = Statistics::new();
        assert_eq!(stats.get(Counters::Allocations), 0);
        assert_eq!(stats.get(Counters::Splits), 0);
    }

    #[test]
    fn test_increment_and_reset() {
        let mut stats = Statistics::new();
        stats.increment_counter(Counters::FastCopies);
        stats.increment_counter(Counters::FastCopies);
        stats.increment_counter(Counters::BulkPtnCopies);
        assert_eq!(stats.get(Counters::FastCopies), 2);
        assert_eq!(stats.get(Counters::BulkPtnCopies), 1);
        assert_eq!(stats.get(Counters::FullCopies), 0);

        stats.reset();
        assert_eq!(stats.get(Counters::FastCopies), 0);
    }
}
