// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Copy engine: independent replicas of a coloring.
//!
//! Three entry points, from cheapest to most thorough:
//!
//! - `copy_ptn_from`: bulk copy of the run-length array only.
//! - `copy_from`: reuses buffers when the domain sizes match and then assumes
//!   both colorings already share the same `lab`; otherwise a full copy.
//! - `copy_full_from`: always replaces every array.
//!
//! The run-length array is reproduced either in one bulk copy or by walking
//! cell starts, depending on how many cells the source has. Both strategies
//! agree at every cell start; they only differ in cost and in what is left in
//! the (never read) interior slots.

use super::{Coloring, Counters, VertexId};

/// `ptn` is bulk-copied when the source has more than `domain_size / DENSE_COPY_DIVISOR` cells.
pub const DENSE_COPY_DIVISOR: usize = 4;

/// How the run-length array is reproduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PtnCopyStrategy {
    /// Copy every slot. O(domain size).
    Bulk,
    /// Copy only the slots at cell starts. O(cells).
    CellStarts,
}

impl PtnCopyStrategy {
    /// Pick the cheaper strategy for a partition with `cells` cells over `domain_size` vertices.
    #[inline]
    pub fn for_density(cells: usize, domain_size: usize) -> Self {
        if cells > domain_size / DENSE_COPY_DIVISOR {
            PtnCopyStrategy::Bulk
        } else {
            PtnCopyStrategy::CellStarts
        }
    }

    fn counter(self) -> Counters {
        match self {
            PtnCopyStrategy::Bulk => Counters::BulkPtnCopies,
            PtnCopyStrategy::CellStarts => Counters::SparsePtnCopies,
        }
    }
}

/// Reproduce `src` into `dst` at every cell start.
fn copy_cell_lengths(dst: &mut [VertexId], src: &[VertexId], strategy: PtnCopyStrategy) {
    debug_assert_eq!(dst.len(), src.len());
    match strategy {
        PtnCopyStrategy::Bulk => dst.copy_from_slice(src),
        PtnCopyStrategy::CellStarts => {
            let mut i = 0;
            while i < src.len() {
                let run = src[i];
                dst[i] = run;
                i += run as usize + 1;
            }
        }
    }
}

impl Coloring {
    /// Make `self` a copy of `source`, reusing buffers when possible.
    ///
    /// When `self` is already initialized with the same domain size, only the
    /// cell structure (`ptn`, `vertex_to_col` and the cached scalars) is copied
    /// and `lab`/`vertex_to_lab` are left as they are. That is only correct if
    /// `self.lab()` already equals `source.lab()`, which is checked in debug
    /// builds. Use [`Coloring::copy_full_from`] whenever positions may differ.
    ///
    /// Otherwise behaves like `copy_full_from`.
    ///
    /// # Panics
    ///
    /// Panics if `source` is not initialized.
    pub fn copy_from(&mut self, source: &Coloring) {
        let n = source.domain_size();
        let reusable = matches!(&self.buffers, Some(buffers) if buffers.len() == n);
        if !reusable {
            self.copy_full_from(source);
            return;
        }

        debug_assert!(
            self.lab() == source.lab(),
            "copy_from requires both colorings to share lab; use copy_full_from"
        );

        let strategy = PtnCopyStrategy::for_density(source.cells, n);
        tracing::trace!(domain_size = n, cells = source.cells, ?strategy, "fast coloring copy");

        let src = source.buffers();
        let dst = self.buffers_mut();
        copy_cell_lengths(&mut dst.ptn, &src.ptn, strategy);
        dst.vertex_to_col.copy_from_slice(&src.vertex_to_col);

        self.cells = source.cells;
        self.smallest_cell_lower_bound = source.smallest_cell_lower_bound;
        self.statistics.increment_counter(strategy.counter());
        self.statistics.increment_counter(Counters::FastCopies);
        self.after_mutation();
    }

    /// Make `self` a full, independent copy of `source`.
    ///
    /// Buffers are kept if the domain size matches, otherwise released and
    /// re-allocated at the source's size. Every array and cached field is
    /// replaced.
    ///
    /// # Panics
    ///
    /// Panics if `source` is not initialized.
    pub fn copy_full_from(&mut self, source: &Coloring) {
        let n = source.domain_size();
        let reusable = matches!(&self.buffers, Some(buffers) if buffers.len() == n);
        if !reusable {
            self.allocate(n);
        }

        let strategy = PtnCopyStrategy::for_density(source.cells, n);
        tracing::trace!(domain_size = n, cells = source.cells, ?strategy, reused = reusable, "full coloring copy");

        let src = source.buffers();
        let dst = self.buffers_mut();
        copy_cell_lengths(&mut dst.ptn, &src.ptn, strategy);
        dst.lab.copy_from_slice(&src.lab);
        dst.vertex_to_col.copy_from_slice(&src.vertex_to_col);
        dst.vertex_to_lab.copy_from_slice(&src.vertex_to_lab);

        self.cells = source.cells;
        self.smallest_cell_lower_bound = source.smallest_cell_lower_bound;
        self.statistics.increment_counter(strategy.counter());
        self.statistics.increment_counter(Counters::FullCopies);
        self.after_mutation();
    }

    /// Bulk-copy `source`'s run-length array into `self`.
    ///
    /// For callers that already keep every other field in sync.
    ///
    /// # Panics
    ///
    /// Panics if either coloring is uninitialized or the domain sizes differ.
    pub fn copy_ptn_from(&mut self, source: &Coloring) {
        self.copy_ptn_with(source, PtnCopyStrategy::Bulk);
    }

    /// Copy `source`'s run-length array into `self` with an explicit strategy.
    ///
    /// # Panics
    ///
    /// Panics if either coloring is uninitialized or the domain sizes differ.
    pub fn copy_ptn_with(&mut self, source: &Coloring, strategy: PtnCopyStrategy) {
        assert_eq!(
            self.domain_size(),
            source.domain_size(),
            "ptn copy between colorings of different domain sizes"
        );
        copy_cell_lengths(&mut self.buffers_mut().ptn, &source.buffers().ptn, strategy);
        self.statistics.increment_counter(strategy.counter());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Coloring whose cells, in order, have the given sizes.
    fn with_cells(sizes: &[usize]) -> Coloring {
        let mut coloring = Coloring::new(sizes.iter().sum());
        let mut start = 0;
        for &size in &sizes[..sizes.len() - 1] {
            coloring.split_cell(start, size);
            start += size;
        }
        coloring
    }

    fn starts_agree(a: &Coloring, b: &Coloring) -> bool {
        a.iter_cells()
            .all(|cell| a.ptn()[cell.start()] == b.ptn()[cell.start()])
    }

    #[test]
    fn test_strategy_threshold() {
        assert_eq!(PtnCopyStrategy::for_density(1, 8), PtnCopyStrategy::CellStarts);
        assert_eq!(PtnCopyStrategy::for_density(2, 8), PtnCopyStrategy::CellStarts);
        assert_eq!(PtnCopyStrategy::for_density(3, 8), PtnCopyStrategy::Bulk);
        assert_eq!(PtnCopyStrategy::for_density(8, 8), PtnCopyStrategy::Bulk);
        // Tiny domains: every partition counts as dense.
        assert_eq!(PtnCopyStrategy::for_density(1, 3), PtnCopyStrategy::Bulk);
    }

    #[test]
    fn test_cell_starts_copy_leaves_interior_untouched() {
        let src = [3, 0, 0, 0, 1, 0];
        let mut dst = [9; 6];
        copy_cell_lengths(&mut dst, &src, PtnCopyStrategy::CellStarts);
        assert_eq!(dst, [3, 9, 9, 9, 1, 9]);
    }

    #[test]
    fn test_strategies_agree_single_cell() {
        let source = Coloring::new(8);
        let mut bulk = Coloring::new(8);
        let mut sparse = Coloring::new(8);
        bulk.copy_ptn_with(&source, PtnCopyStrategy::Bulk);
        sparse.copy_ptn_with(&source, PtnCopyStrategy::CellStarts);
        assert!(starts_agree(&source, &bulk));
        assert!(starts_agree(&source, &sparse));
    }

    #[test]
    fn test_strategies_agree_discrete() {
        let source = with_cells(&[1; 8]);
        assert_eq!(source.cells(), 8);
        let mut bulk = Coloring::new(8);
        let mut sparse = Coloring::new(8);
        bulk.copy_ptn_with(&source, PtnCopyStrategy::Bulk);
        sparse.copy_ptn_with(&source, PtnCopyStrategy::CellStarts);
        assert!(starts_agree(&source, &bulk));
        assert!(starts_agree(&source, &sparse));
    }

    #[test]
    fn test_copy_full_reallocates_on_size_change() {
        let source = with_cells(&[2, 3, 5]);
        let mut copy = Coloring::new(4);
        copy.copy_full_from(&source);
        assert_eq!(copy.domain_size(), 10);
        assert_eq!(copy, source);
        assert_eq!(copy.smallest_cell_lower_bound(), 2);
        assert_eq!(copy.statistics().get(Counters::Allocations), 2);
        assert!(copy.check());
    }

    #[test]
    fn test_copy_full_reuses_matching_buffers() {
        let source = with_cells(&[4, 4]);
        let mut copy = Coloring::new(8);
        let lab_ptr = copy.lab().as_ptr();
        copy.copy_full_from(&source);
        assert_eq!(copy.lab().as_ptr(), lab_ptr);
        assert_eq!(copy.statistics().get(Counters::Allocations), 1);
        assert_eq!(copy.statistics().get(Counters::FullCopies), 1);
        assert_eq!(copy.statistics().get(Counters::SparsePtnCopies), 1);
    }

    #[test]
    fn test_copy_from_fast_path() {
        // Same lab in both: split without moving vertices.
        let source = with_cells(&[1, 2, 5]);
        let mut copy = Coloring::new(8);
        copy.copy_from(&source);
        assert_eq!(copy, source);
        assert_eq!(copy.statistics().get(Counters::FastCopies), 1);
        assert_eq!(copy.statistics().get(Counters::FullCopies), 0);
        assert!(copy.check());
    }

    #[test]
    fn test_copy_from_falls_back_when_uninitialized() {
        let source = with_cells(&[3, 3]);
        let mut copy = Coloring::uninitialized();
        copy.copy_from(&source);
        assert_eq!(copy, source);
        assert_eq!(copy.statistics().get(Counters::FullCopies), 1);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "share lab")]
    fn test_copy_from_rejects_diverged_lab() {
        let mut source = Coloring::new(4);
        source.swap_positions(0, 1);
        let mut copy = Coloring::new(4);
        copy.copy_from(&source);
    }

    #[test]
    #[should_panic(expected = "different domain sizes")]
    fn test_copy_ptn_size_mismatch_panics() {
        let mut copy = Coloring::new(3);
        copy.copy_ptn_from(&Coloring::new(4));
    }
}
