// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Ordered partitions ("colorings") of a fixed vertex domain.
//!
//! A coloring splits the vertices `0..n` into contiguous, ordered cells. It is
//! stored as four arrays:
//!
//! - `lab`: the vertex at each position; cells are contiguous runs of positions.
//! - `ptn`: at the first position `s` of a cell of size `k + 1`, `ptn[s] = k`.
//!   Entries inside a cell are never read and may hold stale values.
//! - `vertex_to_col`: for each vertex, the start position of its cell. The start
//!   position doubles as the cell's color.
//! - `vertex_to_lab`: for each vertex, its position (inverse of `lab`).
//!
//! plus two cached scalars: the number of cells and a lower bound on the size of
//! the smallest cell.
//!
//! # Memory Model
//!
//! - A coloring owns its buffers. Dropping it releases them exactly once.
//! - Copies never alias storage, so independent copies can be handed to
//!   independent search branches or threads.
//! - Splitting primitives update the cached scalars together with the arrays.
//!
//! # Example
//!
//! ```
//! use ordered_partition::Coloring;
//!
//! let mut coloring = Coloring::new(5);
//! assert_eq!(coloring.cells(), 1);
//!
//! // Individualize vertex 3: it moves to the front of its cell and is split off.
//! let rest = coloring.individualize(3);
//! assert_eq!(rest, Some(1));
//! assert_eq!(coloring.cells(), 2);
//! assert_eq!(coloring.cell_of(3).len(), 1);
//! assert!(coloring.check());
//! ```

mod buffers;
pub mod cell;
pub mod check;
pub mod copy;
pub mod statistics;

pub use cell::{Cell, CellIter};
pub use check::InvariantViolation;
pub use copy::PtnCopyStrategy;
pub use statistics::{Counters, Statistics};

use buffers::ColoringBuffers;

/// Dense vertex identifier, also used for positions and run lengths.
pub type VertexId = u32;

/// An ordered partition of the vertices `0..domain_size`.
#[derive(Debug)]
pub struct Coloring {
    /// `None` until the coloring is initialized.
    buffers: Option<ColoringBuffers>,
    /// Number of cells (cached).
    cells: usize,
    /// Lower bound on the size of the smallest cell; `usize::MAX` when unknown.
    smallest_cell_lower_bound: usize,
    statistics: Statistics,
}

impl Coloring {
    /// Create a coloring with no buffers.
    ///
    /// Only `initialize` and the copy operations may be called on it.
    pub fn uninitialized() -> Self {
        Self {
            buffers: None,
            cells: 0,
            smallest_cell_lower_bound: usize::MAX,
            statistics: Statistics::new(),
        }
    }

    /// Create the unit partition of `domain_size` vertices: identity order, one cell.
    pub fn new(domain_size: usize) -> Self {
        let mut coloring = Self::uninitialized();
        coloring.initialize(domain_size);
        coloring
    }

    /// Create a coloring from a per-vertex color array.
    ///
    /// Cells are ordered by ascending color value; inside a cell, vertices are
    /// in id order. Color values are arbitrary and need not be dense.
    ///
    /// # Example
    ///
    /// ```
    /// use ordered_partition::Coloring;
    ///
    /// let coloring = Coloring::from_colors(&[7, 2, 7, 2, 9]);
    /// assert_eq!(coloring.cells(), 3);
    /// assert_eq!(coloring.lab(), &[1, 3, 0, 2, 4]);
    /// assert_eq!(coloring.vertex_colors(), vec![2, 0, 2, 0, 4]);
    /// ```
    pub fn from_colors(colors: &[VertexId]) -> Self {
        let n = colors.len();
        let mut coloring = Self::uninitialized();
        let buffers = coloring.allocate(n);

        let mut order: Vec<VertexId> = (0..n as VertexId).collect();
        order.sort_by_key(|&v| colors[v as usize]);
        buffers.lab.copy_from_slice(&order);

        let mut cells = 0;
        let mut smallest = usize::MAX;
        let mut start = 0;
        while start < n {
            let color = colors[order[start] as usize];
            let mut end = start + 1;
            while end < n && colors[order[end] as usize] == color {
                end += 1;
            }
            buffers.ptn[start] = (end - start - 1) as VertexId;
            for (position, &vertex) in order.iter().enumerate().take(end).skip(start) {
                buffers.vertex_to_col[vertex as usize] = start as VertexId;
                buffers.vertex_to_lab[vertex as usize] = position as VertexId;
            }
            cells += 1;
            smallest = smallest.min(end - start);
            start = end;
        }

        coloring.cells = cells;
        coloring.smallest_cell_lower_bound = smallest;
        coloring.after_mutation();
        coloring
    }

    /// Allocate buffers for `domain_size` vertices and set the unit partition.
    ///
    /// Does nothing if the coloring is already initialized, whatever its
    /// current domain size; use the copy operations to change size.
    pub fn initialize(&mut self, domain_size: usize) {
        if self.buffers.is_some() {
            return;
        }
        self.allocate(domain_size);
        self.reset();
    }

    /// Whether buffers have been allocated.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.buffers.is_some()
    }

    /// Restore the unit partition over the current domain, keeping the buffers.
    pub fn reset(&mut self) {
        let buffers = self.buffers_mut();
        let n = buffers.len();
        for (i, (slot, inverse)) in buffers
            .lab
            .iter_mut()
            .zip(buffers.vertex_to_lab.iter_mut())
            .enumerate()
        {
            *slot = i as VertexId;
            *inverse = i as VertexId;
        }
        buffers.vertex_to_col.fill(0);
        if n > 0 {
            buffers.ptn[0] = (n - 1) as VertexId;
            self.cells = 1;
            self.smallest_cell_lower_bound = n;
        } else {
            self.cells = 0;
            self.smallest_cell_lower_bound = usize::MAX;
        }
        self.after_mutation();
    }

    /// Number of vertices in the domain.
    #[inline]
    pub fn domain_size(&self) -> usize {
        self.buffers().len()
    }

    /// Number of cells.
    #[inline]
    pub fn cells(&self) -> usize {
        self.cells
    }

    /// Lower bound on the size of the smallest cell (`usize::MAX` if there are no cells).
    #[inline]
    pub fn smallest_cell_lower_bound(&self) -> usize {
        self.smallest_cell_lower_bound
    }

    /// True when every cell is a singleton.
    #[inline]
    pub fn is_discrete(&self) -> bool {
        self.cells == self.domain_size()
    }

    /// The vertex at each position.
    #[inline]
    pub fn lab(&self) -> &[VertexId] {
        &self.buffers().lab
    }

    /// The cell start (color) of each vertex.
    #[inline]
    pub fn vertex_to_col(&self) -> &[VertexId] {
        &self.buffers().vertex_to_col
    }

    /// The position of each vertex.
    #[inline]
    pub fn vertex_to_lab(&self) -> &[VertexId] {
        &self.buffers().vertex_to_lab
    }

    /// Raw run-length storage. Only entries at cell starts are meaningful.
    #[inline]
    pub(crate) fn ptn(&self) -> &[VertexId] {
        &self.buffers().ptn
    }

    /// Per-vertex color array (the start position of each vertex's cell).
    pub fn vertex_colors(&self) -> Vec<VertexId> {
        self.vertex_to_col().to_vec()
    }

    /// Color of vertex `v`.
    #[inline]
    pub fn color_of(&self, v: VertexId) -> usize {
        self.buffers().vertex_to_col[v as usize] as usize
    }

    /// Position of vertex `v`.
    #[inline]
    pub fn position_of(&self, v: VertexId) -> usize {
        self.buffers().vertex_to_lab[v as usize] as usize
    }

    /// Vertex at `position`.
    #[inline]
    pub fn vertex_at(&self, position: usize) -> VertexId {
        self.buffers().lab[position]
    }

    /// The cell containing vertex `v`. O(1).
    pub fn cell_of(&self, v: VertexId) -> Cell {
        self.cell_at(self.color_of(v))
    }

    /// The cell starting at `start`.
    ///
    /// # Panics
    ///
    /// Panics if `start` is not the first position of a cell.
    pub fn cell_at(&self, start: usize) -> Cell {
        let buffers = self.buffers();
        assert!(
            start < buffers.len() && buffers.vertex_to_col[buffers.lab[start] as usize] as usize == start,
            "position {} is not a cell start",
            start
        );
        Cell::new(start, buffers.ptn[start] as usize + 1)
    }

    /// Vertices of `cell`, in position order. O(cell size).
    #[inline]
    pub fn cell_members(&self, cell: Cell) -> &[VertexId] {
        &self.buffers().lab[cell.positions()]
    }

    /// Iterate over all cells in position order. O(cells).
    pub fn iter_cells(&self) -> CellIter<'_> {
        CellIter::new(self.ptn())
    }

    /// Counters for work done by this coloring.
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Zero this coloring's counters.
    pub fn reset_statistics(&mut self) {
        self.statistics.reset();
    }

    /// Split the cell starting at `start` after its first `offset` positions.
    ///
    /// The vertices keep their positions; the second part gets the new color
    /// `start + offset`, which is returned. Cell count and the smallest-cell
    /// bound are updated with the split.
    ///
    /// # Panics
    ///
    /// Panics if `start` is not a cell start or `offset` is not strictly inside the cell.
    pub fn split_cell(&mut self, start: usize, offset: usize) -> usize {
        let cell = self.cell_at(start);
        assert!(
            offset > 0 && offset < cell.len(),
            "split offset {} outside cell {}",
            offset,
            cell
        );
        let new_start = start + offset;
        let buffers = self.buffers_mut();
        buffers.ptn[start] = (offset - 1) as VertexId;
        buffers.ptn[new_start] = (cell.len() - offset - 1) as VertexId;
        for position in new_start..cell.end() {
            let v = buffers.lab[position] as usize;
            buffers.vertex_to_col[v] = new_start as VertexId;
        }

        self.cells += 1;
        self.smallest_cell_lower_bound = self
            .smallest_cell_lower_bound
            .min(offset)
            .min(cell.len() - offset);
        self.statistics.increment_counter(Counters::Splits);
        self.after_mutation();
        new_start
    }

    /// Exchange the vertices at positions `i` and `j` of the same cell.
    ///
    /// # Panics
    ///
    /// Panics if the positions belong to different cells.
    pub fn swap_positions(&mut self, i: usize, j: usize) {
        let buffers = self.buffers_mut();
        let (vi, vj) = (buffers.lab[i], buffers.lab[j]);
        assert_eq!(
            buffers.vertex_to_col[vi as usize], buffers.vertex_to_col[vj as usize],
            "positions {} and {} are in different cells",
            i, j
        );
        buffers.lab.swap(i, j);
        buffers.vertex_to_lab[vi as usize] = j as VertexId;
        buffers.vertex_to_lab[vj as usize] = i as VertexId;
        self.after_mutation();
    }

    /// Isolate vertex `v` as a singleton cell at the front of its current cell.
    ///
    /// Returns the start of the remainder of the old cell, or `None` if `v`
    /// was already a singleton.
    pub fn individualize(&mut self, v: VertexId) -> Option<usize> {
        let cell = self.cell_of(v);
        if cell.is_singleton() {
            return None;
        }
        let position = self.position_of(v);
        if position != cell.start() {
            self.swap_positions(position, cell.start());
        }
        Some(self.split_cell(cell.start(), 1))
    }

    /// Replace the buffers with fresh ones for `domain_size` vertices.
    fn allocate(&mut self, domain_size: usize) -> &mut ColoringBuffers {
        // Drop the old buffers before allocating the new ones.
        self.buffers = None;
        self.statistics.increment_counter(Counters::Allocations);
        self.buffers.insert(ColoringBuffers::allocate(domain_size))
    }

    #[inline]
    fn buffers(&self) -> &ColoringBuffers {
        match &self.buffers {
            Some(buffers) => buffers,
            None => panic!("coloring used before initialize()"),
        }
    }

    #[inline]
    fn buffers_mut(&mut self) -> &mut ColoringBuffers {
        match &mut self.buffers {
            Some(buffers) => buffers,
            None => panic!("coloring used before initialize()"),
        }
    }

    /// Hook run after every public mutation.
    #[inline]
    fn after_mutation(&self) {
        #[cfg(checked_mutations)]
        self.check();
    }
}

impl Default for Coloring {
    fn default() -> Self {
        Self::uninitialized()
    }
}

impl Clone for Coloring {
    /// Full, independent copy. Statistics start from zero.
    fn clone(&self) -> Self {
        let mut copy = Self::uninitialized();
        if self.is_initialized() {
            copy.copy_full_from(self);
        }
        copy
    }

    /// Full copy into `self`, reusing its buffers when the domain size matches.
    fn clone_from(&mut self, source: &Self) {
        if source.is_initialized() {
            self.copy_full_from(source);
        } else {
            self.buffers = None;
            self.cells = 0;
            self.smallest_cell_lower_bound = usize::MAX;
        }
    }
}

impl PartialEq for Coloring {
    /// Two colorings are equal when they order the same vertices into the same
    /// cells; stale `ptn` interiors and statistics are ignored.
    fn eq(&self, other: &Self) -> bool {
        match (&self.buffers, &other.buffers) {
            (None, None) => true,
            (Some(a), Some(b)) => {
                self.cells == other.cells
                    && a.lab == b.lab
                    && a.vertex_to_col == b.vertex_to_col
            }
            _ => false,
        }
    }
}

impl Eq for Coloring {}
