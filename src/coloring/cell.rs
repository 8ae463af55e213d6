// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Explicit cell records over the run-length encoded partition.
//!
//! Consumers never read raw `ptn` storage; they get `Cell` values, which only
//! ever describe real cell starts.

use super::VertexId;
use std::fmt;
use std::ops::Range;

/// One cell of an ordered partition: positions `start..start + len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    start: usize,
    len: usize,
}

impl Cell {
    pub(crate) const fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// First position of the cell. This is also the cell's color.
    #[inline]
    pub const fn start(self) -> usize {
        self.start
    }

    /// Number of vertices in the cell (always at least one).
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(self) -> usize {
        self.len
    }

    /// One past the last position of the cell.
    #[inline]
    pub const fn end(self) -> usize {
        self.start + self.len
    }

    /// The positions covered by the cell.
    #[inline]
    pub fn positions(self) -> Range<usize> {
        self.start..self.end()
    }

    /// True for a cell holding exactly one vertex.
    #[inline]
    pub const fn is_singleton(self) -> bool {
        self.len == 1
    }

    /// Whether `position` lies inside the cell.
    #[inline]
    pub const fn contains(self, position: usize) -> bool {
        position >= self.start && position < self.start + self.len
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}..{})", self.start, self.end())
    }
}

/// Iterator over the cells of a partition, in position order.
///
/// Walks cell starts only, skipping interiors by run length, so a full pass
/// costs O(cells).
pub struct CellIter<'a> {
    ptn: &'a [VertexId],
    position: usize,
}

impl<'a> CellIter<'a> {
    pub(crate) fn new(ptn: &'a [VertexId]) -> Self {
        Self { ptn, position: 0 }
    }
}

impl Iterator for CellIter<'_> {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        if self.position >= self.ptn.len() {
            return None;
        }
        let len = self.ptn[self.position] as usize + 1;
        let cell = Cell::new(self.position, len);
        self.position += len;
        Some(cell)
    }
}
