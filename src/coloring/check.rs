// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Consistency checking for colorings.
//!
//! `validate` reports the first broken invariant as a value; `check` turns a
//! violation into a panic in debug builds. Both scan the whole structure and
//! are meant for tests and debug builds, not for search hot paths.
//!
//! The cell mapping is verified twice: once by scanning every position and
//! tracking the current cell start, and once by jumping from cell start to
//! cell start by run length. A disagreement between `ptn` and
//! `vertex_to_col` is caught by one pass or the other.

use super::{Coloring, VertexId};
use thiserror::Error;

/// The first invariant found broken in a coloring.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("coloring is not initialized")]
    Uninitialized,

    #[error("position {position} holds vertex {vertex}, outside a domain of size {domain_size}")]
    VertexOutOfRange {
        position: usize,
        vertex: VertexId,
        domain_size: usize,
    },

    #[error("vertex {vertex} maps to position {position}, outside a domain of size {domain_size}")]
    PositionOutOfRange {
        vertex: usize,
        position: VertexId,
        domain_size: usize,
    },

    #[error("vertex {vertex} maps to position {position}, but that position holds vertex {found}")]
    NotInverse {
        vertex: usize,
        position: usize,
        found: VertexId,
    },

    #[error("cell at {start} has run length {run_length}, overrunning a domain of size {domain_size}")]
    RunLengthOverflow {
        start: usize,
        run_length: VertexId,
        domain_size: usize,
    },

    #[error("position {position} (vertex {vertex}) is mapped to cell {found}, expected {expected}")]
    WrongCell {
        position: usize,
        vertex: VertexId,
        expected: usize,
        found: VertexId,
    },

    #[error("cached cell count {cached} differs from {actual} cell starts")]
    CellCountMismatch { cached: usize, actual: usize },

    #[error("smallest cell lower bound {bound} exceeds smallest cell size {smallest}")]
    LowerBoundTooLarge { bound: usize, smallest: usize },
}

impl Coloring {
    /// Verify every invariant, returning the first violation found.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        let Some(buffers) = &self.buffers else {
            return Err(InvariantViolation::Uninitialized);
        };
        let n = buffers.len();
        let (lab, ptn) = (&buffers.lab, &buffers.ptn);
        let (vertex_to_col, vertex_to_lab) = (&buffers.vertex_to_col, &buffers.vertex_to_lab);

        // lab is a permutation and vertex_to_lab is its inverse.
        for (position, &vertex) in lab.iter().enumerate() {
            if vertex as usize >= n {
                return Err(InvariantViolation::VertexOutOfRange {
                    position,
                    vertex,
                    domain_size: n,
                });
            }
        }
        for (vertex, &position) in vertex_to_lab.iter().enumerate() {
            if position as usize >= n {
                return Err(InvariantViolation::PositionOutOfRange {
                    vertex,
                    position,
                    domain_size: n,
                });
            }
            let found = lab[position as usize];
            if found as usize != vertex {
                return Err(InvariantViolation::NotInverse {
                    vertex,
                    position: position as usize,
                    found,
                });
            }
        }

        // Position scan: every position maps to the most recent cell start.
        let mut current_start = 0;
        let mut remaining = 0;
        let mut starts = 0;
        let mut smallest = usize::MAX;
        for position in 0..n {
            if remaining == 0 {
                let run_length = ptn[position];
                if position + run_length as usize >= n {
                    return Err(InvariantViolation::RunLengthOverflow {
                        start: position,
                        run_length,
                        domain_size: n,
                    });
                }
                current_start = position;
                remaining = run_length as usize + 1;
                starts += 1;
                smallest = smallest.min(remaining);
            }
            remaining -= 1;
            let vertex = lab[position];
            let found = vertex_to_col[vertex as usize];
            if found as usize != current_start {
                return Err(InvariantViolation::WrongCell {
                    position,
                    vertex,
                    expected: current_start,
                    found,
                });
            }
        }

        // Start walk: each cell start's vertex maps to that start.
        let mut walked = 0;
        for cell in self.iter_cells() {
            let vertex = lab[cell.start()];
            let found = vertex_to_col[vertex as usize];
            if found as usize != cell.start() {
                return Err(InvariantViolation::WrongCell {
                    position: cell.start(),
                    vertex,
                    expected: cell.start(),
                    found,
                });
            }
            walked += 1;
        }
        debug_assert_eq!(walked, starts);

        if self.cells != starts {
            return Err(InvariantViolation::CellCountMismatch {
                cached: self.cells,
                actual: starts,
            });
        }
        if starts > 0 && self.smallest_cell_lower_bound > smallest {
            return Err(InvariantViolation::LowerBoundTooLarge {
                bound: self.smallest_cell_lower_bound,
                smallest,
            });
        }
        Ok(())
    }

    /// Assert that every invariant holds.
    ///
    /// Returns `true` when the coloring is consistent. A violation panics in
    /// builds with debug assertions; without them it is logged and `false` is
    /// returned.
    pub fn check(&self) -> bool {
        match self.validate() {
            Ok(()) => true,
            Err(violation) => {
                tracing::error!(%violation, "coloring invariant violated");
                if cfg!(debug_assertions) {
                    panic!("coloring invariant violated: {}", violation);
                }
                false
            }
        }
    }
}
