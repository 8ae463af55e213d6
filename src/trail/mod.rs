// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Snapshot trail for depth-first branching over a coloring.
//!
//! A depth-first search that refines one coloring in place saves it before
//! each branch and restores it when the branch is exhausted. The trail keeps
//! one saved coloring per depth. Slots are never freed on rewind: the next
//! checkpoint at the same depth copies into the retained slot, reusing its
//! buffers, so steady-state branching does no allocation.
//!
//! # Example
//!
//! ```
//! use ordered_partition::{Coloring, SnapshotTrail};
//!
//! let mut coloring = Coloring::new(4);
//! let mut trail = SnapshotTrail::new();
//!
//! trail.checkpoint(&coloring);
//! coloring.individualize(2);
//! assert_eq!(coloring.cells(), 2);
//!
//! assert!(trail.rewind(&mut coloring));
//! assert_eq!(coloring, Coloring::new(4));
//! ```

use crate::coloring::Coloring;

/// Stack of saved colorings with buffer reuse.
#[derive(Debug)]
pub struct SnapshotTrail {
    /// Saved colorings. Entries at `depth..` are retained for reuse.
    slots: Vec<Coloring>,
    /// Number of live checkpoints.
    depth: usize,
    /// Checkpoints below this depth cannot be rewound.
    frozen_depth: Option<usize>,
}

impl SnapshotTrail {
    /// Create an empty trail.
    pub fn new() -> Self {
        Self {
            slots: Vec::with_capacity(64), // Reasonable depth estimate
            depth: 0,
            frozen_depth: None,
        }
    }

    /// Save a full copy of `coloring`.
    ///
    /// Returns the checkpoint index, usable with `rewind_to`.
    pub fn checkpoint(&mut self, coloring: &Coloring) -> usize {
        if self.depth == self.slots.len() {
            self.slots.push(Coloring::uninitialized());
        }
        self.slots[self.depth].copy_full_from(coloring);
        self.depth += 1;
        self.depth - 1
    }

    /// Restore `coloring` to the most recent checkpoint and discard it.
    ///
    /// Returns false if there is no checkpoint, or it was taken before the
    /// trail was frozen; `coloring` is then left unchanged.
    pub fn rewind(&mut self, coloring: &mut Coloring) -> bool {
        match self.depth.checked_sub(1) {
            Some(checkpoint) => self.rewind_to(checkpoint, coloring),
            None => false,
        }
    }

    /// Restore `coloring` to checkpoint `checkpoint`, discarding it and every later one.
    ///
    /// Returns false if the checkpoint does not exist or is frozen.
    pub fn rewind_to(&mut self, checkpoint: usize, coloring: &mut Coloring) -> bool {
        if checkpoint >= self.depth {
            return false;
        }
        // Don't rewind past frozen checkpoint
        if let Some(frozen) = self.frozen_depth {
            if checkpoint < frozen {
                return false;
            }
        }
        coloring.copy_full_from(&self.slots[checkpoint]);
        self.depth = checkpoint;
        true
    }

    /// The most recently saved coloring, if any.
    pub fn peek(&self) -> Option<&Coloring> {
        self.depth.checked_sub(1).map(|top| &self.slots[top])
    }

    /// Freeze the trail at the current depth.
    ///
    /// Checkpoints taken so far can no longer be rewound.
    pub fn freeze(&mut self) {
        self.frozen_depth = Some(self.depth);
    }

    /// Number of live checkpoints.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Check if there are no live checkpoints.
    pub fn is_empty(&self) -> bool {
        self.depth == 0
    }

    /// Number of colorings held, live or retained for reuse.
    pub fn retained(&self) -> usize {
        self.slots.len()
    }
}

impl Default for SnapshotTrail {
    fn default() -> Self {
        Self::new()
    }
}
