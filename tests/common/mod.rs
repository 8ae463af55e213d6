// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use ordered_partition::{Cell, Coloring};

/// Split every cell so that vertices with equal `key` values stay together.
///
/// Each cell is first reordered by ascending key (swaps inside the cell only),
/// then split at every key change. This is the shape of one refinement round,
/// with the key standing in for whatever invariant a real refiner computes.
pub fn split_by_key(coloring: &mut Coloring, key: &[u32]) {
    let key_at = |coloring: &Coloring, position: usize| key[coloring.vertex_at(position) as usize];

    let cells: Vec<Cell> = coloring.iter_cells().collect();
    for cell in cells {
        for i in cell.positions() {
            let mut best = i;
            for j in i + 1..cell.end() {
                if key_at(coloring, j) < key_at(coloring, best) {
                    best = j;
                }
            }
            if best != i {
                coloring.swap_positions(i, best);
            }
        }

        let mut start = cell.start();
        for i in cell.start() + 1..cell.end() {
            if key_at(coloring, i) != key_at(coloring, i - 1) {
                start = coloring.split_cell(start, i - start);
            }
        }
    }
}

/// Coloring whose cells, in order, have the given sizes; `lab` is the identity.
pub fn with_cell_sizes(sizes: &[usize]) -> Coloring {
    let mut coloring = Coloring::new(sizes.iter().sum());
    let mut start = 0;
    for &size in sizes.iter().take(sizes.len().saturating_sub(1)) {
        coloring.split_cell(start, size);
        start += size;
    }
    coloring
}

/// Cell sizes in position order.
pub fn cell_sizes(coloring: &Coloring) -> Vec<usize> {
    coloring.iter_cells().map(|cell| cell.len()).collect()
}
