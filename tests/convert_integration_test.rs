// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for handing a colored graph to a solver.

mod common;

use common::split_by_key;
use ordered_partition::{convert_into, Coloring, EdgeListGraph, SolverGraph, SparseGraph, VertexId};
use std::collections::BTreeSet;

#[test]
fn test_symmetric_storage_gives_each_edge_once() {
    // Vertices {0,1,2}, edges {(0,1),(1,2)} stored in both adjacency lists.
    let graph = SparseGraph::new(vec![0, 1, 3], vec![1, 2, 1], vec![1, 0, 2, 1]).unwrap();
    let mut solver = EdgeListGraph::default();
    convert_into(&graph, &[1, 0, 1], &mut solver).unwrap();

    assert_eq!(solver.vertex_count(), 3);
    assert_eq!(solver.colors(), &[1, 0, 1]);
    assert_eq!(solver.edges().len(), 2);
    assert_eq!(solver.edges(), &[(0, 1), (1, 2)]);
}

#[test]
fn test_coloring_output_feeds_converter() {
    // Star with center 0: refinement separates the center from the leaves.
    let graph = SparseGraph::from_edges(5, &[(0, 1), (0, 2), (0, 3), (0, 4)]).unwrap();
    let mut coloring = Coloring::new(5);
    let degrees: Vec<u32> = (0..5).map(|v| graph.degree(v) as u32).collect();
    split_by_key(&mut coloring, &degrees);
    assert_eq!(coloring.cells(), 2);

    let mut solver = EdgeListGraph::default();
    convert_into(&graph, &coloring.vertex_colors(), &mut solver).unwrap();
    assert_eq!(solver.colors(), &[4, 0, 0, 0, 0]);
    assert_eq!(solver.edges().len(), 4);
}

/// Solver that counts calls and rejects duplicate edges.
#[derive(Default)]
struct StrictSolver {
    vertices: usize,
    edges: BTreeSet<(usize, usize)>,
}

impl SolverGraph for StrictSolver {
    type Id = usize;

    fn add_vertex(&mut self, _color: VertexId) -> usize {
        self.vertices += 1;
        self.vertices - 1
    }

    fn add_edge(&mut self, a: usize, b: usize) {
        let edge = (a.min(b), a.max(b));
        assert!(self.edges.insert(edge), "duplicate edge {:?}", edge);
    }
}

#[test]
fn test_complete_graph() {
    let pairs: Vec<(VertexId, VertexId)> = (0..6)
        .flat_map(|u| (u + 1..6).map(move |v| (u, v)))
        .collect();
    let graph = SparseGraph::from_edges(6, &pairs).unwrap();
    let mut solver = StrictSolver::default();
    convert_into(&graph, &[0; 6], &mut solver).unwrap();
    assert_eq!(solver.vertices, 6);
    assert_eq!(solver.edges.len(), 15);
}
