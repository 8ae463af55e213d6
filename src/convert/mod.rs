// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Translation of a colored graph into an external solver's graph builder.
//!
//! The only thing required of a solver is the [`SolverGraph`] construction
//! surface: add a colored vertex and get back its id, and add an undirected
//! edge between two such ids.

use crate::coloring::VertexId;
use crate::graph::SparseGraph;
use thiserror::Error;

/// Graph-construction surface of an automorphism / canonical-form solver.
pub trait SolverGraph {
    /// Solver-side vertex identifier.
    type Id: Copy;

    /// Add a vertex with the given color and return its solver id.
    fn add_vertex(&mut self, color: VertexId) -> Self::Id;

    /// Add an undirected edge between two solver vertices.
    fn add_edge(&mut self, a: Self::Id, b: Self::Id);
}

/// Inputs the converter refuses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("{colors} colors given for a graph of {vertex_count} vertices")]
    ColorCountMismatch { colors: usize, vertex_count: usize },
}

/// Add `graph` with per-vertex `colors` to `target`.
///
/// Vertices are added in input order. Since the adjacency stores each
/// undirected edge at both endpoints, an edge is only added from its smaller
/// endpoint, so the solver receives every edge once.
///
/// # Example
///
/// ```
/// use ordered_partition::{convert_into, EdgeListGraph, SparseGraph};
///
/// let graph = SparseGraph::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
/// let mut target = EdgeListGraph::default();
/// convert_into(&graph, &[1, 0, 1], &mut target).unwrap();
/// assert_eq!(target.colors(), &[1, 0, 1]);
/// assert_eq!(target.edges(), &[(0, 1), (1, 2)]);
/// ```
pub fn convert_into<S: SolverGraph>(
    graph: &SparseGraph,
    colors: &[VertexId],
    target: &mut S,
) -> Result<(), ConversionError> {
    let vertex_count = graph.vertex_count();
    if colors.len() != vertex_count {
        return Err(ConversionError::ColorCountMismatch {
            colors: colors.len(),
            vertex_count,
        });
    }

    let ids: Vec<S::Id> = colors.iter().map(|&color| target.add_vertex(color)).collect();

    let mut added = 0usize;
    for (v, &id) in ids.iter().enumerate() {
        for &w in graph.neighbors(v as VertexId) {
            if (v as VertexId) < w {
                target.add_edge(id, ids[w as usize]);
                added += 1;
            }
        }
    }
    tracing::debug!(vertices = vertex_count, edges = added, "converted colored graph");
    Ok(())
}

/// A [`SolverGraph`] that records what it is given: colored vertices and an edge list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeListGraph {
    colors: Vec<VertexId>,
    edges: Vec<(usize, usize)>,
}

impl EdgeListGraph {
    /// Colors of the added vertices, by solver id.
    pub fn colors(&self) -> &[VertexId] {
        &self.colors
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    pub fn vertex_count(&self) -> usize {
        self.colors.len()
    }
}

impl SolverGraph for EdgeListGraph {
    type Id = usize;

    fn add_vertex(&mut self, color: VertexId) -> usize {
        self.colors.push(color);
        self.colors.len() - 1
    }

    fn add_edge(&mut self, a: usize, b: usize) {
        debug_assert!(a < self.colors.len() && b < self.colors.len());
        self.edges.push((a, b));
    }
}
