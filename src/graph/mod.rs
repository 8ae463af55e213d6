// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compressed-adjacency graphs.
//!
//! A `SparseGraph` stores, for each vertex, an offset into a flat neighbor
//! array and a degree. Undirected edges are stored symmetrically: an edge
//! `{u, v}` appears in the neighbor lists of both `u` and `v`.
//!
//! The graph is read-only once built; colorings and converters borrow it.

use crate::coloring::VertexId;
use thiserror::Error;

/// Reasons a compressed-adjacency description is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("{offsets} offsets but {degrees} degrees")]
    LengthMismatch { offsets: usize, degrees: usize },

    #[error("adjacency of vertex {vertex} spans {start}..{end}, beyond {edges} stored neighbors")]
    AdjacencyOutOfBounds {
        vertex: usize,
        start: usize,
        end: usize,
        edges: usize,
    },

    #[error("vertex {vertex} lists neighbor {neighbor}, outside a graph of {vertex_count} vertices")]
    NeighborOutOfRange {
        vertex: usize,
        neighbor: VertexId,
        vertex_count: usize,
    },

    #[error("{vertex_count} vertices exceed the vertex id range")]
    TooManyVertices { vertex_count: usize },
}

/// A static graph in compressed-adjacency form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseGraph {
    /// Start of each vertex's neighbor list in `edges`.
    offsets: Vec<usize>,
    /// Length of each vertex's neighbor list.
    degrees: Vec<usize>,
    /// Flat neighbor ids.
    edges: Vec<VertexId>,
}

impl SparseGraph {
    /// Build a graph from raw offset, degree and neighbor arrays.
    ///
    /// Neighbor lists may share or skip parts of `edges`; each one is only
    /// required to lie inside it and to name existing vertices.
    pub fn new(
        offsets: Vec<usize>,
        degrees: Vec<usize>,
        edges: Vec<VertexId>,
    ) -> Result<Self, GraphError> {
        if offsets.len() != degrees.len() {
            return Err(GraphError::LengthMismatch {
                offsets: offsets.len(),
                degrees: degrees.len(),
            });
        }
        let vertex_count = offsets.len();
        if vertex_count > VertexId::MAX as usize {
            return Err(GraphError::TooManyVertices { vertex_count });
        }
        for (vertex, (&start, &degree)) in offsets.iter().zip(&degrees).enumerate() {
            let end = start.checked_add(degree).unwrap_or(usize::MAX);
            if end > edges.len() {
                return Err(GraphError::AdjacencyOutOfBounds {
                    vertex,
                    start,
                    end,
                    edges: edges.len(),
                });
            }
            if let Some(&neighbor) = edges[start..end]
                .iter()
                .find(|&&neighbor| neighbor as usize >= vertex_count)
            {
                return Err(GraphError::NeighborOutOfRange {
                    vertex,
                    neighbor,
                    vertex_count,
                });
            }
        }
        Ok(Self {
            offsets,
            degrees,
            edges,
        })
    }

    /// Build an undirected graph on `vertex_count` vertices from an edge list.
    ///
    /// Each pair is stored in both endpoints' neighbor lists, in input order.
    ///
    /// # Example
    ///
    /// ```
    /// use ordered_partition::SparseGraph;
    ///
    /// let path = SparseGraph::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
    /// assert_eq!(path.neighbors(1), &[0, 2]);
    /// assert_eq!(path.edge_count(), 2);
    /// ```
    pub fn from_edges(
        vertex_count: usize,
        pairs: &[(VertexId, VertexId)],
    ) -> Result<Self, GraphError> {
        if vertex_count > VertexId::MAX as usize {
            return Err(GraphError::TooManyVertices { vertex_count });
        }
        let mut degrees = vec![0usize; vertex_count];
        for &(u, v) in pairs {
            // Report the out-of-range endpoint as a neighbor of the other one.
            for (vertex, neighbor) in [(u, v), (v, u)] {
                if neighbor as usize >= vertex_count {
                    return Err(GraphError::NeighborOutOfRange {
                        vertex: vertex as usize,
                        neighbor,
                        vertex_count,
                    });
                }
            }
            degrees[u as usize] += 1;
            degrees[v as usize] += 1;
        }

        let mut offsets = Vec::with_capacity(vertex_count);
        let mut total = 0;
        for &degree in &degrees {
            offsets.push(total);
            total += degree;
        }

        let mut fill = offsets.clone();
        let mut edges = vec![0; total];
        for &(u, v) in pairs {
            edges[fill[u as usize]] = v;
            fill[u as usize] += 1;
            edges[fill[v as usize]] = u;
            fill[v as usize] += 1;
        }

        Ok(Self {
            offsets,
            degrees,
            edges,
        })
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.offsets.len()
    }

    /// Number of stored adjacency entries (twice the undirected edge count).
    #[inline]
    pub fn adjacency_len(&self) -> usize {
        self.degrees.iter().sum()
    }

    /// Number of undirected edges, counting each symmetric pair once.
    pub fn edge_count(&self) -> usize {
        (0..self.vertex_count())
            .map(|v| {
                self.neighbors(v as VertexId)
                    .iter()
                    .filter(|&&w| (v as VertexId) < w)
                    .count()
            })
            .sum()
    }

    /// Degree of vertex `v`.
    #[inline]
    pub fn degree(&self, v: VertexId) -> usize {
        self.degrees[v as usize]
    }

    /// Offset of vertex `v`'s neighbor list in the flat neighbor array.
    #[inline]
    pub fn offset(&self, v: VertexId) -> usize {
        self.offsets[v as usize]
    }

    /// Neighbors of vertex `v`.
    #[inline]
    pub fn neighbors(&self, v: VertexId) -> &[VertexId] {
        let start = self.offsets[v as usize];
        &self.edges[start..start + self.degrees[v as usize]]
    }
}
