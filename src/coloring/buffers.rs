// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Owned storage for the four per-position / per-vertex arrays of a coloring.
//!
//! The buffers are allocated together when a `ColoringBuffers` is constructed
//! and released together, exactly once, when it is dropped. A coloring that
//! changes domain size simply replaces its `ColoringBuffers` value.

use super::VertexId;

/// The four fixed-size arrays backing a coloring of `len` vertices.
#[derive(Debug)]
pub(crate) struct ColoringBuffers {
    /// Vertex occupying each position.
    pub(crate) lab: Box<[VertexId]>,
    /// Run length (cell size minus one), meaningful at cell starts only.
    pub(crate) ptn: Box<[VertexId]>,
    /// Start position of the cell containing each vertex.
    pub(crate) vertex_to_col: Box<[VertexId]>,
    /// Position of each vertex (inverse of `lab`).
    pub(crate) vertex_to_lab: Box<[VertexId]>,
}

impl ColoringBuffers {
    /// Allocate zero-filled buffers for `len` vertices.
    ///
    /// # Panics
    ///
    /// Panics if `len` does not fit in a `VertexId`.
    pub(crate) fn allocate(len: usize) -> Self {
        assert!(
            len <= VertexId::MAX as usize,
            "domain size {} exceeds the vertex id range",
            len
        );
        tracing::debug!(domain_size = len, "allocating coloring buffers");
        Self {
            lab: vec![0; len].into_boxed_slice(),
            ptn: vec![0; len].into_boxed_slice(),
            vertex_to_col: vec![0; len].into_boxed_slice(),
            vertex_to_lab: vec![0; len].into_boxed_slice(),
        }
    }

    /// Domain size these buffers were allocated for.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.lab.len()
    }
}

impl Drop for ColoringBuffers {
    fn drop(&mut self) {
        tracing::debug!(domain_size = self.len(), "releasing coloring buffers");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_sizes_all_buffers() {
        let buffers = ColoringBuffers::allocate(7);
        assert_eq!(buffers.len(), 7);
        assert_eq!(buffers.lab.len(), 7);
        assert_eq!(buffers.ptn.len(), 7);
        assert_eq!(buffers.vertex_to_col.len(), 7);
        assert_eq!(buffers.vertex_to_lab.len(), 7);
    }

    #[test]
    fn test_allocate_empty_domain() {
        let buffers = ColoringBuffers::allocate(0);
        assert_eq!(buffers.len(), 0);
    }

    #[test]
    fn test_buffers_are_distinct_allocations() {
        let a = ColoringBuffers::allocate(4);
        let b = ColoringBuffers::allocate(4);
        assert_ne!(a.lab.as_ptr(), b.lab.as_ptr());
        assert_ne!(a.ptn.as_ptr(), a.vertex_to_col.as_ptr());
    }
}
