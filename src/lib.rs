// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Ordered-partition state for individualization-refinement graph search.
//!
//! Symmetry algorithms in the individualization-refinement family (nauty,
//! Traces, bliss, dejavu) all work on an ordered partition of the vertices,
//! usually called a coloring. Every refinement step, branching decision and
//! canonical-form comparison reads and mutates it, and search branches need
//! cheap independent copies of it. This crate provides that structure and
//! nothing of the search itself.
//!
//! # Architecture
//!
//! - [`coloring`]: the partition (`lab`/`ptn` encoding plus vertex-to-cell and
//!   vertex-to-position maps), its buffer lifecycle, the density-aware copy
//!   engine and the consistency checker.
//! - [`graph`]: static compressed-adjacency graphs.
//! - [`convert`]: feeding a colored graph to an external solver's graph builder.
//! - [`trail`]: checkpoint/rewind of a coloring for depth-first branching.
//!
//! # Copy Cost Model
//!
//! Real workloads refine graphs with thousands of vertices while only a few
//! cells are active. A copy therefore reproduces the run-length array by
//! walking cell starts when there are at most `n / 4` cells, and by a single
//! bulk copy otherwise. Copies never share storage, so each branch of a
//! parallel search can own its coloring outright.
//!
//! # What Is Not Here
//!
//! Refinement heuristics, the search procedure, graph traversal and any
//! automorphism search are left to callers. Refinement code is expected to
//! use the splitting primitives on [`Coloring`], which keep the cached cell
//! count and smallest-cell bound in step with the arrays.
//!
//! # Configuration
//!
//! Enabling the `check_mutations` feature re-runs [`Coloring::check`] after
//! every mutation and copy.

pub mod coloring;
pub mod convert;
pub mod graph;
pub mod trail;

// Re-export commonly used types
pub use coloring::{Cell, Coloring, InvariantViolation, PtnCopyStrategy, VertexId};
pub use convert::{convert_into, ConversionError, EdgeListGraph, SolverGraph};
pub use graph::{GraphError, SparseGraph};
pub use trail::SnapshotTrail;
