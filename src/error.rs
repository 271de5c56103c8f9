//! Error types for catclark.
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Result type alias using [`SubdivisionError`].
pub type Result<T> = std::result::Result<T, SubdivisionError>;

/// Errors that can occur while building topology or subdividing a mesh.
#[derive(Error, Debug)]
pub enum SubdivisionError {
    /// A face references a vertex index outside the mesh's vertex sequence.
    #[error("face {face} references invalid vertex index {vertex}")]
    InvalidVertexIndex {
        /// The face index.
        face: usize,
        /// The invalid vertex index.
        vertex: usize,
    },

    /// A face has fewer than 3 distinct corners after position merging.
    #[error("face {face} is degenerate (fewer than 3 distinct corners)")]
    DegenerateFace {
        /// The face index.
        face: usize,
    },

    /// Vertex repositioning would collapse two distinct vertices onto one
    /// position, corrupting the position-to-vertex index.
    #[error("topology violation: vertices {vertex_a} and {vertex_b} repositioned onto the same point")]
    TopologyViolation {
        /// The vertex that claimed the position first.
        vertex_a: usize,
        /// The vertex that collided with it.
        vertex_b: usize,
    },
}
