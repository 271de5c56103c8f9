//! Mesh subdivision.
//!
//! This module implements Catmull-Clark subdivision (Catmull & Clark, 1978),
//! generalized to meshes mixing triangles and quadrilaterals and to open
//! surfaces with holes. Each iteration:
//!
//! 1. Rebuilds topology from positions (see [`crate::topology`])
//! 2. Creates a face point at each face centroid
//! 3. Creates edge points — interior edges average their endpoints with the
//!    two adjacent face points, hole-boundary edges use the plain midpoint
//! 4. Repositions original vertices with the Catmull-Clark mask
//! 5. Splits each n-gon into n quads
//!
//! The result converges to a C² continuous surface (C¹ at extraordinary
//! vertices). Output quads are not guaranteed to be planar.
//!
//! # Example
//!
//! ```
//! use catclark::algo::subdivide::{subdivide_with, SubdivideOptions};
//! use catclark::mesh::{Face, Mesh};
//! use nalgebra::Point3;
//!
//! let mesh = Mesh {
//!     vertices: vec![
//!         Point3::new(0.0, 0.0, 0.0),
//!         Point3::new(1.0, 0.0, 0.0),
//!         Point3::new(1.0, 1.0, 0.0),
//!         Point3::new(0.0, 1.0, 0.0),
//!     ],
//!     faces: vec![Face::Quad([0, 1, 2, 3])],
//! };
//!
//! let options = SubdivideOptions::new(1).sequential();
//! let smooth = subdivide_with(&mesh, &options).unwrap();
//! assert_eq!(smooth.num_faces(), 4);
//! ```
//!
//! # References
//!
//! - Catmull, E. & Clark, J. (1978). "Recursively generated B-spline surfaces
//!   on arbitrary topological meshes." Computer-Aided Design, 10(6), 350-355.

mod catmull_clark;

pub use catmull_clark::{subdivide, subdivide_with, subdivide_with_progress};

/// Options for subdivision.
#[derive(Debug, Clone)]
pub struct SubdivideOptions {
    /// Number of subdivision iterations. Zero is the identity.
    pub iterations: usize,

    /// Whether to use parallel execution (default: true). Parallel and
    /// sequential runs produce bit-identical output.
    pub parallel: bool,
}

impl SubdivideOptions {
    /// Create options with the specified number of iterations.
    pub fn new(iterations: usize) -> Self {
        Self {
            iterations,
            parallel: true,
        }
    }

    /// Set whether to use parallel execution.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Create options for single-threaded execution.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}
