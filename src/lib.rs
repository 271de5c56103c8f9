//! # Catclark
//!
//! Catmull-Clark subdivision for polygonal meshes mixing triangles and
//! quadrilaterals, including open surfaces with holes.
//!
//! The input format is deliberately loose: an ordered list of positions and
//! an ordered list of 3- or 4-cornered faces, with no shared-vertex indexing
//! required — faces may duplicate positions freely. Each subdivision
//! iteration first reconstructs exact adjacency by merging bit-identical
//! positions, then applies the Catmull-Clark averaging rules and splits
//! every n-gon into n quads.
//!
//! ## Features
//!
//! - **Topology from positions**: deterministic vertex merging by exact
//!   position equality, canonical edge records, full vertex/edge/face
//!   incidence
//! - **Hole-aware averaging**: boundary edges (fewer than two incident
//!   faces) use midpoint edge points, keeping holes from pinching
//! - **Mixed meshes**: triangles and quads in one face list
//! - **Parallel passes**: the per-face, per-edge, and per-vertex passes run
//!   on [rayon] with bit-identical results to sequential execution
//!
//! ## Quick Start
//!
//! ```
//! use catclark::prelude::*;
//! use nalgebra::Point3;
//!
//! // A unit cube: 6 quads over 8 shared corners.
//! let vertices = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(1.0, 1.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//!     Point3::new(0.0, 0.0, 1.0),
//!     Point3::new(1.0, 0.0, 1.0),
//!     Point3::new(1.0, 1.0, 1.0),
//!     Point3::new(0.0, 1.0, 1.0),
//! ];
//! let faces = vec![
//!     Face::Quad([0, 3, 2, 1]),
//!     Face::Quad([4, 5, 6, 7]),
//!     Face::Quad([0, 1, 5, 4]),
//!     Face::Quad([2, 3, 7, 6]),
//!     Face::Quad([0, 4, 7, 3]),
//!     Face::Quad([1, 2, 6, 5]),
//! ];
//! let mesh = Mesh { vertices, faces };
//!
//! let smooth = subdivide(&mesh, 2).unwrap();
//! assert_eq!(smooth.num_faces(), 96);
//! ```
//!
//! ## Scope
//!
//! The crate covers the subdivision core only. Loading meshes from disk,
//! deriving normals, and rendering are the caller's concern; the sole entry
//! points are [`subdivide`](algo::subdivide::subdivide) and its
//! options/progress variants.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod error;
pub mod mesh;
pub mod topology;

/// Prelude module for convenient imports.
///
/// ```
/// use catclark::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algo::subdivide::{subdivide, subdivide_with, SubdivideOptions};
    pub use crate::error::{Result, SubdivisionError};
    pub use crate::mesh::{Face, Mesh};
    pub use crate::topology::{build_model, AdjacencyModel};
}

// Re-export nalgebra types for convenience
pub use nalgebra;
