//! Mesh processing algorithms.
//!
//! This module contains the subdivision algorithm and its supporting
//! surface:
//!
//! - **Subdivision**: Catmull-Clark subdivision for mixed triangle/quad
//!   meshes, including open surfaces with holes
//! - **Progress**: a callback mechanism for reporting per-iteration progress

pub mod progress;
pub mod subdivide;

pub use progress::Progress;
