//! Topology reconstruction.
//!
//! This module rebuilds exact adjacency from a flat face list. Input meshes
//! carry no shared-vertex guarantee: two faces touching the same point may
//! reference separate, duplicated vertex entries. [`build_model`] merges
//! vertices by exact position equality and produces an [`AdjacencyModel`]
//! whose vertex, edge, and face records cross-reference each other.
//!
//! The model is rebuilt from scratch for every subdivision iteration and is
//! owned exclusively by that iteration. Its reverse-lookup maps (position to
//! vertex, vertex pair to edge) are part of the model, never shared state.
//!
//! # Merging precondition
//!
//! Positions merge only when bit-identical. Coincident vertices that differ
//! by floating-point rounding stay distinct and leave topological holes;
//! callers must pre-snap such positions. Fuzzy matching is deliberately not
//! attempted (merge-radius tuning and transitive-closure ambiguity would
//! trade one hazard for worse ones).

mod builder;
mod model;

pub use builder::build_model;
pub use model::{AdjacencyModel, EdgeRecord, FaceRecord, VertexRecord};
