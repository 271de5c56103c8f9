//! The face-vertex boundary mesh format.
//!
//! This is the representation exchanged with loaders and renderers: an
//! ordered sequence of vertex positions and an ordered sequence of faces
//! indexing into it. No adjacency is implied — two faces may reference
//! geometrically identical positions through different indices, which is
//! exactly what subdivision emits. Topology is recovered from positions by
//! [`build_model`](crate::topology::build_model).
//!
//! # Example
//!
//! ```
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
//! assert_eq!(mesh.num_faces(), 1);
//! ```

use nalgebra::Point3;

/// A polygonal face: a triangle or a quadrilateral, as indices into the
/// owning mesh's vertex sequence. Corners are listed in boundary order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    /// A triangle face.
    Triangle([usize; 3]),
    /// A quadrilateral face.
    Quad([usize; 4]),
}

impl Face {
    /// The face's corner indices in boundary order.
    pub fn indices(&self) -> &[usize] {
        match self {
            Face::Triangle(indices) => indices,
            Face::Quad(indices) => indices,
        }
    }

    /// Number of corners (3 or 4).
    pub fn corner_count(&self) -> usize {
        self.indices().len()
    }

    /// Whether this face is a quadrilateral.
    pub fn is_quad(&self) -> bool {
        matches!(self, Face::Quad(_))
    }
}

/// A polygonal mesh in face-vertex form.
///
/// Constructed once by a loader (or by subdivision) and replaced wholesale
/// on each subdivision iteration; never partially mutated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions. Duplicates across faces are allowed.
    pub vertices: Vec<Point3<f64>>,
    /// Faces indexing into `vertices`.
    pub faces: Vec<Face>,
}

impl Mesh {
    /// Create an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty mesh with preallocated storage.
    pub fn with_capacity(vertices: usize, faces: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            faces: Vec::with_capacity(faces),
        }
    }

    /// Number of vertex entries (not deduplicated).
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of faces.
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Whether the mesh has no faces.
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_corner_count() {
        assert_eq!(Face::Triangle([0, 1, 2]).corner_count(), 3);
        assert_eq!(Face::Quad([0, 1, 2, 3]).corner_count(), 4);
        assert!(!Face::Triangle([0, 1, 2]).is_quad());
        assert!(Face::Quad([0, 1, 2, 3]).is_quad());
    }

    #[test]
    fn test_face_indices_order() {
        let face = Face::Quad([3, 1, 4, 0]);
        assert_eq!(face.indices(), &[3, 1, 4, 0]);
    }

    #[test]
    fn test_empty_mesh() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.num_vertices(), 0);
        assert_eq!(mesh.num_faces(), 0);
    }
}
