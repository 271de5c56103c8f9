//! Building an [`AdjacencyModel`] from a face-vertex mesh.

use crate::error::{Result, SubdivisionError};
use crate::mesh::Mesh;

use super::model::{AdjacencyModel, FaceRecord};

/// Build the adjacency model for a mesh.
///
/// Faces are processed in input order. Each corner is resolved to a merged
/// vertex by exact position equality, each consecutive corner pair (the last
/// corner closing the loop back to the first) to a canonical edge, and the
/// face's index is registered on every vertex and edge it touches. An edge
/// already carrying two faces does not record a third.
///
/// Malformed input is rejected here rather than propagated into the
/// arithmetic passes:
///
/// - a corner index outside the vertex sequence is an
///   [`InvalidVertexIndex`](SubdivisionError::InvalidVertexIndex) error;
/// - a face whose corners merge to fewer than 3 distinct vertices is a
///   [`DegenerateFace`](SubdivisionError::DegenerateFace) error.
///
/// An empty mesh builds an empty model.
///
/// # Example
///
/// ```
/// use catclark::mesh::{Face, Mesh};
/// use catclark::topology::build_model;
/// use nalgebra::Point3;
///
/// // Two triangles sharing an edge, given as fully duplicated corners.
/// let mesh = Mesh {
///     vertices: vec![
///         Point3::new(0.0, 0.0, 0.0),
///         Point3::new(1.0, 0.0, 0.0),
///         Point3::new(0.5, 1.0, 0.0),
///         Point3::new(1.0, 0.0, 0.0),
///         Point3::new(0.0, 0.0, 0.0),
///         Point3::new(0.5, -1.0, 0.0),
///     ],
///     faces: vec![Face::Triangle([0, 1, 2]), Face::Triangle([3, 4, 5])],
/// };
///
/// let model = build_model(&mesh).unwrap();
/// assert_eq!(model.num_vertices(), 4);
/// assert_eq!(model.num_edges(), 5);
/// ```
pub fn build_model(mesh: &Mesh) -> Result<AdjacencyModel> {
    let mut model = AdjacencyModel::new();

    for (face_index, face) in mesh.faces.iter().enumerate() {
        let corners = face.indices();
        let n = corners.len();

        // Resolve corners to merged vertices.
        let mut vertex_indices = [0usize; 4];
        for (i, &corner) in corners.iter().enumerate() {
            let position = *mesh.vertices.get(corner).ok_or(
                SubdivisionError::InvalidVertexIndex {
                    face: face_index,
                    vertex: corner,
                },
            )?;
            vertex_indices[i] = model.vertex_or_insert(position);
        }

        // Corners must stay pairwise distinct after merging.
        for i in 0..n {
            for j in (i + 1)..n {
                if vertex_indices[i] == vertex_indices[j] {
                    return Err(SubdivisionError::DegenerateFace { face: face_index });
                }
            }
        }

        // Walk the boundary, resolving each consecutive pair to an edge.
        let mut edge_indices = [0usize; 4];
        for i in 0..n {
            let start = vertex_indices[i];
            let end = vertex_indices[(i + 1) % n];
            let edge = model.edge_or_insert(start, end);
            edge_indices[i] = edge;
            model.attach_edge_to_vertex(start, edge);
            model.attach_edge_to_vertex(end, edge);
        }

        let new_face = model.push_face(FaceRecord {
            is_quad: n == 4,
            vertices: vertex_indices,
            edges: edge_indices,
        });

        for &vertex in &vertex_indices[..n] {
            model.attach_face_to_vertex(vertex, new_face);
        }
        for &edge in &edge_indices[..n] {
            model.attach_face_to_edge(edge, new_face);
        }
    }

    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::Face;
    use nalgebra::Point3;

    /// A unit cube given as 6 quads with fully duplicated corner entries
    /// (24 vertex entries, no sharing), the way a subdivision pass or a
    /// naive loader would emit it.
    fn cube_soup() -> Mesh {
        let corners = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(1.0, 0.0, 1.0),
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(0.0, 1.0, 1.0),
        ];
        let quads = [
            [0, 3, 2, 1],
            [4, 5, 6, 7],
            [0, 1, 5, 4],
            [2, 3, 7, 6],
            [0, 4, 7, 3],
            [1, 2, 6, 5],
        ];

        let mut mesh = Mesh::new();
        for quad in quads {
            let base = mesh.vertices.len();
            for corner in quad {
                mesh.vertices.push(corners[corner]);
            }
            mesh.faces.push(Face::Quad([base, base + 1, base + 2, base + 3]));
        }
        mesh
    }

    #[test]
    fn test_cube_soup_merges() {
        let mesh = cube_soup();
        assert_eq!(mesh.num_vertices(), 24);

        let model = build_model(&mesh).unwrap();
        assert_eq!(model.num_vertices(), 8);
        assert_eq!(model.num_edges(), 12);
        assert_eq!(model.num_faces(), 6);
    }

    #[test]
    fn test_cube_is_closed() {
        let model = build_model(&cube_soup()).unwrap();
        for edge in model.edges() {
            assert_eq!(edge.face_count(), 2);
            assert!(!edge.is_boundary());
        }
        for vertex in model.vertices() {
            assert_eq!(vertex.faces.len(), 3);
            assert_eq!(vertex.edges.len(), 3);
        }
    }

    #[test]
    fn test_incidence_is_symmetric() {
        let model = build_model(&cube_soup()).unwrap();

        for (fi, face) in model.faces().iter().enumerate() {
            for &vi in face.corners() {
                assert!(model.vertices()[vi].faces.contains(&fi));
            }
            for &ei in face.edge_indices() {
                assert!(model.edges()[ei].faces.contains(&Some(fi)));
            }
        }

        for (vi, vertex) in model.vertices().iter().enumerate() {
            for &fi in &vertex.faces {
                assert!(model.faces()[fi].corners().contains(&vi));
            }
            for &ei in &vertex.edges {
                let edge = &model.edges()[ei];
                assert!(edge.low == vi || edge.high == vi);
            }
        }
    }

    #[test]
    fn test_face_edges_follow_boundary() {
        let model = build_model(&cube_soup()).unwrap();
        for face in model.faces() {
            let n = face.corner_count();
            for i in 0..n {
                let a = face.corners()[i];
                let b = face.corners()[(i + 1) % n];
                let edge = &model.edges()[face.edge_indices()[i]];
                assert_eq!(
                    (edge.low, edge.high),
                    (a.min(b), a.max(b)),
                    "edge {} must join corners {} and {}",
                    i,
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_single_quad_is_all_boundary() {
        let mesh = Mesh {
            vertices: vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(1.0, 1.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            faces: vec![Face::Quad([0, 1, 2, 3])],
        };

        let model = build_model(&mesh).unwrap();
        assert_eq!(model.num_edges(), 4);
        for edge in model.edges() {
            assert_eq!(edge.face_count(), 1);
            assert!(edge.is_boundary());
        }
    }

    #[test]
    fn test_third_face_on_edge_is_dropped() {
        // Three quads fanning around the edge between p0 and p1.
        let p0 = Point3::new(0.0, 0.0, 0.0);
        let p1 = Point3::new(0.0, 0.0, 1.0);
        let mut mesh = Mesh::new();
        for (x, y) in [(1.0, 0.0), (-1.0, 0.0), (0.0, 1.0)] {
            let base = mesh.vertices.len();
            mesh.vertices.push(p0);
            mesh.vertices.push(p1);
            mesh.vertices.push(Point3::new(x, y, 1.0));
            mesh.vertices.push(Point3::new(x, y, 0.0));
            mesh.faces.push(Face::Quad([base, base + 1, base + 2, base + 3]));
        }

        let model = build_model(&mesh).unwrap();
        let shared = model.edge_between(0, 1).unwrap();
        assert_eq!(model.edges()[shared].face_count(), 2);
        assert_eq!(model.edges()[shared].faces, [Some(0), Some(1)]);
        // The third face still lists the edge on its own record.
        assert!(model.faces()[2].edge_indices().contains(&shared));
    }

    #[test]
    fn test_invalid_vertex_index() {
        let mesh = Mesh {
            vertices: vec![Point3::new(0.0, 0.0, 0.0)],
            faces: vec![Face::Triangle([0, 1, 2])],
        };
        let err = build_model(&mesh).unwrap_err();
        assert!(matches!(
            err,
            SubdivisionError::InvalidVertexIndex { face: 0, vertex: 1 }
        ));
    }

    #[test]
    fn test_degenerate_face_after_merge() {
        // Distinct indices, but two corners occupy the same position.
        let mesh = Mesh {
            vertices: vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 0.0, 0.0),
            ],
            faces: vec![Face::Triangle([0, 1, 2])],
        };
        let err = build_model(&mesh).unwrap_err();
        assert!(matches!(err, SubdivisionError::DegenerateFace { face: 0 }));
    }

    #[test]
    fn test_empty_mesh_builds_empty_model() {
        let model = build_model(&Mesh::new()).unwrap();
        assert_eq!(model.num_vertices(), 0);
        assert_eq!(model.num_edges(), 0);
        assert_eq!(model.num_faces(), 0);
    }
}
