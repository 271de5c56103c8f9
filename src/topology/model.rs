//! The adjacency-indexed model.

use std::collections::HashMap;

use nalgebra::Point3;

use crate::error::{Result, SubdivisionError};

/// Hash key for exact position equality, built from the raw bit patterns of
/// the three coordinates. Positions merge only when bit-identical, so
/// `0.0` and `-0.0` are distinct keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct PositionKey([u64; 3]);

impl PositionKey {
    fn of(position: &Point3<f64>) -> Self {
        Self([
            position.x.to_bits(),
            position.y.to_bits(),
            position.z.to_bits(),
        ])
    }
}

/// A merged vertex: its position plus the edges and faces touching it.
///
/// Incidence lists are duplicate-free and kept in first-touch order, which
/// keeps all downstream averaging deterministic.
#[derive(Debug, Clone)]
pub struct VertexRecord {
    /// Current position.
    pub position: Point3<f64>,
    /// Indices of incident edges.
    pub edges: Vec<usize>,
    /// Indices of incident faces.
    pub faces: Vec<usize>,
}

/// An edge between two merged vertices, stored in canonical (low, high)
/// order, with up to two incident faces.
#[derive(Debug, Clone)]
pub struct EdgeRecord {
    /// The lower vertex index.
    pub low: usize,
    /// The higher vertex index.
    pub high: usize,
    /// Incident faces. Unused slots are `None`; a third face claiming the
    /// edge is not recorded (tolerated non-manifold input).
    pub faces: [Option<usize>; 2],
}

impl EdgeRecord {
    /// Number of recorded incident faces (0, 1, or 2).
    pub fn face_count(&self) -> usize {
        self.faces.iter().filter(|f| f.is_some()).count()
    }

    /// An edge with fewer than two incident faces lies on a hole boundary.
    pub fn is_boundary(&self) -> bool {
        self.face_count() < 2
    }
}

/// A face's resolved corners and boundary edges, in boundary order.
/// Edge `i` joins corner `i` and corner `(i + 1) % n`.
#[derive(Debug, Clone)]
pub struct FaceRecord {
    /// Whether the face is a quadrilateral (otherwise a triangle).
    pub is_quad: bool,
    /// Merged vertex indices; only the first `corner_count()` are used.
    pub vertices: [usize; 4],
    /// Edge indices; only the first `corner_count()` are used.
    pub edges: [usize; 4],
}

impl FaceRecord {
    /// Number of corners (3 or 4).
    pub fn corner_count(&self) -> usize {
        if self.is_quad {
            4
        } else {
            3
        }
    }

    /// The face's merged vertex indices in boundary order.
    pub fn corners(&self) -> &[usize] {
        &self.vertices[..self.corner_count()]
    }

    /// The face's edge indices in boundary order.
    pub fn edge_indices(&self) -> &[usize] {
        &self.edges[..self.corner_count()]
    }
}

/// Deduplicated vertices, edges, and faces with full incidence, plus the
/// reverse-lookup maps that keep them consistent.
///
/// One model is built per subdivision iteration, consumed by that iteration,
/// and discarded with its maps. The position map and the vertex array are
/// bijective inverses at all times; [`apply_positions`](Self::apply_positions)
/// is the only mutator and maintains that invariant.
#[derive(Debug, Default)]
pub struct AdjacencyModel {
    vertices: Vec<VertexRecord>,
    edges: Vec<EdgeRecord>,
    faces: Vec<FaceRecord>,
    position_to_vertex: HashMap<PositionKey, usize>,
    vertex_pair_to_edge: HashMap<(usize, usize), usize>,
}

impl AdjacencyModel {
    /// Create an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// All vertex records.
    pub fn vertices(&self) -> &[VertexRecord] {
        &self.vertices
    }

    /// All edge records.
    pub fn edges(&self) -> &[EdgeRecord] {
        &self.edges
    }

    /// All face records.
    pub fn faces(&self) -> &[FaceRecord] {
        &self.faces
    }

    /// Number of merged vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Number of faces.
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Look up the edge joining two vertices, if one exists.
    pub fn edge_between(&self, a: usize, b: usize) -> Option<usize> {
        let pair = if a < b { (a, b) } else { (b, a) };
        self.vertex_pair_to_edge.get(&pair).copied()
    }

    /// Resolve a position to its merged vertex index, inserting a new
    /// vertex record if no vertex occupies that exact position yet.
    pub(crate) fn vertex_or_insert(&mut self, position: Point3<f64>) -> usize {
        let key = PositionKey::of(&position);
        if let Some(&index) = self.position_to_vertex.get(&key) {
            return index;
        }

        let index = self.vertices.len();
        self.vertices.push(VertexRecord {
            position,
            edges: Vec::new(),
            faces: Vec::new(),
        });
        self.position_to_vertex.insert(key, index);
        index
    }

    /// Resolve an unordered vertex pair to its edge index, inserting a new
    /// edge record in canonical (low, high) order if the pair is new.
    pub(crate) fn edge_or_insert(&mut self, a: usize, b: usize) -> usize {
        let (low, high) = if a < b { (a, b) } else { (b, a) };
        if let Some(&index) = self.vertex_pair_to_edge.get(&(low, high)) {
            return index;
        }

        let index = self.edges.len();
        self.edges.push(EdgeRecord {
            low,
            high,
            faces: [None, None],
        });
        self.vertex_pair_to_edge.insert((low, high), index);
        index
    }

    /// Append a face record, returning its index.
    pub(crate) fn push_face(&mut self, record: FaceRecord) -> usize {
        let index = self.faces.len();
        self.faces.push(record);
        index
    }

    /// Record an incident edge on a vertex, skipping duplicates.
    pub(crate) fn attach_edge_to_vertex(&mut self, vertex: usize, edge: usize) {
        let edges = &mut self.vertices[vertex].edges;
        if !edges.contains(&edge) {
            edges.push(edge);
        }
    }

    /// Record an incident face on a vertex, skipping duplicates.
    pub(crate) fn attach_face_to_vertex(&mut self, vertex: usize, face: usize) {
        let faces = &mut self.vertices[vertex].faces;
        if !faces.contains(&face) {
            faces.push(face);
        }
    }

    /// Record an incident face on an edge. The first two faces fill the
    /// edge's slots; any further face is silently not recorded.
    pub(crate) fn attach_face_to_edge(&mut self, edge: usize, face: usize) {
        let record = &mut self.edges[edge];
        for slot in record.faces.iter_mut() {
            if slot.is_none() {
                *slot = Some(face);
                return;
            }
        }
    }

    /// Reposition every vertex at once.
    ///
    /// The whole new assignment is validated first: if two distinct vertices
    /// would land on the same position, nothing is changed and a
    /// [`TopologyViolation`](SubdivisionError::TopologyViolation) is
    /// returned. On success the vertex array and the position map are
    /// replaced together, so the bijection between them never breaks.
    ///
    /// Validating the complete assignment (rather than moving vertices one
    /// at a time against the live map) lets vertices exchange positions,
    /// which the subdivision mask legitimately produces on small open
    /// meshes.
    pub(crate) fn apply_positions(&mut self, new_positions: &[Point3<f64>]) -> Result<()> {
        debug_assert_eq!(new_positions.len(), self.vertices.len());

        let mut next_map = HashMap::with_capacity(new_positions.len());
        for (index, position) in new_positions.iter().enumerate() {
            if let Some(previous) = next_map.insert(PositionKey::of(position), index) {
                return Err(SubdivisionError::TopologyViolation {
                    vertex_a: previous,
                    vertex_b: index,
                });
            }
        }

        for (record, &position) in self.vertices.iter_mut().zip(new_positions) {
            record.position = position;
        }
        self.position_to_vertex = next_map;
        Ok(())
    }
}
