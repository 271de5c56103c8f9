//! Catmull-Clark subdivision passes and the iteration driver.

use nalgebra::{Point3, Vector3};
use rayon::prelude::*;

use crate::algo::Progress;
use crate::error::Result;
use crate::mesh::{Face, Mesh};
use crate::topology::{build_model, AdjacencyModel, EdgeRecord, FaceRecord, VertexRecord};

use super::SubdivideOptions;

/// Apply `iterations` rounds of Catmull-Clark subdivision to a mesh.
///
/// Each round rebuilds adjacency from positions, computes one point per
/// face and per edge, repositions every merged vertex, and replaces each
/// n-gon with n quads. Zero iterations returns the input unchanged, without
/// rebuilding topology.
///
/// # Errors
///
/// Fails if the input (or any intermediate mesh) is malformed — a corner
/// index out of range or a face with fewer than 3 distinct corners — or if
/// repositioning would collapse two distinct vertices onto one position.
/// No partial result is returned on failure.
///
/// # Example
///
/// ```
/// use catclark::algo::subdivide::subdivide;
/// use catclark::mesh::{Face, Mesh};
/// use nalgebra::Point3;
///
/// let mesh = Mesh {
///     vertices: vec![
///         Point3::new(0.0, 0.0, 0.0),
///         Point3::new(1.0, 0.0, 0.0),
///         Point3::new(1.0, 1.0, 0.0),
///         Point3::new(0.0, 1.0, 0.0),
///     ],
///     faces: vec![Face::Quad([0, 1, 2, 3])],
/// };
///
/// let smooth = subdivide(&mesh, 1).unwrap();
/// assert_eq!(smooth.num_faces(), 4);
/// assert_eq!(smooth.num_vertices(), 9);
/// ```
pub fn subdivide(mesh: &Mesh, iterations: usize) -> Result<Mesh> {
    subdivide_with(mesh, &SubdivideOptions::new(iterations))
}

/// Catmull-Clark subdivision with explicit options.
pub fn subdivide_with(mesh: &Mesh, options: &SubdivideOptions) -> Result<Mesh> {
    let mut mesh = mesh.clone();
    for _ in 0..options.iterations {
        mesh = subdivide_once(&mesh, options.parallel)?;
    }
    Ok(mesh)
}

/// Catmull-Clark subdivision with progress reporting, one update per
/// iteration.
pub fn subdivide_with_progress(
    mesh: &Mesh,
    options: &SubdivideOptions,
    progress: &Progress,
) -> Result<Mesh> {
    let mut mesh = mesh.clone();
    for iter in 0..options.iterations {
        progress.report(iter, options.iterations, "Catmull-Clark subdivision");
        mesh = subdivide_once(&mesh, options.parallel)?;
    }
    progress.report(
        options.iterations,
        options.iterations,
        "Catmull-Clark subdivision",
    );
    Ok(mesh)
}

/// Perform one round: build adjacency, run the three pure point passes,
/// apply the new vertex positions, emit the refined mesh.
///
/// The passes only read the model, so repositioning is deferred until all
/// of them are done; every average on the right-hand side of the masks sees
/// pre-iteration positions.
fn subdivide_once(mesh: &Mesh, parallel: bool) -> Result<Mesh> {
    let mut model = build_model(mesh)?;

    let face_points = face_points(&model, parallel);
    let edge_points = edge_points(&model, &face_points, parallel);
    let vertex_points = vertex_points(&model, &face_points, parallel);

    model.apply_positions(&vertex_points)?;

    Ok(emit_mesh(&model, &face_points, &edge_points))
}

/// Compute the centroid of each face's corners (3- or 4-way average).
fn face_points(model: &AdjacencyModel, parallel: bool) -> Vec<Point3<f64>> {
    let centroid = |face: &FaceRecord| {
        let sum: Vector3<f64> = face
            .corners()
            .iter()
            .map(|&vi| model.vertices()[vi].position.coords)
            .sum();
        Point3::from(sum / face.corner_count() as f64)
    };

    if parallel {
        model.faces().par_iter().map(centroid).collect()
    } else {
        model.faces().iter().map(centroid).collect()
    }
}

/// Compute one point per edge.
///
/// An interior edge (two incident faces) averages its two endpoints and the
/// two incident face points. A hole-boundary edge uses the plain midpoint of
/// its endpoints; face points must not be consulted there, or the surface
/// pinches at holes.
fn edge_points(
    model: &AdjacencyModel,
    face_points: &[Point3<f64>],
    parallel: bool,
) -> Vec<Point3<f64>> {
    let point = |edge: &EdgeRecord| {
        let low = model.vertices()[edge.low].position.coords;
        let high = model.vertices()[edge.high].position.coords;
        match edge.faces {
            [Some(f0), Some(f1)] => {
                Point3::from((low + high + face_points[f0].coords + face_points[f1].coords) * 0.25)
            }
            _ => Point3::from((low + high) * 0.5),
        }
    };

    if parallel {
        model.edges().par_iter().map(point).collect()
    } else {
        model.edges().iter().map(point).collect()
    }
}

/// Compute the new position of every original vertex with the Catmull-Clark
/// mask: for valence n (incident faces), face-point mean Q, incident-edge
/// midpoint mean R, and old position S,
///
/// ```text
/// (Q + 2R + (n - 3)S) / n
/// ```
///
/// All positions read here are pre-iteration; the result is applied in one
/// batch afterwards. The builder only creates vertices from face corners,
/// so n >= 1 and the incident-edge list is never empty.
fn vertex_points(
    model: &AdjacencyModel,
    face_points: &[Point3<f64>],
    parallel: bool,
) -> Vec<Point3<f64>> {
    let mask = |vertex: &VertexRecord| {
        let n = vertex.faces.len() as f64;

        let q: Vector3<f64> = vertex
            .faces
            .iter()
            .map(|&fi| face_points[fi].coords)
            .sum::<Vector3<f64>>()
            / n;

        let r: Vector3<f64> = vertex
            .edges
            .iter()
            .map(|&ei| {
                let edge = &model.edges()[ei];
                (model.vertices()[edge.low].position.coords
                    + model.vertices()[edge.high].position.coords)
                    * 0.5
            })
            .sum::<Vector3<f64>>()
            / vertex.edges.len() as f64;

        let s = vertex.position.coords;

        Point3::from((q + r * 2.0 + s * (n - 3.0)) / n)
    };

    if parallel {
        model.vertices().par_iter().map(mask).collect()
    } else {
        model.vertices().iter().map(mask).collect()
    }
}

/// Emit the refined mesh: for each original n-gon, append its n repositioned
/// corners, its n edge points, and its face point as fresh vertex entries,
/// then emit n quads `[edge_point(prev), corner, edge_point(next), face_point]`
/// preserving the original winding.
///
/// Emitted vertices are not deduplicated across faces; the next iteration's
/// topology build merges them by position.
fn emit_mesh(
    model: &AdjacencyModel,
    face_points: &[Point3<f64>],
    edge_points: &[Point3<f64>],
) -> Mesh {
    let total_corners: usize = model.faces().iter().map(FaceRecord::corner_count).sum();
    let mut out = Mesh::with_capacity(total_corners * 2 + model.num_faces(), total_corners);

    for (fi, face) in model.faces().iter().enumerate() {
        let n = face.corner_count();
        let base = out.vertices.len();

        for &vi in face.corners() {
            out.vertices.push(model.vertices()[vi].position);
        }
        for &ei in face.edge_indices() {
            out.vertices.push(edge_points[ei]);
        }
        out.vertices.push(face_points[fi]);

        // Corner i sits between edge (i + n - 1) % n and edge i.
        for i in 0..n {
            let prev_edge = base + n + (i + n - 1) % n;
            let next_edge = base + n + i;
            out.faces
                .push(Face::Quad([prev_edge, base + i, next_edge, base + 2 * n]));
        }
    }

    out
}
