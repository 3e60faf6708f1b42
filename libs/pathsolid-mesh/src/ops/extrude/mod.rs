//! # Sweep Operations
//!
//! Turns tessellated profiles into solids:
//! - **extrude**: Sweep a profile along Z into a capped prism
//! - **revolve**: Sweep a profile around Z through an angular range
//!
//! Both build on the flat assembler below, which converts tessellator
//! output into mesh faces in a target plane.

mod linear;
mod rotate;

#[cfg(test)]
mod tests;

pub use linear::extrude;
pub use rotate::{revolve, RevolveParams};

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::ops::tessellate::{tessellate, TriangleBuffer};
use crate::path::Path;
use glam::DVec3;

/// Face winding for flat assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FaceWinding {
    /// Tessellator order: outward normal +Z
    Forward,
    /// Reversed `(v2, v1, v0)`: outward normal -Z
    Reversed,
}

/// Triangulates a path into a flat mesh at z = 0.
///
/// Degenerate triangles are filtered; an empty path yields an empty mesh.
pub fn triangulate_faces(path: &Path) -> Result<Mesh, MeshError> {
    let buffer = tessellate(path)?;
    let mut mesh = Mesh::new();
    add_flat_faces(&mut mesh, &buffer, 0.0, FaceWinding::Forward);
    Ok(mesh)
}

/// Adds a quad face, collapsing coincident consecutive corners.
///
/// Corners collapse when a ruled face degenerates: a revolve segment
/// endpoint on the axis, or a wall of a zero-height extrusion. The loop
/// is deduplicated down to a triangle, or skipped entirely, so no
/// degenerate face reaches the mesh.
pub(crate) fn add_loop_face(mesh: &mut Mesh, corners: &[DVec3; 4]) {
    let mut loop_positions: Vec<DVec3> = Vec::with_capacity(4);
    for &corner in corners {
        if loop_positions.last() != Some(&corner) {
            loop_positions.push(corner);
        }
    }
    while loop_positions.len() > 1 && loop_positions.first() == loop_positions.last() {
        loop_positions.pop();
    }

    match loop_positions.as_slice() {
        [a, b, c, d] => {
            let v0 = mesh.add_vertex(*a);
            let v1 = mesh.add_vertex(*b);
            let v2 = mesh.add_vertex(*c);
            let v3 = mesh.add_vertex(*d);
            mesh.add_quad(v0, v1, v2, v3);
        }
        [a, b, c] => {
            let v0 = mesh.add_vertex(*a);
            let v1 = mesh.add_vertex(*b);
            let v2 = mesh.add_vertex(*c);
            mesh.add_triangle(v0, v1, v2);
        }
        _ => {}
    }
}

/// Converts a triangle buffer into mesh faces in the z = `height` plane.
///
/// Any triangle in which two of the three 2D positions are exactly equal
/// is skipped; tessellators may emit these at shared seams. No vertex
/// welding happens across calls.
pub(crate) fn add_flat_faces(
    mesh: &mut Mesh,
    buffer: &TriangleBuffer,
    height: f64,
    winding: FaceWinding,
) {
    for triangle in buffer.triangles() {
        let p0 = buffer.position(&triangle[0]);
        let p1 = buffer.position(&triangle[1]);
        let p2 = buffer.position(&triangle[2]);
        if p0 == p1 || p1 == p2 || p2 == p0 {
            continue;
        }

        let (a, b, c) = match winding {
            FaceWinding::Forward => (p0, p1, p2),
            FaceWinding::Reversed => (p2, p1, p0),
        };
        let v0 = mesh.add_vertex(DVec3::new(a.x, a.y, height));
        let v1 = mesh.add_vertex(DVec3::new(b.x, b.y, height));
        let v2 = mesh.add_vertex(DVec3::new(c.x, c.y, height));
        mesh.add_triangle(v0, v1, v2);
    }
}
