//! # Linear Extrusion
//!
//! Extrudes a 2D profile along the Z axis into a capped solid.
//!
//! ## Algorithm
//!
//! 1. Normalize the profile winding and tessellate it
//! 2. Assemble the top cap flat, then lift it to the target height
//! 3. For every boundary-flagged triangle edge, emit one outward-facing
//!    wall quad between z = 0 and z = height
//! 4. Assemble the bottom cap with reversed winding so its normal faces -Z
//!
//! Interior tessellation diagonals never produce walls; this is what
//! keeps the side surface free of seams at internal splits. The output is
//! watertight whenever the normalized profile is a closed region.

use super::{add_flat_faces, add_loop_face, FaceWinding};
use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::ops::tessellate::tessellate;
use crate::ops::winding::normalize_winding;
use crate::path::Path;
use glam::DVec3;

/// Extrudes a profile path along +Z by `height`.
///
/// A height of zero is legal and produces a zero-volume flat solid. An
/// empty profile produces an empty mesh.
///
/// # Example
///
/// ```rust,ignore
/// let square = Path::from_contours(&[vec![
///     DVec2::new(0.0, 0.0),
///     DVec2::new(1.0, 0.0),
///     DVec2::new(1.0, 1.0),
///     DVec2::new(0.0, 1.0),
/// ]]);
/// let solid = extrude(&square, 2.0)?;
/// assert!(solid.is_closed());
/// ```
pub fn extrude(path: &Path, height: f64) -> Result<Mesh, MeshError> {
    if !height.is_finite() {
        return Err(MeshError::degenerate("extrude height must be finite"));
    }

    let wound = normalize_winding(path);
    let buffer = tessellate(&wound)?;

    let mut mesh = Mesh::new();

    // top cap, built flat and lifted to the target height
    add_flat_faces(&mut mesh, &buffer, 0.0, FaceWinding::Forward);
    mesh.translate(DVec3::new(0.0, 0.0, height));

    // side walls on boundary edges only
    for triangle in buffer.triangles() {
        let positions = [
            buffer.position(&triangle[0]),
            buffer.position(&triangle[1]),
            buffer.position(&triangle[2]),
        ];
        if positions[0] == positions[1]
            || positions[1] == positions[2]
            || positions[2] == positions[0]
        {
            continue;
        }

        for corner in 0..3 {
            if !triangle[corner].is_boundary {
                continue;
            }
            let from = positions[corner];
            let to = positions[(corner + 1) % 3];
            add_loop_face(
                &mut mesh,
                &[
                    DVec3::new(from.x, from.y, 0.0),
                    DVec3::new(to.x, to.y, 0.0),
                    DVec3::new(to.x, to.y, height),
                    DVec3::new(from.x, from.y, height),
                ],
            );
        }
    }

    // bottom cap, reversed so its normal faces -Z
    add_flat_faces(&mut mesh, &buffer, 0.0, FaceWinding::Reversed);

    Ok(mesh)
}
