//! # Tessellation Adapter
//!
//! Feeds a profile path to the ear-clipping tessellator and retrieves a
//! triangle buffer with per-edge boundary classification.
//!
//! ## Boundary flags
//!
//! The tessellator inserts no new vertices, so a triangle edge lies on
//! the original polygon outline exactly when its two vertex indices are
//! adjacent within one input ring. The classification is exact, never
//! approximate; the extrude operator relies on it to place side walls
//! only on real outline edges.

use crate::error::MeshError;
use crate::ops::winding::group_rings;
use crate::path::Path;
use glam::DVec2;


/// One corner of an output triangle.
///
/// `is_boundary` describes the directed edge from this corner to the next
/// corner of the same triangle; the flag travels with the index it
/// belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriangleCorner {
    /// Index into [`TriangleBuffer::vertices`]
    pub index: u32,
    /// True when the edge to the next corner lies on the input outline
    pub is_boundary: bool,
}

/// Tessellator output: shared 2D vertices plus corner triples.
///
/// Three consecutive corners form one triangle; triangles wind CCW
/// (outward normal +Z when assembled flat).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleBuffer {
    pub vertices: Vec<DVec2>,
    pub corners: Vec<TriangleCorner>,
}

impl TriangleBuffer {
    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.corners.len() / 3
    }

    /// Returns true if the buffer holds no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.corners.is_empty()
    }

    /// Iterates triangles as corner triples.
    pub fn triangles(&self) -> impl Iterator<Item = &[TriangleCorner]> {
        self.corners.chunks_exact(3)
    }

    /// Returns the 2D position a corner refers to.
    #[inline]
    pub fn position(&self, corner: &TriangleCorner) -> DVec2 {
        self.vertices[corner.index as usize]
    }
}

/// Tessellates a path into triangles with exact boundary-edge flags.
///
/// Supports multiply-connected profiles: contours are grouped into
/// outer/hole regions before triangulation. An empty path produces an
/// empty buffer.
pub fn tessellate(path: &Path) -> Result<TriangleBuffer, MeshError> {
    let mut buffer = TriangleBuffer::default();
    for (outer, holes) in group_rings(path.contours()) {
        tessellate_region(&outer, &holes, &mut buffer)?;
    }
    Ok(buffer)
}

fn tessellate_region(
    outer: &[DVec2],
    holes: &[Vec<DVec2>],
    buffer: &mut TriangleBuffer,
) -> Result<(), MeshError> {
    let mut coordinates: Vec<f64> = Vec::with_capacity(2 * outer.len());
    let mut ring_spans: Vec<(usize, usize)> = Vec::new();
    let mut hole_starts: Vec<usize> = Vec::new();

    ring_spans.push((0, outer.len()));
    for point in outer {
        coordinates.push(point.x);
        coordinates.push(point.y);
    }
    for hole in holes {
        let start = coordinates.len() / 2;
        hole_starts.push(start);
        ring_spans.push((start, start + hole.len()));
        for point in hole {
            coordinates.push(point.x);
            coordinates.push(point.y);
        }
    }

    let indices = earcutr::earcut(&coordinates, &hole_starts, 2)
        .map_err(|error| MeshError::tessellation(format!("{error:?}")))?;

    let points: Vec<DVec2> = outer
        .iter()
        .chain(holes.iter().flatten())
        .copied()
        .collect();
    let base = buffer.vertices.len() as u32;

    for triangle in indices.chunks_exact(3) {
        let (a, mut b, mut c) = (triangle[0], triangle[1], triangle[2]);
        // normalize to CCW so flat assembly yields +Z normals
        if (points[b] - points[a]).perp_dot(points[c] - points[a]) < 0.0 {
            std::mem::swap(&mut b, &mut c);
        }
        for (from, to) in [(a, b), (b, c), (c, a)] {
            buffer.corners.push(TriangleCorner {
                index: base + from as u32,
                is_boundary: is_ring_edge(&ring_spans, from, to),
            });
        }
    }

    buffer.vertices.extend(points);
    Ok(())
}

/// True when two vertex indices are adjacent within the same input ring.
fn is_ring_edge(ring_spans: &[(usize, usize)], a: usize, b: usize) -> bool {
    for &(start, end) in ring_spans {
        if a >= start && a < end {
            if b < start || b >= end {
                return false;
            }
            let next = if a + 1 == end { start } else { a + 1 };
            let previous = if a == start { end - 1 } else { a - 1 };
            return b == next || b == previous;
        }
    }
    false
}
