//! # Mesh Data Structure
//!
//! Polygonal mesh representation with vertices and triangle/quad faces.

use config::constants::VERTEX_MERGE_EPSILON;
use glam::{DMat4, DVec3};
use std::collections::HashMap;

/// A single face: an ordered vertex loop, CCW = outward-facing.
///
/// Caps are triangles; side walls and revolve strips are quads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Triangle([u32; 3]),
    Quad([u32; 4]),
}

impl Face {
    /// Returns the vertex indices of the face loop.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        match self {
            Face::Triangle(indices) => indices,
            Face::Quad(indices) => indices,
        }
    }

    /// Returns the face with its loop reversed (normal flipped).
    pub fn reversed(&self) -> Face {
        match *self {
            Face::Triangle([a, b, c]) => Face::Triangle([c, b, a]),
            Face::Quad([a, b, c, d]) => Face::Quad([d, c, b, a]),
        }
    }

    fn offset(&self, by: u32) -> Face {
        match *self {
            Face::Triangle([a, b, c]) => Face::Triangle([a + by, b + by, c + by]),
            Face::Quad([a, b, c, d]) => Face::Quad([a + by, b + by, c + by, d + by]),
        }
    }
}

/// A polygonal mesh with vertices and triangle/quad faces.
///
/// All geometry calculations use f64 internally. Vertices are appended as
/// created and never deduplicated globally; callers needing a welded
/// manifold must weld by position (see [`Mesh::is_closed`]).
///
/// # Example
///
/// ```rust
/// use pathsolid_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// let a = mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// let b = mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// let c = mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(a, b, c);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Face loops, 3 or 4 indices each
    faces: Vec<Face>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns the number of triangles after fan-splitting quads.
    pub fn triangle_count(&self) -> usize {
        self.faces
            .iter()
            .map(|face| face.indices().len() - 2)
            .sum()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a triangular face by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.faces.push(Face::Triangle([v0, v1, v2]));
    }

    /// Adds a quad face by vertex indices.
    pub fn add_quad(&mut self, v0: u32, v1: u32, v2: u32, v3: u32) {
        self.faces.push(Face::Quad([v0, v1, v2, v3]));
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the faces.
    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the face at the given index.
    #[inline]
    pub fn face(&self, index: usize) -> Face {
        self.faces[index]
    }

    /// Transforms all vertices by a 4x4 matrix.
    pub fn transform(&mut self, matrix: &DMat4) {
        for vertex in &mut self.vertices {
            *vertex = matrix.transform_point3(*vertex);
        }
    }

    /// Translates the mesh by a vector.
    pub fn translate(&mut self, offset: DVec3) {
        for vertex in &mut self.vertices {
            *vertex += offset;
        }
    }

    /// Appends all faces of another mesh, re-indexing its vertices.
    pub fn copy_faces(&mut self, source: &Mesh) {
        let offset = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&source.vertices);
        self.faces
            .extend(source.faces.iter().map(|face| face.offset(offset)));
    }

    /// Reverses every face loop, flipping all normals.
    pub fn reverse_face_orientation(&mut self) {
        for face in &mut self.faces {
            *face = face.reversed();
        }
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for vertex in &self.vertices[1..] {
            min = min.min(*vertex);
            max = max.max(*vertex);
        }

        (min, max)
    }

    /// Fan-splits every face into triangles for indexed export.
    pub fn triangulate(&self) -> Vec<[u32; 3]> {
        let mut triangles = Vec::with_capacity(self.triangle_count());
        for face in &self.faces {
            let indices = face.indices();
            for i in 1..indices.len() - 1 {
                triangles.push([indices[0], indices[i], indices[i + 1]]);
            }
        }
        triangles
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All face indices are valid
    /// - No two consecutive vertices of a face loop coincide
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;

        for face in &self.faces {
            let indices = face.indices();
            if indices.iter().any(|&index| index >= vertex_count) {
                return false;
            }
            for i in 0..indices.len() {
                let a = self.vertices[indices[i] as usize];
                let b = self.vertices[indices[(i + 1) % indices.len()] as usize];
                if a == b {
                    return false;
                }
            }
        }

        true
    }

    /// Returns true if the mesh is a closed manifold: every undirected edge
    /// is shared by exactly two faces.
    ///
    /// Vertices are welded by position quantized at `VERTEX_MERGE_EPSILON`,
    /// since operators create fresh vertices per face.
    pub fn is_closed(&self) -> bool {
        if self.faces.is_empty() {
            return false;
        }

        let mut edge_counts: HashMap<(PositionKey, PositionKey), u32> = HashMap::new();
        for face in &self.faces {
            let indices = face.indices();
            for i in 0..indices.len() {
                let a = position_key(self.vertices[indices[i] as usize]);
                let b = position_key(self.vertices[indices[(i + 1) % indices.len()] as usize]);
                let edge = if a <= b { (a, b) } else { (b, a) };
                *edge_counts.entry(edge).or_insert(0) += 1;
            }
        }

        edge_counts.values().all(|&count| count == 2)
    }
}

type PositionKey = (i64, i64, i64);

fn position_key(position: DVec3) -> PositionKey {
    let quantum = 1.0 / VERTEX_MERGE_EPSILON;
    (
        (position.x * quantum).round() as i64,
        (position.y * quantum).round() as i64,
        (position.z * quantum).round() as i64,
    )
}
