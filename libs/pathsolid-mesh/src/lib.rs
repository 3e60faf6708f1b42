//! # Pathsolid Mesh
//!
//! 2D-path-to-3D-solid generation: turns a closed (possibly
//! multiply-connected, possibly self-intersecting) vector path into a
//! watertight polygonal mesh by way of winding normalization,
//! tessellation, extrusion and revolution.
//!
//! ## Pipeline
//!
//! ```text
//! Path → normalize_winding → tessellate → { extrude | revolve } → Mesh
//! ```
//!
//! Every operator is a synchronous pure function: fresh mesh per call, no
//! shared state, no I/O. Degenerate geometry is filtered silently and an
//! empty input path produces an empty mesh; only collaborator failures
//! surface as errors.
//!
//! ## Usage
//!
//! ```rust
//! use pathsolid_mesh::{extrude, Path};
//! use glam::DVec2;
//!
//! let square = Path::from_contours(&[vec![
//!     DVec2::new(0.0, 0.0),
//!     DVec2::new(1.0, 0.0),
//!     DVec2::new(1.0, 1.0),
//!     DVec2::new(0.0, 1.0),
//! ]]);
//! let solid = extrude(&square, 2.0).unwrap();
//! assert!(solid.is_closed());
//! ```

pub mod error;
pub mod mesh;
pub mod ops;
pub mod path;

pub use error::MeshError;
pub use mesh::{Face, Mesh};
pub use ops::extrude::{extrude, revolve, triangulate_faces, RevolveParams};
pub use ops::tessellate::{tessellate, TriangleBuffer, TriangleCorner};
pub use ops::winding::normalize_winding;
pub use path::{Path, PathCommand};
