//! # Path-to-Solid Operations
//!
//! The generation pipeline: winding normalization, tessellation, and the
//! extrude/revolve sweep operators.

pub mod extrude;
pub mod tessellate;
pub mod winding;

pub use extrude::{extrude, revolve, triangulate_faces, RevolveParams};
pub use tessellate::tessellate;
pub use winding::normalize_winding;
