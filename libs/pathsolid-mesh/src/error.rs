//! # Mesh Errors
//!
//! Error types for path-to-solid generation.

use thiserror::Error;

/// Errors that can occur while generating a solid from a path.
///
/// Degenerate geometry (zero-area triangles, coincident points) and empty
/// input paths are never errors; they are filtered silently or produce an
/// empty mesh.
#[derive(Debug, Error)]
pub enum MeshError {
    /// The tessellation collaborator rejected the profile
    #[error("Tessellation failed: {message}")]
    Tessellation { message: String },

    /// Operator parameters describe no usable geometry
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },
}

impl MeshError {
    /// Creates a tessellation failure error.
    pub fn tessellation(message: impl Into<String>) -> Self {
        Self::Tessellation {
            message: message.into(),
        }
    }

    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }
}
