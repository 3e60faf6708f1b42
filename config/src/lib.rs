//! # Config Crate
//!
//! Centralized configuration constants for the pathsolid pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, CLIP_COORDINATE_SCALE};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! let is_zero = value.abs() < EPSILON;
//! assert!(is_zero);
//!
//! // Scale a coordinate onto the clip lattice and back
//! let lattice = (1.2345_f64 * CLIP_COORDINATE_SCALE).round();
//! let restored = lattice / CLIP_COORDINATE_SCALE;
//! assert!((restored - 1.2345).abs() < 1.0 / CLIP_COORDINATE_SCALE);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Robustness Encoded**: The clip/closure tolerances reflect observed
//!   behavior of the clipping and tessellation collaborators; they are not
//!   free parameters
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
