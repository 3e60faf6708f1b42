//! # Configuration Constants
//!
//! Centralized constants for the pathsolid pipeline. All geometry
//! tolerances, clipping parameters, and sweep resolution values are
//! defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Clipping**: Integer-lattice parameters for winding normalization
//! - **Revolution**: Angular sweep thresholds and step clamps

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance. This value is chosen to balance precision with
/// robustness against floating-point errors.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Epsilon for position-based vertex welding.
///
/// The mesh builder never deduplicates vertices globally; manifold checks
/// instead weld vertices whose positions agree within this quantum. It is
/// wide enough to absorb the rotation-matrix noise of revolve caps while
/// staying far below any real feature size.
pub const VERTEX_MERGE_EPSILON: f64 = 1e-8;

// =============================================================================
// CLIPPING CONSTANTS
// =============================================================================

/// Scaling factor between profile coordinates and the integer clip lattice.
///
/// Winding normalization runs on an integer lattice to sidestep float
/// precision issues inside the polygon clipper. Coordinates are multiplied
/// by this factor and rounded on the way in, and divided by the exact same
/// factor on the way out.
///
/// # Example
///
/// ```rust
/// use config::constants::CLIP_COORDINATE_SCALE;
///
/// let lattice = (0.75_f64 * CLIP_COORDINATE_SCALE).round();
/// assert_eq!(lattice, 750.0);
/// assert_eq!(lattice / CLIP_COORDINATE_SCALE, 0.75);
/// ```
pub const CLIP_COORDINATE_SCALE: f64 = 1000.0;

/// Margin added around the clip bounding box, in lattice units.
///
/// The normalizer intersects the input against an oversized bounding
/// rectangle; this margin guarantees the rectangle strictly contains all
/// input geometry, including edges lying exactly on the raw bounding box.
pub const CLIP_BOUNDS_MARGIN: i64 = 10;

// =============================================================================
// REVOLUTION CONSTANTS
// =============================================================================

/// Angular tolerance for treating a sweep as a full turn.
///
/// A revolution gets start/end caps unless its sweep is within this
/// tolerance of 2π; a full-turn sweep closes on itself instead.
pub const FULL_TURN_EPSILON: f64 = 1e-6;

/// Angular tolerance for the exact-closure strip of a full-turn sweep.
///
/// Stepping a full turn in equal increments accumulates floating-point
/// drift; when the accumulated angle misses the turn by more than this,
/// one final strip is emitted back to the exact start angle so the seam
/// closes without a gap or overlap.
pub const SEAM_CLOSE_EPSILON: f64 = 1e-7;

/// Minimum number of angular steps for a revolution.
///
/// A revolution needs at least a triangular cross-section of steps to
/// enclose any volume; smaller requests are clamped up.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_REVOLVE_STEPS;
///
/// let requested = 1u32;
/// assert_eq!(requested.max(MIN_REVOLVE_STEPS), 3);
/// ```
pub const MIN_REVOLVE_STEPS: u32 = 3;

/// Default number of angular steps for a revolution.
pub const DEFAULT_REVOLVE_STEPS: u32 = 30;
