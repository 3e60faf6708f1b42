//! # Revolution
//!
//! Sweeps a 2D profile around the Z axis through an angular range.
//!
//! ## Algorithm
//!
//! 1. The profile's (x, y) maps to 3D as (x, 0, y): the profile lives in
//!    a half-plane containing the Z axis, its own Y becoming world Z
//! 2. The wound profile is stepped through equal angular increments; each
//!    LineTo segment emits one ruled quad per increment
//! 3. A partial sweep gets flat end caps built from the original profile,
//!    rotated into place; a full-turn sweep instead reserves the final
//!    increment for a strip back to the exact start angle, so the seam
//!    closes without a gap or overlap from accumulated drift

use super::{add_loop_face, triangulate_faces};
use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::ops::winding::normalize_winding;
use crate::path::{Path, PathCommand};
use config::constants::{
    DEFAULT_REVOLVE_STEPS, FULL_TURN_EPSILON, MIN_REVOLVE_STEPS, SEAM_CLOSE_EPSILON,
};
use glam::{DMat4, DVec3};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Parameters for a revolution sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevolveParams {
    /// Number of angular steps (clamped to a minimum of 3)
    pub steps: u32,
    /// Sweep start angle in radians
    pub angle_start: f64,
    /// Sweep end angle in radians
    pub angle_end: f64,
}

impl Default for RevolveParams {
    fn default() -> Self {
        Self {
            steps: DEFAULT_REVOLVE_STEPS,
            angle_start: 0.0,
            angle_end: TAU,
        }
    }
}

/// Revolves a profile path around the Z axis.
///
/// A full-turn sweep produces a closed tube with no caps; a partial sweep
/// produces a pie-slice solid with two flat end caps. An empty profile
/// produces an empty mesh.
pub fn revolve(path: &Path, params: &RevolveParams) -> Result<Mesh, MeshError> {
    if !params.angle_start.is_finite() || !params.angle_end.is_finite() {
        return Err(MeshError::degenerate("revolve angles must be finite"));
    }

    let steps = params.steps.max(MIN_REVOLVE_STEPS);
    let angle_start = wrap_to_turn(params.angle_start);
    let mut angle_end = wrap_to_turn(params.angle_end);
    if angle_end < angle_start {
        // the sweep crosses zero
        angle_end += TAU;
    }

    let wound = normalize_winding(path);
    let mut mesh = Mesh::new();

    let has_caps = angle_end - angle_start < TAU - FULL_TURN_EPSILON;
    if has_caps {
        mesh.copy_faces(&profile_cap(path, angle_start, false)?);
    }

    let angle_delta = (angle_end - angle_start) / f64::from(steps);
    let strip_count = if has_caps { steps } else { steps - 1 };
    let mut current_angle = angle_start;
    for _ in 0..strip_count {
        add_revolve_strip(&wound, &mut mesh, current_angle, current_angle + angle_delta);
        current_angle += angle_delta;
    }

    if has_caps {
        mesh.copy_faces(&profile_cap(path, current_angle, true)?);
    } else if angle_end - current_angle > SEAM_CLOSE_EPSILON {
        // close the full turn back onto the exact start angle
        add_revolve_strip(&wound, &mut mesh, current_angle, angle_start);
    }

    Ok(mesh)
}

/// Builds one flat end cap from the original profile, swung into place.
fn profile_cap(path: &Path, angle: f64, reversed: bool) -> Result<Mesh, MeshError> {
    let mut cap = triangulate_faces(path)?;
    cap.transform(&DMat4::from_rotation_x(TAU / 4.0));
    cap.transform(&DMat4::from_rotation_z(angle));
    if reversed {
        cap.reverse_face_orientation();
    }
    Ok(cap)
}

/// Emits one ruled strip between two sweep angles.
///
/// MoveTo resets the segment cursor without geometry; Stop ends the pass.
/// Quad corners collapse when a segment endpoint sits on the axis, so the
/// face loop is deduplicated down to a triangle, or skipped entirely,
/// before it reaches the mesh.
fn add_revolve_strip(profile: &Path, mesh: &mut Mesh, start_angle: f64, end_angle: f64) {
    let rotate_start = DMat4::from_rotation_z(start_angle);
    let rotate_end = DMat4::from_rotation_z(end_angle);

    let mut last_position = DVec3::ZERO;
    for command in profile.commands() {
        match *command {
            PathCommand::Stop => break,
            PathCommand::MoveTo(point) => {
                last_position = DVec3::new(point.x, 0.0, point.y);
            }
            PathCommand::LineTo(point) => {
                let current_position = DVec3::new(point.x, 0.0, point.y);
                add_loop_face(
                    mesh,
                    &[
                        rotate_start.transform_point3(last_position),
                        rotate_end.transform_point3(last_position),
                        rotate_end.transform_point3(current_position),
                        rotate_start.transform_point3(current_position),
                    ],
                );
                last_position = current_position;
            }
        }
    }
}

/// Wraps an angle into [0, 2π], preserving a value of exactly 2π.
///
/// The full-turn default (end angle 2π) must survive normalization; a
/// plain modulo would fold it to zero and turn the sweep degenerate.
fn wrap_to_turn(angle: f64) -> f64 {
    if angle == TAU {
        return TAU;
    }
    angle.rem_euclid(TAU)
}
