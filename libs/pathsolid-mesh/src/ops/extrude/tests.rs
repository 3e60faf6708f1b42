//! # Sweep Operation Tests
//!
//! Tests for extrude and revolve, plus the shared flat assembler.

use super::*;
use crate::ops::tessellate::TriangleCorner;
use glam::{DVec2, DVec3};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, TAU};

fn unit_square() -> Path {
    Path::from_contours(&[vec![
        DVec2::new(0.0, 0.0),
        DVec2::new(1.0, 0.0),
        DVec2::new(1.0, 1.0),
        DVec2::new(0.0, 1.0),
    ]])
}

fn square_with_hole() -> Path {
    Path::from_contours(&[
        vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(10.0, 0.0),
            DVec2::new(10.0, 10.0),
            DVec2::new(0.0, 10.0),
        ],
        vec![
            DVec2::new(3.0, 3.0),
            DVec2::new(7.0, 3.0),
            DVec2::new(7.0, 7.0),
            DVec2::new(3.0, 7.0),
        ],
    ])
}

/// Square profile offset from the revolution axis.
fn offset_square_profile() -> Path {
    Path::from_contours(&[vec![
        DVec2::new(2.0, 0.0),
        DVec2::new(3.0, 0.0),
        DVec2::new(3.0, 1.0),
        DVec2::new(2.0, 1.0),
    ]])
}

fn quad_count(mesh: &Mesh) -> usize {
    mesh.faces()
        .iter()
        .filter(|face| face.indices().len() == 4)
        .count()
}

fn face_normal(mesh: &Mesh, face: &crate::mesh::Face) -> DVec3 {
    let indices = face.indices();
    let a = mesh.vertex(indices[0]);
    let b = mesh.vertex(indices[1]);
    let c = mesh.vertex(indices[2]);
    (b - a).cross(c - a)
}

// =============================================================================
// FLAT ASSEMBLY
// =============================================================================

#[test]
fn test_triangulate_faces_square() {
    let mesh = triangulate_faces(&unit_square()).unwrap();
    assert_eq!(mesh.face_count(), 2);
    assert_eq!(mesh.vertex_count(), 6);
    for face in mesh.faces() {
        assert!(face_normal(&mesh, face).z > 0.0);
    }
}

#[test]
fn test_triangulate_faces_empty_path() {
    let mesh = triangulate_faces(&Path::new()).unwrap();
    assert!(mesh.is_empty());
}

#[test]
fn test_add_flat_faces_skips_degenerate_triangles() {
    // two corners share a position: the triangle must contribute nothing
    let buffer = TriangleBuffer {
        vertices: vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 0.0),
        ],
        corners: vec![
            TriangleCorner {
                index: 0,
                is_boundary: true,
            },
            TriangleCorner {
                index: 1,
                is_boundary: true,
            },
            TriangleCorner {
                index: 2,
                is_boundary: true,
            },
        ],
    };
    let mut mesh = Mesh::new();
    add_flat_faces(&mut mesh, &buffer, 0.0, FaceWinding::Forward);
    assert_eq!(mesh.face_count(), 0);
}

#[test]
fn test_add_flat_faces_reversed_flips_normal() {
    let buffer = tessellate(&unit_square()).unwrap();
    let mut mesh = Mesh::new();
    add_flat_faces(&mut mesh, &buffer, 0.0, FaceWinding::Reversed);
    for face in mesh.faces() {
        assert!(face_normal(&mesh, face).z < 0.0);
    }
}

// =============================================================================
// EXTRUDE
// =============================================================================

#[test]
fn test_extrude_unit_square_face_counts() {
    let mesh = extrude(&unit_square(), 2.0).unwrap();
    // 2 top cap triangles + 4 wall quads + 2 bottom cap triangles
    assert_eq!(mesh.face_count(), 8);
    assert_eq!(quad_count(&mesh), 4);
    assert_eq!(mesh.triangle_count(), 12);
    assert!(mesh.validate());
}

#[test]
fn test_extrude_unit_square_is_watertight() {
    let mesh = extrude(&unit_square(), 2.0).unwrap();
    assert!(mesh.is_closed());
}

#[test]
fn test_extrude_bounding_box() {
    let mesh = extrude(&unit_square(), 2.0).unwrap();
    let (min, max) = mesh.bounding_box();
    assert_eq!(min, DVec3::new(0.0, 0.0, 0.0));
    assert_eq!(max, DVec3::new(1.0, 1.0, 2.0));
}

#[test]
fn test_extrude_cap_normals_oppose() {
    let mesh = extrude(&unit_square(), 2.0).unwrap();
    for face in mesh.faces() {
        if face.indices().len() != 3 {
            continue;
        }
        let z = mesh.vertex(face.indices()[0]).z;
        let normal = face_normal(&mesh, face);
        if z == 2.0 {
            assert!(normal.z > 0.0, "top cap must face +Z");
        } else {
            assert!(normal.z < 0.0, "bottom cap must face -Z");
        }
    }
}

#[test]
fn test_extrude_no_wall_on_interior_diagonal() {
    // the square tessellates with one interior diagonal; only the 4
    // outline edges may grow walls
    let mesh = extrude(&unit_square(), 1.0).unwrap();
    assert_eq!(quad_count(&mesh), 4);
}

#[test]
fn test_extrude_square_with_hole() {
    let mesh = extrude(&square_with_hole(), 5.0).unwrap();
    // 8 cap triangles top and bottom, 4 outer + 4 hole wall quads
    assert_eq!(quad_count(&mesh), 8);
    assert_eq!(mesh.face_count(), 24);
    assert!(mesh.is_closed());
}

#[test]
fn test_extrude_cw_profile_matches_ccw() {
    let mut reversed_contour = vec![
        DVec2::new(0.0, 0.0),
        DVec2::new(1.0, 0.0),
        DVec2::new(1.0, 1.0),
        DVec2::new(0.0, 1.0),
    ];
    reversed_contour.reverse();
    let cw = Path::from_contours(&[reversed_contour]);
    let mesh = extrude(&cw, 2.0).unwrap();
    assert_eq!(mesh.face_count(), 8);
    assert!(mesh.is_closed());
}

#[test]
fn test_extrude_zero_height_is_legal() {
    let mesh = extrude(&unit_square(), 0.0).unwrap();
    // walls collapse; the degenerate flat solid keeps both caps
    assert_eq!(quad_count(&mesh), 0);
    assert_eq!(mesh.face_count(), 4);
    assert!(mesh.validate());
}

#[test]
fn test_extrude_empty_path() {
    let mesh = extrude(&Path::new(), 3.0).unwrap();
    assert!(mesh.is_empty());
}

#[test]
fn test_extrude_rejects_non_finite_height() {
    assert!(extrude(&unit_square(), f64::NAN).is_err());
    assert!(extrude(&unit_square(), f64::INFINITY).is_err());
}

// =============================================================================
// REVOLVE
// =============================================================================

#[test]
fn test_revolve_full_turn_has_no_caps() {
    let params = RevolveParams {
        steps: 8,
        angle_start: 0.0,
        angle_end: TAU,
    };
    let mesh = revolve(&offset_square_profile(), &params).unwrap();
    // 8 strips of 4 quads each, no cap triangles
    assert_eq!(mesh.face_count(), 32);
    assert_eq!(quad_count(&mesh), 32);
}

#[test]
fn test_revolve_full_turn_seam_is_closed() {
    let params = RevolveParams {
        steps: 8,
        angle_start: 0.0,
        angle_end: TAU,
    };
    let mesh = revolve(&offset_square_profile(), &params).unwrap();
    assert!(mesh.is_closed());
    assert!(mesh.validate());
}

#[test]
fn test_revolve_full_turn_bounding_box() {
    let params = RevolveParams {
        steps: 16,
        angle_start: 0.0,
        angle_end: TAU,
    };
    let mesh = revolve(&offset_square_profile(), &params).unwrap();
    let (min, max) = mesh.bounding_box();
    assert!((max.x - 3.0).abs() < 1e-6);
    assert!((min.x + 3.0).abs() < 1e-6);
    assert!((min.z - 0.0).abs() < 1e-6);
    assert!((max.z - 1.0).abs() < 1e-6);
}

#[test]
fn test_revolve_partial_sweep_has_two_caps() {
    let params = RevolveParams {
        steps: 8,
        angle_start: FRAC_PI_4,
        angle_end: FRAC_PI_2,
    };
    let mesh = revolve(&offset_square_profile(), &params).unwrap();
    // 8 strips x 4 quads + two 2-triangle caps
    assert_eq!(quad_count(&mesh), 32);
    assert_eq!(mesh.face_count(), 36);
    assert_eq!(mesh.triangle_count(), 68);
    assert!(mesh.is_closed());
}

#[test]
fn test_revolve_steps_clamped_to_minimum() {
    let full_turn = RevolveParams {
        steps: 1,
        angle_start: 0.0,
        angle_end: TAU,
    };
    let clamped = revolve(&offset_square_profile(), &full_turn).unwrap();
    let explicit = revolve(
        &offset_square_profile(),
        &RevolveParams {
            steps: 3,
            ..full_turn
        },
    )
    .unwrap();
    assert_eq!(clamped, explicit);
}

#[test]
fn test_revolve_default_params_full_turn() {
    let mesh = revolve(&offset_square_profile(), &RevolveParams::default()).unwrap();
    // 30 strips x 4 quads, capless
    assert_eq!(mesh.face_count(), 120);
    assert_eq!(quad_count(&mesh), 120);
    assert!(mesh.is_closed());
}

#[test]
fn test_revolve_profile_touching_axis_emits_triangles() {
    // right triangle with its vertical edge on the axis
    let profile = Path::from_contours(&[vec![
        DVec2::new(0.0, 0.0),
        DVec2::new(1.0, 0.0),
        DVec2::new(0.0, 1.0),
    ]]);
    let params = RevolveParams {
        steps: 8,
        angle_start: 0.0,
        angle_end: TAU,
    };
    let mesh = revolve(&profile, &params).unwrap();
    assert!(!mesh.is_empty());
    // segments ending on the axis collapse their quads into triangles,
    // and the on-axis segment vanishes entirely
    assert!(mesh.faces().iter().any(|f| f.indices().len() == 3));
    assert!(mesh.validate());
}

#[test]
fn test_revolve_wrapped_range_crosses_zero() {
    let params = RevolveParams {
        steps: 4,
        angle_start: TAU - FRAC_PI_4,
        angle_end: FRAC_PI_4,
    };
    let mesh = revolve(&offset_square_profile(), &params).unwrap();
    // a half-pi sweep crossing zero: 4 strips + 2 caps
    assert_eq!(quad_count(&mesh), 16);
    assert_eq!(mesh.face_count(), 20);
    assert!(mesh.is_closed());
}

#[test]
fn test_revolve_empty_path() {
    let mesh = revolve(&Path::new(), &RevolveParams::default()).unwrap();
    assert!(mesh.is_empty());
}

#[test]
fn test_revolve_rejects_non_finite_angles() {
    let params = RevolveParams {
        steps: 8,
        angle_start: f64::NAN,
        angle_end: TAU,
    };
    assert!(revolve(&offset_square_profile(), &params).is_err());
}
